mod donation_dto;

pub use donation_dto::{CreateDonationDto, DonationCreatedDto, DonationResponseDto};
