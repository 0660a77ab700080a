mod fundraiser_dto;

pub use fundraiser_dto::{
    CreateFundraiserDto, FundraiserCreatedDto, FundraiserDetailDto, UpdateFundraiserDto,
};
