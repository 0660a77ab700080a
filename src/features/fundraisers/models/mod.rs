mod fundraiser;

pub use fundraiser::FundraiserWithCategory;
