mod donation;

pub use donation::Donation;
