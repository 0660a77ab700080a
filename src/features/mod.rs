pub mod categories;
pub mod donations;
pub mod fundraisers;
