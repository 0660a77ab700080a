mod donation_handler;

pub use donation_handler::*;
