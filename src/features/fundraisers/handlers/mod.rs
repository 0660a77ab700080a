mod fundraiser_handler;

pub use fundraiser_handler::*;
