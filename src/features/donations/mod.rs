//! Donation insertion, the ledger-consistency path.
//!
//! A donation is recorded inside a single transaction: the row insert and the
//! conditional funding increment either both commit or neither does, and the
//! increment is refused when it would push `current_funding` past
//! `target_funding`. Donations are immutable once recorded and have no delete
//! path.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/donation` | Record a donation |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::DonationService;
