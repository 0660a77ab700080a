//! Fundraiser campaigns: creation, composite detail view, full-field update,
//! and guarded deletion.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/fundraiser` | Create a fundraiser (funding starts at 0) |
//! | GET | `/api/fundraiser/{id}` | Detail with category name and donations |
//! | PUT | `/api/fundraiser/{id}` | Replace all mutable fields |
//! | DELETE | `/api/fundraiser/{id}` | Delete, refused while donations exist |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::FundraiserService;
