//! Read-only category lookup.
//!
//! Categories are referenced by fundraisers but never created, updated, or
//! deleted through this service; rows come from the seed migration.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/categories` | List all categories |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
