use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::donations::handlers;
use crate::features::donations::services::DonationService;

/// Create routes for the donations feature
pub fn routes(service: Arc<DonationService>) -> Router {
    Router::new()
        .route("/api/donation", post(handlers::create_donation))
        .with_state(service)
}
