use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::fundraisers::handlers;
use crate::features::fundraisers::services::FundraiserService;

/// Create routes for the fundraisers feature
pub fn routes(service: Arc<FundraiserService>) -> Router {
    Router::new()
        .route("/api/fundraiser", post(handlers::create_fundraiser))
        .route(
            "/api/fundraiser/{id}",
            get(handlers::get_fundraiser)
                .put(handlers::update_fundraiser)
                .delete(handlers::delete_fundraiser),
        )
        .with_state(service)
}
