use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use rust_decimal::Decimal;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::donations::dtos::{CreateDonationDto, DonationCreatedDto};
use crate::features::donations::services::DonationService;
use crate::shared::types::ApiResponse;

/// Record a donation
///
/// The donation amount must be strictly positive. The owning fundraiser's
/// current funding is credited atomically; a donation that would push it past
/// the target is refused and nothing is written.
#[utoipa::path(
    post,
    path = "/api/donation",
    request_body = CreateDonationDto,
    responses(
        (status = 201, description = "Donation recorded", body = ApiResponse<DonationCreatedDto>),
        (status = 400, description = "Non-positive amount or validation error"),
        (status = 500, description = "Database error, or the donation would exceed the funding target")
    ),
    tag = "donations"
)]
pub async fn create_donation(
    State(service): State<Arc<DonationService>>,
    AppJson(dto): AppJson<CreateDonationDto>,
) -> Result<(StatusCode, Json<ApiResponse<DonationCreatedDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    if dto.amount <= Decimal::ZERO {
        return Err(AppError::Validation(
            "Donation amount must be positive".to_string(),
        ));
    }

    let donation_id = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(DonationCreatedDto { donation_id }),
            Some("Donation added successfully".to_string()),
            None,
        )),
    ))
}
