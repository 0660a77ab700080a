use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::fundraisers::dtos::{
    CreateFundraiserDto, FundraiserCreatedDto, FundraiserDetailDto, UpdateFundraiserDto,
};
use crate::features::fundraisers::services::FundraiserService;
use crate::shared::types::ApiResponse;

/// Get fundraiser detail
///
/// Returns the fundraiser with its category's name and all of its donations
/// in insertion order.
#[utoipa::path(
    get,
    path = "/api/fundraiser/{id}",
    params(
        ("id" = i64, Path, description = "Fundraiser id")
    ),
    responses(
        (status = 200, description = "Fundraiser detail", body = ApiResponse<FundraiserDetailDto>),
        (status = 404, description = "Fundraiser not found"),
        (status = 500, description = "Database error")
    ),
    tag = "fundraisers"
)]
pub async fn get_fundraiser(
    State(service): State<Arc<FundraiserService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<FundraiserDetailDto>>> {
    let detail = service.get_detail(id).await?;
    Ok(Json(ApiResponse::success(Some(detail), None, None)))
}

/// Create a fundraiser
///
/// Current funding always starts at 0 regardless of caller input.
#[utoipa::path(
    post,
    path = "/api/fundraiser",
    request_body = CreateFundraiserDto,
    responses(
        (status = 201, description = "Fundraiser created", body = ApiResponse<FundraiserCreatedDto>),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Database error (including an invalid category reference)")
    ),
    tag = "fundraisers"
)]
pub async fn create_fundraiser(
    State(service): State<Arc<FundraiserService>>,
    AppJson(dto): AppJson<CreateFundraiserDto>,
) -> Result<(StatusCode, Json<ApiResponse<FundraiserCreatedDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let fundraiser_id = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(FundraiserCreatedDto { fundraiser_id }),
            Some("Fundraiser added successfully".to_string()),
            None,
        )),
    ))
}

/// Update a fundraiser
///
/// Full replace of all mutable fields, including current funding as supplied.
#[utoipa::path(
    put,
    path = "/api/fundraiser/{id}",
    params(
        ("id" = i64, Path, description = "Fundraiser id")
    ),
    request_body = UpdateFundraiserDto,
    responses(
        (status = 200, description = "Fundraiser updated"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Fundraiser not found"),
        (status = 500, description = "Database error")
    ),
    tag = "fundraisers"
)]
pub async fn update_fundraiser(
    State(service): State<Arc<FundraiserService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateFundraiserDto>,
) -> Result<Json<ApiResponse<()>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Fundraiser updated successfully".to_string()),
        None,
    )))
}

/// Delete a fundraiser
///
/// Refused while any donation references the fundraiser.
#[utoipa::path(
    delete,
    path = "/api/fundraiser/{id}",
    params(
        ("id" = i64, Path, description = "Fundraiser id")
    ),
    responses(
        (status = 200, description = "Fundraiser deleted"),
        (status = 400, description = "Fundraiser still has donations"),
        (status = 404, description = "Fundraiser not found"),
        (status = 500, description = "Database error")
    ),
    tag = "fundraisers"
)]
pub async fn delete_fundraiser(
    State(service): State<Arc<FundraiserService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Fundraiser deleted successfully".to_string()),
        None,
    )))
}
