use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::donations::dtos::DonationResponseDto;
use crate::features::fundraisers::models::FundraiserWithCategory;

/// Request DTO for creating a fundraiser.
///
/// Current funding is not accepted from the caller; it always starts at 0.
/// No business check is made that the target is positive; a negative value
/// is refused by the store constraint and surfaces as a storage error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFundraiserDto {
    #[validate(length(min = 1, max = 255, message = "Organizer must be 1-255 characters"))]
    pub organizer: String,

    #[validate(length(min = 1, max = 500, message = "Caption must be 1-500 characters"))]
    pub caption: String,

    pub target_funding: Decimal,

    #[validate(length(min = 1, max = 255, message = "City must be 1-255 characters"))]
    pub city: String,

    pub active: bool,

    pub category_id: i64,
}

/// Request DTO for the full-field fundraiser update.
///
/// `current_funding` is replaced with whatever the caller supplies, without
/// any check against the target or the donation history.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFundraiserDto {
    #[validate(length(min = 1, max = 255, message = "Organizer must be 1-255 characters"))]
    pub organizer: String,

    #[validate(length(min = 1, max = 500, message = "Caption must be 1-500 characters"))]
    pub caption: String,

    pub target_funding: Decimal,

    pub current_funding: Decimal,

    #[validate(length(min = 1, max = 255, message = "City must be 1-255 characters"))]
    pub city: String,

    pub active: bool,

    pub category_id: i64,
}

/// Response DTO for a created fundraiser id
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FundraiserCreatedDto {
    pub fundraiser_id: i64,
}

/// Composite detail view: fundraiser, its category's name, and all of its
/// donations in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FundraiserDetailDto {
    pub id: i64,
    pub organizer: String,
    pub caption: String,
    pub target_funding: Decimal,
    pub current_funding: Decimal,
    pub city: String,
    pub active: bool,
    pub category_id: i64,
    pub category_name: String,
    pub created_at: DateTime<Utc>,
    pub donations: Vec<DonationResponseDto>,
}

impl FundraiserDetailDto {
    pub fn from_parts(
        fundraiser: FundraiserWithCategory,
        donations: Vec<DonationResponseDto>,
    ) -> Self {
        Self {
            id: fundraiser.id,
            organizer: fundraiser.organizer,
            caption: fundraiser.caption,
            target_funding: fundraiser.target_funding,
            current_funding: fundraiser.current_funding,
            city: fundraiser.city,
            active: fundraiser.active,
            category_id: fundraiser.category_id,
            category_name: fundraiser.category_name,
            created_at: fundraiser.created_at,
            donations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_dto_has_no_current_funding_field() {
        // Caller-supplied funding must be impossible to express on creation
        let result = serde_json::from_str::<CreateFundraiserDto>(
            r#"{
                "organizer": "Riverside School",
                "caption": "New library wing",
                "targetFunding": 1000,
                "currentFunding": 900,
                "city": "Springfield",
                "active": true,
                "categoryId": 2
            }"#,
        );

        // Unknown fields are ignored by serde; the parsed DTO simply carries
        // no funding value for the insert to use.
        let dto = result.unwrap();
        assert_eq!(dto.target_funding, Decimal::new(1000, 0));
    }

    #[test]
    fn test_update_dto_rejects_blank_city() {
        let dto = UpdateFundraiserDto {
            organizer: "Riverside School".to_string(),
            caption: "New library wing".to_string(),
            target_funding: Decimal::new(1000, 0),
            current_funding: Decimal::ZERO,
            city: String::new(),
            active: true,
            category_id: 2,
        };

        assert!(dto.validate().is_err());
    }
}
