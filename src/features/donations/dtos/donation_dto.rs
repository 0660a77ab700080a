use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::donations::models::Donation;

/// Request DTO for recording a donation
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDonationDto {
    /// Id of the fundraiser receiving the donation
    pub fundraiser_id: i64,

    /// Donor display name
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    /// When the donation was made
    pub date: DateTime<Utc>,

    /// Donated amount; must be strictly positive
    pub amount: Decimal,

    /// Giver identity
    #[validate(length(min = 1, max = 255, message = "Giver must be 1-255 characters"))]
    pub giver: String,
}

/// Response DTO for a recorded donation id
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonationCreatedDto {
    pub donation_id: i64,
}

/// Response DTO for a donation inside the fundraiser detail view
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonationResponseDto {
    pub id: i64,
    pub name: String,
    pub date: DateTime<Utc>,
    pub amount: Decimal,
    pub giver: String,
}

impl From<Donation> for DonationResponseDto {
    fn from(d: Donation) -> Self {
        Self {
            id: d.id,
            name: d.name,
            date: d.donated_at,
            amount: d.amount,
            giver: d.giver,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_donation_dto_parses_camel_case() {
        let dto: CreateDonationDto = serde_json::from_str(
            r#"{
                "fundraiserId": 3,
                "name": "Jordan",
                "date": "2026-08-01T12:00:00Z",
                "amount": 150.50,
                "giver": "anonymous"
            }"#,
        )
        .unwrap();

        assert_eq!(dto.fundraiser_id, 3);
        assert_eq!(dto.amount, Decimal::new(15050, 2));
        assert_eq!(dto.giver, "anonymous");
    }

    #[test]
    fn test_donation_model_maps_to_response_dto() {
        let donated_at = Utc::now();
        let dto: DonationResponseDto = Donation {
            id: 7,
            name: "Jordan".to_string(),
            donated_at,
            amount: Decimal::new(250, 0),
            giver: "anonymous".to_string(),
        }
        .into();

        assert_eq!(dto.id, 7);
        assert_eq!(dto.date, donated_at);
        assert_eq!(dto.amount, Decimal::new(250, 0));
    }

    #[test]
    fn test_create_donation_dto_rejects_empty_name() {
        let dto = CreateDonationDto {
            fundraiser_id: 1,
            name: String::new(),
            date: Utc::now(),
            amount: Decimal::new(100, 0),
            giver: "someone".to_string(),
        };

        assert!(dto.validate().is_err());
    }
}
