use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Fundraiser joined with its category's display name, for the detail view
#[derive(Debug, Clone, FromRow)]
pub struct FundraiserWithCategory {
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
}
