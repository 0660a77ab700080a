use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for donation, as read back for the detail view
#[derive(Debug, Clone, FromRow)]
pub struct Donation {
    pub id: i64,
    pub name: String,
    pub donated_at: DateTime<Utc>,
    pub amount: Decimal,
    pub giver: String,
}
