use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::donations::dtos::CreateDonationDto;

/// Service for recording donations against the funding ledger
pub struct DonationService {
    pool: PgPool,
}

impl DonationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a donation and credit the owning fundraiser.
    ///
    /// Both writes happen in one transaction: the donation insert and the
    /// funding increment commit together or not at all, so a refused increment
    /// never leaves an orphan donation row. The increment itself is a single
    /// conditional UPDATE, so concurrent donations to the same fundraiser
    /// serialize on the row and `current_funding` can never exceed
    /// `target_funding`.
    ///
    /// The caller-facing layer validates `amount > 0` before this is reached.
    pub async fn create(&self, dto: CreateDonationDto) -> Result<i64> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let donation_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO donations (fundraiser_id, name, donated_at, amount, giver)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(dto.fundraiser_id)
        .bind(&dto.name)
        .bind(dto.date)
        .bind(dto.amount)
        .bind(&dto.giver)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert donation: {:?}", e);
            AppError::Database(e)
        })?;

        let updated = sqlx::query(
            r#"
            UPDATE fundraisers
            SET current_funding = current_funding + $1
            WHERE id = $2 AND current_funding + $1 <= target_funding
            "#,
        )
        .bind(dto.amount)
        .bind(dto.fundraiser_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to credit fundraiser funding: {:?}", e);
            AppError::Database(e)
        })?;

        if updated.rows_affected() == 0 {
            // The insert's foreign key already proved the fundraiser exists,
            // so a zero-row update can only mean the cap would be exceeded.
            // Dropping the transaction rolls the insert back.
            tracing::info!(
                "Donation of {} to fundraiser {} refused: would exceed target",
                dto.amount,
                dto.fundraiser_id
            );
            return Err(AppError::Storage(
                "Error updating fundraiser funding".to_string(),
            ));
        }

        tx.commit().await.map_err(AppError::Database)?;

        tracing::info!(
            "Donation recorded: id={}, fundraiser_id={}, amount={}",
            donation_id,
            dto.fundraiser_id,
            dto.amount
        );

        Ok(donation_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::fundraisers::dtos::CreateFundraiserDto;
    use crate::features::fundraisers::services::FundraiserService;
    use crate::shared::test_helpers::{any_category_id, test_pool};
    use chrono::Utc;
    use rust_decimal::Decimal;

    async fn create_fundraiser(pool: &sqlx::PgPool, target: i64) -> i64 {
        let category_id = any_category_id(pool).await;
        FundraiserService::new(pool.clone())
            .create(CreateFundraiserDto {
                organizer: "Test Organizer".to_string(),
                caption: "Test campaign".to_string(),
                target_funding: Decimal::new(target, 0),
                city: "Springfield".to_string(),
                active: true,
                category_id,
            })
            .await
            .unwrap()
    }

    fn donation(fundraiser_id: i64, amount: i64) -> CreateDonationDto {
        CreateDonationDto {
            fundraiser_id,
            name: "Jordan".to_string(),
            date: Utc::now(),
            amount: Decimal::new(amount, 0),
            giver: "anonymous".to_string(),
        }
    }

    async fn current_funding(pool: &sqlx::PgPool, id: i64) -> Decimal {
        sqlx::query_scalar::<_, Decimal>("SELECT current_funding FROM fundraisers WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    async fn donation_count(pool: &sqlx::PgPool, id: i64) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM donations WHERE fundraiser_id = $1")
            .bind(id)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    #[ignore = "requires PostgreSQL (set DATABASE_URL)"]
    async fn test_donation_within_target_credits_funding() {
        let pool = test_pool().await;
        let service = DonationService::new(pool.clone());
        let fundraiser_id = create_fundraiser(&pool, 1000).await;

        let donation_id = service.create(donation(fundraiser_id, 600)).await.unwrap();
        assert!(donation_id > 0);
        assert_eq!(current_funding(&pool, fundraiser_id).await, Decimal::new(600, 0));
    }

    #[tokio::test]
    #[ignore = "requires PostgreSQL (set DATABASE_URL)"]
    async fn test_donation_exceeding_target_rolls_back_entirely() {
        let pool = test_pool().await;
        let service = DonationService::new(pool.clone());
        let fundraiser_id = create_fundraiser(&pool, 1000).await;

        service.create(donation(fundraiser_id, 600)).await.unwrap();

        // 600 + 500 > 1000: refused, and the donation row must not survive
        let err = service.create(donation(fundraiser_id, 500)).await.unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));

        assert_eq!(current_funding(&pool, fundraiser_id).await, Decimal::new(600, 0));
        assert_eq!(donation_count(&pool, fundraiser_id).await, 1);
    }

    #[tokio::test]
    #[ignore = "requires PostgreSQL (set DATABASE_URL)"]
    async fn test_donation_to_missing_fundraiser_fails() {
        let pool = test_pool().await;
        let service = DonationService::new(pool.clone());

        let err = service.create(donation(-1, 100)).await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }

    #[tokio::test]
    #[ignore = "requires PostgreSQL (set DATABASE_URL)"]
    async fn test_concurrent_donations_never_exceed_target() {
        let pool = test_pool().await;
        let fundraiser_id = create_fundraiser(&pool, 1000).await;

        // Four donations of 300 fit individually but not collectively:
        // exactly three may commit.
        let mut handles = Vec::new();
        for _ in 0..4 {
            let service = DonationService::new(pool.clone());
            handles.push(tokio::spawn(async move {
                service.create(donation(fundraiser_id, 300)).await
            }));
        }

        let mut committed = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                committed += 1;
            }
        }

        assert_eq!(committed, 3);
        assert_eq!(current_funding(&pool, fundraiser_id).await, Decimal::new(900, 0));
        assert_eq!(donation_count(&pool, fundraiser_id).await, 3);
    }
}
