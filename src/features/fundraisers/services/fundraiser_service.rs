use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::donations::models::Donation;
use crate::features::fundraisers::dtos::{
    CreateFundraiserDto, FundraiserDetailDto, UpdateFundraiserDto,
};
use crate::features::fundraisers::models::FundraiserWithCategory;

/// Service for fundraiser CRUD operations
pub struct FundraiserService {
    pool: PgPool,
}

impl FundraiserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Composite detail view: the fundraiser joined with its category's name,
    /// plus all of its donations in insertion order.
    pub async fn get_detail(&self, id: i64) -> Result<FundraiserDetailDto> {
        let fundraiser = sqlx::query_as::<_, FundraiserWithCategory>(
            r#"
            SELECT f.id, f.organizer, f.caption, f.target_funding, f.current_funding,
                   f.city, f.active, f.category_id, c.name AS category_name, f.created_at
            FROM fundraisers f
            JOIN categories c ON c.id = f.category_id
            WHERE f.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch fundraiser {}: {:?}", id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound("Fundraiser not found".to_string()))?;

        let donations = sqlx::query_as::<_, Donation>(
            r#"
            SELECT id, name, donated_at, amount, giver
            FROM donations
            WHERE fundraiser_id = $1
            ORDER BY id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch donations for fundraiser {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        Ok(FundraiserDetailDto::from_parts(
            fundraiser,
            donations.into_iter().map(|d| d.into()).collect(),
        ))
    }

    /// Create a fundraiser. Current funding always starts at 0; the caller
    /// cannot supply it.
    pub async fn create(&self, dto: CreateFundraiserDto) -> Result<i64> {
        let fundraiser_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO fundraisers (organizer, caption, target_funding, current_funding,
                                     city, active, category_id)
            VALUES ($1, $2, $3, 0, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&dto.organizer)
        .bind(&dto.caption)
        .bind(dto.target_funding)
        .bind(&dto.city)
        .bind(dto.active)
        .bind(dto.category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create fundraiser: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Fundraiser created: id={}, organizer={}",
            fundraiser_id,
            dto.organizer
        );

        Ok(fundraiser_id)
    }

    /// Replace all mutable fields, including current_funding as supplied.
    /// There is intentionally no check against the target or the donation
    /// history here.
    pub async fn update(&self, id: i64, dto: UpdateFundraiserDto) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE fundraisers
            SET organizer = $1, caption = $2, target_funding = $3, current_funding = $4,
                city = $5, active = $6, category_id = $7
            WHERE id = $8
            "#,
        )
        .bind(&dto.organizer)
        .bind(&dto.caption)
        .bind(dto.target_funding)
        .bind(dto.current_funding)
        .bind(&dto.city)
        .bind(dto.active)
        .bind(dto.category_id)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update fundraiser {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Fundraiser not found".to_string()));
        }

        Ok(())
    }

    /// Delete a fundraiser unless it owns donations. The existence check and
    /// the delete are one statement, so no donation can slip in between them.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM fundraisers f
            WHERE f.id = $1
              AND NOT EXISTS (SELECT 1 FROM donations d WHERE d.fundraiser_id = f.id)
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete fundraiser {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            // Zero rows means either the fundraiser is gone or the guard held;
            // check existence only to pick the right error.
            let exists = sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS (SELECT 1 FROM fundraisers WHERE id = $1)",
            )
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

            if exists {
                return Err(AppError::Conflict(
                    "Cannot delete fundraiser with donations".to_string(),
                ));
            }
            return Err(AppError::NotFound("Fundraiser not found".to_string()));
        }

        tracing::info!("Fundraiser deleted: id={}", id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::donations::dtos::CreateDonationDto;
    use crate::features::donations::services::DonationService;
    use crate::shared::test_helpers::{any_category_id, test_pool};
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn create_dto(category_id: i64, target: i64) -> CreateFundraiserDto {
        CreateFundraiserDto {
            organizer: "Riverside School".to_string(),
            caption: "New library wing".to_string(),
            target_funding: Decimal::new(target, 0),
            city: "Springfield".to_string(),
            active: true,
            category_id,
        }
    }

    #[tokio::test]
    #[ignore = "requires PostgreSQL (set DATABASE_URL)"]
    async fn test_created_fundraiser_starts_with_zero_funding() {
        let pool = test_pool().await;
        let service = FundraiserService::new(pool.clone());
        let category_id = any_category_id(&pool).await;

        let id = service.create(create_dto(category_id, 1000)).await.unwrap();
        let detail = service.get_detail(id).await.unwrap();

        assert_eq!(detail.current_funding, Decimal::ZERO);
        assert_eq!(detail.target_funding, Decimal::new(1000, 0));
        assert!(detail.donations.is_empty());
    }

    #[tokio::test]
    #[ignore = "requires PostgreSQL (set DATABASE_URL)"]
    async fn test_detail_round_trips_created_fields() {
        let pool = test_pool().await;
        let service = FundraiserService::new(pool.clone());
        let category_id = any_category_id(&pool).await;

        let id = service.create(create_dto(category_id, 2500)).await.unwrap();
        let detail = service.get_detail(id).await.unwrap();

        assert_eq!(detail.id, id);
        assert_eq!(detail.organizer, "Riverside School");
        assert_eq!(detail.caption, "New library wing");
        assert_eq!(detail.city, "Springfield");
        assert!(detail.active);
        assert_eq!(detail.category_id, category_id);
        assert!(!detail.category_name.is_empty());
    }

    #[tokio::test]
    #[ignore = "requires PostgreSQL (set DATABASE_URL)"]
    async fn test_detail_lists_donations_in_insertion_order() {
        let pool = test_pool().await;
        let service = FundraiserService::new(pool.clone());
        let donations = DonationService::new(pool.clone());
        let category_id = any_category_id(&pool).await;

        let id = service.create(create_dto(category_id, 1000)).await.unwrap();
        for (giver, amount) in [("first", 100), ("second", 200), ("third", 300)] {
            donations
                .create(CreateDonationDto {
                    fundraiser_id: id,
                    name: "Jordan".to_string(),
                    date: Utc::now(),
                    amount: Decimal::new(amount, 0),
                    giver: giver.to_string(),
                })
                .await
                .unwrap();
        }

        let detail = service.get_detail(id).await.unwrap();
        let givers: Vec<&str> = detail.donations.iter().map(|d| d.giver.as_str()).collect();
        assert_eq!(givers, vec!["first", "second", "third"]);
        assert_eq!(detail.current_funding, Decimal::new(600, 0));
    }

    #[tokio::test]
    #[ignore = "requires PostgreSQL (set DATABASE_URL)"]
    async fn test_get_detail_missing_id_is_not_found() {
        let pool = test_pool().await;
        let service = FundraiserService::new(pool.clone());

        let err = service.get_detail(-1).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    #[ignore = "requires PostgreSQL (set DATABASE_URL)"]
    async fn test_update_replaces_all_fields_including_current_funding() {
        let pool = test_pool().await;
        let service = FundraiserService::new(pool.clone());
        let category_id = any_category_id(&pool).await;

        let id = service.create(create_dto(category_id, 1000)).await.unwrap();

        // Direct overwrite of current_funding is allowed, even above target
        service
            .update(
                id,
                UpdateFundraiserDto {
                    organizer: "New Organizer".to_string(),
                    caption: "Updated caption".to_string(),
                    target_funding: Decimal::new(500, 0),
                    current_funding: Decimal::new(750, 0),
                    city: "Shelbyville".to_string(),
                    active: false,
                    category_id,
                },
            )
            .await
            .unwrap();

        let detail = service.get_detail(id).await.unwrap();
        assert_eq!(detail.organizer, "New Organizer");
        assert_eq!(detail.current_funding, Decimal::new(750, 0));
        assert_eq!(detail.target_funding, Decimal::new(500, 0));
        assert!(!detail.active);
    }

    #[tokio::test]
    #[ignore = "requires PostgreSQL (set DATABASE_URL)"]
    async fn test_update_missing_id_is_not_found() {
        let pool = test_pool().await;
        let service = FundraiserService::new(pool.clone());
        let category_id = any_category_id(&pool).await;

        let err = service
            .update(
                -1,
                UpdateFundraiserDto {
                    organizer: "Nobody".to_string(),
                    caption: "Nothing".to_string(),
                    target_funding: Decimal::new(100, 0),
                    current_funding: Decimal::ZERO,
                    city: "Nowhere".to_string(),
                    active: true,
                    category_id,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    #[ignore = "requires PostgreSQL (set DATABASE_URL)"]
    async fn test_delete_without_donations_succeeds() {
        let pool = test_pool().await;
        let service = FundraiserService::new(pool.clone());
        let category_id = any_category_id(&pool).await;

        let id = service.create(create_dto(category_id, 1000)).await.unwrap();
        service.delete(id).await.unwrap();

        let err = service.get_detail(id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    #[ignore = "requires PostgreSQL (set DATABASE_URL)"]
    async fn test_delete_with_donations_is_refused() {
        let pool = test_pool().await;
        let service = FundraiserService::new(pool.clone());
        let donations = DonationService::new(pool.clone());
        let category_id = any_category_id(&pool).await;

        let id = service.create(create_dto(category_id, 1000)).await.unwrap();
        donations
            .create(CreateDonationDto {
                fundraiser_id: id,
                name: "Jordan".to_string(),
                date: Utc::now(),
                amount: Decimal::new(100, 0),
                giver: "anonymous".to_string(),
            })
            .await
            .unwrap();

        let err = service.delete(id).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        // Still fetchable afterwards
        assert!(service.get_detail(id).await.is_ok());
    }

    #[tokio::test]
    #[ignore = "requires PostgreSQL (set DATABASE_URL)"]
    async fn test_delete_missing_id_is_not_found() {
        let pool = test_pool().await;
        let service = FundraiserService::new(pool.clone());

        let err = service.delete(-1).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
