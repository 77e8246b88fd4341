//! Transactional persistence for farmers and recommendations

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::error::{AppError, AppResult};
use crate::models::{FarmerInput, FarmerRecord, Recommendation, RecommendationRecord, StoreReceipt};

/// Persistence service for the farmer/recommendation store
#[derive(Clone)]
pub struct PersistenceService {
    db: SqlitePool,
}

/// Database row for a stored recommendation joined with its crop name
#[derive(Debug, sqlx::FromRow)]
struct RecommendationRow {
    id: i64,
    farmer_id: i64,
    crop_id: i64,
    crop_name: String,
    sustainability_score: f64,
    profitability_score: f64,
    water_efficiency_score: f64,
    created_at: DateTime<Utc>,
}

impl From<RecommendationRow> for RecommendationRecord {
    fn from(row: RecommendationRow) -> Self {
        RecommendationRecord {
            id: row.id,
            farmer_id: row.farmer_id,
            crop_id: row.crop_id,
            crop_name: row.crop_name,
            sustainability_score: row.sustainability_score,
            profitability_score: row.profitability_score,
            water_efficiency_score: row.water_efficiency_score,
            created_at: row.created_at,
        }
    }
}

/// Database row for a stored farmer profile
#[derive(Debug, sqlx::FromRow)]
struct FarmerRow {
    id: i64,
    name: String,
    location: String,
    farm_size: f64,
    soil_type: String,
    water_availability: String,
    created_at: DateTime<Utc>,
}

impl From<FarmerRow> for FarmerRecord {
    fn from(row: FarmerRow) -> Self {
        FarmerRecord {
            id: row.id,
            name: row.name,
            location: row.location,
            farm_size: row.farm_size,
            soil_type: row.soil_type,
            water_availability: row.water_availability,
            created_at: row.created_at,
        }
    }
}

impl PersistenceService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Atomically store a farmer and their recommendation
    ///
    /// Both rows commit together or neither does. The recommended crop must
    /// resolve to an existing crops.id; a miss rolls the transaction back
    /// and surfaces as a reference-data error, never a defaulted id.
    pub async fn store_profile(
        &self,
        farmer: &FarmerInput,
        recommendation: &Recommendation,
    ) -> AppResult<StoreReceipt> {
        let mut tx = self.db.begin().await?;

        let crop_id: Option<i64> = sqlx::query_scalar("SELECT id FROM crops WHERE name = $1")
            .bind(&recommendation.crop_name)
            .fetch_optional(&mut *tx)
            .await?;
        let crop_id = crop_id.ok_or_else(|| {
            AppError::ReferenceData(format!(
                "Recommended crop '{}' is not in the crops reference table",
                recommendation.crop_name
            ))
        })?;

        let farmer_id = sqlx::query(
            r#"
            INSERT INTO farmers (name, location, farm_size, soil_type, water_availability)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&farmer.name)
        .bind(&farmer.location)
        .bind(farmer.farm_size)
        .bind(&farmer.soil_type)
        .bind(&farmer.water_availability)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::Persistence(format!("inserting farmer: {}", e)))?
        .last_insert_rowid();

        let recommendation_id = sqlx::query(
            r#"
            INSERT INTO recommendations
                (farmer_id, crop_id, sustainability_score, profitability_score, water_efficiency_score)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(farmer_id)
        .bind(crop_id)
        .bind(recommendation.sustainability_score)
        .bind(recommendation.profitability_score)
        .bind(recommendation.water_efficiency_score)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::Persistence(format!("inserting recommendation: {}", e)))?
        .last_insert_rowid();

        tx.commit()
            .await
            .map_err(|e| AppError::Persistence(format!("committing store: {}", e)))?;

        Ok(StoreReceipt {
            farmer_id,
            recommendation_id,
        })
    }

    /// Store a farmer profile alone (no recommendation)
    pub async fn create_farmer(&self, farmer: &FarmerInput) -> AppResult<i64> {
        let farmer_id = sqlx::query(
            r#"
            INSERT INTO farmers (name, location, farm_size, soil_type, water_availability)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&farmer.name)
        .bind(&farmer.location)
        .bind(farmer.farm_size)
        .bind(&farmer.soil_type)
        .bind(&farmer.water_availability)
        .execute(&self.db)
        .await
        .map_err(|e| AppError::Persistence(format!("inserting farmer: {}", e)))?
        .last_insert_rowid();

        Ok(farmer_id)
    }

    /// Stored farmer profile by id
    pub async fn get_farmer(&self, farmer_id: i64) -> AppResult<FarmerRecord> {
        let row = sqlx::query_as::<_, FarmerRow>(
            r#"
            SELECT id, name, location, farm_size, soil_type, water_availability, created_at
            FROM farmers
            WHERE id = $1
            "#,
        )
        .bind(farmer_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Farmer".to_string()))?;

        Ok(FarmerRecord::from(row))
    }

    /// Stored recommendations for a farmer, newest first
    pub async fn recommendations_for(&self, farmer_id: i64) -> AppResult<Vec<RecommendationRecord>> {
        let exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM farmers WHERE id = $1")
            .bind(farmer_id)
            .fetch_one(&self.db)
            .await?;
        if exists == 0 {
            return Err(AppError::NotFound("Farmer".to_string()));
        }

        let rows = sqlx::query_as::<_, RecommendationRow>(
            r#"
            SELECT r.id, r.farmer_id, r.crop_id, c.name AS crop_name,
                   r.sustainability_score, r.profitability_score, r.water_efficiency_score,
                   r.created_at
            FROM recommendations r
            JOIN crops c ON c.id = r.crop_id
            WHERE r.farmer_id = $1
            ORDER BY r.id DESC
            "#,
        )
        .bind(farmer_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(RecommendationRecord::from).collect())
    }
}
