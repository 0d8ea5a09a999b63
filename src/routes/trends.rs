use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::common::AppState;
use crate::entity::sensor_data;
use crate::error::{AppError, AppResult};
use crate::series::{self, DataSource, RangeToken, Reading, SourceData, TrendPoint, TrendSummary};

/// The trends envelope consumed by the dashboard. Field names are a wire
/// contract; existing consumers parse them as-is.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrendsResponse {
    pub device_id: String,
    /// Echo of the requested range token
    pub range: String,
    pub data: Vec<TrendPoint>,
    /// Null when the series is empty
    pub summary: Option<TrendSummary>,
    pub data_source: DataSource,
    /// Human-readable provenance, e.g. "Hybrid data: 3 real readings + 21 simulated"
    pub note: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct TrendsQuery {
    /// Lookback range: 24h (default), 7d, or 30d
    pub range: Option<String>,
}

/// Get water-quality trends for a device
///
/// Returns real readings when the database has enough of them for the
/// requested range, a hybrid real+simulated series when it has some, and a
/// fully simulated series when no database is configured. A failing database
/// query degrades to the simulated series instead of an error response.
#[utoipa::path(
    get,
    path = "/api/trends/{device_id}",
    params(
        ("device_id" = String, Path, description = "Device identifier"),
        TrendsQuery
    ),
    responses(
        (status = 200, description = "Trend series retrieved successfully", body = TrendsResponse),
        (status = 400, description = "Invalid range parameter"),
    ),
    tag = "trends"
)]
pub async fn get_device_trends(
    State(state): State<AppState>,
    Path(device_id): Path<String>,
    Query(query): Query<TrendsQuery>,
) -> AppResult<Json<TrendsResponse>> {
    let raw_range = query.range.as_deref().unwrap_or("24h");
    let token = RangeToken::parse(raw_range).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Invalid range parameter: {raw_range}. Use: 24h, 7d, or 30d"
        ))
    })?;

    let now = Utc::now();
    let source = match &state.db {
        None => SourceData::Unconfigured,
        Some(db) => match fetch_readings(db, &device_id, token, now).await {
            Ok(readings) => SourceData::Readings(readings),
            Err(e) => {
                // Fetch failures never surface to the caller; the response
                // degrades to mock data and the error stays in the logs.
                tracing::warn!(
                    device = %device_id,
                    range = %token,
                    error = %e,
                    "sensor query failed, falling back to mock data"
                );
                SourceData::Unconfigured
            }
        },
    };

    let combined = series::combine(source, token, now);

    tracing::info!(
        device = %device_id,
        range = %token,
        data_source = ?combined.data_source,
        points = combined.data.len(),
        "trends_served"
    );

    Ok(Json(TrendsResponse {
        device_id,
        range: token.as_str().to_string(),
        data: combined.data,
        summary: combined.summary,
        data_source: combined.data_source,
        note: combined.note,
    }))
}

/// Fetch readings for a device within the range's lookback window, oldest
/// first.
async fn fetch_readings(
    db: &DatabaseConnection,
    device_id: &str,
    token: RangeToken,
    now: DateTime<Utc>,
) -> Result<Vec<Reading>, sea_orm::DbErr> {
    let start = now - token.spec().span;

    let rows = sensor_data::Entity::find()
        .filter(sensor_data::Column::DeviceId.eq(device_id))
        .filter(sensor_data::Column::Timestamp.gte(start))
        .order_by_asc(sensor_data::Column::Timestamp)
        .all(db)
        .await?;

    Ok(rows.into_iter().map(Reading::from).collect())
}
