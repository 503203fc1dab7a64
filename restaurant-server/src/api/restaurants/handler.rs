//! Restaurant API Handlers
//!
//! Both routes recompute the capacity counters before answering.

use axum::extract::{Path, State};
use shared::models::Restaurant;
use shared::{ApiResponse, AppError, AppResult, ErrorCode};

use crate::core::ServerState;
use crate::db::repository::RepoError;

/// GET /api/restaurants - 获取所有餐厅 (并发刷新容量)
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<Restaurant>>> {
    let restaurants = state.capacity.recompute_all().await?;
    if restaurants.is_empty() {
        return Err(AppError::new(ErrorCode::NoRestaurantFound));
    }
    Ok(ApiResponse::success(restaurants))
}

/// GET /api/restaurants/:id - 获取单个餐厅
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Restaurant>> {
    let restaurant = state.capacity.recompute(&id).await.map_err(|e| match e {
        RepoError::NotFound(_) => AppError::restaurant_not_found(&id),
        RepoError::Validation(msg) => {
            AppError::with_message(ErrorCode::InvalidRestaurantId, msg).with_detail("id", id.clone())
        }
        other => other.into(),
    })?;
    Ok(ApiResponse::success(restaurant))
}
