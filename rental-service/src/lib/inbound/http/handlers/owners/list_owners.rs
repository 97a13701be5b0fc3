use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::owners::OwnerData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_owners(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<OwnerData>>, ApiError> {
    state
        .owner_service
        .list_owners()
        .await
        .map_err(ApiError::from)
        .map(|owners| {
            ApiSuccess::new(
                StatusCode::OK,
                owners.iter().map(OwnerData::from).collect(),
            )
        })
}
