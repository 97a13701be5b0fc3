use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::owner::errors::OwnerError;
use crate::domain::owner::models::OwnerId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn delete_owner(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let owner_id = OwnerId::from_string(&id).map_err(OwnerError::from)?;

    state
        .owner_service
        .delete_owner(&owner_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
