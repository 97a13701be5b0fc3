use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::tenant::errors::TenantError;
use crate::domain::tenant::models::TenantId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn delete_tenant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let tenant_id = TenantId::from_string(&id).map_err(TenantError::from)?;

    state
        .tenant_service
        .delete_tenant(&tenant_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
