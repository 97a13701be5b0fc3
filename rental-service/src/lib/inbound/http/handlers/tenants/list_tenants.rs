use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::tenants::TenantData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_tenants(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<TenantData>>, ApiError> {
    state
        .tenant_service
        .list_tenants()
        .await
        .map_err(ApiError::from)
        .map(|tenants| {
            ApiSuccess::new(
                StatusCode::OK,
                tenants.iter().map(TenantData::from).collect(),
            )
        })
}
