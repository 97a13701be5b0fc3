use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::email::EmailAddress;
use crate::domain::tenant::errors::TenantError;
use crate::domain::tenant::models::CreateTenantCommand;
use crate::inbound::http::handlers::tenants::TenantData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_tenant(
    State(state): State<AppState>,
    Json(body): Json<CreateTenantRequest>,
) -> Result<ApiSuccess<TenantData>, ApiError> {
    state
        .tenant_service
        .create_tenant(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref tenant| ApiSuccess::new(StatusCode::CREATED, tenant.into()))
}

/// HTTP request body for creating a tenant (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTenantRequest {
    first_name: String,
    last_name: String,
    dni: String,
    phone: String,
    email: String,
}

impl CreateTenantRequest {
    fn try_into_command(self) -> Result<CreateTenantCommand, TenantError> {
        let email = EmailAddress::new(self.email)?;
        Ok(CreateTenantCommand {
            first_name: self.first_name,
            last_name: self.last_name,
            dni: self.dni,
            phone: self.phone,
            email,
        })
    }
}
