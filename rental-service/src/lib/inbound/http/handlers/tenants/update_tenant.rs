use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::email::EmailAddress;
use crate::domain::tenant::errors::TenantError;
use crate::domain::tenant::models::TenantId;
use crate::domain::tenant::models::UpdateTenantCommand;
use crate::inbound::http::handlers::tenants::TenantData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating a tenant (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateTenantRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub dni: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateTenantRequest {
    fn try_into_command(self) -> Result<UpdateTenantCommand, TenantError> {
        let email = self.email.map(EmailAddress::new).transpose()?;

        Ok(UpdateTenantCommand {
            first_name: self.first_name,
            last_name: self.last_name,
            dni: self.dni,
            phone: self.phone,
            email,
            is_active: self.is_active,
        })
    }
}

pub async fn update_tenant(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateTenantRequest>,
) -> Result<ApiSuccess<TenantData>, ApiError> {
    let tenant_id = TenantId::from_string(&id).map_err(TenantError::from)?;
    let command = body.try_into_command()?;

    state
        .tenant_service
        .update_tenant(&tenant_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref tenant| ApiSuccess::new(StatusCode::OK, tenant.into()))
}
