use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::email::EmailAddress;
use crate::domain::owner::errors::OwnerError;
use crate::domain::owner::models::OwnerId;
use crate::domain::owner::models::UpdateOwnerCommand;
use crate::inbound::http::handlers::owners::OwnerData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating an owner (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateOwnerRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub dni: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateOwnerRequest {
    fn try_into_command(self) -> Result<UpdateOwnerCommand, OwnerError> {
        let email = self.email.map(EmailAddress::new).transpose()?;

        Ok(UpdateOwnerCommand {
            first_name: self.first_name,
            last_name: self.last_name,
            dni: self.dni,
            address: self.address,
            phone: self.phone,
            email,
            password: self.password,
            is_active: self.is_active,
        })
    }
}

pub async fn update_owner(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateOwnerRequest>,
) -> Result<ApiSuccess<OwnerData>, ApiError> {
    let owner_id = OwnerId::from_string(&id).map_err(OwnerError::from)?;
    let command = body.try_into_command()?;

    state
        .owner_service
        .update_owner(&owner_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref owner| ApiSuccess::new(StatusCode::OK, owner.into()))
}
