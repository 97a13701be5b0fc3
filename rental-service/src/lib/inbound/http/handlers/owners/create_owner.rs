use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::email::EmailAddress;
use crate::domain::owner::errors::OwnerError;
use crate::domain::owner::models::CreateOwnerCommand;
use crate::inbound::http::handlers::owners::OwnerData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_owner(
    State(state): State<AppState>,
    Json(body): Json<CreateOwnerRequest>,
) -> Result<ApiSuccess<OwnerData>, ApiError> {
    state
        .owner_service
        .create_owner(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref owner| ApiSuccess::new(StatusCode::CREATED, owner.into()))
}

/// HTTP request body for creating an owner (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateOwnerRequest {
    first_name: String,
    last_name: String,
    dni: String,
    address: String,
    phone: String,
    email: String,
    password: String,
}

impl CreateOwnerRequest {
    fn try_into_command(self) -> Result<CreateOwnerCommand, OwnerError> {
        let email = EmailAddress::new(self.email)?;
        Ok(CreateOwnerCommand {
            first_name: self.first_name,
            last_name: self.last_name,
            dni: self.dni,
            address: self.address,
            phone: self.phone,
            email,
            password: self.password,
        })
    }
}
