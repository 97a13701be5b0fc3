use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::domain::email::EmailAddress;
use crate::domain::email::EmailError;
use crate::domain::owner::models::OwnerCredentials;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Owner login. Malformed requests are rejected here, before the store is
/// ever queried; unknown email and wrong password both map to the same
/// generic 401.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let credentials = body.try_into_credentials()?;

    let token = state
        .owner_service
        .login(credentials)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(StatusCode::OK, LoginResponseData { token }))
}

/// HTTP request body for owner login (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseLoginRequestError {
    #[error("Invalid username: {0}")]
    Username(#[from] EmailError),

    #[error("Password must not be empty")]
    EmptyPassword,
}

impl LoginRequestBody {
    fn try_into_credentials(self) -> Result<OwnerCredentials, ParseLoginRequestError> {
        if self.password.is_empty() {
            return Err(ParseLoginRequestError::EmptyPassword);
        }
        let email = EmailAddress::new(self.username)?;
        Ok(OwnerCredentials {
            email,
            password: self.password,
        })
    }
}

impl From<ParseLoginRequestError> for ApiError {
    fn from(err: ParseLoginRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
}
