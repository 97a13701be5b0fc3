use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::owners;
use super::handlers::tenants;
use super::middleware::authenticate as auth_middleware;
use crate::domain::owner::ports::OwnerServicePort;
use crate::domain::tenant::ports::TenantServicePort;

#[derive(Clone)]
pub struct AppState {
    pub owner_service: Arc<dyn OwnerServicePort>,
    pub tenant_service: Arc<dyn TenantServicePort>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    owner_service: Arc<dyn OwnerServicePort>,
    tenant_service: Arc<dyn TenantServicePort>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        owner_service,
        tenant_service,
        authenticator,
    };

    // Tenant routes are public; only the owners surface requires a bearer
    // token.
    let public_routes = Router::new()
        .route("/api/owners/login", post(owners::login))
        .route("/api/tenants", get(tenants::list_tenants))
        .route("/api/tenants", post(tenants::create_tenant))
        .route("/api/tenants/:tenant_id", get(tenants::get_tenant))
        .route("/api/tenants/:tenant_id", patch(tenants::update_tenant))
        .route("/api/tenants/:tenant_id", delete(tenants::delete_tenant));

    let protected_routes = Router::new()
        .route("/api/owners", get(owners::list_owners))
        .route("/api/owners", post(owners::create_owner))
        .route("/api/owners/:owner_id", get(owners::get_owner))
        .route("/api/owners/:owner_id", patch(owners::update_owner))
        .route("/api/owners/:owner_id", delete(owners::delete_owner))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
