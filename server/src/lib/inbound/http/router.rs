use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::header;
use axum::http::HeaderValue;
use axum::http::Method;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_project::create_project;
use super::handlers::create_team::create_team;
use super::handlers::current_user::current_user;
use super::handlers::get_project::get_project;
use super::handlers::get_team::get_team;
use super::handlers::health::health;
use super::handlers::list_projects::list_projects;
use super::handlers::list_user_projects::list_user_projects;
use super::handlers::list_user_teams::list_user_teams;
use super::handlers::login::login;
use super::handlers::logout::logout;
use super::handlers::register::register;
use super::middleware::authenticate as auth_middleware;
use crate::config::CookieConfig;
use crate::config::CorsConfig;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::service::AuthenticationService;
use crate::domain::project::ports::ProjectRepository;
use crate::domain::project::ports::ProjectServicePort;
use crate::domain::project::service::ProjectService;
use crate::domain::team::ports::TeamRepository;
use crate::domain::team::ports::TeamServicePort;
use crate::domain::team::service::TeamService;
use crate::domain::user::ports::UserRepository;
use crate::inbound::websocket::handler::websocket_handler;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub team_service: Arc<dyn TeamServicePort>,
    pub project_service: Arc<dyn ProjectServicePort>,
    pub cookie: CookieConfig,
}

impl AppState {
    /// Wire the domain services over one set of repositories.
    pub fn new<UR, TR, PR>(
        users: Arc<UR>,
        teams: Arc<TR>,
        projects: Arc<PR>,
        authenticator: Arc<Authenticator>,
        cookie: CookieConfig,
    ) -> Self
    where
        UR: UserRepository,
        TR: TeamRepository,
        PR: ProjectRepository,
    {
        Self {
            auth_service: Arc::new(AuthenticationService::new(users.clone(), authenticator)),
            team_service: Arc::new(TeamService::new(teams.clone(), users.clone())),
            project_service: Arc::new(ProjectService::new(projects, teams, users)),
            cookie,
        }
    }
}

pub fn create_router(state: AppState, cors: &CorsConfig) -> Router {
    let public_routes = Router::new()
        .route("/api/health", get(health))
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/ws", get(websocket_handler));

    let protected_routes = Router::new()
        .route("/api/users/me", get(current_user))
        .route("/api/users/me/teams", get(list_user_teams))
        .route("/api/users/me/projects", get(list_user_projects))
        .route("/api/teams", post(create_team))
        .route("/api/teams/:team_id", get(get_team))
        .route("/api/projects", post(create_project).get(list_projects))
        .route("/api/projects/:project_id", get(get_project))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Headers are left out of the span: they carry bearer tokens and cookies.
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
        .layer(cors_layer(cors))
        .with_state(state)
}

fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    if cors.allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}
