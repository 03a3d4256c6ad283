use std::{
    collections::BTreeMap,
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use anyhow::Context;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{self, HeaderName, HeaderValue, Method, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use platform_api::ApiError;
use products_hr::{HrError, HrModule, PageInfo, Role};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{info, instrument};

use crate::{
    config::AppConfig,
    graphql::{SchemaType, api_error},
};

#[derive(Clone)]
pub struct AppState {
    pub schema: SchemaType,
    pub module: HrModule,
    pub config: Arc<AppConfig>,
}

#[derive(Clone, Debug)]
pub struct ServeConfig {
    addr: SocketAddr,
}

impl ServeConfig {
    pub fn new(host: IpAddr, port: u16) -> Self {
        Self {
            addr: SocketAddr::from((host, port)),
        }
    }
}

pub async fn serve(config: ServeConfig, state: AppState) -> anyhow::Result<()> {
    let as_of = state.module.as_of();
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    info!(%config.addr, %as_of, "dashboard server listening");
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;
    Ok(())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed = origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect::<Vec<_>>();
    let allow_origin = if allowed.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(allowed)
    };
    CorsLayer::new()
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET])
        .allow_origin(allow_origin)
}

pub fn build_router(state: AppState) -> Router {
    let request_id = MakeRequestUuid;
    let header_name = HeaderName::from_static("x-request-id");
    Router::new()
        .route("/health", get(health_handler))
        .route("/graphql", get(graphiql).post(graphql_handler))
        .route("/api/pages", get(pages_handler))
        .route("/api/pages/{slug}", get(page_handler))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(header_name.clone(), request_id))
                .layer(PropagateRequestIdLayer::new(header_name))
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors_layer(&state.config.cors_allowed_origins)),
        )
        .with_state(state)
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

async fn graphql_handler(
    State(state): State<AppState>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    state.schema.execute(request.into_inner()).await.into()
}

async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        ok: true,
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    version: &'static str,
}

#[derive(Debug, Default, Deserialize)]
struct PagesQuery {
    role: Option<String>,
}

#[instrument(skip(state))]
async fn pages_handler(
    State(state): State<AppState>,
    Query(query): Query<PagesQuery>,
) -> HttpResult<Json<Vec<PageInfo>>> {
    let role = query
        .role
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
        .map(str::parse::<Role>)
        .transpose()?;
    Ok(Json(state.module.pages(role)))
}

/// Every query parameter but the slug is handed to the page as a filter.
#[instrument(skip(state, params))]
async fn page_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<BTreeMap<String, String>>,
) -> HttpResult<Json<Value>> {
    Ok(Json(state.module.report(&slug, &params)?))
}

type HttpResult<T> = Result<T, HttpError>;

#[derive(Debug)]
struct HttpError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: &'a str,
    message: &'a str,
}

impl From<HrError> for HttpError {
    fn from(err: HrError) -> Self {
        let api = api_error(err);
        let status = match api {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            code: api.code(),
            message: api.to_string(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            code: self.code,
            message: &self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        signal(SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    ctrl_c.await;

    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    };
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request};
    use chrono::NaiveDate;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;
    use crate::graphql::{GraphqlData, build_schema};

    fn app() -> Router {
        let as_of = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let module = HrModule::new(as_of);
        let config = AppConfig {
            as_of,
            org_name: "Acme Corp".into(),
            cors_allowed_origins: vec!["http://localhost:5173".into()],
        };
        build_router(AppState {
            schema: build_schema(GraphqlData {
                module,
                org_name: config.org_name.clone(),
            }),
            module,
            config: Arc::new(config),
        })
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_reports_version() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn pages_list_by_role() {
        let (status, body) = get_json("/api/pages?role=trainer").await;
        assert_eq!(status, StatusCode::OK);
        let pages = body.as_array().unwrap();
        assert_eq!(pages.len(), 3);
        assert!(pages.iter().all(|p| p["role"] == "trainer"));

        let (status, body) = get_json("/api/pages?role=ceo").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn page_applies_query_filters() {
        let (status, body) = get_json("/api/pages/trainer-assessments?passed=false").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 7);
        assert_eq!(body["shown"], 2);
        assert_eq!(body["summary"]["top_performer"], "Nina Petrova");
    }

    #[tokio::test]
    async fn unknown_page_is_not_found() {
        let (status, body) = get_json("/api/pages/admin-nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn malformed_filter_is_bad_request() {
        let (status, body) = get_json("/api/pages/admin-benefits?status=bogus").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn graphql_post_runs_queries() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/graphql")
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"query":"{ organization { name } }"}"#))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["data"]["organization"]["name"], "Acme Corp");
    }
}
