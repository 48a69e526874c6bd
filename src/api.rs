// Japan Startup Atlas - HTTP API
// JSON endpoints over the query engine; the catalog is shared read-only.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::catalog::{Catalog, CatalogSource};
use crate::company::{Company, Readiness, ReadinessMeta};
use crate::config::AtlasConfig;
use crate::error::AtlasError;
use crate::query::{self, Facet, FilterParams, SortMode, RECENT_LIMIT};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Arc<AtlasConfig>,
}

impl AppState {
    pub fn new(catalog: Catalog, config: AtlasConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }
}

/// API Response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

impl IntoResponse for AtlasError {
    fn into_response(self) -> Response {
        let status = match &self {
            AtlasError::IntroFormNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            AtlasError::UnknownCompany(_) => StatusCode::NOT_FOUND,
            AtlasError::InvalidReadiness(_)
            | AtlasError::InvalidSortMode(_)
            | AtlasError::InvalidCatalogSource(_) => StatusCode::BAD_REQUEST,
            AtlasError::BrowserLaunchFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::warn!(status = status.as_u16(), error = %self, "request failed");

        (status, Json(ApiResponse::<()>::err(self.to_string()))).into_response()
    }
}

type ApiResult<T> = Result<Json<ApiResponse<T>>, AtlasError>;

// ============================================================================
// Payloads
// ============================================================================

/// Query string of GET /api/companies
#[derive(Debug, Default, Deserialize)]
pub struct CompaniesQuery {
    pub q: Option<String>,
    /// Comma-separated, AND semantics
    pub tags: Option<String>,
    pub readiness: Option<String>,
    pub stage: Option<String>,
    pub sort: Option<String>,
}

impl CompaniesQuery {
    pub fn to_params(&self) -> Result<FilterParams, AtlasError> {
        let tags: Vec<String> = self
            .tags
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        let readiness: Facet<Readiness> = match self.readiness.as_deref() {
            Some(r) if !r.trim().is_empty() => r.parse()?,
            _ => Facet::All,
        };

        let stage: Facet<String> = match self.stage.as_deref() {
            Some(s) if !s.is_empty() => s.parse()?,
            _ => Facet::All,
        };

        let sort: SortMode = match self.sort.as_deref() {
            Some(s) if !s.trim().is_empty() => s.parse()?,
            _ => SortMode::default(),
        };

        Ok(FilterParams::new()
            .with_query(self.q.clone().unwrap_or_default())
            .with_tags(tags)
            .with_readiness(readiness)
            .with_stage(stage)
            .with_sort(sort))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<usize>,
}

/// Directory card (simplified for API)
#[derive(Debug, Serialize, Deserialize)]
pub struct CompanySummary {
    pub id: String,
    pub name_en: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_jp: Option<String>,
    pub one_liner: String,
    pub tags: Vec<String>,
    pub founded: i32,
    pub hq: String,
    pub funding_stage: String,
    pub readiness: Readiness,
    pub readiness_label: String,
    pub featured: bool,
    pub last_updated: String,
}

impl From<Company> for CompanySummary {
    fn from(c: Company) -> Self {
        Self {
            readiness_label: c.readiness.meta().label.to_string(),
            id: c.id,
            name_en: c.name_en,
            name_jp: c.name_jp,
            one_liner: c.one_liner,
            tags: c.tags,
            founded: c.founded,
            hq: c.hq,
            funding_stage: c.funding_stage,
            readiness: c.readiness,
            featured: c.featured,
            last_updated: c.last_updated,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CompanyListResponse {
    /// Size of the unfiltered catalog
    pub total: usize,
    pub count: usize,
    pub params: FilterParams,
    pub companies: Vec<CompanySummary>,
}

#[derive(Debug, Serialize)]
pub struct CompanyProfileResponse {
    #[serde(flatten)]
    pub company: Company,
    pub readiness_meta: ReadinessMeta,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IntroResponse {
    pub company_id: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub catalog: CatalogSource,
    pub companies: usize,
    pub timestamp: String,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::ok(HealthResponse {
        status: "OK",
        version: crate::VERSION,
        catalog: state.catalog.source(),
        companies: state.catalog.len(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}

/// GET /api/companies - Filtered, sorted directory
async fn list_companies(
    State(state): State<AppState>,
    Query(query): Query<CompaniesQuery>,
) -> ApiResult<CompanyListResponse> {
    let params = query.to_params()?;
    let companies: Vec<CompanySummary> = query::filter_companies(state.catalog.companies(), &params)
        .into_iter()
        .map(CompanySummary::from)
        .collect();

    Ok(Json(ApiResponse::ok(CompanyListResponse {
        total: state.catalog.len(),
        count: companies.len(),
        params,
        companies,
    })))
}

/// GET /api/companies/:id - Full profile
async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<CompanyProfileResponse> {
    let company = state
        .catalog
        .find(&id)
        .cloned()
        .ok_or(AtlasError::UnknownCompany(id))?;

    Ok(Json(ApiResponse::ok(CompanyProfileResponse {
        readiness_meta: company.readiness.meta(),
        company,
    })))
}

/// GET /api/companies/:id/intro - Intro form link for a company
async fn get_intro(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<IntroResponse> {
    let company = state
        .catalog
        .find(&id)
        .ok_or_else(|| AtlasError::UnknownCompany(id.clone()))?;
    let url = state.config.intro_link()?;

    tracing::info!(company = %company.id, "intro link issued");

    Ok(Json(ApiResponse::ok(IntroResponse {
        company_id: company.id.clone(),
        url: url.to_string(),
    })))
}

/// GET /api/tags - Distinct tags, sorted
async fn get_tags(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::ok(query::all_tags(state.catalog.companies())))
}

/// GET /api/stages - Distinct funding stages, sorted
async fn get_stages(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::ok(query::all_stages(state.catalog.companies())))
}

/// GET /api/featured
async fn get_featured(State(state): State<AppState>) -> impl IntoResponse {
    let featured: Vec<CompanySummary> = query::featured(state.catalog.companies())
        .into_iter()
        .map(CompanySummary::from)
        .collect();
    Json(ApiResponse::ok(featured))
}

/// GET /api/recent?limit=N
async fn get_recent(
    State(state): State<AppState>,
    Query(recent): Query<RecentQuery>,
) -> impl IntoResponse {
    let limit = recent.limit.unwrap_or(RECENT_LIMIT);
    let companies: Vec<CompanySummary> = query::recently_updated(state.catalog.companies(), limit)
        .into_iter()
        .map(CompanySummary::from)
        .collect();
    Json(ApiResponse::ok(companies))
}

/// GET / - Serve index.html
async fn serve_index() -> impl IntoResponse {
    Html(include_str!("../web/index.html"))
}

// ============================================================================
// Router
// ============================================================================

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/companies", get(list_companies))
        .route("/companies/:id", get(get_company))
        .route("/companies/:id/intro", get(get_intro))
        .route("/tags", get(get_tags))
        .route("/stages", get(get_stages))
        .route("/featured", get(get_featured))
        .route("/recent", get(get_recent))
        .with_state(state);

    Router::new()
        .route("/", get(serve_index))
        .nest("/api", api_routes)
        .nest_service("/static", ServeDir::new("web"))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
