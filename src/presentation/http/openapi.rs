// src/presentation/http/openapi.rs
use axum::{
    Router,
    body::Bytes,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path, sync::OnceLock};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::{Config, SwaggerUi};

const OPENAPI_CONTENT_TYPE_JSON: &str = "application/json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::discovery::search_profiles,
        crate::presentation::http::controllers::passions::list_passions,
        crate::presentation::http::controllers::saved_searches::list_saved_searches,
        crate::presentation::http::controllers::saved_searches::create_saved_search,
        crate::presentation::http::controllers::saved_searches::delete_saved_search,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::discovery::SearchPageResponse,
            crate::presentation::http::controllers::saved_searches::CreateSavedSearchRequest,
            crate::application::dto::ResultCard,
            crate::application::dto::PublicCard,
            crate::application::dto::PrivateCard,
            crate::application::dto::PassionDto,
            crate::application::dto::SavedSearchDto,
            crate::domain::search::FilterCriteria,
            crate::domain::profile::Gender
        )
    ),
    tags(
        (name = "Discovery", description = "Profile search"),
        (name = "Passions", description = "Passion catalog"),
        (name = "Saved searches", description = "Named filter snapshots of the signed-in user"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Skillogue Discovery API",
        description = "Profile discovery, saved searches and the passion catalog",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("JWT".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if !urls.iter().any(|url| url == "http://localhost:8080") {
            urls.push("http://localhost:8080".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

struct OpenApiDocument {
    bytes: Bytes,
    etag: String,
}

/// Serialized document and its strong ETag, computed once per process.
fn openapi_document() -> &'static OpenApiDocument {
    static DOCUMENT: OnceLock<OpenApiDocument> = OnceLock::new();

    DOCUMENT.get_or_init(|| {
        let bytes = serde_json::to_vec(&ApiDoc::openapi()).unwrap_or_else(|err| {
            tracing::error!(error = %err, "failed to serialize OpenAPI document");
            b"{}".to_vec()
        });
        let etag = format!("\"{:x}\"", Sha256::digest(&bytes));
        OpenApiDocument {
            bytes: Bytes::from(bytes),
            etag,
        }
    })
}

pub fn openapi_etag() -> &'static str {
    &openapi_document().etag
}

/// `If-None-Match` may list several tags, weak ones included, or `*`.
fn inm_matches(headers: &HeaderMap, etag: &str) -> bool {
    headers
        .get_all(header::IF_NONE_MATCH)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .any(|candidate| {
            candidate == "*" || candidate.strip_prefix("W/").unwrap_or(candidate) == etag
        })
}

/// GET /openapi.json. Answers `304 Not Modified` when the client already
/// holds the current document.
pub async fn serve_openapi(headers: HeaderMap) -> Response {
    let document = openapi_document();

    if inm_matches(&headers, &document.etag) {
        return (
            StatusCode::NOT_MODIFIED,
            [(header::ETAG, document.etag.clone())],
        )
            .into_response();
    }

    (
        StatusCode::OK,
        [
            (header::ETAG, document.etag.clone()),
            (header::CONTENT_TYPE, OPENAPI_CONTENT_TYPE_JSON.to_string()),
        ],
        document.bytes.clone(),
    )
        .into_response()
}

pub fn docs_router() -> Router {
    let swagger = SwaggerUi::new("/docs").config(Config::from("/openapi.json"));
    Router::new()
        .route("/openapi.json", get(serve_openapi))
        .merge(swagger)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let document = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "docs/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &document)?;
    Ok(())
}
