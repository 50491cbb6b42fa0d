use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Serialize;

use aru365_core::Pillar;
use aru365_resolve::{Page, PillarPage, ResolveError};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct PagePathItem {
    path: String,
    category: String,
    slug: Option<String>,
}

pub(super) async fn list_pillars(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<Pillar>>> {
    Json(ApiResponse {
        data: state.resolver.catalog().pillars().to_vec(),
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn list_page_paths(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<PagePathItem>>> {
    let data = state
        .resolver
        .catalog()
        .page_paths()
        .into_iter()
        .map(|p| PagePathItem {
            path: p.path(),
            category: p.category,
            slug: p.slug,
        })
        .collect();

    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn get_pillar_page(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(category): Path<String>,
) -> Result<Json<ApiResponse<PillarPage>>, ApiError> {
    let page = state
        .resolver
        .resolve_pillar(&category)
        .await
        .map_err(|e| map_resolve_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: page,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn get_page(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path((category, slug)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Page>>, ApiError> {
    let page = state
        .resolver
        .resolve_page(&category, &slug)
        .await
        .map_err(|e| map_resolve_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: page,
        meta: ResponseMeta::new(req_id.0),
    }))
}

fn map_resolve_error(request_id: String, error: &ResolveError) -> ApiError {
    match error {
        ResolveError::NotFound { .. } => {
            tracing::debug!(error = %error, "page not found");
            ApiError::new(request_id, "not_found", error.to_string())
        }
    }
}
