use crate::AppState;
use crate::api::error::AppError;
use crate::models::{ArchivePage, DEFAULT_PAGE, ItemKind, PageRequest};
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArchiveQuery {
    /// 1-based page number (default: 1)
    #[param(minimum = 1)]
    pub page: Option<i64>,
    /// Items per page, 1 to 100 (default depends on the listing)
    #[param(minimum = 1, maximum = 100)]
    pub page_size: Option<i64>,
}

impl ArchiveQuery {
    pub fn page_request(&self, kind: ItemKind) -> Result<PageRequest, AppError> {
        let page = self.page.unwrap_or(DEFAULT_PAGE);
        let page_size = self.page_size.unwrap_or_else(|| kind.default_page_size());
        Ok(PageRequest::new(page, page_size)?)
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/archives/images",
    params(ArchiveQuery),
    responses(
        (status = 200, description = "Image items, newest first", body = ArchivePage),
        (status = 422, description = "page or page_size out of range"),
        (status = 500, description = "Store failure")
    ),
    tag = "archives"
)]
pub async fn list_images(
    State(state): State<AppState>,
    query: Result<Query<ArchiveQuery>, QueryRejection>,
) -> Result<Json<ArchivePage>, AppError> {
    list_archive(&state, ItemKind::Image, query).await
}

#[utoipa::path(
    get,
    path = "/api/v1/archives/docs",
    params(ArchiveQuery),
    responses(
        (status = 200, description = "Document items, newest first", body = ArchivePage),
        (status = 422, description = "page or page_size out of range"),
        (status = 500, description = "Store failure")
    ),
    tag = "archives"
)]
pub async fn list_documents(
    State(state): State<AppState>,
    query: Result<Query<ArchiveQuery>, QueryRejection>,
) -> Result<Json<ArchivePage>, AppError> {
    list_archive(&state, ItemKind::Document, query).await
}

async fn list_archive(
    state: &AppState,
    kind: ItemKind,
    query: Result<Query<ArchiveQuery>, QueryRejection>,
) -> Result<Json<ArchivePage>, AppError> {
    let Query(query) = query?;
    let page = query.page_request(kind)?;

    let result = state.catalog.list(kind, page).await?;
    Ok(Json(result))
}
