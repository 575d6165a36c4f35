use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;

use shopfront_catalog::{assemble_page, CatalogPage};

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct CatalogQuery {
    pub page: Option<usize>,
}

/// `GET /api/v1/catalog?page=N` — one page of render-ready product cards.
///
/// A content-store transport failure degrades to an empty listing: the
/// failure is logged and the caller sees a normal, empty page. The
/// requested page is clamped by the paginator, so any query value is safe.
pub(super) async fn list_catalog(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<CatalogQuery>,
) -> Json<ApiResponse<CatalogPage>> {
    let records = match state.content.fetch_list().await {
        Ok(records) => records,
        Err(e) => {
            tracing::error!(error = %e, "listing fetch failed; degrading to empty listing");
            Vec::new()
        }
    };

    let page = assemble_page(records, query.page.unwrap_or(1), state.page_size);

    Json(ApiResponse {
        data: page,
        meta: ResponseMeta::new(req_id.0),
    })
}
