use axum::{
    extract::{Path, State},
    Extension, Json,
};

use shopfront_catalog::ProductDetail;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

/// `GET /api/v1/catalog/{slug}` — the single-product detail view.
///
/// An unknown slug is a normal outcome and maps to a 404 `not_found`
/// error body (the terminal not-found state). Transport failures are not
/// covered by the listing's degrade-to-empty policy and surface as
/// `internal_error`.
pub(super) async fn get_product(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<ProductDetail>>, ApiError> {
    let record = state.content.fetch_one(&slug).await.map_err(|e| {
        tracing::error!(error = %e, slug, "detail fetch failed");
        ApiError::new(req_id.0.clone(), "internal_error", "content store query failed")
    })?;

    match ProductDetail::from_fetch(record) {
        ProductDetail::NotFound => Err(ApiError::new(
            req_id.0,
            "not_found",
            format!("no product with slug \"{slug}\""),
        )),
        detail => Ok(Json(ApiResponse {
            data: detail,
            meta: ResponseMeta::new(req_id.0),
        })),
    }
}
