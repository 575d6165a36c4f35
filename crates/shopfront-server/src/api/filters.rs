use axum::{extract::State, Extension, Json};

use shopfront_core::StorefrontFile;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

/// `GET /api/v1/filters` — the static option sets the filter panel renders.
///
/// Presentation chrome only: these options are not applied to the catalog
/// data anywhere.
pub(super) async fn get_filters(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<StorefrontFile>> {
    Json(ApiResponse {
        data: (*state.storefront).clone(),
        meta: ResponseMeta::new(req_id.0),
    })
}
