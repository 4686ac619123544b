use std::sync::Arc;

use axum::{
    extract::Extension, http::StatusCode, response::IntoResponse, routing::post, Json, Router,
};

use stockroom_catalog::PriceUpdate;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/updatePrices", post(update_prices))
}

/// Apply a batch of price updates.
///
/// Always responds 200 with the applied count, no matter how many entries
/// referenced unknown ids; only a store-level failure turns into an error
/// response.
pub async fn update_prices(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<Vec<dto::PriceUpdateRequest>>,
) -> axum::response::Response {
    let updates: Vec<PriceUpdate> = body
        .into_iter()
        .map(dto::PriceUpdateRequest::into_update)
        .collect();

    match services.updater.apply(&updates).await {
        Ok(summary) => {
            tracing::info!(
                applied = summary.applied,
                batch = updates.len(),
                "price update batch finished"
            );
            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "message": format!(
                        "Successfully updated prices for {} products.",
                        summary.applied
                    ),
                })),
            )
                .into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}
