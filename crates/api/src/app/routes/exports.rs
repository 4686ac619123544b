use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};

use stockroom_export::ExportFormat;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/downloadProductsJSON", get(download_products_json))
        .route("/downloadProductsCSV", get(download_products_csv))
}

pub async fn download_products_json(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ExportQuery>,
) -> axum::response::Response {
    let page = query.page.unwrap_or(1);

    match services.exporter.export(page, ExportFormat::Json).await {
        Ok(doc) => ([(header::CONTENT_TYPE, doc.content_type)], doc.body).into_response(),
        Err(e) => errors::export_error_to_response(e),
    }
}

pub async fn download_products_csv(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ExportQuery>,
) -> axum::response::Response {
    let page = query.page.unwrap_or(1);

    match services.exporter.export(page, ExportFormat::Csv).await {
        Ok(doc) => ([(header::CONTENT_TYPE, doc.content_type)], doc.body).into_response(),
        Err(e) => errors::export_error_to_response(e),
    }
}
