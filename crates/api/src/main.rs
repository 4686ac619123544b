use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let services = Arc::new(stockroom_api::app::services::build_services().await);

    if std::env::var("SEED_SAMPLE_DATA").is_ok() {
        stockroom_infra::seed::seed_sample_products(&*services.store).await?;
    }

    let app = stockroom_api::app::build_app_with(services);

    let addr = std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
