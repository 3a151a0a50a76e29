use axum::{Router, routing::get};
use db::models::{
    batch::Batch, cleaning_log::CleaningLog, order::Order, stock_item::StockItem,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

pub mod health;
pub mod overview;
pub mod records;

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health::health_check))
        .route("/tabs", get(overview::get_tabs))
        .route("/overview", get(overview::get_overview))
        .nest("/batches", records::router::<Batch>())
        .nest("/orders", records::router::<Order>())
        .nest("/stock", records::router::<StockItem>())
        .nest("/cleaning", records::router::<CleaningLog>());

    Router::new()
        .nest("/api", api)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
