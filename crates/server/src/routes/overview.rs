use axum::{extract::State, response::Json as ResponseJson};
use services::services::{overview::Overview, shell::TabInfo};
use utils::response::ApiResponse;

use crate::AppState;

/// GET /api/overview
/// Aggregates are recomputed on every request.
pub async fn get_overview(State(state): State<AppState>) -> ResponseJson<ApiResponse<Overview>> {
    ResponseJson(ApiResponse::success(state.shell().overview().current()))
}

/// GET /api/tabs
pub async fn get_tabs(State(state): State<AppState>) -> ResponseJson<ApiResponse<Vec<TabInfo>>> {
    ResponseJson(ApiResponse::success(state.shell().tabs()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};
    use db::storage::MemoryStorage;
    use services::services::{
        clock::FixedClock,
        config::Config,
        shell::{AppShell, Tab},
    };

    use super::*;

    async fn state(seed: bool) -> AppState {
        let config = Config {
            seed_sample_data: seed,
            ..Config::default()
        };
        let clock = Arc::new(FixedClock(Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()));
        AppState::new(AppShell::open(Arc::new(MemoryStorage::new()), &config, clock).await)
    }

    #[tokio::test]
    async fn test_overview_empty_then_summarized() {
        let ResponseJson(response) = get_overview(State(state(false).await)).await;
        assert!(matches!(response.data(), Some(Overview::Empty { .. })));

        let ResponseJson(response) = get_overview(State(state(true).await)).await;
        let Some(Overview::Summary(summary)) = response.data() else {
            panic!("expected a summary");
        };
        assert_eq!(summary.total_revenue, 102.0);
        assert_eq!(summary.low_stock_count, 0);
        assert_eq!(summary.cleanings_due_soon, 0);
        assert_eq!(summary.repeat_customer_count, 1);
    }

    #[tokio::test]
    async fn test_tabs_list_all_five() {
        let ResponseJson(response) = get_tabs(State(state(false).await)).await;
        let tabs: Vec<Tab> = response.data().unwrap().iter().map(|info| info.tab).collect();
        assert_eq!(
            tabs,
            vec![Tab::Batches, Tab::Orders, Tab::Ingredients, Tab::Cleaning, Tab::Overview]
        );
    }
}
