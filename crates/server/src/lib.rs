use std::sync::Arc;

use services::services::shell::AppShell;

pub mod error;
pub mod routes;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    shell: Arc<AppShell>,
}

impl AppState {
    pub fn new(shell: AppShell) -> Self {
        Self {
            shell: Arc::new(shell),
        }
    }

    pub fn shell(&self) -> &AppShell {
        &self.shell
    }
}
