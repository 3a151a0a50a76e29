use std::path::PathBuf;

use directories::ProjectDirs;

/// Environment variable overriding where local data lives.
pub const ASSET_DIR_ENV: &str = "TAMALE_ASSET_DIR";

/// Directory holding the local database and `config.json`.
///
/// Debug builds keep their data next to the workspace so development runs
/// never touch the real per-user data directory.
pub fn asset_dir() -> PathBuf {
    let path = if let Some(dir) = std::env::var_os(ASSET_DIR_ENV) {
        PathBuf::from(dir)
    } else if cfg!(debug_assertions) {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../dev_assets")
    } else {
        ProjectDirs::from("app", "tamaletrack", "tamale-track")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".tamale-track"))
    };

    if !path.exists() {
        if let Err(e) = std::fs::create_dir_all(&path) {
            tracing::warn!(path = %path.display(), error = %e, "Failed to create asset directory");
        }
    }

    path
}

pub fn config_path() -> PathBuf {
    asset_dir().join("config.json")
}

pub fn database_path() -> PathBuf {
    asset_dir().join("db.sqlite")
}
