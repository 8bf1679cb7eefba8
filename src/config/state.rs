// Application state module
// Shared, read-only runtime state handed to every connection

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Notify;

use super::types::Config;

/// Application state
pub struct AppState {
    pub config: Config,
    /// Directory holding `.md` posts
    pub posts_dir: PathBuf,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Notified once when the server should stop accepting connections
    pub shutdown_signal: Arc<Notify>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            posts_dir: config.posts_dir().to_path_buf(),
            static_dir: config.static_dir().to_path_buf(),
            shutdown_signal: Arc::new(Notify::new()),
        }
    }
}
