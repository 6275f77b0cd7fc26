use once_cell::sync::Lazy;
use tokio::sync::Mutex;

/// Serialises tests that read or write process environment variables.
pub static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
