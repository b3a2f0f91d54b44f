use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber for a serverless function.
/// - Respects `RUST_LOG` if set, defaults to `info`
/// - Emits JSON lines so the platform log drain can index fields
/// - Writes to stdout, which is what the function log viewer captures
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .json()
        .with_writer(io::stdout)
        .try_init();
}
