// ============================================================================
// Logging Bootstrap
// Installs a tracing subscriber for binaries and demos
// ============================================================================

use tracing::Level;

/// Install a global `fmt` subscriber capped at `level`.
///
/// Fails if a global subscriber is already set.
pub fn init_logging(level: Level) -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .map_err(|e| format!("Failed to install tracing subscriber: {}", e))
}
