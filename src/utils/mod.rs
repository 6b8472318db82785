// ============================================================================
// Utilities Module
// Ambient helpers that are not part of the arithmetic itself
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_logging;
