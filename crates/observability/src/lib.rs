//! Tracing and logging (shared setup).

/// Subscriber configuration (filters, output format).
pub mod subscriber;

pub use subscriber::LogFormat;

/// Initialize process-wide logging with the format picked from the
/// environment (`APOTHECARY_LOG_FORMAT`, JSON by default).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    subscriber::init(LogFormat::from_env());
}
