#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Install a JSON tracing subscriber writing to `romajify-trace.jsonl` in
/// `log_dir`. Only the first call has an effect.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    INIT.call_once(|| {
        // Blocking writer, so nothing is left buffered at exit.
        let file_appender = tracing_appender::rolling::never(log_dir, "romajify-trace.jsonl");

        tracing_subscriber::fmt()
            .json()
            .with_writer(file_appender)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("romajify=debug,romajify_core=debug")
                }),
            )
            .init();
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}
