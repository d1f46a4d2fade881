use crate::config::ViewerConfig;
use std::sync::Once;

/// Used when neither the config file nor `RUST_LOG` names a filter.
/// Per-call wrapper tracing stays off unless asked for.
const DEFAULT_FILTER: &str = "viewer=info,renderer=warn";

static INIT: Once = Once::new();

/// The config file's `log_filter` wins over `RUST_LOG`.
fn resolve_filter(config_filter: Option<&str>, env_filter: Option<String>) -> String {
    config_filter
        .map(str::to_string)
        .or(env_filter)
        .filter(|filter| !filter.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Installs the global logger for the viewer. Later calls are ignored, so
/// a config reload cannot swap the filter mid-run.
pub fn init_logging(config: &ViewerConfig) {
    let filter = resolve_filter(
        config.log_filter.as_deref(),
        std::env::var("RUST_LOG").ok(),
    );

    INIT.call_once(|| {
        env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(env_logger::WriteStyle::Auto)
            .format_timestamp_millis()
            .init();

        log::debug!("logging initialized with filter {:?}", filter);
    });
}
