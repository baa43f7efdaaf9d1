use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{Result, ToolError};

const DEFAULT_FILTER: &str = "warn";

/// Installs the global tracing subscriber. Log lines go to standard error so
/// standard output only carries the tool's report; `RUST_LOG` overrides the
/// default level.
pub fn init() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}
