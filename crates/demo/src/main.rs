//! Prints one message per severity through the installed console formatter.
//!
//! Try `LOG_LEVEL=debug tintlog-demo` or `LOG_LEVEL=error tintlog-demo`.

fn main() -> anyhow::Result<()> {
    tintlog_observability::try_init()?;

    tracing::trace!("trace has no badge and is never printed");
    tracing::debug!(cache_entries = 12, "warming cache");
    tracing::info!("hello");
    log::info!("records from the log crate use the same console");
    tracing::warn!("z");
    tracing::error!(code = 1, "q");

    Ok(())
}
