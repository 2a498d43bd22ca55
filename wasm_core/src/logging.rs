// Tracing setup: browser console under wasm, env-filtered stderr natively.
use std::sync::Once;

static INIT: Once = Once::new();

/// Installs the global tracing subscriber once; later calls are no-ops.
pub fn init() {
    INIT.call_once(install);
}

#[cfg(target_arch = "wasm32")]
fn install() {
    tracing_wasm::set_as_global_default();
}

#[cfg(not(target_arch = "wasm32"))]
fn install() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // Another subscriber may already be installed by the embedding binary.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
        tracing::debug!("logging initialised twice without panicking");
    }
}
