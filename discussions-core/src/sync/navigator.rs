/*
    navigator.rs - Host navigation seam

    The orchestrator emits exactly one navigation target per successful
    save; how the host honors it (router push, window location, a no-op in
    a headless tool) is its own business.
*/

/// Navigation primitive provided by the host UI
pub trait Navigator: Send + Sync {
    /// Navigate to an opaque path
    fn navigate(&self, path: &str);
}

/// Navigator that drops every target; for headless use
#[derive(Debug, Default)]
pub struct NullNavigator;

impl Navigator for NullNavigator {
    fn navigate(&self, _path: &str) {}
}
