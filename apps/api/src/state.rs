use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionStreamer;
use crate::profile::models::ProfileData;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup; never mutated or reloaded.
    pub profile: Arc<ProfileData>,
    /// `None` when no Anthropic key is configured. The chat handler checks
    /// this before doing anything upstream.
    pub llm: Option<Arc<dyn CompletionStreamer>>,
    pub config: Config,
}

#[cfg(test)]
impl AppState {
    /// State over the sample profile with default config.
    pub fn for_tests(llm: Option<Arc<dyn CompletionStreamer>>) -> Self {
        let config = Config::from_lookup(|_| None).expect("default config");
        AppState {
            profile: Arc::new(crate::profile::fixtures::sample_profile_data()),
            llm,
            config,
        }
    }
}
