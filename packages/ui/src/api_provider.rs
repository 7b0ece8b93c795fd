//! API client context for the app.

use api::{ApiClient, ApiConfig};
use dioxus::prelude::*;

/// Shared handle to the registration API client.
///
/// `client` is `None` when the deployment is missing its base URL. In that
/// case controllers must refuse to issue requests (and say so) instead of
/// firing at a malformed address.
#[derive(Clone, Default)]
pub struct ApiContext {
    client: Option<ApiClient>,
}

impl ApiContext {
    pub fn client(&self) -> Option<ApiClient> {
        self.client.clone()
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }
}

/// Get the current API context.
pub fn use_api() -> Signal<ApiContext> {
    use_context::<Signal<ApiContext>>()
}

/// Provider component that builds the API client once at mount.
/// Wrap your app with this component before any view that talks to the API.
#[component]
pub fn ApiProvider(children: Element) -> Element {
    let context = use_signal(|| match ApiConfig::from_env() {
        Ok(config) => ApiContext {
            client: Some(ApiClient::new(config)),
        },
        Err(err) => {
            tracing::error!("registration API unavailable: {err}");
            ApiContext::default()
        }
    });

    use_context_provider(|| context);

    rsx! {
        {children}
    }
}
