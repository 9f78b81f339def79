//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use catalogo_lists::{ClientConfig, HttpListsApi, ListManager};
use catalogo_lists::AuthScheme;

use crate::browser::{self, BrowserDialogs};

/// List manager as wired in the browser
pub type AppManager = ListManager<HttpListsApi<Box<dyn AuthScheme>>, BrowserDialogs>;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload lists from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload lists from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Backend location and auth mode
    config: StoredValue<ClientConfig>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), config: ClientConfig) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            config: StoredValue::new(config),
        }
    }

    /// Trigger a reload of lists
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// A manager bound to the configured backend and auth scheme.
    /// Auth headers are read from storage on every request.
    pub fn manager(&self) -> AppManager {
        let config = self.config.get_value();
        let auth = browser::auth_for(&config);
        let login_url = config.login_url.clone();
        ListManager::new(HttpListsApi::new(config, auth), BrowserDialogs, login_url)
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
