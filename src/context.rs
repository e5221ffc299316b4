//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::router::ActiveView;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently selected view - read
    pub active_view: ReadSignal<ActiveView>,
    /// Currently selected view - write
    set_active_view: WriteSignal<ActiveView>,
    /// Config loaded at startup
    pub config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(active_view: (ReadSignal<ActiveView>, WriteSignal<ActiveView>), config: AppConfig) -> Self {
        Self {
            active_view: active_view.0,
            set_active_view: active_view.1,
            config: StoredValue::new(config),
        }
    }

    /// Switch the visible view
    pub fn navigate(&self, view: ActiveView) {
        if self.active_view.get_untracked() != view {
            log::debug!("[NAV] {} -> {}", self.active_view.get_untracked().id(), view.id());
        }
        self.set_active_view.set(view);
    }

    pub fn admin_mode(&self) -> bool {
        self.config.with_value(|config| config.admin_mode)
    }
}

/// Get the app context; provided once by `App`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
