//! PropManager App
//!
//! Root component: navbar on top, the selected view below.

use leptos::prelude::*;

use crate::components::Navbar;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::router::ViewOutlet;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let (active_view, set_active_view) = signal(config.start_view());

    // Provide context to all children
    provide_context(AppContext::new((active_view, set_active_view), config));

    view! {
        <div class="app-layout">
            <Navbar />
            <main class="main-content">
                <ViewOutlet active_view=active_view />
            </main>
        </div>
    }
}
