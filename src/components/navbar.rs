//! Navbar Component
//!
//! Fixed top bar with the brand and one tab per view.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::router::ActiveView;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <h1 class="navbar-brand">"PropManager"</h1>

                <div class="navbar-menu">
                    {ActiveView::ALL.iter().map(|&tab| {
                        let is_active = move || ctx.active_view.get() == tab;
                        view! {
                            <button
                                class=move || if is_active() { "nav-tab active" } else { "nav-tab" }
                                on:click=move |_| ctx.navigate(tab)
                            >
                                <span class="nav-icon">{tab.icon()}</span>
                                <span>{tab.label()}</span>
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>
        </nav>
    }
}
