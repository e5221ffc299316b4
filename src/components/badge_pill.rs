//! Badge Pill Component

use leptos::prelude::*;
use propmanager_domain::Badge;

#[component]
pub fn BadgePill(badge: Badge) -> impl IntoView {
    view! {
        <span class=badge.style.css_class()>{badge.label}</span>
    }
}
