//! Stat Tile Component

use leptos::prelude::*;
use propmanager_domain::DashboardStat;

/// One dashboard summary card
#[component]
pub fn StatTile(stat: DashboardStat) -> impl IntoView {
    let caption = stat.change_caption();

    view! {
        <div class="card stat-tile">
            <div class="stat-body">
                <p class="stat-label">{stat.label}</p>
                <p class="stat-value">{stat.value}</p>
                {caption.map(|text| view! { <p class="stat-change increase">{text}</p> })}
            </div>
            <div class="stat-icon">{stat.icon.glyph()}</div>
        </div>
    }
}
