//! Dashboard View
//!
//! Static fiscal summary: four tiles, a chart placeholder and the annual
//! tax report section. The report buttons only log.

use leptos::prelude::*;
use propmanager_domain::sample::dashboard_stats;

use crate::components::StatTile;

/// Tax year the report section refers to
const REPORT_YEAR: i32 = 2026;

#[component]
pub fn DashboardView() -> impl IntoView {
    let stats = dashboard_stats();

    view! {
        <div class="view">
            <h1>"Fiscal Dashboard"</h1>

            <div class="stats-grid">
                {stats.into_iter().map(|stat| view! { <StatTile stat=stat /> }).collect_view()}
            </div>

            <div class="card">
                <h2>{format!("Monthly Revenue - {}", REPORT_YEAR)}</h2>
                <div class="chart-placeholder">
                    <div class="chart-placeholder-icon">"📊"</div>
                    <p>"Chart coming soon..."</p>
                </div>
            </div>

            <div class="card">
                <h2>"ANAF D212 Report"</h2>
                <p class="card-text">"Generate the report for the annual ANAF D212 tax return."</p>
                <div class="button-row">
                    <button
                        class="btn-primary"
                        on:click=move |_| log::info!("[REPORT] Generate D212 report for {} requested", REPORT_YEAR)
                    >
                        {format!("📄 Generate {} Report", REPORT_YEAR)}
                    </button>
                    <button
                        class="btn-secondary"
                        on:click=move |_| log::info!("[REPORT] Excel export requested")
                    >
                        "📄 Export Excel"
                    </button>
                </div>
            </div>
        </div>
    }
}
