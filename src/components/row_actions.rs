//! Row Actions Component
//!
//! Edit and delete buttons at the end of a table row.

use leptos::prelude::*;

use crate::logging::RowAction;

/// Edit/delete button pair
///
/// # Arguments
/// * `on_action` - Callback receiving which button was clicked
#[component]
pub fn RowActions(#[prop(into)] on_action: Callback<RowAction>) -> impl IntoView {
    view! {
        <div class="row-actions">
            <button
                class="row-action edit"
                title="Edit"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_action.run(RowAction::Edit);
                }
            >
                "✎"
            </button>
            <button
                class="row-action delete"
                title="Delete"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_action.run(RowAction::Delete);
                }
            >
                "🗑"
            </button>
        </div>
    }
}
