//! Property View
//!
//! Portfolio table with ownership badges and co-owners.

use leptos::prelude::*;
use propmanager_domain::{join_co_owners, Property};
use reactive_stores::Store;

use crate::components::{BadgePill, RowActions};
use crate::context::use_app_context;
use crate::logging::{log_row_action, RowAction};
use crate::store::{open_property_form, PropertyBoard, PropertyBoardStoreFields, PropertyStore};

/// One table row
#[component]
fn PropertyRow(property: Property, store: PropertyStore) -> impl IntoView {
    let id = property.id;
    let on_action = move |action: RowAction| {
        log_row_action(action, store.properties().read_untracked().as_slice(), id);
    };

    view! {
        <tr class="table-row">
            <td class="cell-strong">{property.name.clone()}</td>
            <td><BadgePill badge=property.ownership_badge() /></td>
            <td class="cell-muted">{join_co_owners(&property.co_owners)}</td>
            <td class="cell-actions"><RowActions on_action=on_action /></td>
        </tr>
    }
}

#[component]
pub fn PropertyView() -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(PropertyBoard::new());

    let on_add = move |_| {
        open_property_form(&store);
        log::info!("[PROPERTY] Add property requested");
    };

    view! {
        <div class="view">
            {ctx.admin_mode().then(|| view! {
                <div class="admin-banner">
                    <span class="admin-banner-icon">"ℹ"</span>
                    <span>"Administrator mode: viewing every property, filter by user to narrow down"</span>
                </div>
            })}

            <div class="view-header">
                <h1>"Property Portfolio"</h1>
                <button class="btn-primary" on:click=on_add>"+ Add New Property"</button>
            </div>

            <div class="card">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Ownership"</th>
                            <th>"Co-owners"</th>
                            <th class="align-right">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || store.properties().get()
                            key=|property| property.id
                            children=move |property| view! { <PropertyRow property=property store=store /> }
                        />
                    </tbody>
                </table>
            </div>

            <Show when=move || store.properties().read().is_empty()>
                <div class="card empty-state">
                    <div class="empty-state-icon">"🏢"</div>
                    <h3>"No properties registered"</h3>
                    <p>"Start by adding your first property"</p>
                    <button class="btn-primary" on:click=on_add>"+ Add New Property"</button>
                </div>
            </Show>
        </div>
    }
}
