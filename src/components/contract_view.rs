//! Contract View
//!
//! Lease table with expiry badges and the add-contract form toggle.

use leptos::prelude::*;
use propmanager_domain::{format_period, format_phone, format_rent, Contract};
use reactive_stores::Store;

use crate::components::{BadgePill, ContractForm, RowActions};
use crate::logging::{log_row_action, RowAction};
use crate::store::{toggle_contract_form, ContractBoard, ContractBoardStoreFields, ContractStore};

#[component]
fn ContractRow(contract: Contract, store: ContractStore) -> impl IntoView {
    let id = contract.id;
    let on_action = move |action: RowAction| {
        log_row_action(action, store.contracts().read_untracked().as_slice(), id);
    };

    view! {
        <tr class="table-row">
            <td>
                <div class="cell-strong">{contract.tenant.name.clone()}</div>
                <div class="cell-sub" title=contract.tenant.email.clone()>
                    {format_phone(&contract.tenant.phone)}
                </div>
            </td>
            <td>{contract.property.clone()}</td>
            <td class="cell-amount">{format_rent(contract.rent, contract.currency)}</td>
            <td class="cell-muted">
                <span class="cell-icon">"📅"</span>
                {format_period(contract.start_date, contract.end_date)}
            </td>
            <td><BadgePill badge=contract.status.badge() /></td>
            <td class="cell-actions"><RowActions on_action=on_action /></td>
        </tr>
    }
}

#[component]
pub fn ContractView() -> impl IntoView {
    let store = Store::new(ContractBoard::new());

    view! {
        <div class="view">
            <div class="view-header">
                <h1>"Rental Contracts"</h1>
                <button class="btn-primary" on:click=move |_| toggle_contract_form(&store)>
                    "+ Add New Contract"
                </button>
            </div>

            <Show when=move || store.show_add_form().get()>
                <ContractForm store=store />
            </Show>

            <div class="card">
                <h2>"Active Contracts"</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Tenant"</th>
                            <th>"Property"</th>
                            <th>"Rent"</th>
                            <th>"Validity"</th>
                            <th>"Status"</th>
                            <th class="align-right">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || store.contracts().get()
                            key=|contract| contract.id
                            children=move |contract| view! { <ContractRow contract=contract store=store /> }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}
