//! Contract Form Component
//!
//! Uncontrolled add-contract form in three sections. Nothing is read back
//! from the inputs and submitting saves nothing.

use leptos::prelude::*;
use propmanager_domain::sample::contract_property_options;
use propmanager_domain::{Currency, PaymentFrequency, TenantKind, COUNTIES};

use crate::store::{close_contract_form, ContractStore};

/// Labelled input slot; `required` adds the asterisk marker
#[component]
fn FormField(
    #[prop(into)] label: String,
    #[prop(optional)] required: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label>{label}{required.then_some(" *")}</label>
            {children()}
        </div>
    }
}

#[component]
fn FormSection(
    #[prop(into)] title: String,
    #[prop(into)] icon: String,
    #[prop(into)] columns: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="form-section">
            <h3><span class="section-icon">{icon}</span>{title}</h3>
            <div class=format!("form-grid {}", columns)>{children()}</div>
        </section>
    }
}

#[component]
pub fn ContractForm(store: ContractStore) -> impl IntoView {
    let tenant_code_label = TenantKind::ALL
        .iter()
        .map(|kind| kind.code_label())
        .collect::<Vec<_>>()
        .join(" / ");

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        log::debug!("[CONTRACT] Form submitted; nothing is saved");
    };

    view! {
        <div class="card">
            <h2>"New Contract"</h2>

            <form class="contract-form" on:submit=on_submit>
                <FormSection title="Contract Details" icon="📄" columns="cols-3">
                    <FormField label="Property" required=true>
                        <select class="select-field">
                            <option value="">"Select property"</option>
                            {contract_property_options().into_iter().map(|(value, label)| view! {
                                <option value=value.to_string()>{label}</option>
                            }).collect_view()}
                        </select>
                    </FormField>
                    <FormField label="Contract No.">
                        <input type="text" class="input-field" placeholder="e.g. C-2026-001" />
                    </FormField>
                    <FormField label="Document Link">
                        <input type="url" class="input-field" placeholder="https://..." />
                    </FormField>
                </FormSection>

                <FormSection title="Tenant Details" icon="👤" columns="cols-2">
                    <FormField label="Tenant Type" required=true>
                        <select class="select-field">
                            {TenantKind::ALL.iter().map(|kind| view! {
                                <option value=kind.as_str()>{kind.label()}</option>
                            }).collect_view()}
                        </select>
                    </FormField>
                    <FormField label="Full Name / Company Name" required=true>
                        <input type="text" class="input-field" placeholder="e.g. Popescu Ion" />
                    </FormField>
                    <FormField label=tenant_code_label required=true>
                        <input type="text" class="input-field" placeholder="13 digits for individuals, 2-10 for companies" />
                    </FormField>
                    <FormField label="Phone" required=true>
                        <input type="tel" class="input-field" placeholder="e.g. 0722123456" />
                    </FormField>
                    <FormField label="Email">
                        <input type="email" class="input-field" placeholder="email@example.com" />
                    </FormField>
                    <FormField label="Address" required=true>
                        <input type="text" class="input-field" placeholder="Full address" />
                    </FormField>
                    <FormField label="County">
                        <select class="select-field">
                            <option value="">"Select county"</option>
                            {COUNTIES.iter().map(|county| view! {
                                <option value=*county>{*county}</option>
                            }).collect_view()}
                        </select>
                    </FormField>
                </FormSection>

                <FormSection title="Financials & Period" icon="💰" columns="cols-3">
                    <FormField label="Rent" required=true>
                        <input type="number" class="input-field" placeholder="0.00" step="0.01" />
                    </FormField>
                    <FormField label="Currency" required=true>
                        <select class="select-field">
                            {Currency::ALL.iter().map(|currency| view! {
                                <option value=currency.code()>{currency.code()}</option>
                            }).collect_view()}
                        </select>
                    </FormField>
                    <FormField label="Payment Frequency" required=true>
                        <select class="select-field">
                            {PaymentFrequency::ALL.iter().map(|frequency| view! {
                                <option value=frequency.as_str()>{frequency.label()}</option>
                            }).collect_view()}
                        </select>
                    </FormField>
                    <FormField label="Start Date" required=true>
                        <input type="date" class="input-field" />
                    </FormField>
                    <FormField label="End Date">
                        <input type="date" class="input-field" />
                    </FormField>
                    <FormField label="Rooms">
                        <input type="number" class="input-field" placeholder="0 = whole property" min="0" />
                    </FormField>
                </FormSection>

                <div class="form-actions">
                    <button type="button" class="btn-secondary" on:click=move |_| close_contract_form(&store)>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn-primary">"Save Contract"</button>
                </div>
            </form>
        </div>
    }
}
