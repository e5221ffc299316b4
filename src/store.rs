//! View State Stores
//!
//! Each view owns one store, created at mount time from its own sample data.
//! Uses Leptos reactive_stores so the form flag and the collection are
//! tracked separately.

use leptos::prelude::*;
use propmanager_domain::sample::{sample_contracts, sample_properties};
use propmanager_domain::{Contract, Property};
use reactive_stores::Store;

/// Property view state
#[derive(Clone, Debug, Default, Store)]
pub struct PropertyBoard {
    pub properties: Vec<Property>,
    /// Set by the "Add New Property" button; no form is rendered for it yet
    pub show_add_form: bool,
}

impl PropertyBoard {
    pub fn new() -> Self {
        Self {
            properties: sample_properties(),
            show_add_form: false,
        }
    }
}

/// Contract view state
#[derive(Clone, Debug, Default, Store)]
pub struct ContractBoard {
    pub contracts: Vec<Contract>,
    pub show_add_form: bool,
}

impl ContractBoard {
    pub fn new() -> Self {
        Self {
            contracts: sample_contracts(),
            show_add_form: false,
        }
    }
}

pub type PropertyStore = Store<PropertyBoard>;
pub type ContractStore = Store<ContractBoard>;

// ========================
// Store Helper Functions
// ========================

/// Request the add-property form
pub fn open_property_form(store: &PropertyStore) {
    store.show_add_form().set(true);
}

/// Flip the add-contract form between shown and hidden
pub fn toggle_contract_form(store: &ContractStore) {
    store.show_add_form().update(|open| *open = !*open);
}

/// Hide the add-contract form
pub fn close_contract_form(store: &ContractStore) {
    store.show_add_form().set(false);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boards_start_closed() {
        assert!(!PropertyBoard::new().show_add_form);
        assert!(!ContractBoard::new().show_add_form);
        assert_eq!(PropertyBoard::new().properties.len(), 3);
        assert_eq!(ContractBoard::new().contracts.len(), 2);
    }

    #[test]
    fn test_toggle_contract_form_keeps_contracts() {
        let store = Store::new(ContractBoard::new());
        let before = store.contracts().get_untracked();

        toggle_contract_form(&store);
        assert!(store.show_add_form().get_untracked());
        assert_eq!(store.contracts().get_untracked(), before);

        toggle_contract_form(&store);
        assert!(!store.show_add_form().get_untracked());
        assert_eq!(store.contracts().get_untracked(), before);
    }

    #[test]
    fn test_cancel_hides_contract_form() {
        let store = Store::new(ContractBoard::new());
        toggle_contract_form(&store);
        close_contract_form(&store);
        assert!(!store.show_add_form().get_untracked());
        close_contract_form(&store);
        assert!(!store.show_add_form().get_untracked());
    }

    #[test]
    fn test_open_property_form_keeps_properties() {
        let store = Store::new(PropertyBoard::new());
        open_property_form(&store);
        assert!(store.show_add_form().get_untracked());
        assert_eq!(store.properties().get_untracked(), sample_properties());
    }
}
