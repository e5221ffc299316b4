//! View Router
//!
//! In-memory view switching. No URL sync.

use leptos::prelude::*;

use crate::components::{ContractView, DashboardView, PropertyView};

/// The three top-level views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Properties,
    Contracts,
    Dashboard,
}

impl ActiveView {
    /// Navbar order
    pub const ALL: [ActiveView; 3] = [ActiveView::Properties, ActiveView::Contracts, ActiveView::Dashboard];

    pub fn id(&self) -> &'static str {
        match self {
            ActiveView::Properties => "properties",
            ActiveView::Contracts => "contracts",
            ActiveView::Dashboard => "dashboard",
        }
    }

    /// Unrecognized ids fall back to the property view
    pub fn from_id(id: &str) -> Self {
        match id {
            "contracts" => ActiveView::Contracts,
            "dashboard" => ActiveView::Dashboard,
            _ => ActiveView::Properties,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActiveView::Properties => "Properties",
            ActiveView::Contracts => "Contracts",
            ActiveView::Dashboard => "Fiscal Dashboard",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ActiveView::Properties => "🏢",
            ActiveView::Contracts => "📄",
            ActiveView::Dashboard => "📊",
        }
    }
}

/// Renders whichever view is selected
#[component]
pub fn ViewOutlet(active_view: ReadSignal<ActiveView>) -> impl IntoView {
    move || match active_view.get() {
        ActiveView::Properties => view! { <PropertyView /> }.into_any(),
        ActiveView::Contracts => view! { <ContractView /> }.into_any(),
        ActiveView::Dashboard => view! { <DashboardView /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_id_selects_its_view() {
        for view in ActiveView::ALL {
            assert_eq!(ActiveView::from_id(view.id()), view);
        }
    }

    #[test]
    fn test_unknown_id_falls_back_to_properties() {
        assert_eq!(ActiveView::from_id("reports"), ActiveView::Properties);
        assert_eq!(ActiveView::from_id(""), ActiveView::Properties);
        assert_eq!(ActiveView::from_id("Dashboard"), ActiveView::Properties);
    }

    #[test]
    fn test_default_is_properties() {
        assert_eq!(ActiveView::default(), ActiveView::Properties);
    }
}
