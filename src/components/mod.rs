//! UI Components
//!
//! Views and the small pieces they are built from.

mod badge_pill;
mod contract_form;
mod contract_view;
mod dashboard_view;
mod navbar;
mod property_view;
mod row_actions;
mod stat_tile;

pub use badge_pill::BadgePill;
pub use contract_form::ContractForm;
pub use contract_view::ContractView;
pub use dashboard_view::DashboardView;
pub use navbar::Navbar;
pub use property_view::PropertyView;
pub use row_actions::RowActions;
pub use stat_tile::StatTile;
