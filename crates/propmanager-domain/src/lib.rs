//! PropManager Domain Layer
//!
//! Display records for properties, contracts and dashboard stats, the
//! badge classification rules, and the hardcoded sample data the views
//! mount with. Nothing here performs I/O.

mod badge;
mod catalog;
mod contract;
mod entity;
mod format;
mod property;
mod stat;
pub mod sample;

pub use badge::{Badge, BadgeStyle};
pub use catalog::{Currency, PaymentFrequency, TenantKind, COUNTIES};
pub use contract::{Contract, ContractStatus, Tenant};
pub use entity::{find_by_id, DomainError, DomainResult, Entity};
pub use format::{format_period, format_phone, format_rent, join_co_owners};
pub use property::{ownership_badge, Property};
pub use stat::{ChangeDirection, DashboardStat, StatIcon};
