//! Console Logging
//!
//! `log` facade routed to the browser console.

use log::LevelFilter;
use propmanager_domain::{find_by_id, Entity};

/// Install the console logger; `Off` installs nothing and later calls are ignored
pub fn init(level: LevelFilter) {
    let Some(level) = level.to_level() else {
        return;
    };
    if console_log::init_with_level(level).is_err() {
        return;
    }
    log::debug!("[LOG] Console logger ready at {}", level);
}

/// Row button kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
}

impl RowAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
        }
    }
}

/// Build the log line for a row button; the collection is never touched
pub fn describe_row_action<T: Entity>(action: RowAction, records: &[T], id: u32) -> Result<String, String> {
    find_by_id(records, id)
        .map(|record| format!("{} {} #{} ({})", action.as_str(), T::KIND, id, record.title()))
        .map_err(|e| format!("{} ignored: {}", action.as_str(), e))
}

/// Write a row button click to the console
pub fn log_row_action<T: Entity>(action: RowAction, records: &[T], id: u32) {
    match describe_row_action(action, records, id) {
        Ok(line) => log::info!("{}", line),
        Err(line) => log::warn!("{}", line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use propmanager_domain::sample::{sample_contracts, sample_properties};

    #[test]
    fn test_describe_edit_property() {
        let properties = sample_properties();
        assert_eq!(
            describe_row_action(RowAction::Edit, &properties, 3),
            Ok("Edit property #3 (Studio București)".to_string())
        );
    }

    #[test]
    fn test_describe_delete_contract() {
        let contracts = sample_contracts();
        assert_eq!(
            describe_row_action(RowAction::Delete, &contracts, 2),
            Ok("Delete contract #2 (Ionescu Maria)".to_string())
        );
        assert_eq!(contracts, sample_contracts());
    }

    #[test]
    fn test_describe_missing_record() {
        let contracts = sample_contracts();
        assert_eq!(
            describe_row_action(RowAction::Delete, &contracts, 9),
            Err("Delete ignored: Not found: contract #9".to_string())
        );
    }
}
