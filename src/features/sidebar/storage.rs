//! Persisted slice of the sidebar state. Serialization is an explicit
//! allow-list: only the pinned flag ever leaves the process, so the hover
//! and mobile flags always start from their defaults after a reload.

#[cfg(target_arch = "wasm32")]
use crate::app_lib::AppError;
use serde::{Deserialize, Serialize};

pub(crate) const STORAGE_KEY: &str = "sobok-admin.sidebar";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct PersistedSidebar {
    #[serde(default = "default_open")]
    pub open: bool,
}

impl Default for PersistedSidebar {
    fn default() -> Self {
        Self { open: true }
    }
}

fn default_open() -> bool {
    true
}

/// Reads the persisted record, falling back to the default on any failure.
pub(crate) fn load() -> PersistedSidebar {
    read_record().unwrap_or_default()
}

/// Best-effort write of the persisted record. Failures are logged and
/// swallowed; UI state must never depend on storage succeeding.
pub(crate) fn store(record: PersistedSidebar) {
    write_record(record);
}

#[cfg(target_arch = "wasm32")]
fn read_record() -> Option<PersistedSidebar> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let raw = storage.get_item(STORAGE_KEY).ok()??;
    match serde_json::from_str(&raw) {
        Ok(record) => Some(record),
        Err(err) => {
            log::warn!("discarding unreadable sidebar record: {err}");
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_record() -> Option<PersistedSidebar> {
    None
}

#[cfg(target_arch = "wasm32")]
fn write_record(record: PersistedSidebar) {
    if let Err(err) = try_write_record(record) {
        log::warn!("{err}");
    }
}

#[cfg(target_arch = "wasm32")]
fn try_write_record(record: PersistedSidebar) -> Result<(), AppError> {
    let storage = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or_else(|| AppError::Storage("localStorage unavailable".into()))?;
    let raw = serde_json::to_string(&record)
        .map_err(|err| AppError::Storage(format!("cannot serialize sidebar state: {err}")))?;
    storage
        .set_item(STORAGE_KEY, &raw)
        .map_err(|_| AppError::Storage(format!("cannot write {STORAGE_KEY}")))
}

#[cfg(not(target_arch = "wasm32"))]
fn write_record(_record: PersistedSidebar) {}

#[cfg(test)]
mod tests {
    use super::PersistedSidebar;

    #[test]
    fn serializes_only_the_pinned_flag() {
        let raw = serde_json::to_string(&PersistedSidebar { open: false }).unwrap();
        assert_eq!(raw, r#"{"open":false}"#);
    }

    #[test]
    fn missing_field_falls_back_to_open() {
        let record: PersistedSidebar = serde_json::from_str("{}").unwrap();
        assert!(record.open);
    }

    #[test]
    fn extra_fields_from_older_records_are_ignored() {
        let raw = r#"{"open":false,"hovered":true,"mobile_open":true}"#;
        let record: PersistedSidebar = serde_json::from_str(raw).unwrap();
        assert!(!record.open);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::{PersistedSidebar, load, store};
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn store_then_load_round_trips_pinned_state() {
        store(PersistedSidebar { open: false });
        assert_eq!(load(), PersistedSidebar { open: false });
        store(PersistedSidebar { open: true });
        assert_eq!(load(), PersistedSidebar { open: true });
    }
}
