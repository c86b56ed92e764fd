use twotable_core::counter::CounterStore;
use twotable_core::TwoTableError;

/// `window.localStorage`, when the browser grants it.
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalCounterStore;

impl CounterStore for LocalCounterStore {
    fn load(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), TwoTableError> {
        let storage = local_storage()
            .ok_or_else(|| TwoTableError::Storage("local storage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| TwoTableError::Storage(format!("{:?}", e)))
    }
}

pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
