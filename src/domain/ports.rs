use crate::utils::error::Result;

/// Durable string key-value store holding the saved form values.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    /// Overwrites `key`; each write is atomic for that key.
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
