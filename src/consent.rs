#[cfg(test)]
use std::cell::RefCell;

use thiserror::Error;
use web_sys::Storage;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentChoice {
    Accepted,
    Dismissed,
}

impl ConsentChoice {
    pub fn as_str(self) -> &'static str {
        match self {
            ConsentChoice::Accepted => "accepted",
            ConsentChoice::Dismissed => "dismissed",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("local storage access failed: {0}")]
    Access(String),
}

pub trait ConsentStore {
    fn read(&self) -> Result<Option<String>, StorageError>;
    fn write(&self, value: &str) -> Result<(), StorageError>;
}

/// Browser local storage. Private browsing modes and locked-down embeds can
/// refuse access entirely, which surfaces as `StorageError`.
pub struct LocalStorageConsent;

impl LocalStorageConsent {
    fn storage() -> Result<Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window
            .local_storage()
            .map_err(|e| StorageError::Access(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl ConsentStore for LocalStorageConsent {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(config::CONSENT_STORAGE_KEY)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }

    fn write(&self, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(config::CONSENT_STORAGE_KEY, value)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct MemoryConsent {
    value: RefCell<Option<String>>,
}

#[cfg(test)]
impl ConsentStore for MemoryConsent {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.value.borrow().clone())
    }

    fn write(&self, value: &str) -> Result<(), StorageError> {
        *self.value.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}

pub fn should_show_banner(store: &dyn ConsentStore) -> bool {
    match store.read() {
        Ok(Some(value)) => value.is_empty(),
        Ok(None) => true,
        Err(e) => {
            log::debug!("Could not read cookie consent: {}", e);
            true
        }
    }
}

/// Failing to persist only means the banner comes back next visit.
pub fn record_consent(store: &dyn ConsentStore, choice: ConsentChoice) {
    if let Err(e) = store.write(choice.as_str()) {
        log::warn!("Could not store cookie consent: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct BrokenStore {
        reads: Cell<usize>,
    }

    impl ConsentStore for BrokenStore {
        fn read(&self) -> Result<Option<String>, StorageError> {
            self.reads.set(self.reads.get() + 1);
            Err(StorageError::Access("SecurityError".to_string()))
        }

        fn write(&self, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Access("SecurityError".to_string()))
        }
    }

    #[test]
    fn banner_shows_without_entry_and_hides_after_accept() {
        let store = MemoryConsent::default();
        assert!(should_show_banner(&store));

        record_consent(&store, ConsentChoice::Accepted);
        assert_eq!(store.read(), Ok(Some("accepted".to_string())));
        assert!(!should_show_banner(&store));
    }

    #[test]
    fn dismiss_also_suppresses_banner() {
        let store = MemoryConsent::default();
        record_consent(&store, ConsentChoice::Dismissed);
        assert_eq!(store.read(), Ok(Some("dismissed".to_string())));
        assert!(!should_show_banner(&store));
    }

    #[test]
    fn throwing_storage_still_shows_banner_once() {
        let store = BrokenStore { reads: Cell::new(0) };
        assert!(should_show_banner(&store));
        record_consent(&store, ConsentChoice::Accepted);
        assert_eq!(store.reads.get(), 1);
    }
}
