use thiserror::Error;
use web_sys::Storage;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("no window object")]
    NoWindow,
    #[error("localStorage is unavailable")]
    Unavailable,
    #[error("localStorage {op} failed for key \"{key}\"")]
    Access { op: &'static str, key: String },
}

#[cfg(target_arch = "wasm32")]
pub fn local_storage() -> Result<Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::NoWindow)?
        .local_storage()
        .map_err(|_| StorageError::Unavailable)?
        .ok_or(StorageError::Unavailable)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn local_storage() -> Result<Storage, StorageError> {
    Err(StorageError::NoWindow)
}

pub fn get_item(key: &str) -> Result<Option<String>, StorageError> {
    local_storage()?.get_item(key).map_err(|_| StorageError::Access {
        op: "read",
        key: key.to_string(),
    })
}

pub fn set_item(key: &str, value: &str) -> Result<(), StorageError> {
    local_storage()?
        .set_item(key, value)
        .map_err(|_| StorageError::Access {
            op: "write",
            key: key.to_string(),
        })
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn local_storage_is_unavailable_off_wasm() {
        assert_eq!(local_storage().unwrap_err(), StorageError::NoWindow);
    }

    #[test]
    fn accessors_propagate_the_storage_error() {
        assert_eq!(get_item("theme").unwrap_err(), StorageError::NoWindow);
        assert_eq!(set_item("theme", "dark").unwrap_err(), StorageError::NoWindow);
    }

    #[test]
    fn access_error_names_operation_and_key() {
        let err = StorageError::Access {
            op: "write",
            key: "theme".into(),
        };
        assert_eq!(err.to_string(), "localStorage write failed for key \"theme\"");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn set_then_get_returns_the_value() {
        set_item("storage-test", "dark").unwrap();
        assert_eq!(get_item("storage-test").unwrap().as_deref(), Some("dark"));

        set_item("storage-test", "light").unwrap();
        assert_eq!(get_item("storage-test").unwrap().as_deref(), Some("light"));

        local_storage().unwrap().remove_item("storage-test").unwrap();
        assert_eq!(get_item("storage-test").unwrap(), None);
    }
}
