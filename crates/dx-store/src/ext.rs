//! Extension trait for [`StateStore`] with typed convenience methods.

use std::fmt::Display;
use std::str::FromStr;

use crate::StateStore;

/// Typed convenience methods for [`StateStore`].
///
/// Implemented for every store via a blanket impl so that [`StateStore`]
/// stays object-safe and implementors only handle strings.
///
/// # Example
///
/// ```
/// use dx_store::{NullStore, StateStoreExt};
///
/// let store = NullStore;
/// store.set_display("dsnid", &5_u64);
/// assert_eq!(store.get_parsed::<u64>("dsnid"), None);
/// ```
pub trait StateStoreExt: StateStore {
    /// Read a value and parse it.
    ///
    /// Returns `None` when the key is missing or the value does not parse.
    fn get_parsed<T: FromStr>(&self, key: &str) -> Option<T> {
        self.get(key)?.trim().parse().ok()
    }

    /// Store the `Display` form of a value.
    fn set_display<T: Display + ?Sized>(&self, key: &str, value: &T) {
        self.set(key, &value.to_string());
    }
}

impl<S: StateStore + ?Sized> StateStoreExt for S {}
