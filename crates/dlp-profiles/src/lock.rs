use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

// A panicking writer cannot leave a profile half-updated: every mutation
// replaces whole fields, so a poisoned lock still guards consistent data.

pub(crate) fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
