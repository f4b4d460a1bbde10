//! Poison-tolerant lock helpers.
//!
//! A panicking actor thread poisons whatever mutex it held.  Every critical
//! section in this workspace either completes its update or panics on an
//! `assert!` before touching state, so the protected data is still
//! consistent and other threads may keep locking it.
//!
//! Recovering the lock does not recover a party that never arrives: threads
//! blocked on a barrier or a signal stay blocked until someone closes it.

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

/// Lock `mutex`, ignoring poisoning.
#[inline]
pub fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Block on `cv` while `condition` holds, ignoring poisoning.
#[inline]
pub fn wait_while<'a, T, F>(cv: &Condvar, guard: MutexGuard<'a, T>, condition: F) -> MutexGuard<'a, T>
where
    F: FnMut(&mut T) -> bool,
{
    cv.wait_while(guard, condition)
        .unwrap_or_else(PoisonError::into_inner)
}

/// Block on `cv` once, ignoring poisoning.  Callers re-check their own
/// condition after every return.
#[inline]
pub fn wait<'a, T>(cv: &Condvar, guard: MutexGuard<'a, T>) -> MutexGuard<'a, T> {
    cv.wait(guard).unwrap_or_else(PoisonError::into_inner)
}
