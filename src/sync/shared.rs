//! Write-once static holder for the default interface selector.

use super::primitives::CriticalSectionCell;
use crate::error::{ConfigError, ConfigResult};

/// ISR-safe, initialize-once holder.
///
/// Typically `T` is a [`DefaultInterfaces`](crate::DefaultInterfaces). The
/// holder starts empty; [`init`](Self::init) stores the value once and every
/// later call is refused, so the process never sees a second selector.
pub struct SharedDefaultInterfaces<T> {
    inner: CriticalSectionCell<Option<T>>,
}

impl<T> SharedDefaultInterfaces<T> {
    /// Create an empty holder (const, suitable for static initialization).
    pub const fn new() -> Self {
        Self {
            inner: CriticalSectionCell::new(None),
        }
    }

    /// Store the selector.
    ///
    /// # Errors
    ///
    /// [`ConfigError::AlreadyInitialized`] if a value is already stored; the
    /// new value is dropped.
    pub fn init(&self, value: T) -> ConfigResult<()> {
        self.inner.with(|slot| {
            if slot.is_some() {
                return Err(ConfigError::AlreadyInitialized);
            }
            *slot = Some(value);
            Ok(())
        })
    }

    /// True once [`init`](Self::init) has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.inner.with(|slot| slot.is_some())
    }

    /// Execute a closure with exclusive access, `None` if not initialized.
    ///
    /// Interrupts are disabled for the duration of the closure.
    #[inline]
    pub fn with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        self.inner.with(|slot| slot.as_mut().map(f))
    }

    /// Like [`with`](Self::with), but `None` also when already borrowed.
    #[inline]
    pub fn try_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        self.inner.try_with(|slot| slot.as_mut().map(f)).flatten()
    }
}

impl<T> Default for SharedDefaultInterfaces<T> {
    fn default() -> Self {
        Self::new()
    }
}
