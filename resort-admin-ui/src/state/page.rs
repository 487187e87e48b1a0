//! Page Handle
//!
//! Page state objects are plain Rust values; a [`PageHandle`] keeps one in a
//! `StoredValue` and bumps a version signal after every mutation so views
//! re-render. Borrows last only for the closure passed in, never across an
//! `.await`.

use leptos::*;

pub struct PageHandle<P: 'static> {
    page: StoredValue<P>,
    version: RwSignal<u64>,
}

impl<P: 'static> Clone for PageHandle<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: 'static> Copy for PageHandle<P> {}

impl<P: 'static> PageHandle<P> {
    pub fn new(page: P) -> Self {
        Self {
            page: store_value(page),
            version: create_rw_signal(0),
        }
    }

    /// Read page state, subscribing the caller to changes
    pub fn read<O>(&self, f: impl FnOnce(&P) -> O) -> O {
        self.version.with(|_| ());
        self.page.with_value(f)
    }

    /// Mutate page state. Returns `None` once the page has been disposed.
    pub fn write<O>(&self, f: impl FnOnce(&mut P) -> O) -> Option<O> {
        let output = self.page.try_update_value(f)?;
        self.version.try_update(|v| *v += 1);
        Some(output)
    }
}
