//! Debug check that a chain walk is never re-entered.
//!
//! `put`, `get` and `unlink` walk one chain holding copies of arena keys: the
//! cursor, plus the remembered tail (`put`) or predecessor (`unlink`). Each
//! step calls the user's `K: Eq`, and `bucket_of` calls `K: Hash`. If that
//! code reached back into the same map and removed or appended an entry, the
//! outer walk would resume from a key that no longer names the node it
//! remembered, and could link a new entry behind a freed slot or skip part of
//! the chain. Debug builds turn that into a panic at the nested call. Release
//! builds carry only the marker that keeps the map `!Send`/`!Sync`.

#[cfg(debug_assertions)]
use core::cell::Cell;
use core::marker::PhantomData;

/// Busy flag embedded in `ChainedHashMap`; one per map.
#[derive(Debug, Default)]
pub(crate) struct WalkFlag {
    #[cfg(debug_assertions)]
    walking: Cell<bool>,
    _single_threaded: PhantomData<*mut ()>,
}

impl WalkFlag {
    pub(crate) const fn new() -> Self {
        Self {
            #[cfg(debug_assertions)]
            walking: Cell::new(false),
            _single_threaded: PhantomData,
        }
    }

    /// Start a chain walk. The flag clears when the returned guard drops.
    #[inline]
    pub(crate) fn begin(&self) -> WalkGuard<'_> {
        #[cfg(debug_assertions)]
        {
            let nested = self.walking.replace(true);
            assert!(
                !nested,
                "map re-entered from a key's Hash/Eq while walking a chain"
            );
            return WalkGuard { flag: self };
        }

        #[cfg(not(debug_assertions))]
        {
            return WalkGuard { _flag: PhantomData };
        }
    }
}

pub(crate) struct WalkGuard<'a> {
    #[cfg(debug_assertions)]
    flag: &'a WalkFlag,
    #[cfg(not(debug_assertions))]
    _flag: PhantomData<&'a WalkFlag>,
}

impl Drop for WalkGuard<'_> {
    fn drop(&mut self) {
        #[cfg(debug_assertions)]
        self.flag.walking.set(false);
    }
}
