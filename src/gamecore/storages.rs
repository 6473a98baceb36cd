//! `gamecore::storages` submodule implements collections that
//! are used to store data for `ggui` parts.
//!

use std::{
    collections::HashMap,
    hash::{BuildHasher, Hasher},
};

/// [`NoOpHasher`] struct is a hasher that removes overhead of hashing by directly passing
/// its internals through.
///
/// # Usage
/// Id structs ([`WidgetId`](super::identifiers::WidgetId), [`CommandId`](super::identifiers::CommandId))
/// are either unique counters or already hashes, and `TypeId`s that identify events are hashes too.
/// This hasher allows for those values to be used as keys in collections that require hashing
/// but without overhead of hashing them for the second time.
///
/// **This hasher only passes `usize` and `u64` as a no-op hashing,
/// `write` function should not be used (it's implementation is not suited for usage);
/// use `write_usize` or `write_u64` instead.**
///
#[derive(Copy, Clone, Debug)]
pub struct NoOpHasher(u64);
impl Hasher for NoOpHasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        self.0 = bytes.iter().fold(self.0, |hash, x| {
            hash.rotate_right(8).wrapping_add(u64::from(*x))
        })
    }

    fn write_u64(&mut self, i: u64) {
        self.0 = i;
    }
    fn write_usize(&mut self, i: usize) {
        self.0 = i as u64;
    }
}

/// [`NoOpHasherState`] struct implements `BuildHasher` trait that produces [`NoOpHasher`].
///
/// This should be passed to collections interfaces (e.g. `HashMap::with_hasher(NoOpHasherState))`.
///
#[derive(Copy, Clone, Debug, Default)]
pub struct NoOpHasherState;
impl BuildHasher for NoOpHasherState {
    type Hasher = NoOpHasher;

    fn build_hasher(&self) -> Self::Hasher {
        NoOpHasher(0)
    }
}

/// Type alias for `HashMap<K, V, NoOpHasherState>`.
///
/// [`IdMap`] should be used wherever id structs are keys in a `HashMap`.
///
pub type IdMap<K, V> = HashMap<K, V, NoOpHasherState>;

// submodules and public re-exports
mod event_storage;
pub use event_storage::EventStorage;

#[cfg(test)]
mod tests {
    #[test]
    fn id_map() {
        use super::{IdMap, NoOpHasherState};
        use crate::gamecore::identifiers::{CommandId, WidgetId};

        let mut widgets: IdMap<WidgetId, &str> = IdMap::with_hasher(NoOpHasherState);
        let _ = widgets.insert(WidgetId::new(0), "root");
        let _ = widgets.insert(WidgetId::new(1), "child");
        assert_eq!(widgets.get(&WidgetId::new(1)), Some(&"child"));
        assert_eq!(widgets.len(), 2);

        let mut commands: IdMap<CommandId, u8> = IdMap::with_hasher(NoOpHasherState);
        let _ = commands.insert(CommandId::of("help"), 1);
        assert_eq!(commands.get(&CommandId::of("help")), Some(&1));
        assert!(!commands.contains_key(&CommandId::of("HELP")));
    }
}
