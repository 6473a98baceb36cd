//! Submodule that implements [`EventStorage`].
//!

use super::{IdMap, NoOpHasherState};
use crate::gamecore::events::{Event, EventId};
use std::any::Any;

/// In `event_storage`, [`DynVec`] represents type-erased `Vec<E>`.
///
#[derive(Debug)]
struct DynVec {
    /// Type-erased vec.
    ///
    vec: Box<dyn Any>,
}
impl DynVec {
    /// Creates new [`DynVec`] that will represent type-erased `Vec<E>`.
    ///
    fn new<E: Event>() -> DynVec {
        DynVec {
            vec: Box::new(Vec::<E>::new()),
        }
    }

    /// Downcasts [`DynVec`] to vector.
    ///
    fn downcast<E: Event>(self) -> Option<Vec<E>> {
        self.vec.downcast::<Vec<E>>().ok().map(|vec| *vec)
    }
    /// Downcasts [`DynVec`] reference to `&Vec<E>`.
    ///
    fn downcast_ref<E: Event>(&self) -> Option<&Vec<E>> {
        self.vec.downcast_ref::<Vec<E>>()
    }
    /// Downcasts [`DynVec`] mutable reference to `&mut Vec<E>`.
    ///
    fn downcast_mut<E: Event>(&mut self) -> Option<&mut Vec<E>> {
        self.vec.downcast_mut::<Vec<E>>()
    }
}

/// [`EventStorage`] struct provides API for a storage of [`Event`]s.
///
/// Events of one type are kept in the order in which they were inserted.
/// Every vector in the storage is keyed by [`EventId`] of its element type,
/// so downcasts can only fail if that invariant is broken.
///
#[derive(Debug, Default)]
pub struct EventStorage {
    /// Map that stores events.
    ///
    events: IdMap<EventId, DynVec>,
}
impl EventStorage {
    /// Initializes new [`EventStorage`].
    ///
    /// Created [`EventStorage`] will not allocate until first insertions.
    ///
    /// # Example
    /// ```rust
    /// # use ggui::gamecore::storages::EventStorage;
    /// let storage: EventStorage = EventStorage::new();
    /// ```
    ///
    pub fn new() -> Self {
        EventStorage {
            events: IdMap::with_hasher(NoOpHasherState),
        }
    }

    /// Clears storage, removing all data. Keeps the allocated memory.
    ///
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
// events
impl EventStorage {
    /// Inserts a new event with the given value.
    ///
    /// Since events of the same type could be inserted multiple times,
    /// this function just pushes new one in the internal vector.
    ///
    /// # Example
    /// ```rust
    /// # use ggui::gamecore::storages::EventStorage;
    /// # use ggui::gamecore::events::Event;
    /// struct CommandExecuted {
    ///     name: String,
    /// }
    /// impl Event for CommandExecuted {}
    ///
    /// let mut storage: EventStorage = EventStorage::new();
    /// storage.insert(CommandExecuted { name: String::from("help") });
    /// storage.insert(CommandExecuted { name: String::from("clear") });
    /// ```
    ///
    pub fn insert<E: Event>(&mut self, event: E) {
        if let Some(events) = self
            .events
            .entry(EventId::of::<E>())
            .or_insert_with(DynVec::new::<E>)
            .downcast_mut::<E>()
        {
            events.push(event);
        }
    }

    /// Removes all events of a given type and returns them if present.
    /// Otherwise, returns `None`.
    ///
    /// # Note
    /// This function behaviour is consistent with `EventStorage::contains`;
    /// it returns `None` even if the vector is present but is empty.
    /// Thus, `EventStorage::remove` never returns an empty vector.
    ///
    /// # Example
    /// ```rust
    /// # use ggui::gamecore::storages::EventStorage;
    /// # use ggui::gamecore::events::Event;
    /// #[derive(Copy, Clone, Debug, PartialEq)]
    /// struct ConsoleToggled(bool);
    /// impl Event for ConsoleToggled {}
    ///
    /// let mut storage: EventStorage = EventStorage::new();
    /// storage.insert(ConsoleToggled(true));
    /// storage.insert(ConsoleToggled(false));
    ///
    /// assert_eq!(
    ///     storage.remove::<ConsoleToggled>(),
    ///     Some(vec![ConsoleToggled(true), ConsoleToggled(false)])
    /// );
    /// assert!(storage.remove::<ConsoleToggled>().is_none());
    /// ```
    ///
    pub fn remove<E: Event>(&mut self) -> Option<Vec<E>> {
        self.events
            .remove(&EventId::of::<E>())
            .and_then(DynVec::downcast::<E>)
            .filter(|events| !events.is_empty())
    }

    /// Returns whether any event of given type is present or not.
    /// That means that if the event was at the storage and then was removed,
    /// this method won't count it as present.
    ///
    pub fn contains<E: Event>(&self) -> bool {
        self.events::<E>().is_some()
    }

    /// Returns a reference to all events of given type that are currently in the storage if present.
    /// Otherwise, returns `None`.
    ///
    /// # Note
    /// This function behaviour is consistent with `EventStorage::contains`;
    /// it returns `None` even if the vector is present but is empty.
    ///
    pub fn events<E: Event>(&self) -> Option<&Vec<E>> {
        self.events
            .get(&EventId::of::<E>())
            .and_then(DynVec::downcast_ref::<E>)
            .filter(|events| !events.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::EventStorage;
    use crate::gamecore::events::{Event, EventSink, NamedEvent};

    #[derive(Copy, Clone, Debug, PartialEq)]
    struct Counter(u32);
    impl Event for Counter {}

    #[test]
    fn event_storage() {
        let mut storage: EventStorage = EventStorage::new();
        assert!(!storage.contains::<Counter>());

        storage.insert(Counter(1));
        storage.insert(Counter(2));
        storage.fire_event("OpenInventory");

        assert_eq!(storage.events::<Counter>(), Some(&vec![Counter(1), Counter(2)]));
        assert!(storage.contains::<NamedEvent>());

        assert_eq!(
            storage.remove::<NamedEvent>(),
            Some(vec![NamedEvent {
                name: String::from("OpenInventory")
            }])
        );
        assert!(!storage.contains::<NamedEvent>());
        assert!(storage.contains::<Counter>());

        storage.clear();
        assert!(storage.remove::<Counter>().is_none());
    }
}
