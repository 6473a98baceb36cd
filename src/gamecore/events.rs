//! `gamecore::events` submodule defines [`Event`] trait
//! that allows representing game logic flow in form of Rust types,
//! and [`EventSink`] trait through which `ggui` notifies the game about things
//! that happened in the UI.
//!

use std::{
    any::{type_name, Any, TypeId},
    fmt,
};

/// [`Event`] trait defines data that is used by `ggui` parts and the game to communicate.
///
/// [`Event`]s are usually small objects which convey a message that someone is expected to handle.
/// In `ggui` the most common one is [`NamedEvent`] that is fired when a button is clicked.
///
/// # Implementation
/// [`Event`] trait requires `'static` trait bound, because `Any`
/// is a supertrait of [`Event`] trait, and it requires `'static` trait bound.
///
/// Since most types implement `Any`, defining new [`Event`]s could be done like so:
/// ```rust
/// use ggui::gamecore::events::Event;
/// struct T;
/// impl Event for T {}
/// ```
///
pub trait Event: Any {}
impl dyn Event {
    /// Returns true if the inner type is the same as `E`.
    ///
    pub fn is<E: Event>(&self) -> bool {
        let as_any: &dyn Any = self;
        as_any.is::<E>()
    }

    /// Returns some reference to the inner value if it is of type `E`, or `None` if it isn’t.
    ///
    pub fn downcast_ref<E: Event>(&self) -> Option<&E> {
        let as_any: &dyn Any = self;
        as_any.downcast_ref::<E>()
    }
}
impl fmt::Debug for dyn Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", type_name::<Self>())
    }
}
/// [`EventId`] id struct is needed to identify [`Event`]s in [`EventStorage`].
///
/// Storages operate on ids, which allows them to provide more flexible interface.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EventId(TypeId);
impl EventId {
    /// Returns [`EventId`] of given [`Event`] type.
    ///
    pub fn of<E: Event>() -> Self {
        EventId(TypeId::of::<E>())
    }
}

/// [`NamedEvent`] struct is an event that carries nothing but its name.
///
/// Widgets fire [`NamedEvent`] with the name that is stored in their `OnClick` property.
///
/// # Example
/// ```rust
/// # use ggui::gamecore::{events::{EventSink, NamedEvent}, storages::EventStorage};
/// let mut storage: EventStorage = EventStorage::new();
/// storage.fire_event("StartGame");
/// assert_eq!(
///     storage.remove::<NamedEvent>(),
///     Some(vec![NamedEvent { name: String::from("StartGame") }])
/// );
/// ```
///
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NamedEvent {
    /// Name of the event.
    ///
    pub name: String,
}
impl Event for NamedEvent {}

/// [`EventSink`] trait is a fire-and-forget receiver of named events.
///
/// `ggui` never waits for events to be handled - it just pushes them to the sink,
/// and it is the game's job to drain them.
///
pub trait EventSink {
    /// Fires event with given name.
    ///
    fn fire_event(&mut self, name: &str);
}
impl EventSink for EventStorage {
    fn fire_event(&mut self, name: &str) {
        debug!("Event '{}' was fired", name);
        self.insert(NamedEvent {
            name: name.to_string(),
        });
    }
}

// submodules and public re-exports
pub use super::storages::EventStorage;
