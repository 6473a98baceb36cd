//! `gamecore::identifiers` submodule provides several id structs that
//! uniquely identify objects and allows easy querying on them.
//!

use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

/// [`impl_id`] macro implements basic id struct interface.
///
/// For most id structs, some kind of uniqueness is required for their sound usage.
/// That uniqueness is not provided by this struct, and that is why `new` associated function is
/// exposed only to crate visibility - it is caller's job to provide soundness.
///
macro_rules! impl_id {
    ($struct:ident) => {
        impl $struct {
            /// Creates new id with given value.
            ///
            pub(crate) fn new(id: u64) -> Self {
                Self(id)
            }

            /// Returns underlying id.
            ///
            pub fn value(&self) -> u64 {
                self.0
            }
        }
        impl Hash for $struct {
            fn hash<H: Hasher>(&self, state: &mut H) {
                state.write_u64(self.0);
            }
        }
    };
}

/// [`WidgetId`] id struct is needed to identify widgets
/// in [`WidgetTree`](crate::uicore::tree::WidgetTree).
///
/// It is assigned by the tree in which widget is registered and is never reused by that tree.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct WidgetId(u64);
impl_id!(WidgetId);

/// [`CommandId`] id struct is needed to identify console commands
/// in [`CommandRegistry`](crate::consolecore::registry::CommandRegistry).
///
/// It is a hash of command name, so the same name always produces the same id.
///
/// # Example
/// ```rust
/// # use ggui::gamecore::identifiers::CommandId;
/// assert_eq!(CommandId::of("help"), CommandId::of("help"));
/// assert_ne!(CommandId::of("help"), CommandId::of("clear"));
/// ```
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CommandId(u64);
impl_id!(CommandId);
impl CommandId {
    /// Returns [`CommandId`] that corresponds to given command name.
    ///
    pub fn of(name: &str) -> Self {
        let mut hasher: DefaultHasher = DefaultHasher::new();
        name.hash(&mut hasher);
        CommandId::new(hasher.finish())
    }
}
