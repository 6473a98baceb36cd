//! `uicore::properties` submodule implements typed key-value storage for widget properties.
//!
//! Every value has one of four types (text, vector, color or float) and is stored as
//! [`PropertyValue`] tagged union. Typed access goes through [`PropertyType`] trait,
//! and reading value with the wrong type is an error, never a conversion.
//!

use crate::{
    mathcore::{vectors::Vector2, Color},
    uicore::widgets::WidgetState,
};
use std::{collections::HashMap, error::Error, fmt};

/// [`PropertyValue`] enum is a value of a single property.
///
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    /// Text value (names, event names, label text).
    ///
    Text(String),
    /// Two-dimensional vector (offsets, sizes, paddings).
    ///
    Vector(Vector2),
    /// Color value.
    ///
    Color(Color),
    /// Floating point value (opacity, border width).
    ///
    Float(f32),
}
impl PropertyValue {
    /// Returns name of the type of value.
    ///
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Text(_) => String::TYPE_NAME,
            PropertyValue::Vector(_) => Vector2::TYPE_NAME,
            PropertyValue::Color(_) => Color::TYPE_NAME,
            PropertyValue::Float(_) => f32::TYPE_NAME,
        }
    }
}

/// [`PropertyType`] trait is implemented on types that can be stored in [`PropertyBag`].
///
pub trait PropertyType: Sized {
    /// Name of the type that is used in error messages.
    ///
    const TYPE_NAME: &'static str;

    /// Wraps value in [`PropertyValue`].
    ///
    fn into_value(self) -> PropertyValue;
    /// Extracts value of this type from [`PropertyValue`].
    ///
    /// Returns `None` if value has another type.
    ///
    fn from_value(value: &PropertyValue) -> Option<Self>;
}
impl PropertyType for String {
    const TYPE_NAME: &'static str = "text";

    fn into_value(self) -> PropertyValue {
        PropertyValue::Text(self)
    }
    fn from_value(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Text(text) => Some(text.clone()),
            _ => None,
        }
    }
}
impl PropertyType for Vector2 {
    const TYPE_NAME: &'static str = "vector";

    fn into_value(self) -> PropertyValue {
        PropertyValue::Vector(self)
    }
    fn from_value(value: &PropertyValue) -> Option<Self> {
        match *value {
            PropertyValue::Vector(vector) => Some(vector),
            _ => None,
        }
    }
}
impl PropertyType for Color {
    const TYPE_NAME: &'static str = "color";

    fn into_value(self) -> PropertyValue {
        PropertyValue::Color(self)
    }
    fn from_value(value: &PropertyValue) -> Option<Self> {
        match *value {
            PropertyValue::Color(color) => Some(color),
            _ => None,
        }
    }
}
impl PropertyType for f32 {
    const TYPE_NAME: &'static str = "float";

    fn into_value(self) -> PropertyValue {
        PropertyValue::Float(self)
    }
    fn from_value(value: &PropertyValue) -> Option<Self> {
        match *value {
            PropertyValue::Float(float) => Some(float),
            _ => None,
        }
    }
}

/// [`PropertyError`] enum lists errors that can occur on property lookup.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropertyError {
    /// Property with given key is not present.
    ///
    NotFound {
        /// Key that was looked up.
        ///
        key: String,
    },
    /// Property is present, but it has another type.
    ///
    MismatchedType {
        /// Key that was looked up.
        ///
        key: String,
        /// Type that was requested.
        ///
        expected: &'static str,
        /// Type of stored value.
        ///
        found: &'static str,
    },
}
impl fmt::Display for PropertyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyError::NotFound { key } => write!(f, "property '{}' was not found", key),
            PropertyError::MismatchedType {
                key,
                expected,
                found,
            } => write!(
                f,
                "property '{}' is {}, but {} was requested",
                key, found, expected
            ),
        }
    }
}
impl Error for PropertyError {}

/// [`PropertyBag`] struct is a typed key-value store.
///
/// # Example
/// ```rust
/// # use ggui::uicore::properties::{PropertyBag, PropertyError};
/// # use ggui::mathcore::Color;
/// let mut bag: PropertyBag = PropertyBag::new();
/// let _ = bag.set("Opacity", 0.5_f32);
/// assert_eq!(bag.get::<f32>("Opacity"), Ok(0.5));
/// assert!(matches!(bag.get::<Color>("Opacity"), Err(PropertyError::MismatchedType { .. })));
/// assert!(matches!(bag.get::<f32>("BorderWidth"), Err(PropertyError::NotFound { .. })));
/// ```
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyBag {
    /// Stored values.
    ///
    values: HashMap<String, PropertyValue>,
}
impl PropertyBag {
    /// Initializes empty [`PropertyBag`].
    ///
    pub fn new() -> Self {
        PropertyBag::default()
    }

    /// Stores value under given key, returning previous value if it was present.
    ///
    /// Value of any type replaces previous value regardless of its type.
    ///
    pub fn set<T: PropertyType>(&mut self, key: impl Into<String>, value: T) -> Option<PropertyValue> {
        self.values.insert(key.into(), value.into_value())
    }
    /// Returns value that is stored under given key.
    ///
    pub fn get<T: PropertyType>(&self, key: &str) -> Result<T, PropertyError> {
        let value: &PropertyValue = self.value(key).ok_or_else(|| PropertyError::NotFound {
            key: key.to_string(),
        })?;
        T::from_value(value).ok_or_else(|| PropertyError::MismatchedType {
            key: key.to_string(),
            expected: T::TYPE_NAME,
            found: value.type_name(),
        })
    }
    /// Returns untyped value that is stored under given key.
    ///
    pub fn value(&self, key: &str) -> Option<&PropertyValue> {
        self.values.get(key)
    }
    /// Removes value that is stored under given key and returns it.
    ///
    pub fn remove(&mut self, key: &str) -> Option<PropertyValue> {
        self.values.remove(key)
    }

    /// Returns whether any value is stored under given key.
    ///
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
    /// Returns number of stored values.
    ///
    pub fn len(&self) -> usize {
        self.values.len()
    }
    /// Returns whether bag is empty.
    ///
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
    /// Returns iterator over keys and values.
    ///
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }
}

/// [`StateProperties`] struct holds one [`PropertyBag`] per widget state and
/// a shared bag for all states.
///
/// Lookup for a state checks the bag of that state first and falls back
/// to the shared bag when key is absent there.
///
/// # Example
/// ```rust
/// # use ggui::uicore::{properties::StateProperties, widgets::WidgetState};
/// # use ggui::mathcore::Color;
/// let mut properties: StateProperties = StateProperties::new();
/// let _ = properties.set("BackgroundColor", Color::LIGHT_GRAY);
/// let _ = properties.set_for_state(WidgetState::Disabled, "BackgroundColor", Color::DARK_GRAY);
///
/// assert_eq!(properties.get::<Color>(WidgetState::Active, "BackgroundColor"), Ok(Color::LIGHT_GRAY));
/// assert_eq!(properties.get::<Color>(WidgetState::Disabled, "BackgroundColor"), Ok(Color::DARK_GRAY));
/// ```
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StateProperties {
    /// Bag that is shared by all states.
    ///
    all_states: PropertyBag,
    /// Bags of [`WidgetState::Active`], [`WidgetState::Disabled`] and [`WidgetState::Hidden`].
    ///
    per_state: [PropertyBag; 3],
}
impl StateProperties {
    /// Initializes [`StateProperties`] with empty bags.
    ///
    pub fn new() -> Self {
        StateProperties::default()
    }

    /// Returns index of the bag of given state.
    ///
    fn index(state: WidgetState) -> usize {
        match state {
            WidgetState::Active => 0,
            WidgetState::Disabled => 1,
            WidgetState::Hidden => 2,
        }
    }

    /// Stores value that is shared by all states.
    ///
    pub fn set<T: PropertyType>(&mut self, key: impl Into<String>, value: T) -> Option<PropertyValue> {
        self.all_states.set(key, value)
    }
    /// Stores value for given state only.
    ///
    pub fn set_for_state<T: PropertyType>(
        &mut self,
        state: WidgetState,
        key: impl Into<String>,
        value: T,
    ) -> Option<PropertyValue> {
        self.per_state[StateProperties::index(state)].set(key, value)
    }
    /// Returns value of given key for given state.
    ///
    /// Value of the state bag shadows value of the shared bag even if their types differ.
    ///
    pub fn get<T: PropertyType>(&self, state: WidgetState, key: &str) -> Result<T, PropertyError> {
        let bag: &PropertyBag = self.for_state(state);
        if bag.contains(key) {
            bag.get(key)
        } else {
            self.all_states.get(key)
        }
    }

    /// Returns bag that is shared by all states.
    ///
    pub fn all_states(&self) -> &PropertyBag {
        &self.all_states
    }
    /// Returns bag of given state.
    ///
    pub fn for_state(&self, state: WidgetState) -> &PropertyBag {
        &self.per_state[StateProperties::index(state)]
    }
}
