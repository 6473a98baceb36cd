//! `uicore::widgets` submodule defines [`Widget`] - a single node of the widget tree,
//! its states and the way it is configured from markup.
//!

use crate::{
    gamecore::{events::EventSink, identifiers::WidgetId},
    mathcore::{shapes::Aabb2, vectors::Vector2, Color},
    uicore::{
        layout::LayoutNode,
        properties::{PropertyError, PropertyType, StateProperties},
    },
};
use std::{error::Error, fmt};

/// [`WidgetState`] enum lists states of widget.
///
/// State decides which property bag is used for widget and whether it can be clicked or drawn.
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WidgetState {
    /// Widget is drawn and can be clicked.
    ///
    #[default]
    Active,
    /// Widget is drawn with its disabled look and cannot be clicked.
    ///
    Disabled,
    /// Widget and its subtree are neither drawn nor clicked.
    ///
    Hidden,
}

/// [`WidgetKind`] enum lists kinds of widgets that `ggui` provides.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// Plain rectangular container.
    ///
    Panel,
    /// Container that draws its `Text`.
    ///
    Label,
    /// Clickable container that draws its `Text`.
    ///
    Button,
}

/// [`BuildError`] enum lists errors that can occur during building widgets from markup.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// Attribute is present, but its value could not be parsed.
    ///
    InvalidAttribute {
        /// Name of the attribute.
        ///
        attribute: String,
        /// Value that failed to parse.
        ///
        value: String,
    },
    /// Markup tag does not correspond to any registered widget kind.
    ///
    UnknownWidgetKind {
        /// Tag of the node.
        ///
        tag: String,
    },
}
impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::InvalidAttribute { attribute, value } => {
                write!(f, "attribute '{}' has invalid value '{}'", attribute, value)
            }
            BuildError::UnknownWidgetKind { tag } => write!(f, "unknown widget kind '{}'", tag),
        }
    }
}
impl Error for BuildError {}

/// Parses attribute value or reports which attribute was malformed.
///
fn parse_attribute<T: std::str::FromStr>(attribute: &str, value: &str) -> Result<T, BuildError> {
    value.trim().parse::<T>().map_err(|_| BuildError::InvalidAttribute {
        attribute: attribute.to_string(),
        value: value.to_string(),
    })
}

/// [`Widget`] struct is a single node of the widget tree.
///
/// Widget is created detached, and it becomes a part of the tree when it is added to
/// [`WidgetTree`](crate::uicore::tree::WidgetTree).
/// Tree fills in its parent, children and bounds; everything else is stored in properties.
///
/// # Properties
/// | Key               | Type   | Default          | Disabled state |
/// |-------------------|--------|------------------|----------------|
/// | `Name`            | text   | `Unnamed Widget` |                |
/// | `Offset`          | vector | `(0, 0)`         |                |
/// | `Size`            | vector | `(1, 1)`         |                |
/// | `Padding`         | vector | `(0, 0)`         |                |
/// | `BackgroundColor` | color  | light gray       | dark gray      |
/// | `BorderColor`     | color  | gray             | black          |
/// | `BorderWidth`     | float  | `5`              |                |
/// | `Opacity`         | float  | `1`              |                |
/// | `TextColor`       | color  | -                | gray           |
/// | `Text`            | text   | -                |                |
/// | `OnClick`         | text   | -                |                |
///
#[derive(Clone, Debug)]
pub struct Widget {
    /// Kind of widget.
    ///
    kind: WidgetKind,
    /// Current state.
    ///
    state: WidgetState,
    /// Properties of all states.
    ///
    properties: StateProperties,

    /// Parent of the widget.
    ///
    pub(super) parent: Option<WidgetId>,
    /// Children of the widget in declaration order.
    ///
    pub(super) children: Vec<WidgetId>,
    /// Bounds without border.
    ///
    pub(super) borderless_bounds: Aabb2,
    /// Bounds with border.
    ///
    pub(super) bordered_bounds: Aabb2,

    /// Whether mouse was pressed over widget and was not released yet.
    ///
    is_pressed: bool,
}
impl Widget {
    /// Name that widgets have when markup does not name them.
    ///
    pub const DEFAULT_NAME: &'static str = "Unnamed Widget";

    /// Creates widget of given kind with default properties.
    ///
    /// # Example
    /// ```rust
    /// # use ggui::uicore::widgets::{Widget, WidgetKind, WidgetState};
    /// # use ggui::mathcore::Color;
    /// let widget: Widget = Widget::new(WidgetKind::Panel);
    /// assert_eq!(widget.name(), "Unnamed Widget");
    /// assert_eq!(widget.property::<f32>("BorderWidth"), Ok(5.0));
    /// assert_eq!(widget.state(), WidgetState::Active);
    /// assert!(widget.is_clickable());
    /// ```
    ///
    pub fn new(kind: WidgetKind) -> Self {
        let mut properties: StateProperties = StateProperties::new();
        let _ = properties.set("Name", String::from(Widget::DEFAULT_NAME));
        let _ = properties.set("Offset", Vector2::zero());
        let _ = properties.set("Size", Vector2::one());
        let _ = properties.set("Padding", Vector2::zero());
        let _ = properties.set("BackgroundColor", Color::LIGHT_GRAY);
        let _ = properties.set("BorderColor", Color::GRAY);
        let _ = properties.set("Opacity", 1.0_f32);
        let _ = properties.set("BorderWidth", 5.0_f32);
        let _ = properties.set_for_state(WidgetState::Disabled, "BorderColor", Color::BLACK);
        let _ = properties.set_for_state(WidgetState::Disabled, "TextColor", Color::GRAY);
        let _ = properties.set_for_state(WidgetState::Disabled, "BackgroundColor", Color::DARK_GRAY);
        match kind {
            WidgetKind::Panel => {}
            WidgetKind::Label => {
                let _ = properties.set("Text", String::new());
                let _ = properties.set("TextColor", Color::WHITE);
                let _ = properties.set("BackgroundColor", Color::TRANSPARENT);
                let _ = properties.set("BorderWidth", 0.0_f32);
            }
            WidgetKind::Button => {
                let _ = properties.set("Text", String::new());
                let _ = properties.set("TextColor", Color::BLACK);
            }
        }

        Widget {
            kind,
            state: WidgetState::Active,
            properties,

            parent: None,
            children: Vec::new(),
            borderless_bounds: Aabb2::zero(),
            bordered_bounds: Aabb2::zero(),

            is_pressed: false,
        }
    }

    /// Returns kind of widget.
    ///
    pub fn kind(&self) -> WidgetKind {
        self.kind
    }
    /// Returns name of widget.
    ///
    pub fn name(&self) -> String {
        self.property::<String>("Name")
            .unwrap_or_else(|_| String::from(Widget::DEFAULT_NAME))
    }

    /// Returns property of the current state.
    ///
    pub fn property<T: PropertyType>(&self, key: &str) -> Result<T, PropertyError> {
        self.properties.get(self.state, key)
    }
    /// Sets property for all states.
    ///
    pub fn set_property<T: PropertyType>(&mut self, key: &str, value: T) {
        let _ = self.properties.set(key, value);
    }
    /// Sets property for given state only.
    ///
    pub fn set_property_for_state<T: PropertyType>(&mut self, state: WidgetState, key: &str, value: T) {
        let _ = self.properties.set_for_state(state, key, value);
    }
    /// Returns properties of widget.
    ///
    pub fn properties(&self) -> &StateProperties {
        &self.properties
    }

    /// Returns current state.
    ///
    pub fn state(&self) -> WidgetState {
        self.state
    }
    /// Sets current state of this widget only.
    ///
    /// To hide or show whole subtree use
    /// [`WidgetTree::set_hidden`](crate::uicore::tree::WidgetTree::set_hidden) and
    /// [`WidgetTree::set_visible`](crate::uicore::tree::WidgetTree::set_visible).
    ///
    pub fn set_state(&mut self, state: WidgetState) {
        self.state = state;
        if !self.is_clickable() {
            self.is_pressed = false;
        }
    }
    /// Returns whether widget is hidden.
    ///
    pub fn is_hidden(&self) -> bool {
        self.state == WidgetState::Hidden
    }
    /// Returns whether widget can be clicked (it is neither disabled nor hidden).
    ///
    pub fn is_clickable(&self) -> bool {
        !matches!(self.state, WidgetState::Disabled | WidgetState::Hidden)
    }

    /// Returns parent of widget.
    ///
    pub fn parent(&self) -> Option<WidgetId> {
        self.parent
    }
    /// Returns children of widget in declaration order.
    ///
    pub fn children(&self) -> &[WidgetId] {
        &self.children
    }
    /// Returns bounds of widget including its border.
    ///
    pub fn bounds(&self) -> Aabb2 {
        self.bordered_bounds
    }
    /// Returns bounds of widget without its border.
    ///
    pub fn borderless_bounds(&self) -> Aabb2 {
        self.borderless_bounds
    }

    /// Returns whether mouse was pressed over widget and was not released yet.
    ///
    pub fn is_pressed(&self) -> bool {
        self.is_pressed
    }
    /// Marks widget as pressed.
    ///
    pub fn set_pressed(&mut self) {
        self.is_pressed = true;
    }
    /// Clears pressed mark.
    ///
    pub fn unset_pressed(&mut self) {
        self.is_pressed = false;
    }

    /// Handles click on widget: fires event that is named by `OnClick` property (if it is present)
    /// and clears pressed mark.
    ///
    /// # Example
    /// ```rust
    /// # use ggui::uicore::widgets::{Widget, WidgetKind};
    /// # use ggui::gamecore::{events::NamedEvent, storages::EventStorage};
    /// let mut events: EventStorage = EventStorage::new();
    /// let mut button: Widget = Widget::new(WidgetKind::Button);
    /// button.set_property("OnClick", String::from("StartGame"));
    /// button.set_pressed();
    ///
    /// button.on_click(&mut events);
    /// assert!(!button.is_pressed());
    /// assert_eq!(events.remove::<NamedEvent>().map(|events| events.len()), Some(1));
    /// ```
    ///
    pub fn on_click(&mut self, events: &mut impl EventSink) {
        if let Ok(event_name) = self.property::<String>("OnClick") {
            events.fire_event(&event_name);
        }
        self.unset_pressed();
    }

    /// Reads recognized attributes of markup node into properties.
    ///
    /// Attributes that are absent keep their current values.
    /// `Offset` is applied before `HorizontalOffset` and `VerticalOffset`, so those override its components.
    /// Children of the node are not processed here - that is the job of
    /// [`WidgetTree::build_from_node`](crate::uicore::tree::WidgetTree::build_from_node).
    ///
    /// # Example
    /// ```rust
    /// # use ggui::uicore::{layout::MarkupNode, widgets::{Widget, WidgetKind}};
    /// # use ggui::mathcore::{vectors::Vector2, Color};
    /// let node: MarkupNode = MarkupNode::new("Panel")
    ///     .with_attribute("Name", "MainMenu")
    ///     .with_attribute("Offset", "100,50")
    ///     .with_attribute("VerticalOffset", "80")
    ///     .with_attribute("BackgroundColor", "#202020FF");
    ///
    /// let mut widget: Widget = Widget::new(WidgetKind::Panel);
    /// widget.build_from_node(&node).expect("Attributes are well-formed");
    /// assert_eq!(widget.name(), "MainMenu");
    /// assert_eq!(widget.property::<Vector2>("Offset"), Ok(Vector2::new(100.0, 80.0)));
    /// assert_eq!(widget.property::<Color>("BackgroundColor"), Ok(Color::from_rgb(32, 32, 32)));
    /// ```
    ///
    pub fn build_from_node<N: LayoutNode>(&mut self, node: &N) -> Result<(), BuildError> {
        for key in ["Name", "OnClick", "Text"] {
            if let Some(value) = node.attribute(key) {
                self.set_property(key, value.to_string());
            }
        }
        for key in ["Size", "Padding"] {
            if let Some(value) = node.attribute(key) {
                self.set_property(key, parse_attribute::<Vector2>(key, value)?);
            }
        }
        for key in ["BackgroundColor", "BorderColor", "TextColor"] {
            if let Some(value) = node.attribute(key) {
                self.set_property(key, parse_attribute::<Color>(key, value)?);
            }
        }
        for key in ["BorderWidth", "Opacity"] {
            if let Some(value) = node.attribute(key) {
                self.set_property(key, parse_attribute::<f32>(key, value)?);
            }
        }

        let mut offset: Vector2 = self
            .properties
            .all_states()
            .get::<Vector2>("Offset")
            .unwrap_or_default();
        if let Some(value) = node.attribute("Offset") {
            offset = parse_attribute("Offset", value)?;
        }
        if let Some(value) = node.attribute("HorizontalOffset") {
            offset.x = parse_attribute("HorizontalOffset", value)?;
        }
        if let Some(value) = node.attribute("VerticalOffset") {
            offset.y = parse_attribute("VerticalOffset", value)?;
        }
        self.set_property("Offset", offset);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{BuildError, Widget, WidgetKind, WidgetState};
    use crate::{
        mathcore::{vectors::Vector2, Color},
        uicore::layout::MarkupNode,
    };

    #[test]
    fn defaults() {
        let widget: Widget = Widget::new(WidgetKind::Panel);
        assert_eq!(widget.property::<Vector2>("Offset"), Ok(Vector2::zero()));
        assert_eq!(widget.property::<Vector2>("Size"), Ok(Vector2::one()));
        assert_eq!(widget.property::<Vector2>("Padding"), Ok(Vector2::zero()));
        assert_eq!(widget.property::<Color>("BackgroundColor"), Ok(Color::LIGHT_GRAY));
        assert_eq!(widget.property::<Color>("BorderColor"), Ok(Color::GRAY));
        assert_eq!(widget.property::<f32>("Opacity"), Ok(1.0));
        assert!(widget.property::<Color>("TextColor").is_err());

        let mut widget: Widget = widget;
        widget.set_state(WidgetState::Disabled);
        assert_eq!(widget.property::<Color>("BackgroundColor"), Ok(Color::DARK_GRAY));
        assert_eq!(widget.property::<Color>("BorderColor"), Ok(Color::BLACK));
        assert_eq!(widget.property::<Color>("TextColor"), Ok(Color::GRAY));
        assert_eq!(widget.property::<f32>("BorderWidth"), Ok(5.0));

        let label: Widget = Widget::new(WidgetKind::Label);
        assert_eq!(label.property::<String>("Text"), Ok(String::new()));
        assert_eq!(label.property::<f32>("BorderWidth"), Ok(0.0));
    }

    #[test]
    fn states() {
        let mut widget: Widget = Widget::new(WidgetKind::Button);
        widget.set_pressed();
        assert!(widget.is_clickable());

        widget.set_state(WidgetState::Disabled);
        assert!(!widget.is_clickable());
        assert!(!widget.is_hidden());
        assert!(!widget.is_pressed());

        widget.set_state(WidgetState::Hidden);
        assert!(!widget.is_clickable());
        assert!(widget.is_hidden());

        widget.set_state(WidgetState::Active);
        assert!(widget.is_clickable());
    }

    #[test]
    fn build_from_node() {
        let node: MarkupNode = MarkupNode::new("Button")
            .with_attribute("Name", "Quit")
            .with_attribute("HorizontalOffset", "15")
            .with_attribute("Size", "200 40")
            .with_attribute("Padding", "4,2")
            .with_attribute("BorderColor", "255,0,0")
            .with_attribute("BorderWidth", "2.5")
            .with_attribute("Opacity", "0.5")
            .with_attribute("OnClick", "QuitGame")
            .with_attribute("Text", "Quit");

        let mut widget: Widget = Widget::new(WidgetKind::Button);
        widget.build_from_node(&node).expect("Attributes are well-formed");
        assert_eq!(widget.name(), "Quit");
        assert_eq!(widget.property::<Vector2>("Offset"), Ok(Vector2::new(15.0, 0.0)));
        assert_eq!(widget.property::<Vector2>("Size"), Ok(Vector2::new(200.0, 40.0)));
        assert_eq!(widget.property::<Vector2>("Padding"), Ok(Vector2::new(4.0, 2.0)));
        assert_eq!(widget.property::<Color>("BorderColor"), Ok(Color::RED));
        assert_eq!(widget.property::<f32>("BorderWidth"), Ok(2.5));
        assert_eq!(widget.property::<f32>("Opacity"), Ok(0.5));
        assert_eq!(widget.property::<String>("OnClick"), Ok(String::from("QuitGame")));
        assert_eq!(widget.property::<String>("Text"), Ok(String::from("Quit")));
        // Untouched attributes keep defaults.
        assert_eq!(widget.property::<Color>("BackgroundColor"), Ok(Color::LIGHT_GRAY));

        // Building again with an empty node changes nothing.
        widget
            .build_from_node(&MarkupNode::new("Button"))
            .expect("Empty node is valid");
        assert_eq!(widget.property::<Vector2>("Offset"), Ok(Vector2::new(15.0, 0.0)));
        assert_eq!(widget.property::<Vector2>("Size"), Ok(Vector2::new(200.0, 40.0)));

        assert_eq!(
            widget.build_from_node(&MarkupNode::new("Button").with_attribute("Opacity", "half")),
            Err(BuildError::InvalidAttribute {
                attribute: String::from("Opacity"),
                value: String::from("half"),
            })
        );
    }
}
