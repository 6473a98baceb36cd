//! `uicore::factory` submodule implements [`WidgetFactory`] that turns markup tags into widgets.
//!

use crate::uicore::widgets::{BuildError, Widget, WidgetKind};
use std::collections::HashMap;

/// Type alias for function that creates widget with its default properties.
///
pub type WidgetConstructor = fn() -> Widget;

/// [`WidgetFactory`] struct maps markup tags to widget constructors.
///
/// Default factory knows `Widget` and `Panel` (plain panel), `Label` and `Button`.
/// Games can register their own tags, e.g. panels with different default colors.
///
/// # Example
/// ```rust
/// # use ggui::uicore::{factory::WidgetFactory, widgets::{BuildError, Widget, WidgetKind}};
/// # use ggui::mathcore::Color;
/// fn dark_panel() -> Widget {
///     let mut widget: Widget = Widget::new(WidgetKind::Panel);
///     widget.set_property("BackgroundColor", Color::DARK_GRAY);
///     widget
/// }
///
/// let mut factory: WidgetFactory = WidgetFactory::new();
/// factory.register("DarkPanel", dark_panel);
///
/// assert_eq!(factory.create("Button").map(|widget| widget.kind()), Ok(WidgetKind::Button));
/// let panel: Widget = factory.create("DarkPanel").expect("Tag was registered");
/// assert_eq!(panel.property::<Color>("BackgroundColor"), Ok(Color::DARK_GRAY));
/// assert!(matches!(factory.create("Slider"), Err(BuildError::UnknownWidgetKind { .. })));
/// ```
///
#[derive(Clone, Debug)]
pub struct WidgetFactory {
    /// Registered constructors.
    ///
    constructors: HashMap<String, WidgetConstructor>,
}
impl WidgetFactory {
    /// Creates factory that knows default widget kinds.
    ///
    pub fn new() -> Self {
        let mut factory: WidgetFactory = WidgetFactory {
            constructors: HashMap::new(),
        };
        factory.register("Widget", || Widget::new(WidgetKind::Panel));
        factory.register("Panel", || Widget::new(WidgetKind::Panel));
        factory.register("Label", || Widget::new(WidgetKind::Label));
        factory.register("Button", || Widget::new(WidgetKind::Button));
        factory
    }

    /// Registers constructor for given tag, replacing previous one.
    ///
    pub fn register(&mut self, tag: &str, constructor: WidgetConstructor) {
        if self
            .constructors
            .insert(tag.to_string(), constructor)
            .is_some()
        {
            debug!("Widget constructor for tag '{}' was replaced", tag);
        }
    }
    /// Returns whether tag is known.
    ///
    pub fn knows(&self, tag: &str) -> bool {
        self.constructors.contains_key(tag)
    }

    /// Creates widget for given tag.
    ///
    pub fn create(&self, tag: &str) -> Result<Widget, BuildError> {
        self.constructors
            .get(tag)
            .map(|constructor| constructor())
            .ok_or_else(|| BuildError::UnknownWidgetKind {
                tag: tag.to_string(),
            })
    }
}
impl Default for WidgetFactory {
    fn default() -> Self {
        WidgetFactory::new()
    }
}
