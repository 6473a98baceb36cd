//! `ggui::uicore` module is a core that implements widget tree of `ggui`.
//!
//! # Model
//! Every widget is a node of [`WidgetTree`](tree::WidgetTree) arena that owns its children ids in declaration order
//! and knows id of its parent. Widget appearance is described by typed properties
//! ([`PropertyBag`](properties::PropertyBag)) that can differ between widget states
//! ([`WidgetState`](widgets::WidgetState)).
//! Offset and opacity of widget are composed with its ancestors when the tree is laid out.
//!
//! Trees are built from markup ([`LayoutNode`](layout::LayoutNode)) by
//! [`WidgetFactory`](factory::WidgetFactory), and are driven by [`UiSystem`](system::UiSystem)
//! which renders them and turns mouse clicks into named events.
//!

// submodules and public re-exports
pub mod factory;
pub mod layout;
pub mod properties;
pub mod system;
pub mod tree;
pub mod widgets;
