//! `uicore::layout` submodule defines markup that widget trees are built from.
//!
//! [`LayoutNode`] trait is everything that `ggui` needs from markup: tag name,
//! attribute lookup and child enumeration. [`MarkupNode`] is its serializable implementation
//! that can be stored as an asset in 'layouts' folder.
//!

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// [`LayoutNode`] trait is implemented by markup nodes from which widgets are built.
///
pub trait LayoutNode: Sized {
    /// Returns tag of the node (kind of widget).
    ///
    fn tag(&self) -> &str;
    /// Returns value of attribute if it is present.
    ///
    fn attribute(&self, name: &str) -> Option<&str>;
    /// Returns children of the node in declaration order.
    ///
    fn children(&self) -> &[Self];
    /// Returns whether the node carries nothing (empty nodes are skipped during building).
    ///
    fn is_empty(&self) -> bool;
}

/// [`MarkupNode`] struct is a node of markup tree.
///
/// # Example
/// ```rust
/// # use ggui::uicore::layout::{LayoutNode, MarkupNode};
/// let menu: MarkupNode = MarkupNode::new("Panel")
///     .with_attribute("Name", "Menu")
///     .with_child(MarkupNode::new("Button").with_attribute("OnClick", "Play"));
///
/// assert_eq!(menu.attribute("Name"), Some("Menu"));
/// assert_eq!(menu.children().len(), 1);
/// assert_eq!(menu.children()[0].tag(), "Button");
/// ```
///
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct MarkupNode {
    /// Tag of the node.
    ///
    tag: String,
    /// Attributes of the node.
    ///
    attributes: BTreeMap<String, String>,
    /// Children of the node.
    ///
    children: Vec<MarkupNode>,
}
impl MarkupNode {
    /// Creates node with given tag and without attributes and children.
    ///
    pub fn new(tag: impl Into<String>) -> Self {
        MarkupNode {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }
    /// Returns node with attribute added (or replaced).
    ///
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }
    /// Returns node with child appended.
    ///
    pub fn with_child(mut self, child: MarkupNode) -> Self {
        self.push_child(child);
        self
    }

    /// Adds (or replaces) attribute.
    ///
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let _ = self.attributes.insert(name.into(), value.into());
    }
    /// Appends child.
    ///
    pub fn push_child(&mut self, child: MarkupNode) {
        self.children.push(child);
    }
    /// Returns iterator over attributes in the order of their names.
    ///
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}
impl LayoutNode for MarkupNode {
    fn tag(&self) -> &str {
        &self.tag
    }
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
    fn children(&self) -> &[Self] {
        &self.children
    }
    fn is_empty(&self) -> bool {
        self.tag.is_empty() && self.attributes.is_empty() && self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn markup_node() {
        use super::{LayoutNode, MarkupNode};

        let mut node: MarkupNode = MarkupNode::new("Label").with_attribute("Text", "Hello");
        node.set_attribute("Text", "Bye");
        node.push_child(MarkupNode::default());

        assert_eq!(node.attribute("Text"), Some("Bye"));
        assert_eq!(node.attribute("Name"), None);
        assert_eq!(node.attributes().collect::<Vec<_>>(), vec![("Text", "Bye")]);
        assert!(!node.is_empty());
        assert!(node.children()[0].is_empty());
    }
}
