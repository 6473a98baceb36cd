//! `uicore::tree` submodule implements [`WidgetTree`] - arena that owns widgets
//! and keeps their parent-child relations.
//!
//! # Z-order
//! Widget is drawn before its children, and children are drawn in declaration order,
//! so the last drawn widget is the topmost one.
//! Hit-testing mirrors that: children are tested in reverse declaration order before their parent.
//! Hidden subtrees are neither drawn nor tested.
//!

use crate::{
    gamecore::{
        identifiers::WidgetId,
        storages::{IdMap, NoOpHasherState},
    },
    graphicscore::drawing::Renderer,
    mathcore::{
        shapes::Aabb2,
        vectors::{Point, Vector2},
        Color,
    },
    uicore::{
        factory::WidgetFactory,
        layout::LayoutNode,
        widgets::{BuildError, Widget, WidgetState},
    },
};
use std::{error::Error, fmt};

/// [`TreeError`] enum lists errors that can occur during tree modification.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TreeError {
    /// Widget with given id is not in the tree.
    ///
    UnknownWidget(WidgetId),
    /// Widget already has parent.
    ///
    AlreadyAttached(WidgetId),
    /// Attaching widget would make it its own ancestor.
    ///
    WouldCycle(WidgetId),
}
impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::UnknownWidget(id) => write!(f, "widget {} is not in the tree", id.value()),
            TreeError::AlreadyAttached(id) => write!(f, "widget {} already has parent", id.value()),
            TreeError::WouldCycle(id) => {
                write!(f, "widget {} cannot become its own ancestor", id.value())
            }
        }
    }
}
impl Error for TreeError {}

/// [`WidgetTree`] struct owns widgets and relations between them.
///
/// Widgets are owned by the tree and are addressed by [`WidgetId`]s;
/// parent owns the ordered list of ids of its children, and child knows id of its parent.
/// Removing widget removes its whole subtree.
///
/// # Example
/// ```rust
/// # use ggui::uicore::{tree::WidgetTree, widgets::{Widget, WidgetKind}};
/// # use ggui::gamecore::identifiers::WidgetId;
/// # use ggui::mathcore::vectors::Vector2;
/// let mut tree: WidgetTree = WidgetTree::new();
/// let mut panel: Widget = Widget::new(WidgetKind::Panel);
/// panel.set_property("Offset", Vector2::new(100.0, 100.0));
/// let mut button: Widget = Widget::new(WidgetKind::Button);
/// button.set_property("Offset", Vector2::new(10.0, 20.0));
///
/// let panel: WidgetId = tree.insert(panel);
/// let button: WidgetId = tree.insert(button);
/// tree.add_child(panel, button).expect("Both widgets are in the tree");
///
/// assert_eq!(tree.screen_offset(button), Vector2::new(110.0, 120.0));
/// assert_eq!(tree.get(button).and_then(|widget| widget.parent()), Some(panel));
/// ```
///
#[derive(Clone, Debug)]
pub struct WidgetTree {
    /// Widgets of the tree.
    ///
    widgets: IdMap<WidgetId, Widget>,
    /// Id that will be given to next inserted widget.
    ///
    next_id: u64,
}
impl WidgetTree {
    /// Creates empty tree.
    ///
    pub fn new() -> Self {
        WidgetTree {
            widgets: IdMap::with_hasher(NoOpHasherState),
            next_id: 0,
        }
    }

    /// Inserts detached widget into the tree and returns its id.
    ///
    pub fn insert(&mut self, mut widget: Widget) -> WidgetId {
        let id: WidgetId = WidgetId::new(self.next_id);
        self.next_id += 1;
        widget.parent = None;
        widget.children.clear();
        let _ = self.widgets.insert(id, widget);
        self.layout_widget(id);
        id
    }
    /// Removes widget with its subtree from the tree and returns removed widget.
    ///
    /// Bounds of former ancestors are recalculated.
    ///
    pub fn remove(&mut self, id: WidgetId) -> Option<Widget> {
        let parent: Option<WidgetId> = self.get(id)?.parent;
        if let Some(parent) = parent {
            if let Some(parent_widget) = self.widgets.get_mut(&parent) {
                parent_widget.children.retain(|child| *child != id);
            }
        }
        let mut widget: Widget = self.widgets.remove(&id)?;
        for child in std::mem::take(&mut widget.children) {
            let _ = self.remove_subtree(child);
        }
        widget.parent = None;
        if let Some(parent) = parent {
            self.recalculate_bounds(parent);
        }
        Some(widget)
    }
    /// Removes subtree without touching its parent.
    ///
    fn remove_subtree(&mut self, id: WidgetId) -> Option<Widget> {
        let widget: Widget = self.widgets.remove(&id)?;
        for child in widget.children.iter() {
            let _ = self.remove_subtree(*child);
        }
        Some(widget)
    }
    /// Removes all widgets. Ids are never reused.
    ///
    pub fn clear(&mut self) {
        self.widgets.clear();
    }

    /// Returns widget with given id.
    ///
    pub fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.get(&id)
    }
    /// Returns mutable reference to widget with given id.
    ///
    /// Bounds are not recalculated automatically after modification of properties,
    /// call [`WidgetTree::recalculate_bounds`] when layout-affecting properties change.
    ///
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.widgets.get_mut(&id)
    }
    /// Returns whether widget is in the tree.
    ///
    pub fn contains(&self, id: WidgetId) -> bool {
        self.widgets.contains_key(&id)
    }
    /// Returns number of widgets in the tree.
    ///
    pub fn len(&self) -> usize {
        self.widgets.len()
    }
    /// Returns whether the tree is empty.
    ///
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Returns iterator over ancestors of the widget, from its parent up to the root.
    ///
    pub fn ancestors(&self, id: WidgetId) -> impl Iterator<Item = WidgetId> + '_ {
        std::iter::successors(self.get(id).and_then(Widget::parent), move |ancestor| {
            self.get(*ancestor).and_then(Widget::parent)
        })
    }

    /// Appends child to the parent's children, then recalculates bounds of the child's subtree,
    /// of the parent and of the rest of the ancestor chain.
    ///
    pub fn add_child(&mut self, parent: WidgetId, child: WidgetId) -> Result<(), TreeError> {
        if !self.contains(parent) {
            return Err(TreeError::UnknownWidget(parent));
        }
        let child_widget: &Widget = self.get(child).ok_or(TreeError::UnknownWidget(child))?;
        if child_widget.parent.is_some() {
            return Err(TreeError::AlreadyAttached(child));
        }
        if parent == child || self.ancestors(parent).any(|ancestor| ancestor == child) {
            return Err(TreeError::WouldCycle(child));
        }

        self.attach(parent, child);
        self.recalculate_bounds(child);
        Ok(())
    }
    /// Links parent and child without recalculating bounds.
    ///
    fn attach(&mut self, parent: WidgetId, child: WidgetId) {
        if let Some(parent_widget) = self.widgets.get_mut(&parent) {
            parent_widget.children.push(child);
        }
        if let Some(child_widget) = self.widgets.get_mut(&child) {
            child_widget.parent = Some(parent);
        }
    }

    /// Creates widget from markup node through the factory, reads its attributes and recursively builds
    /// its non-empty children. Returns id of created (detached) widget.
    ///
    /// Nothing is left in the tree if building fails.
    ///
    pub fn build_from_node<N: LayoutNode>(
        &mut self,
        factory: &WidgetFactory,
        node: &N,
    ) -> Result<WidgetId, BuildError> {
        let id: WidgetId = self.insert(factory.create(node.tag())?);
        match self.build_into(id, factory, node) {
            Ok(()) => Ok(id),
            Err(error) => {
                let _ = self.remove(id);
                Err(error)
            }
        }
    }
    /// Reads attributes of markup node into existing widget and appends widgets that are built from
    /// non-empty children of the node.
    ///
    pub fn build_into<N: LayoutNode>(
        &mut self,
        id: WidgetId,
        factory: &WidgetFactory,
        node: &N,
    ) -> Result<(), BuildError> {
        if let Some(widget) = self.widgets.get_mut(&id) {
            widget.build_from_node(node)?;
        }
        for child_node in node.children().iter().filter(|child| !child.is_empty()) {
            let child: WidgetId = self.insert(factory.create(child_node.tag())?);
            self.attach(id, child);
            self.build_into(child, factory, child_node)?;
        }
        self.recalculate_bounds(id);
        Ok(())
    }

    /// Returns offset of widget on the screen: its own offset plus offsets of all ancestors.
    ///
    pub fn screen_offset(&self, id: WidgetId) -> Vector2 {
        std::iter::once(id)
            .chain(self.ancestors(id))
            .filter_map(|widget| self.get(widget))
            .map(|widget| widget.property::<Vector2>("Offset").unwrap_or_default())
            .fold(Vector2::zero(), |sum, offset| sum + offset)
    }
    /// Returns opacity of widget multiplied by opacities of all ancestors.
    ///
    pub fn combined_opacity(&self, id: WidgetId) -> f32 {
        std::iter::once(id)
            .chain(self.ancestors(id))
            .filter_map(|widget| self.get(widget))
            .map(|widget| widget.property::<f32>("Opacity").unwrap_or(1.0))
            .product()
    }

    /// Returns the smallest box that encloses bounds of all children
    /// (zero-sized box at the origin if widget has no children).
    ///
    pub fn smallest_bounds_around_children(&self, id: WidgetId) -> Aabb2 {
        let mut bounds = self
            .get(id)
            .map(|widget| widget.children.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(|child| self.get(*child))
            .map(Widget::bounds);
        match bounds.next() {
            Some(first) => bounds.fold(first, Aabb2::union),
            None => Aabb2::zero(),
        }
    }

    /// Recalculates bounds of the widget's subtree, then of its ancestors bottom-up.
    ///
    pub fn recalculate_bounds(&mut self, id: WidgetId) {
        self.layout_subtree(id);
        let ancestors: Vec<WidgetId> = self.ancestors(id).collect();
        for ancestor in ancestors {
            self.layout_widget(ancestor);
        }
    }
    /// Recalculates bounds of children before bounds of their parent.
    ///
    fn layout_subtree(&mut self, id: WidgetId) {
        let children: Vec<WidgetId> = self
            .get(id)
            .map(|widget| widget.children.clone())
            .unwrap_or_default();
        for child in children {
            self.layout_subtree(child);
        }
        self.layout_widget(id);
    }
    /// Recalculates bounds of single widget, assuming that bounds of its children are up to date.
    ///
    fn layout_widget(&mut self, id: WidgetId) {
        let (size, padding, border_width, has_children) = match self.get(id) {
            Some(widget) => (
                widget.property::<Vector2>("Size").unwrap_or_default(),
                widget.property::<Vector2>("Padding").unwrap_or_default(),
                widget.property::<f32>("BorderWidth").unwrap_or(0.0),
                !widget.children.is_empty(),
            ),
            None => return,
        };
        let mut borderless: Aabb2 =
            Aabb2::from_origin(self.screen_offset(id), size + padding * 2.0);
        if has_children {
            borderless = borderless.union(self.smallest_bounds_around_children(id));
        }
        if let Some(widget) = self.widgets.get_mut(&id) {
            widget.borderless_bounds = borderless;
            widget.bordered_bounds = borderless.expanded(border_width.max(0.0));
        }
    }

    /// Sets state of single widget.
    ///
    pub fn set_state(&mut self, id: WidgetId, state: WidgetState) {
        if let Some(widget) = self.widgets.get_mut(&id) {
            widget.set_state(state);
        }
    }
    /// Hides widget and its whole subtree.
    ///
    pub fn set_hidden(&mut self, id: WidgetId) {
        self.set_subtree_state(id, WidgetState::Hidden);
    }
    /// Makes widget and its whole subtree active.
    ///
    pub fn set_visible(&mut self, id: WidgetId) {
        self.set_subtree_state(id, WidgetState::Active);
    }
    /// Sets state of the whole subtree.
    ///
    fn set_subtree_state(&mut self, id: WidgetId, state: WidgetState) {
        let children: Vec<WidgetId> = match self.widgets.get_mut(&id) {
            Some(widget) => {
                widget.set_state(state);
                widget.children.clone()
            }
            None => return,
        };
        for child in children {
            self.set_subtree_state(child, state);
        }
    }
    /// Finds the first descendant of `root` (depth-first, in declaration order) that is named `name`
    /// and hides or shows its subtree.
    ///
    /// Returns whether such widget was found.
    ///
    pub fn set_widget_visibility(&mut self, root: WidgetId, name: &str, hidden: bool) -> bool {
        match self.find_by_name(root, name) {
            Some(id) => {
                if hidden {
                    self.set_hidden(id);
                } else {
                    self.set_visible(id);
                }
                true
            }
            None => false,
        }
    }
    /// Finds the first descendant of `root` (depth-first, in declaration order) that is named `name`.
    ///
    /// `root` itself is not checked.
    ///
    pub fn find_by_name(&self, root: WidgetId, name: &str) -> Option<WidgetId> {
        self.get(root)?.children.iter().find_map(|child| {
            match self.get(*child) {
                Some(widget) if widget.name() == name => Some(*child),
                Some(_) => self.find_by_name(*child, name),
                None => None,
            }
        })
    }

    /// Returns the topmost visible widget of the subtree whose bounds contain the point.
    ///
    pub fn widget_at_point(&self, root: WidgetId, point: Point) -> Option<WidgetId> {
        let widget: &Widget = self.get(root)?;
        if widget.is_hidden() {
            return None;
        }
        widget
            .children
            .iter()
            .rev()
            .find_map(|child| self.widget_at_point(*child, point))
            .or_else(|| widget.bounds().contains_point(point).then_some(root))
    }

    /// Updates visible part of the subtree.
    ///
    pub fn update(&mut self, id: WidgetId, delta_seconds: f32) {
        let children: Vec<WidgetId> = match self.get(id) {
            Some(widget) if !widget.is_hidden() => widget.children.clone(),
            _ => return,
        };
        for child in children {
            self.update(child, delta_seconds);
        }
    }
    /// Renders visible part of the subtree: widget first, then its children in declaration order.
    ///
    /// Border is drawn when border width is positive, background is drawn when it is not fully transparent;
    /// alphas of both are scaled by combined opacity. Widgets with non-empty `Text` also draw it.
    ///
    pub fn render(&self, id: WidgetId, renderer: &mut dyn Renderer, font: &str) {
        let widget: &Widget = match self.get(id) {
            Some(widget) if !widget.is_hidden() => widget,
            _ => return,
        };
        let opacity: f32 = self.combined_opacity(id);

        let border_width: f32 = widget.property::<f32>("BorderWidth").unwrap_or(0.0);
        let border_color: Color = widget
            .property::<Color>("BorderColor")
            .unwrap_or(Color::TRANSPARENT)
            .with_opacity(opacity);
        let background_color: Color = widget
            .property::<Color>("BackgroundColor")
            .unwrap_or(Color::TRANSPARENT)
            .with_opacity(opacity);
        if border_width > 0.0 {
            renderer.draw_aabb(widget.bounds(), border_color);
        }
        if background_color.a > 0 {
            renderer.draw_aabb(widget.borderless_bounds(), background_color);
        }

        if let Ok(text) = widget.property::<String>("Text") {
            if !text.is_empty() {
                let padding: Vector2 = widget.property::<Vector2>("Padding").unwrap_or_default();
                let color: Color = widget
                    .property::<Color>("TextColor")
                    .unwrap_or(Color::WHITE)
                    .with_opacity(opacity);
                renderer.draw_text(widget.borderless_bounds().mins + padding, &text, color, font);
            }
        }

        for child in widget.children.iter() {
            self.render(*child, renderer, font);
        }
    }
}
impl Default for WidgetTree {
    fn default() -> Self {
        WidgetTree::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{TreeError, WidgetTree};
    use crate::{
        gamecore::identifiers::WidgetId,
        graphicscore::drawing::RecordingRenderer,
        mathcore::{
            floats::almost_equal,
            shapes::Aabb2,
            vectors::{Point, Vector2},
            Color,
        },
        uicore::{
            factory::WidgetFactory,
            layout::MarkupNode,
            widgets::{BuildError, Widget, WidgetKind, WidgetState},
        },
    };

    fn panel(name: &str, offset: [f32; 2], size: [f32; 2]) -> Widget {
        let mut widget: Widget = Widget::new(WidgetKind::Panel);
        widget.set_property("Name", name.to_string());
        widget.set_property("Offset", Vector2::from(offset));
        widget.set_property("Size", Vector2::from(size));
        widget.set_property("BorderWidth", 0.0_f32);
        widget
    }

    /// Root at (0, 0) with two overlapping children, the first one has a child of its own.
    fn sample_tree() -> (WidgetTree, [WidgetId; 4]) {
        let mut tree: WidgetTree = WidgetTree::new();
        let root: WidgetId = tree.insert(panel("Root", [0.0, 0.0], [100.0, 100.0]));
        let first: WidgetId = tree.insert(panel("First", [10.0, 10.0], [50.0, 50.0]));
        let second: WidgetId = tree.insert(panel("Second", [30.0, 30.0], [50.0, 50.0]));
        let nested: WidgetId = tree.insert(panel("Nested", [5.0, 5.0], [10.0, 10.0]));
        tree.add_child(root, first).expect("Widgets are in the tree");
        tree.add_child(root, second).expect("Widgets are in the tree");
        tree.add_child(first, nested).expect("Widgets are in the tree");
        (tree, [root, first, second, nested])
    }

    #[test]
    fn add_child() {
        let (mut tree, [root, first, second, nested]) = sample_tree();
        assert_eq!(tree.get(root).map(|widget| widget.children().to_vec()), Some(vec![first, second]));
        assert_eq!(tree.ancestors(nested).collect::<Vec<_>>(), vec![first, root]);

        assert_eq!(tree.add_child(first, second), Err(TreeError::AlreadyAttached(second)));
        let detached: WidgetId = tree.insert(Widget::new(WidgetKind::Panel));
        assert_eq!(tree.add_child(detached, detached), Err(TreeError::WouldCycle(detached)));
        assert_eq!(tree.add_child(nested, root), Err(TreeError::WouldCycle(root)));
        let removed: WidgetId = tree.insert(Widget::new(WidgetKind::Panel));
        let _ = tree.remove(removed);
        assert_eq!(tree.add_child(root, removed), Err(TreeError::UnknownWidget(removed)));
    }

    #[test]
    fn composition() {
        let (mut tree, [root, first, _, nested]) = sample_tree();
        assert_eq!(tree.screen_offset(nested), Vector2::new(15.0, 15.0));

        if let Some(widget) = tree.get_mut(first) {
            widget.set_property("Opacity", 0.5_f32);
        }
        if let Some(widget) = tree.get_mut(nested) {
            widget.set_property("Opacity", 0.5_f32);
        }
        assert!(almost_equal(tree.combined_opacity(nested), 0.25));
        assert!(almost_equal(tree.combined_opacity(first), 0.5));
        assert!(almost_equal(tree.combined_opacity(root), 1.0));
    }

    #[test]
    fn bounds() {
        let mut tree: WidgetTree = WidgetTree::new();
        let mut widget: Widget = panel("Padded", [10.0, 20.0], [30.0, 40.0]);
        widget.set_property("Padding", Vector2::new(1.0, 2.0));
        widget.set_property("BorderWidth", 5.0_f32);
        let padded: WidgetId = tree.insert(widget);

        let expected: Aabb2 = Aabb2::new(Point::new(10.0, 20.0), Point::new(42.0, 64.0));
        assert_eq!(tree.get(padded).map(Widget::borderless_bounds), Some(expected));
        assert_eq!(tree.get(padded).map(Widget::bounds), Some(expected.expanded(5.0)));
        assert_eq!(tree.smallest_bounds_around_children(padded), Aabb2::zero());

        // Children stick out of the root, so root grows to enclose them.
        let root: WidgetId = tree.insert(panel("Root", [0.0, 0.0], [20.0, 20.0]));
        let child: WidgetId = tree.insert(panel("Child", [50.0, 50.0], [10.0, 10.0]));
        tree.add_child(root, child).expect("Widgets are in the tree");
        assert_eq!(
            tree.smallest_bounds_around_children(root),
            Aabb2::new(Point::new(50.0, 50.0), Point::new(60.0, 60.0))
        );
        assert_eq!(
            tree.get(root).map(Widget::bounds),
            Some(Aabb2::new(Point::new(0.0, 0.0), Point::new(60.0, 60.0)))
        );

        let _ = tree.remove(child);
        assert_eq!(
            tree.get(root).map(Widget::bounds),
            Some(Aabb2::new(Point::new(0.0, 0.0), Point::new(20.0, 20.0)))
        );
    }

    #[test]
    fn hiding() {
        let (mut tree, [root, first, second, nested]) = sample_tree();

        tree.set_hidden(first);
        for id in [first, nested] {
            assert!(!tree.get(id).map_or(true, Widget::is_clickable));
        }
        assert!(tree.get(second).map_or(false, Widget::is_clickable));
        // Point inside of hidden `First` only falls through to the root.
        assert_eq!(tree.widget_at_point(root, Point::new(12.0, 12.0)), Some(root));

        tree.set_visible(first);
        assert_eq!(tree.widget_at_point(root, Point::new(12.0, 12.0)), Some(first));
        assert_eq!(tree.widget_at_point(root, Point::new(16.0, 16.0)), Some(nested));

        tree.set_hidden(root);
        for id in [root, first, second, nested] {
            assert!(!tree.get(id).map_or(true, Widget::is_clickable));
        }
        assert_eq!(tree.widget_at_point(root, Point::new(50.0, 50.0)), None);

        tree.set_visible(root);
        tree.set_state(second, WidgetState::Disabled);
        assert!(!tree.get(second).map_or(true, Widget::is_clickable));
        assert_eq!(tree.get(second).map(Widget::state), Some(WidgetState::Disabled));
    }

    #[test]
    fn hit_testing_order() {
        let (tree, [root, first, second, _]) = sample_tree();
        // `Second` is declared (and drawn) after `First`, so it is on top where they overlap.
        assert_eq!(tree.widget_at_point(root, Point::new(40.0, 40.0)), Some(second));
        assert_eq!(tree.widget_at_point(root, Point::new(20.0, 40.0)), Some(first));
        assert_eq!(tree.widget_at_point(root, Point::new(90.0, 5.0)), Some(root));
        assert_eq!(tree.widget_at_point(root, Point::new(150.0, 5.0)), None);
    }

    #[test]
    fn visibility_by_name() {
        let (mut tree, [root, first, _, nested]) = sample_tree();
        assert_eq!(tree.find_by_name(root, "Nested"), Some(nested));
        assert_eq!(tree.find_by_name(root, "Root"), None);

        assert!(tree.set_widget_visibility(root, "First", true));
        assert!(tree.get(nested).map_or(false, Widget::is_hidden));
        assert!(tree.set_widget_visibility(root, "First", false));
        assert!(!tree.get(first).map_or(true, Widget::is_hidden));
        assert!(!tree.set_widget_visibility(root, "Missing", true));
    }

    #[test]
    fn build_from_node() {
        let layout: MarkupNode = MarkupNode::new("Panel")
            .with_attribute("Name", "Menu")
            .with_attribute("Offset", "100,100")
            .with_attribute("Size", "300,200")
            .with_child(MarkupNode::default())
            .with_child(
                MarkupNode::new("Button")
                    .with_attribute("Name", "Play")
                    .with_attribute("Offset", "20,20")
                    .with_attribute("OnClick", "Play")
                    .with_child(MarkupNode::new("Label").with_attribute("Text", "Play")),
            )
            .with_child(MarkupNode::new("Label").with_attribute("Name", "Title"));

        let factory: WidgetFactory = WidgetFactory::new();
        let mut tree: WidgetTree = WidgetTree::new();
        let root: WidgetId = tree.build_from_node(&factory, &layout).expect("Layout is valid");
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.get(root).map(|widget| widget.children().len()), Some(2));

        let play: WidgetId = tree.find_by_name(root, "Play").expect("Button was built");
        assert_eq!(tree.get(play).map(Widget::kind), Some(WidgetKind::Button));
        assert_eq!(tree.screen_offset(play), Vector2::new(120.0, 120.0));
        assert_eq!(tree.get(play).map(|widget| widget.children().len()), Some(1));

        let broken: MarkupNode = MarkupNode::new("Panel")
            .with_child(MarkupNode::new("Button").with_attribute("BorderColor", "red"));
        assert_eq!(
            tree.build_from_node(&factory, &broken),
            Err(BuildError::InvalidAttribute {
                attribute: String::from("BorderColor"),
                value: String::from("red"),
            })
        );
        assert_eq!(
            tree.build_from_node(&factory, &MarkupNode::new("Panel").with_child(MarkupNode::new("Slider"))),
            Err(BuildError::UnknownWidgetKind {
                tag: String::from("Slider")
            })
        );
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn render() {
        let (mut tree, [root, first, second, nested]) = sample_tree();
        if let Some(widget) = tree.get_mut(root) {
            widget.set_property("BorderWidth", 2.0_f32);
            widget.set_property("Opacity", 0.5_f32);
        }
        if let Some(widget) = tree.get_mut(nested) {
            widget.set_property("Text", String::from("hi"));
            widget.set_property("TextColor", Color::RED);
            widget.set_property("BackgroundColor", Color::TRANSPARENT);
        }
        tree.set_hidden(second);
        tree.recalculate_bounds(root);

        let mut renderer: RecordingRenderer = RecordingRenderer::new();
        tree.render(root, &mut renderer, "FixedSys");

        let bounds = |id: WidgetId| tree.get(id).map(Widget::bounds).unwrap_or_default();
        let borderless = |id: WidgetId| tree.get(id).map(Widget::borderless_bounds).unwrap_or_default();
        let half_gray: Color = Color::GRAY.with_opacity(0.5);
        let half_light_gray: Color = Color::LIGHT_GRAY.with_opacity(0.5);
        assert_eq!(
            renderer.boxes(),
            vec![
                (bounds(root), half_gray),
                (borderless(root), half_light_gray),
                (borderless(first), half_light_gray),
            ]
        );
        assert_eq!(renderer.texts(), vec!["hi"]);
    }
}
