//! `uicore::system` submodule implements [`UiSystem`] - owner of the widget tree that
//! lays it out in virtual resolution, renders it and turns mouse clicks into events.
//!

use crate::{
    datacore::assets::{AssetManager, LayoutAssetFormat},
    gamecore::{events::EventSink, identifiers::WidgetId},
    graphicscore::drawing::Renderer,
    inputcore::{keys::MouseButton, system::InputState},
    mathcore::vectors::{Point, Vector2},
    uicore::{
        factory::WidgetFactory,
        layout::{LayoutNode, MarkupNode},
        tree::WidgetTree,
        widgets::{BuildError, Widget},
    },
};
use std::io::{Error, ErrorKind};

/// [`UiSystem`] struct drives widget tree that was built from layout.
///
/// Widgets are laid out in virtual resolution (`extents`, 1600x900 by default) which is stretched over the viewport;
/// cursor position is mapped back from viewport to virtual coordinates before hit-testing.
///
/// # Clicks
/// Pressing left mouse button over clickable widget marks it as pressed,
/// releasing the button over the same widget calls [`Widget::on_click`].
/// Releasing it anywhere else just clears pressed mark.
///
/// # Example
/// ```rust
/// # use ggui::uicore::{layout::MarkupNode, system::UiSystem};
/// # use ggui::gamecore::{events::NamedEvent, storages::EventStorage};
/// # use ggui::inputcore::{keys::MouseButton, system::InputSystem};
/// # use ggui::mathcore::vectors::Vector2Int;
/// let mut ui: UiSystem = UiSystem::new("FixedSys");
/// let _ = ui.load_layout(
///     &MarkupNode::new("Button")
///         .with_attribute("Size", "200,100")
///         .with_attribute("OnClick", "Play"),
/// );
///
/// let mut input: InputSystem = InputSystem::new();
/// let mut events: EventStorage = EventStorage::new();
/// input.mouse_mut().set_position(Vector2Int::from([50, 50]));
/// input.mouse_mut().set_button(MouseButton::Left, true);
/// ui.update(0.016, &input, &mut events);
/// input.begin_frame();
/// input.mouse_mut().set_button(MouseButton::Left, false);
/// ui.update(0.016, &input, &mut events);
///
/// assert_eq!(events.remove::<NamedEvent>().map(|events| events.len()), Some(1));
/// ```
///
#[derive(Debug)]
pub struct UiSystem {
    /// Tree of widgets.
    ///
    tree: WidgetTree,
    /// Root of loaded layout.
    ///
    root: Option<WidgetId>,
    /// Factory that builds widgets from markup.
    ///
    factory: WidgetFactory,
    /// Font that is used for widget texts.
    ///
    font: String,

    /// Virtual resolution.
    ///
    extents: Vector2,
    /// Size of the area that virtual resolution is stretched over.
    ///
    viewport: Vector2,

    /// Widget that was pressed and was not released yet.
    ///
    pressed: Option<WidgetId>,
}
impl UiSystem {
    /// Default virtual resolution.
    ///
    pub const DEFAULT_EXTENTS: Vector2 = Vector2::new(1600.0, 900.0);

    /// Creates empty [`UiSystem`] that draws texts with given font.
    ///
    /// Viewport initially matches virtual resolution.
    ///
    pub fn new(font: &str) -> Self {
        UiSystem {
            tree: WidgetTree::new(),
            root: None,
            factory: WidgetFactory::new(),
            font: font.to_string(),

            extents: UiSystem::DEFAULT_EXTENTS,
            viewport: UiSystem::DEFAULT_EXTENTS,

            pressed: None,
        }
    }

    /// Replaces current tree with the one that is built from layout and returns its root.
    ///
    /// Current tree is kept if building fails.
    ///
    pub fn load_layout<N: LayoutNode>(&mut self, node: &N) -> Result<WidgetId, BuildError> {
        let mut tree: WidgetTree = WidgetTree::new();
        let root: WidgetId = tree.build_from_node(&self.factory, node)?;
        info!("Layout with {} widgets was loaded", tree.len());
        self.tree = tree;
        self.root = Some(root);
        self.pressed = None;
        Ok(root)
    }
    /// Loads [`MarkupNode`] from `layouts` folder of the asset directory and builds tree from it.
    ///
    /// Build errors are reported as [`ErrorKind::InvalidData`].
    ///
    pub fn load_layout_asset(&mut self, manager: &AssetManager, name: &str) -> Result<WidgetId, Error> {
        let node: MarkupNode = manager.load_asset(name, LayoutAssetFormat)?;
        self.load_layout(&node)
            .map_err(|error| Error::new(ErrorKind::InvalidData, error))
    }
    /// Removes all widgets.
    ///
    pub fn unload_layout(&mut self) {
        self.tree.clear();
        self.root = None;
        self.pressed = None;
    }

    /// Returns widget tree.
    ///
    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }
    /// Returns mutable reference to widget tree.
    ///
    pub fn tree_mut(&mut self) -> &mut WidgetTree {
        &mut self.tree
    }
    /// Returns root of loaded layout.
    ///
    pub fn root(&self) -> Option<WidgetId> {
        self.root
    }
    /// Returns mutable reference to widget factory, so custom tags can be registered.
    ///
    pub fn factory_mut(&mut self) -> &mut WidgetFactory {
        &mut self.factory
    }
    /// Returns widget with given name (root is not checked).
    ///
    pub fn find_by_name(&self, name: &str) -> Option<&Widget> {
        let id: WidgetId = self.tree.find_by_name(self.root?, name)?;
        self.tree.get(id)
    }
    /// Hides or shows first widget with given name. Returns whether it was found.
    ///
    pub fn set_widget_visibility(&mut self, name: &str, hidden: bool) -> bool {
        match self.root {
            Some(root) => self.tree.set_widget_visibility(root, name, hidden),
            None => false,
        }
    }

    /// Returns font of widget texts.
    ///
    pub fn font(&self) -> &str {
        &self.font
    }
    /// Sets font of widget texts.
    ///
    pub fn set_font(&mut self, font: &str) {
        self.font = font.to_string();
    }
    /// Returns virtual resolution.
    ///
    pub fn extents(&self) -> Vector2 {
        self.extents
    }
    /// Sets virtual resolution.
    ///
    pub fn set_extents(&mut self, extents: Vector2) {
        self.extents = extents;
    }
    /// Sets size of the viewport (usually window size in pixels).
    ///
    pub fn set_viewport_size(&mut self, width: u32, height: u32) {
        self.viewport = Vector2::new(width as f32, height as f32);
    }
    /// Maps viewport point to virtual coordinates.
    ///
    /// # Example
    /// ```rust
    /// # use ggui::uicore::system::UiSystem;
    /// # use ggui::mathcore::vectors::Point;
    /// let mut ui: UiSystem = UiSystem::new("FixedSys");
    /// ui.set_viewport_size(800, 450);
    /// assert_eq!(ui.to_virtual(Point::new(400.0, 450.0)), Point::new(800.0, 900.0));
    /// ```
    ///
    pub fn to_virtual(&self, point: Point) -> Point {
        if self.viewport.x <= 0.0 || self.viewport.y <= 0.0 {
            return point;
        }
        Point::new(
            point.x * self.extents.x / self.viewport.x,
            point.y * self.extents.y / self.viewport.y,
        )
    }

    /// Updates tree and handles clicks.
    ///
    pub fn update(&mut self, delta_seconds: f32, input: &impl InputState, events: &mut impl EventSink) {
        let root: WidgetId = match self.root {
            Some(root) => root,
            None => return,
        };
        self.tree.update(root, delta_seconds);

        let cursor: Point = self.to_virtual(input.cursor_position());
        if input.was_mouse_button_just_pressed(MouseButton::Left) {
            // Release of previous press may have never been seen.
            if let Some(stale) = self.pressed.take() {
                if let Some(widget) = self.tree.get_mut(stale) {
                    widget.unset_pressed();
                }
            }
            if let Some(hit) = self.tree.widget_at_point(root, cursor) {
                if let Some(widget) = self.tree.get_mut(hit) {
                    if widget.is_clickable() {
                        widget.set_pressed();
                        self.pressed = Some(hit);
                    }
                }
            }
        }
        if input.was_mouse_button_just_released(MouseButton::Left) {
            if let Some(pressed) = self.pressed.take() {
                let hit: Option<WidgetId> = self.tree.widget_at_point(root, cursor);
                if let Some(widget) = self.tree.get_mut(pressed) {
                    if hit == Some(pressed) && widget.is_pressed() && widget.is_clickable() {
                        widget.on_click(events);
                    } else {
                        widget.unset_pressed();
                    }
                }
            }
        }
    }
    /// Renders tree in orthographic projection of virtual resolution.
    ///
    pub fn render(&self, renderer: &mut dyn Renderer) {
        if let Some(root) = self.root {
            renderer.begin_ortho(Point::zero(), self.extents);
            self.tree.render(root, renderer, &self.font);
            renderer.end_ortho();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UiSystem;
    use crate::{
        gamecore::{events::NamedEvent, storages::EventStorage},
        graphicscore::drawing::{DrawCall, RecordingRenderer},
        inputcore::{keys::MouseButton, system::InputSystem},
        mathcore::vectors::{Point, Vector2Int},
        uicore::{layout::MarkupNode, widgets::WidgetState},
    };

    fn menu() -> MarkupNode {
        MarkupNode::new("Panel")
            .with_attribute("Size", "1600,900")
            .with_attribute("BorderWidth", "0")
            .with_child(
                MarkupNode::new("Button")
                    .with_attribute("Name", "Play")
                    .with_attribute("Offset", "100,100")
                    .with_attribute("Size", "200,50")
                    .with_attribute("BorderWidth", "0")
                    .with_attribute("OnClick", "StartGame"),
            )
            .with_child(
                MarkupNode::new("Button")
                    .with_attribute("Name", "Quit")
                    .with_attribute("Offset", "100,200")
                    .with_attribute("Size", "200,50")
                    .with_attribute("BorderWidth", "0")
                    .with_attribute("OnClick", "QuitGame"),
            )
    }

    fn click(ui: &mut UiSystem, events: &mut EventStorage, press: [i32; 2], release: [i32; 2]) {
        let mut input: InputSystem = InputSystem::new();
        input.mouse_mut().set_position(Vector2Int::from(press));
        input.mouse_mut().set_button(MouseButton::Left, true);
        ui.update(0.016, &input, events);

        input.begin_frame();
        input.mouse_mut().set_position(Vector2Int::from(release));
        input.mouse_mut().set_button(MouseButton::Left, false);
        ui.update(0.016, &input, events);
    }

    fn fired(events: &mut EventStorage) -> Vec<String> {
        events
            .remove::<NamedEvent>()
            .unwrap_or_default()
            .into_iter()
            .map(|event| event.name)
            .collect()
    }

    #[test]
    fn clicks() {
        let mut ui: UiSystem = UiSystem::new("FixedSys");
        let _ = ui.load_layout(&menu()).expect("Layout is valid");
        let mut events: EventStorage = EventStorage::new();

        click(&mut ui, &mut events, [150, 120], [160, 125]);
        assert_eq!(fired(&mut events), vec![String::from("StartGame")]);

        // Released outside of pressed widget.
        click(&mut ui, &mut events, [150, 120], [150, 220]);
        assert!(fired(&mut events).is_empty());
        assert!(!ui.find_by_name("Play").map_or(true, |widget| widget.is_pressed()));

        // Panel has no `OnClick`, so nothing is fired.
        click(&mut ui, &mut events, [1000, 800], [1000, 800]);
        assert!(fired(&mut events).is_empty());

        assert!(ui.set_widget_visibility("Quit", true));
        click(&mut ui, &mut events, [150, 220], [150, 220]);
        assert!(fired(&mut events).is_empty());
        assert!(ui.set_widget_visibility("Quit", false));
        click(&mut ui, &mut events, [150, 220], [150, 220]);
        assert_eq!(fired(&mut events), vec![String::from("QuitGame")]);
    }

    #[test]
    fn lost_release() {
        let mut ui: UiSystem = UiSystem::new("FixedSys");
        let _ = ui.load_layout(&menu()).expect("Layout is valid");
        let mut events: EventStorage = EventStorage::new();

        let mut input: InputSystem = InputSystem::new();
        input.mouse_mut().set_position(Vector2Int::from([150, 120]));
        input.mouse_mut().set_button(MouseButton::Left, true);
        ui.update(0.016, &input, &mut events);
        assert!(ui.find_by_name("Play").map_or(false, |widget| widget.is_pressed()));

        click(&mut ui, &mut events, [150, 220], [150, 220]);
        assert_eq!(fired(&mut events), vec![String::from("QuitGame")]);
        assert!(!ui.find_by_name("Play").map_or(true, |widget| widget.is_pressed()));
        assert!(!ui.find_by_name("Quit").map_or(true, |widget| widget.is_pressed()));
    }

    #[test]
    fn disabled_widgets() {
        let mut ui: UiSystem = UiSystem::new("FixedSys");
        let root = ui.load_layout(&menu()).expect("Layout is valid");
        let play = ui.tree().find_by_name(root, "Play").expect("Button exists");
        ui.tree_mut().set_state(play, WidgetState::Disabled);

        let mut events: EventStorage = EventStorage::new();
        click(&mut ui, &mut events, [150, 120], [150, 120]);
        assert!(fired(&mut events).is_empty());
    }

    #[test]
    fn viewport_mapping() {
        let mut ui: UiSystem = UiSystem::new("FixedSys");
        let _ = ui.load_layout(&menu()).expect("Layout is valid");
        ui.set_viewport_size(800, 450);
        assert_eq!(ui.to_virtual(Point::new(80.0, 60.0)), Point::new(160.0, 120.0));

        let mut events: EventStorage = EventStorage::new();
        click(&mut ui, &mut events, [80, 60], [80, 60]);
        assert_eq!(fired(&mut events), vec![String::from("StartGame")]);
    }

    #[test]
    fn layout_asset() {
        use crate::datacore::assets::{AssetFormat, AssetManager, LayoutAssetFormat};
        use std::{fs::remove_dir_all, io::ErrorKind};

        let directory = std::env::temp_dir().join("ggui_layout_asset_test");
        let manager: AssetManager =
            AssetManager::initialize_at(&directory, &[LayoutAssetFormat.format_folder()])
                .expect("Temporary directory is writable");
        manager
            .save_asset("menu.layout", LayoutAssetFormat, &menu())
            .expect("Layouts folder exists");
        manager
            .save_asset("broken.layout", LayoutAssetFormat, &MarkupNode::new("Slider"))
            .expect("Layouts folder exists");

        let mut ui: UiSystem = UiSystem::new("FixedSys");
        assert!(ui.load_layout_asset(&manager, "menu.layout").is_ok());
        assert!(ui.find_by_name("Quit").is_some());
        assert_eq!(
            ui.load_layout_asset(&manager, "broken.layout").map_err(|error| error.kind()),
            Err(ErrorKind::InvalidData)
        );
        assert_eq!(ui.tree().len(), 3);

        remove_dir_all(&directory).expect("Temporary directory is removable");
    }

    #[test]
    fn load_and_render() {
        let mut ui: UiSystem = UiSystem::new("FixedSys");
        let mut renderer: RecordingRenderer = RecordingRenderer::new();
        ui.render(&mut renderer);
        assert!(renderer.calls().is_empty());

        assert!(ui.load_layout(&MarkupNode::new("Slider")).is_err());
        assert_eq!(ui.root(), None);

        let _ = ui.load_layout(&menu()).expect("Layout is valid");
        assert_eq!(ui.tree().len(), 3);
        ui.render(&mut renderer);
        assert_eq!(
            renderer.calls().first(),
            Some(&DrawCall::BeginOrtho {
                mins: Point::zero(),
                maxs: UiSystem::DEFAULT_EXTENTS,
            })
        );
        assert_eq!(renderer.calls().last(), Some(&DrawCall::EndOrtho));
        assert_eq!(renderer.boxes().len(), 3);

        ui.unload_layout();
        assert!(ui.tree().is_empty());
    }
}
