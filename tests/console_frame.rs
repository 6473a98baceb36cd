use ggui::{
    consolecore::{
        commands::Command,
        console::{Console, ConsoleSettings},
        registry::CommandRegistry,
    },
    gamecore::events::NamedEvent,
    graphicscore::drawing::{DrawCall, RecordingRenderer},
    inputcore::{
        keys::{Key, MouseButton},
        system::InputSystem,
    },
    mathcore::{vectors::Vector2Int, Color},
    uicore::layout::MarkupNode,
    GGUI,
};

fn init_logger() {
    let _ = pretty_env_logger::try_init();
}

/// Feeds one frame of scripted input to the context.
fn frame(gui: &mut GGUI, input: &mut InputSystem, typed: Option<char>, keys: &[Key]) {
    input.begin_frame();
    if let Some(character) = typed {
        input.keyboard_mut().push_char(character);
    }
    for key in keys {
        input.keyboard_mut().set_key(*key, true);
    }
    gui.update(1.0 / 60.0, input);
    for key in keys {
        input.keyboard_mut().set_key(*key, false);
    }
}

fn enter_line(gui: &mut GGUI, input: &mut InputSystem, line: &str) {
    for character in line.chars() {
        frame(gui, input, Some(character), &[]);
    }
    frame(gui, input, None, &[Key::Enter]);
}

fn count(_: &CommandRegistry, console: &mut Console, command: &Command) {
    let amount: usize = command.parse_arg(0).unwrap_or(1);
    for number in 1..=amount {
        console.print_line(&number.to_string(), Color::CYAN);
    }
}

#[test]
fn console_session() {
    init_logger();
    let mut gui: GGUI = GGUI::new(ConsoleSettings::default());
    gui.registry_mut()
        .register_with_help("count", "count <n>: Counts to n.", count);
    let mut input: InputSystem = InputSystem::new();

    // Backquote opens console and is not typed into it.
    frame(&mut gui, &mut input, Some('`'), &[Key::Backquote]);
    assert!(gui.console().is_active());
    assert_eq!(gui.console().current_line(), "");

    enter_line(&mut gui, &mut input, "COUNT 3");
    let texts: Vec<&str> = gui
        .console()
        .history()
        .iter()
        .map(|line| line.text.as_str())
        .collect();
    assert_eq!(texts, vec!["COUNT 3", "1", "2", "3"]);

    enter_line(&mut gui, &mut input, "help count");
    assert_eq!(
        gui.console().history().last().map(|line| line.text.as_str()),
        Some("count <n>: Counts to n.")
    );

    frame(&mut gui, &mut input, None, &[Key::Up]);
    frame(&mut gui, &mut input, None, &[Key::Up]);
    assert_eq!(gui.console().current_line(), "COUNT 3");
    frame(&mut gui, &mut input, None, &[Key::Escape]);
    assert_eq!(gui.console().current_line(), "");

    let mut renderer: RecordingRenderer = RecordingRenderer::new();
    gui.render(&mut renderer);
    let texts: Vec<&str> = renderer.texts();
    assert_eq!(texts.first(), Some(&"count <n>: Counts to n."));
    assert!(texts.contains(&"COUNT 3"));

    enter_line(&mut gui, &mut input, "runfor 2 clear");
    assert!(gui.console().history().is_empty());
    assert_eq!(gui.console().clear_count(), 2);

    enter_line(&mut gui, &mut input, "quit");
    assert!(gui.is_quitting());
    assert_eq!(gui.console().history().len(), 2);

    // Empty line closes console.
    frame(&mut gui, &mut input, None, &[Key::Enter]);
    assert!(!gui.console().is_active());
    renderer.clear();
    gui.render(&mut renderer);
    assert!(renderer.calls().is_empty());
}

#[test]
fn ui_and_console() {
    init_logger();
    let mut gui: GGUI = GGUI::new(ConsoleSettings::default());
    let layout: MarkupNode = MarkupNode::new("Panel")
        .with_attribute("Name", "MainMenu")
        .with_attribute("Size", "1600,900")
        .with_child(
            MarkupNode::new("Button")
                .with_attribute("Name", "Play")
                .with_attribute("Offset", "700,400")
                .with_attribute("Size", "200,100")
                .with_attribute("OnClick", "StartGame")
                .with_child(
                    MarkupNode::new("Label")
                        .with_attribute("Text", "Play")
                        .with_attribute("Offset", "20,20"),
                ),
        );
    let _ = gui.ui_mut().load_layout(&layout).expect("Layout is valid");
    gui.set_viewport_size(800, 450);
    let mut input: InputSystem = InputSystem::new();

    let click = |gui: &mut GGUI, input: &mut InputSystem| {
        input.begin_frame();
        input.mouse_mut().set_position(Vector2Int::from([400, 225]));
        input.mouse_mut().set_button(MouseButton::Left, true);
        gui.update(1.0 / 60.0, input);
        input.begin_frame();
        input.mouse_mut().set_button(MouseButton::Left, false);
        gui.update(1.0 / 60.0, input);
    };

    click(&mut gui, &mut input);
    assert_eq!(
        gui.events_mut().remove::<NamedEvent>(),
        Some(vec![NamedEvent {
            name: String::from("StartGame")
        }])
    );

    // Open console captures clicks.
    assert!(gui.run_command("echo console is open"));
    gui.console_mut().activate();
    click(&mut gui, &mut input);
    assert_eq!(gui.events_mut().remove::<NamedEvent>(), None);

    let mut renderer: RecordingRenderer = RecordingRenderer::new();
    gui.render(&mut renderer);
    let ortho_count: usize = renderer
        .calls()
        .iter()
        .filter(|call| matches!(call, DrawCall::BeginOrtho { .. }))
        .count();
    assert_eq!(ortho_count, 2);
    let texts: Vec<&str> = renderer.texts();
    assert_eq!(texts, vec!["Play", "console is open"]);
}
