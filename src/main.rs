// PanelKit Demo
// One-shot demo wiring: a themed panel window with tabs, sections, and controls

// IMPORTS ------------------>>

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use panelkit::{
    theme, App, AppEvent, ButtonConfig, ButtonVariant, EventHandler, Notification, Notifier,
    SectionConfig, SliderConfig, TabConfig, ToggleConfig, WindowConfig,
};

//--------------------------------------------------------<<

/// Poll timeout; doubles as the frame tick.
const TICK: Duration = Duration::from_millis(50);

/// Requests raised from control callbacks, drained once per event turn.
enum DemoAction {
    SetTheme(String),
    Notify(Notification),
}

type ActionQueue = Rc<RefCell<Vec<DemoAction>>>;

// ┌────────────────────────────────────────────────────────────────────────────────────┐
// │                                  MAIN ENTRY POINT                                  │
// └────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    let mut app = App::new();
    load_user_themes(&mut app);

    let actions: ActionQueue = Rc::new(RefCell::new(Vec::new()));
    build_demo_window(&mut app, &actions);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, &actions);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    actions: &ActionQueue,
) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| app.render(f))?;

        if event::poll(TICK)? {
            let app_event = EventHandler::handle(event::read()?);
            if app_event != AppEvent::None {
                app.handle_event(app_event);
            }
        }

        // Callbacks only queue requests; apply them between event turns
        let drained: Vec<DemoAction> = actions.borrow_mut().drain(..).collect();
        for action in drained {
            match action {
                // A failed switch is a silent no-op
                DemoAction::SetTheme(name) => {
                    let _ = app.set_theme(&name);
                }
                DemoAction::Notify(notification) => app.notices_mut().notify(notification),
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

// ┌────────────────────────────────────────────────────────────────────────────────────┐
// │                                    DEMO WIRING                                     │
// └────────────────────────────────────────────────────────────────────────────────────┘

/// Register extra themes from src/themes.yaml, if present.
fn load_user_themes(app: &mut App) {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("src");
    path.push("themes.yaml");
    if !path.exists() {
        return;
    }
    match theme::load_themes(&path) {
        Ok(themes) => {
            for (name, theme) in themes {
                app.themes_mut().register(&name, theme);
            }
        }
        Err(e) => {
            eprintln!("Warning: failed to load user themes: {e}");
            eprintln!("Continuing with builtin themes");
        }
    }
}

fn notify(actions: &ActionQueue, title: &str, content: String) {
    actions
        .borrow_mut()
        .push(DemoAction::Notify(Notification::new(title, content)));
}

fn build_demo_window(app: &mut App, actions: &ActionQueue) {
    let theme_names: Vec<String> = app
        .themes()
        .names()
        .iter()
        .map(|name| name.to_string())
        .collect();

    let window = app.create_window(WindowConfig {
        title: "PanelKit Demo".to_string(),
        author: "panelkit".to_string(),
        size: (76, 24),
        acrylic: true,
        ..WindowConfig::default()
    });

    // --- Dashboard ---
    let dashboard = window.create_tab(TabConfig {
        title: "Dashboard".to_string(),
        icon: "dashboard".to_string(),
        desc: "Everyday controls".to_string(),
        ..TabConfig::default()
    });
    if let Some(tab) = window.tab_mut(dashboard) {
        let general = tab.create_section(SectionConfig {
            title: "General".to_string(),
        });
        let queue = Rc::clone(actions);
        general.create_toggle(ToggleConfig {
            title: "Enable tooltips".to_string(),
            value: true,
            on_change: Some(Box::new(move |on| {
                notify(&queue, "Tooltips", format!("Tooltips {}", if on { "on" } else { "off" }));
            })),
        });
        let queue = Rc::clone(actions);
        general.create_toggle(ToggleConfig {
            title: "Autosave".to_string(),
            value: false,
            on_change: Some(Box::new(move |on| {
                notify(&queue, "Autosave", format!("Autosave {}", if on { "on" } else { "off" }));
            })),
        });
        let queue = Rc::clone(actions);
        general.create_button(ButtonConfig {
            title: "Save layout".to_string(),
            variant: ButtonVariant::Primary,
            on_click: Some(Box::new(move || {
                notify(&queue, "Layout", "Layout saved".to_string());
            })),
        });

        let text = tab.create_section(SectionConfig {
            title: "Text".to_string(),
        });
        let queue = Rc::clone(actions);
        // Slider creation only fails on invalid bounds; these are static
        let _ = text.create_slider(SliderConfig {
            title: "Font size".to_string(),
            min: 16.0,
            max: 100.0,
            step: 1.0,
            value: 16.0,
            on_change: Some(Box::new(move |size| {
                notify(&queue, "Font size", format!("{size:.0} px"));
            })),
        });
    }

    // --- Appearance ---
    let appearance = window.create_tab(TabConfig {
        title: "Appearance".to_string(),
        icon: "palette".to_string(),
        desc: "Themes and window chrome".to_string(),
        ..TabConfig::default()
    });
    if let Some(tab) = window.tab_mut(appearance) {
        let themes = tab.create_section(SectionConfig {
            title: "Theme".to_string(),
        });
        for name in &theme_names {
            let queue = Rc::clone(actions);
            let target = name.clone();
            themes.create_button(ButtonConfig {
                title: name.clone(),
                variant: ButtonVariant::Default,
                on_click: Some(Box::new(move || {
                    queue
                        .borrow_mut()
                        .push(DemoAction::SetTheme(target.clone()));
                })),
            });
        }
    }

    // --- Premium (locked) ---
    window.create_tab(TabConfig {
        title: "Premium".to_string(),
        icon: "star".to_string(),
        desc: "Locked content".to_string(),
        locked: true,
    });

    // --- About ---
    let about = window.create_tab(TabConfig {
        title: "About".to_string(),
        icon: "info".to_string(),
        desc: "PanelKit demo application".to_string(),
        ..TabConfig::default()
    });
    if let Some(tab) = window.tab_mut(about) {
        let section = tab.create_section(SectionConfig {
            title: "Diagnostics".to_string(),
        });
        let queue = Rc::clone(actions);
        section.create_button(ButtonConfig {
            title: "Show notification".to_string(),
            variant: ButtonVariant::Default,
            on_click: Some(Box::new(move || {
                queue.borrow_mut().push(DemoAction::Notify(
                    Notification::new("Hello", "Fire-and-forget toast")
                        .with_duration(Duration::from_secs(4))
                        .with_icon("check"),
                ));
            })),
        });
    }
}
