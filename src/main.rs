use formloom::app::FormApp;
use formloom::core::manifest::FormManifest;
use formloom::forms::DemoForm;
use formloom::terminal::{Terminal, TerminalEvent};
use std::path::Path;
use std::time::Duration;
use std::{fs, io};

fn main() {
    let name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "registration".to_string());

    let app = match load_app(&name) {
        Ok(app) => app,
        Err(message) => {
            eprintln!("Error: {message}");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(app) {
        eprintln!("Error: {}", e);
    }
}

/// The argument names a built-in demo form, or a YAML/JSON manifest path.
fn load_app(name: &str) -> Result<FormApp, String> {
    if let Some(demo) = DemoForm::from_name(name) {
        return FormApp::new(demo).map_err(|error| error.to_string());
    }

    let path = Path::new(name);
    if path.exists() {
        let input = fs::read_to_string(path).map_err(|error| error.to_string())?;
        let manifest = if path.extension().is_some_and(|ext| ext == "json") {
            FormManifest::from_json(&input)
        } else {
            FormManifest::from_yaml(&input)
        }
        .map_err(|error| error.to_string())?;
        return FormApp::from_manifest(manifest).map_err(|error| error.to_string());
    }

    let names: Vec<&str> = DemoForm::ALL.iter().map(|demo| demo.name()).collect();
    Err(format!(
        "unknown form `{name}`; expected one of {} or a manifest path",
        names.join(", ")
    ))
}

fn run(mut app: FormApp) -> io::Result<()> {
    let mut terminal = Terminal::new()?;
    terminal.enter_raw_mode()?;

    let result = event_loop(&mut terminal, &mut app);

    terminal.exit_raw_mode()?;
    result
}

fn event_loop(terminal: &mut Terminal, app: &mut FormApp) -> io::Result<()> {
    let mut render_requested = true;

    loop {
        if terminal.poll(Duration::from_millis(100))? {
            match terminal.read_event()? {
                TerminalEvent::Key(key) => {
                    app.handle_key(key);
                    render_requested = true;
                }
                TerminalEvent::Resize(_) => {
                    render_requested = true;
                }
            }
        }

        if app.tick() {
            render_requested = true;
        }

        if render_requested {
            app.render(terminal)?;
            render_requested = false;
        }

        if app.should_exit() {
            break;
        }
    }

    Ok(())
}
