mod app;
mod braille;
mod config;
mod form;
mod frame;
mod locale;
mod logging;
mod particles;
mod percentile;
mod theme;
mod ui;

use app::App;
use clap::Parser;
use config::AppConfig;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use form::FormField;
use frame::AnimationLoop;
use locale::Locale;
use percentile::Gender;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};
use theme::Theme;

#[derive(Parser, Debug)]
#[command(name = "height-rank")]
#[command(about = "Height percentile calculator over an interactive particle field in the terminal")]
struct Args {
    // === Configuration ===
    /// Config file to load (defaults to the platform config dir when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective configuration to this file and exit
    #[arg(long = "save-config")]
    save_config: Option<PathBuf>,

    /// Starting theme (light, dark)
    #[arg(long)]
    theme: Option<String>,

    /// Language of labels and messages (en, ko)
    #[arg(long)]
    locale: Option<String>,

    /// Animation frames per second (1-200)
    #[arg(long)]
    fps: Option<u32>,

    /// Seed for the particle generator (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    // === Form ===
    /// Prefill the name field
    #[arg(long)]
    name: Option<String>,

    /// Prefill the height field (centimeters)
    #[arg(long)]
    height: Option<String>,

    /// Prefill the gender (male, female)
    #[arg(long)]
    gender: Option<String>,

    /// Print the estimate for the prefilled values and exit without the UI
    #[arg(long, default_value = "false")]
    print: bool,

    // === Logging ===
    /// Log level or filter spec (overridden by RUST_LOG)
    #[arg(long = "log-level", default_value = "info")]
    log_level: String,

    /// Directory for log files
    #[arg(long = "log-dir")]
    log_dir: Option<PathBuf>,
}

fn parse_theme(s: &str) -> Theme {
    match s.to_lowercase().as_str() {
        "dark" | "d" => Theme::Dark,
        _ => Theme::Light,
    }
}

fn parse_locale(s: &str) -> Locale {
    match s.to_lowercase().as_str() {
        "ko" | "kr" | "korean" | "ko-kr" => Locale::Ko,
        _ => Locale::En,
    }
}

fn parse_gender(s: &str) -> Gender {
    match s.to_lowercase().as_str() {
        "female" | "f" | "woman" | "여성" => Gender::Female,
        _ => Gender::Male,
    }
}

/// Merge the config file with command-line overrides
fn resolve_config(args: &Args) -> Result<AppConfig, config::ConfigError> {
    let mut config = match &args.config {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::load_default()?,
    };

    if let Some(theme) = &args.theme {
        config.theme = parse_theme(theme);
    }
    if let Some(locale) = &args.locale {
        config.locale = parse_locale(locale);
    }
    if let Some(fps) = args.fps {
        config.frame_interval_ms = 1000 / u64::from(fps.clamp(1, 200));
    }
    if let Some(dir) = &args.log_dir {
        config.log_dir = Some(dir.clone());
    }

    Ok(config.clamped())
}

/// Form values given on the command line
fn prefill(args: &Args) -> (String, String, Gender) {
    (
        args.name.clone().unwrap_or_default(),
        args.height.clone().unwrap_or_default(),
        args.gender.as_deref().map(parse_gender).unwrap_or_default(),
    )
}

/// One-shot `--print` mode: the message and the process exit code (2 on invalid input)
fn print_estimate(args: &Args, config: &AppConfig) -> (String, u8) {
    let (name, height, gender) = prefill(args);
    let message = app::evaluate(form::validate(&name, &height, gender), config.locale);
    let code = if message.is_error() { 2 } else { 0 };
    (message.text().to_string(), code)
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = resolve_config(&args)?;

    if let Some(path) = &args.save_config {
        config.save_to_file(path)?;
        println!("Saved config to {}", path.display());
        return Ok(ExitCode::SUCCESS);
    }

    let (name, height, gender) = prefill(&args);

    if args.print {
        let (message, code) = print_estimate(&args, &config);
        println!("{}", message);
        return Ok(ExitCode::from(code));
    }

    let _logger = logging::setup(&args.log_level, &config.resolved_log_dir())?;
    log::info!("starting with {:?}", config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Particle canvas covers the whole terminal
    let size = terminal.size()?;
    let mut app = App::new(size.width, size.height, &config, args.seed);
    app.form.name = name;
    app.form.height = height;
    app.form.gender = gender;
    log::info!(
        "canvas {}x{} cells, {} particles",
        size.width,
        size.height,
        app.field.particles.len()
    );

    let mut frames = AnimationLoop::new(
        Duration::from_millis(config.frame_interval_ms),
        Instant::now(),
    );
    log::debug!("frame interval {:?}", frames.interval());

    // Run the app
    let res = run_app(&mut terminal, &mut app, &mut frames);

    // Cleanup
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    log::info!("exiting after {} frames", frames.frames());
    Ok(ExitCode::from(loop_status(res)))
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    frames: &mut AnimationLoop,
) -> io::Result<()> {
    while frames.is_running() {
        let now = Instant::now();
        if frames.is_due(now) {
            // Update every particle, then redraw the whole surface
            app.tick();
            terminal.draw(|frame| ui::render(frame, app))?;
            frames.advance(Instant::now());
        }

        // Handlers run to completion before the next frame
        if event::poll(frames.timeout(Instant::now()))? {
            match event::read()? {
                Event::Key(key) => handle_key(app, frames, key),
                Event::Mouse(mouse) => handle_mouse(app, mouse),
                Event::Resize(width, height) => app.resize(width, height),
                _ => {}
            }
        }
    }
    Ok(())
}

/// Report a failed event loop; the result becomes the process exit code
fn loop_status(res: io::Result<()>) -> u8 {
    match res {
        Ok(()) => 0,
        Err(err) => {
            log::error!("event loop failed: {}", err);
            eprintln!("Error: {:?}", err);
            1
        }
    }
}

fn handle_key(app: &mut App, frames: &mut AnimationLoop, key: KeyEvent) {
    // Only process Press events
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => frames.cancel(),
            KeyCode::Char('t') => app.toggle_theme(),
            KeyCode::Char('l') => app.toggle_locale(),
            KeyCode::Char('p') => app.toggle_pause(),
            _ => {}
        }
        return;
    }

    // Help overlay captures navigation while open
    if app.show_help {
        match key.code {
            KeyCode::F(1) | KeyCode::Esc => app.toggle_help(),
            KeyCode::Up => app.scroll_help_up(),
            KeyCode::Down => app.scroll_help_down(ui::HELP_CONTENT_LINES),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => frames.cancel(),
        KeyCode::F(1) => app.toggle_help(),
        KeyCode::Tab | KeyCode::Down => app.form.next_focus(),
        KeyCode::BackTab | KeyCode::Up => app.form.prev_focus(),
        KeyCode::Enter => app.activate_focused(),
        KeyCode::Backspace => app.form.backspace(),
        KeyCode::Left | KeyCode::Right if app.form.focus == FormField::Gender => {
            app.form.toggle_gender()
        }
        KeyCode::Char(' ') if app.form.focus == FormField::Gender => app.form.toggle_gender(),
        KeyCode::Char(' ') if !app.form.focus.is_text() => app.activate_focused(),
        KeyCode::Char(c) => app.form.insert_char(c),
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            app.pointer_moved(mouse.column, mouse.row);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            app.pointer_moved(mouse.column, mouse.row);
            let layout = ui::form_layout(app);
            match layout.hit(mouse.column, mouse.row) {
                Some(FormField::Submit) => {
                    app.focus(FormField::Submit);
                    app.submit();
                }
                Some(FormField::ThemeToggle) => {
                    app.focus(FormField::ThemeToggle);
                    app.toggle_theme();
                }
                Some(FormField::Gender) => {
                    if app.form.focus == FormField::Gender {
                        app.form.toggle_gender();
                    }
                    app.focus(FormField::Gender);
                }
                Some(field) => app.focus(field),
                None => {}
            }
        }
        _ => {}
    }
}
