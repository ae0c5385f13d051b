use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;

use autosuggest::Autosuggest;
use autosuggest::app::App;
use autosuggest::config::{self, Config, MatchMode};
use autosuggest::languages::{
    Language, LanguageHandler, LanguageMatcher, builtin_languages, load_languages_from_path,
};

/// Interactive autosuggest input for programming languages
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Configuration file (defaults to ~/.config/autosuggest/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// JSON file with suggestions: [{"name": "...", "year": 1990}, ...]
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Use fuzzy matching instead of prefix matching
    #[arg(long)]
    fuzzy: bool,

    /// Print the suggestions for TEXT and exit without starting the UI
    #[arg(long, value_name = "TEXT")]
    list: Option<String>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    init_logging();

    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Falling back to default configuration: {}", e);
            Config::default()
        }
    };

    let languages = match &args.data {
        Some(path) => load_languages_from_path(path)?,
        None => builtin_languages(),
    };

    let match_mode = if args.fuzzy {
        MatchMode::Fuzzy
    } else {
        config.suggestions.match_mode
    };
    let handler = LanguageHandler::new(languages, LanguageMatcher::new(match_mode));

    if let Some(text) = args.list {
        return print_suggestions(handler, &config, &text);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    if let Err(e) = execute!(io::stdout(), EnableMouseCapture) {
        ratatui::restore();
        return Err(e.into());
    }

    let result = run(terminal, App::new(handler, &config));

    // Restore terminal (automatic cleanup)
    let mouse_result = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    let selected = result?;
    mouse_result?;

    if let Some(language) = selected {
        println!("{}", language);
    }
    Ok(())
}

/// Drive the UI until the user quits, returning the last committed language
fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<Option<Language>> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app.autosuggest.handler().last_selected().cloned())
}

/// Type `text` into a fresh state machine and print what it would show
fn print_suggestions(handler: LanguageHandler, config: &Config, text: &str) -> Result<()> {
    let mut autosuggest =
        Autosuggest::new(handler).with_max_suggestions(config.suggestions.max_visible);
    autosuggest.focus();
    autosuggest.input_changed(text);

    let mut stdout = io::stdout().lock();
    for language in autosuggest.suggestions() {
        writeln!(stdout, "{}", language.name)?;
    }
    Ok(())
}

/// Debug builds log to a file so the terminal UI stays clean
#[cfg(debug_assertions)]
fn init_logging() {
    use std::fs::File;

    let log_path = std::env::temp_dir().join("autosuggest.log");
    let file = match File::create(&log_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("autosuggest: logging disabled, cannot create {}: {}", log_path.display(), e);
            return;
        }
    };

    let result = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
    if let Err(e) = result {
        eprintln!("autosuggest: logging disabled: {}", e);
    }
}
