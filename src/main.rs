//! QuickSearch: a keyboard-driven search launcher
//!
//! Terminal front end: every line read from stdin is one submission. Lines
//! starting with `?` only update the debounced direct mode preview.

use anyhow::{bail, Result};
use quicksearch::{
    config,
    launcher::{Navigator, PrintOnly, SystemBrowser},
    preview::LivePreview,
    Launcher, Submission,
};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

struct Options {
    config: Option<PathBuf>,
    print_only: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let Some(options) = parse_args()? else {
        return Ok(());
    };

    let settings = config::load(options.config)?;

    // Logs go to stderr so stdout stays usable for printed URLs
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting QuickSearch v{}", quicksearch::VERSION);

    let mut launcher = Launcher::from_settings(&settings);
    let navigator: Box<dyn Navigator> = if options.print_only || !settings.launcher.open_in_browser {
        Box::new(PrintOnly)
    } else {
        Box::new(SystemBrowser)
    };

    let (mut live, mut updates) =
        LivePreview::new(launcher.shortcuts(), settings.preview.debounce());
    let jump_label = settings.preview.direct_label.clone();

    eprintln!("{} (type /help for commands, :use <engine> to switch)", launcher.placeholder());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };

                // `?text` stands in for typing: it only refreshes the preview
                if let Some(typed) = line.strip_prefix('?') {
                    live.input_changed(typed);
                    continue;
                }
                live.cancel();

                if let Some(rest) = line.trim().strip_prefix(':') {
                    handle_meta(&mut launcher, rest);
                    continue;
                }
                handle_submission(&mut launcher, navigator.as_ref(), &line);
            }
            Some(update) = updates.recv() => {
                if let Some(indicator) = update.indicator {
                    eprintln!("[{}] {}", indicator.label(&jump_label), update.input.trim());
                }
            }
        }
    }

    Ok(())
}

fn handle_submission(launcher: &mut Launcher, navigator: &dyn Navigator, line: &str) {
    match launcher.submit(line) {
        None => {}
        Some(Submission::Navigate { url, direct }) => {
            if direct {
                if let Some(label) = launcher.preview(line) {
                    eprintln!("[{}]", label);
                }
            }
            if let Err(e) = navigator.navigate(&url) {
                error!("{:#}", e);
                eprintln!("Unable to open search results: {}", url);
            }
        }
        Some(Submission::Command(Ok(outcome))) => {
            println!("{}", outcome);
            if outcome.is_mutation() {
                print_engines(launcher);
            }
        }
        Some(Submission::Command(Err(e))) => {
            if e.is_usage() {
                debug!("Rejected command {:?}", line);
            } else {
                warn!("Command failed: {}", e);
            }
            eprintln!("{}", e);
        }
    }
}

fn print_engines(launcher: &Launcher) {
    let selected = &launcher.selection().selected_engine_name;
    for engine in launcher.engines() {
        let marker = if &engine.name == selected { '*' } else { ' ' };
        eprintln!("{} {} ({})", marker, engine.name, engine.domain);
    }
    let (used, capacity) = launcher.storage_usage();
    eprintln!("Custom engine storage: {} of {} bytes", used, capacity);
}

/// Front-end commands: engine listing, selection and shortcuts
fn handle_meta(launcher: &mut Launcher, input: &str) {
    let mut parts = input.splitn(2, char::is_whitespace);
    match (parts.next().unwrap_or_default(), parts.next().map(str::trim)) {
        ("engines", _) => print_engines(launcher),
        ("shortcuts", _) => {
            let shortcuts = launcher.shortcuts();
            for prefix in shortcuts.prefixes() {
                if let Some(shortcut) = shortcuts.get(prefix) {
                    eprintln!("{:<6} {}", prefix, shortcut.display_name);
                }
            }
        }
        ("use", Some(name)) if !name.is_empty() => match launcher.select_engine(name) {
            Ok(()) => eprintln!("{}", launcher.placeholder()),
            Err(e) => eprintln!("{}", e),
        },
        ("pick", Some(letter)) => {
            let picked = letter
                .chars()
                .next()
                .and_then(|c| launcher.quick_select(c).map(|s| s.placeholder()));
            match picked {
                Some(placeholder) => eprintln!("{}", placeholder),
                None => eprintln!("No engine starts with {:?}", letter),
            }
        }
        _ => eprintln!(":engines | :shortcuts | :use <engine> | :pick <letter> | ?<text> to preview"),
    }
}

/// Parse command-line arguments; `None` means the process should exit
fn parse_args() -> Result<Option<Options>> {
    let mut options = Options {
        config: None,
        print_only: false,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-c" | "--config" => match args.next() {
                Some(path) => options.config = Some(PathBuf::from(path)),
                None => bail!("{} requires a file argument", arg),
            },
            "--print" => options.print_only = true,
            "-h" | "--help" => {
                print_usage();
                return Ok(None);
            }
            "-V" | "--version" => {
                println!("quicksearch {}", quicksearch::VERSION);
                return Ok(None);
            }
            other => bail!("Unknown option: {} (see --help)", other),
        }
    }

    Ok(Some(options))
}

/// Print usage information
fn print_usage() {
    println!(
        r#"
QuickSearch v{}
A keyboard-driven search launcher

USAGE:
    quicksearch [OPTIONS]

OPTIONS:
    -c, --config <FILE>    Path to configuration file
        --print            Print URLs instead of opening the browser
    -h, --help             Print help information
    -V, --version          Print version information

ENVIRONMENT VARIABLES:
    QUICKSEARCH_SETTINGS_PATH    Path to settings.yml
    QUICKSEARCH_DEBUG            Enable debug logging (true/false)
    QUICKSEARCH_LOG_LEVEL        Log filter when RUST_LOG is unset
    QUICKSEARCH_STORE_BACKEND    file or memory
    QUICKSEARCH_STORE_PATH       Path to the store file
    QUICKSEARCH_CUSTOM_CAPACITY  Custom engine storage cap in bytes
    QUICKSEARCH_DEBOUNCE_MS      Live preview delay
"#,
        quicksearch::VERSION
    );
}
