//! Main app runner
//!
//! Loads config, sets up logging, and dispatches the parsed command.

use std::env;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use log::debug;

use crate::application::ports::{ClipboardError, ConfigStore, Pasteboard};
use crate::application::{resolve_version, ClipboardAccessor, BUILD_VERSION};
use crate::domain::config::AppConfig;
use crate::infrastructure::{open_system_pasteboard, XdgConfigStore};

use super::args::{Cli, Commands};
use super::clipboard_cmd::{render_clip, render_types, run_clear, run_set};
use super::config_cmd::handle_config_command;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Name shown in usage hints when argv[0] is unavailable
const FALLBACK_PROGRAM_NAME: &str = "pasteboard";

/// Run a parsed command line against the system clipboard
pub fn run(cli: Cli) -> ExitCode {
    let presenter = Presenter::new();
    let store = XdgConfigStore::new();

    // A broken file is reported and ignored, so `config` can still repair it
    let config = load_merged_config(&store, &presenter);
    init_logging(&config);

    if let Commands::Config { action } = cli.command {
        return match handle_config_command(action, &store, &presenter) {
            Ok(()) => ExitCode::from(EXIT_SUCCESS),
            Err(e) => {
                presenter.error(&e.to_string());
                ExitCode::from(EXIT_ERROR)
            }
        };
    }

    let mut accessor = ClipboardAccessor::new(open_system_pasteboard);
    ExitCode::from(run_command(
        cli.command,
        &mut accessor,
        &config,
        &presenter,
        io::stdin(),
    ))
}

/// Dispatch a clipboard or version command, returning the exit code.
///
/// `input` supplies the text for `set` when none is given on the command line.
pub fn run_command<P: Pasteboard, R: Read>(
    command: Commands,
    accessor: &mut ClipboardAccessor<P>,
    config: &AppConfig,
    presenter: &Presenter,
    input: R,
) -> u8 {
    let program = program_name();
    let result: Result<(), ClipboardError> = match command {
        Commands::Clear => run_clear(accessor),
        Commands::Types => {
            presenter.output_inline(&render_types(accessor));
            Ok(())
        }
        Commands::Clip { content_type } => {
            let content_type = content_type.unwrap_or_else(|| config.default_type_or_default());
            presenter.output_inline(&render_clip(accessor, &content_type, &program));
            Ok(())
        }
        Commands::Set { content_type, text } => {
            let text = match text {
                Some(text) => text,
                None => match read_input(input) {
                    Ok(text) => text,
                    Err(e) => {
                        presenter.error(&format!("Failed to read stdin: {}", e));
                        return EXIT_ERROR;
                    }
                },
            };
            let content_type = content_type.unwrap_or_else(|| config.default_type_or_default());
            run_set(accessor, &text, &content_type)
        }
        Commands::Version => return run_version(&program, presenter),
        Commands::Config { .. } => {
            presenter.error("config is not a clipboard command");
            return EXIT_USAGE_ERROR;
        }
    };

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            presenter.error(&e.to_string());
            EXIT_ERROR
        }
    }
}

fn run_version(program: &str, presenter: &Presenter) -> u8 {
    match resolve_version(BUILD_VERSION, &executable_dir()) {
        Ok(version) => {
            presenter.output(&format!("{} {}", program, version));
            EXIT_SUCCESS
        }
        Err(e) => {
            presenter.error(&e.to_string());
            EXIT_ERROR
        }
    }
}

/// Load the config file over the defaults.
///
/// An unreadable or invalid file is reported and ignored.
pub fn load_merged_config<S: ConfigStore>(store: &S, presenter: &Presenter) -> AppConfig {
    let file_config = store.load().unwrap_or_else(|e| {
        presenter.warn(&format!("Ignoring config file: {}", e));
        AppConfig::empty()
    });

    // Merge: defaults < file
    AppConfig::defaults().merge(file_config)
}

/// Initialize env_logger. RUST_LOG overrides the configured level.
fn init_logging(config: &AppConfig) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level_or_default()),
    )
    .format_timestamp_secs()
    .try_init();
    debug!("Logging initialized");
}

/// File name of argv[0], as typed by the user
pub fn program_name() -> String {
    env::args_os()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_PROGRAM_NAME.to_string())
}

fn executable_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn read_input<R: Read>(mut input: R) -> io::Result<String> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    Ok(text)
}
