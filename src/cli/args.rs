//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

use crate::domain::clipboard::ContentType;

/// Pasteboard - read, write, and inspect the system clipboard
#[derive(Parser, Debug)]
#[command(name = "pasteboard")]
#[command(about = "Read, write, and inspect the system clipboard")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Empties the clipboard
    Clear,
    /// List the content types of the current clipboard
    Types,
    /// Print the content of the clipboard if it's a string
    Clip {
        /// The type of content to get
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        content_type: Option<ContentType>,
    },
    /// Replace the clipboard content with text
    Set {
        /// The type to store the text under
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        content_type: Option<ContentType>,
        /// Text to copy (read from stdin when omitted)
        text: Option<String>,
    },
    /// Print the installed version
    Version,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["default_type", "log_level"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_clear() {
        let cli = Cli::parse_from(["pasteboard", "clear"]);
        assert!(matches!(cli.command, Commands::Clear));
    }

    #[test]
    fn cli_parses_types() {
        let cli = Cli::parse_from(["pasteboard", "types"]);
        assert!(matches!(cli.command, Commands::Types));
    }

    #[test]
    fn cli_parses_clip_without_type() {
        let cli = Cli::parse_from(["pasteboard", "clip"]);
        assert!(matches!(cli.command, Commands::Clip { content_type: None }));
    }

    #[test]
    fn cli_parses_clip_type_short_and_long() {
        for flag in ["-t", "--type"] {
            let cli = Cli::parse_from(["pasteboard", "clip", flag, "public.html"]);
            if let Commands::Clip { content_type } = cli.command {
                assert_eq!(content_type, Some(ContentType::new("public.html")));
            } else {
                panic!("Expected Clip command");
            }
        }
    }

    #[test]
    fn cli_rejects_blank_type() {
        assert!(Cli::try_parse_from(["pasteboard", "clip", "-t", " "]).is_err());
    }

    #[test]
    fn cli_parses_set() {
        let cli = Cli::parse_from(["pasteboard", "set", "Hello, World!"]);
        if let Commands::Set { content_type, text } = cli.command {
            assert!(content_type.is_none());
            assert_eq!(text, Some("Hello, World!".to_string()));
        } else {
            panic!("Expected Set command");
        }
    }

    #[test]
    fn cli_parses_set_from_stdin() {
        let cli = Cli::parse_from(["pasteboard", "set", "-t", "public.html"]);
        if let Commands::Set { content_type, text } = cli.command {
            assert_eq!(content_type, Some(ContentType::new("public.html")));
            assert!(text.is_none());
        } else {
            panic!("Expected Set command");
        }
    }

    #[test]
    fn cli_parses_version() {
        let cli = Cli::parse_from(["pasteboard", "version"]);
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["pasteboard"]).is_err());
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["pasteboard", "config", "set", "log_level", "debug"]);
        if let Commands::Config {
            action: ConfigAction::Set { key, value },
        } = cli.command
        {
            assert_eq!(key, "log_level");
            assert_eq!(value, "debug");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("default_type"));
        assert!(is_valid_config_key("log_level"));
        assert!(!is_valid_config_key("invalid_key"));
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
