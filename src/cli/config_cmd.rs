//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::clipboard::ContentType;
use crate::domain::config::VALID_LOG_LEVELS;
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter),
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value),
        ConfigAction::Get { key } => handle_get(store, presenter, &key),
        ConfigAction::List => handle_list(store, presenter),
        ConfigAction::Path => handle_path(store, presenter),
    }
}

fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init()?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    validate_config_key(key)?;
    let value = validate_config_value(key, value)?;

    let mut config = store.load()?;

    match key {
        "default_type" => config.default_type = Some(value.clone()),
        "log_level" => config.log_level = Some(value.clone()),
        _ => unreachable!(), // Already validated
    }

    store.save(&config)?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    validate_config_key(key)?;

    let config = store.load()?;

    let value = match key {
        "default_type" => config.default_type,
        "log_level" => config.log_level,
        _ => unreachable!(),
    };

    presenter.output(value.as_deref().unwrap_or("(not set)"));

    Ok(())
}

fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load()?;

    presenter.key_value(
        "default_type",
        config.default_type.as_deref().unwrap_or("(not set)"),
    );
    presenter.key_value(
        "log_level",
        config.log_level.as_deref().unwrap_or("(not set)"),
    );

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn validate_config_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Validate a config value based on key type, returning the normalized value
fn validate_config_value(key: &str, value: &str) -> Result<String, ConfigError> {
    match key {
        "default_type" => value
            .parse::<ContentType>()
            .map(|ty| ty.to_string())
            .map_err(|e| ConfigError::ValidationError {
                key: key.to_string(),
                message: e.to_string(),
            }),
        "log_level" => {
            let lower = value.trim().to_lowercase();
            if VALID_LOG_LEVELS.contains(&lower.as_str()) {
                Ok(lower)
            } else {
                Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: format!(
                        "Invalid value '{}'. Valid options: {}",
                        value,
                        VALID_LOG_LEVELS.join(", ")
                    ),
                })
            }
        }
        _ => Ok(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::XdgConfigStore;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, XdgConfigStore) {
        let dir = TempDir::new().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        (dir, store)
    }

    #[test]
    fn validate_default_type_trims() {
        assert_eq!(
            validate_config_value("default_type", " public.html ").unwrap(),
            "public.html"
        );
    }

    #[test]
    fn validate_default_type_blank() {
        assert!(validate_config_value("default_type", "  ").is_err());
    }

    #[test]
    fn validate_log_level_valid() {
        for level in VALID_LOG_LEVELS {
            assert!(validate_config_value("log_level", level).is_ok());
        }
        assert_eq!(validate_config_value("log_level", "DEBUG").unwrap(), "debug");
    }

    #[test]
    fn validate_log_level_invalid() {
        assert!(validate_config_value("log_level", "loud").is_err());
    }

    #[test]
    fn unknown_key_rejected() {
        assert!(matches!(
            validate_config_key("api_key"),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn set_persists_value() {
        let (_dir, store) = temp_store();
        let presenter = Presenter::new();

        handle_config_command(
            ConfigAction::Set {
                key: "default_type".to_string(),
                value: "public.html".to_string(),
            },
            &store,
            &presenter,
        )
        .unwrap();

        let config = store.load().unwrap();
        assert_eq!(config.default_type, Some("public.html".to_string()));
        assert!(config.log_level.is_none());
    }

    #[test]
    fn set_invalid_value_leaves_file_untouched() {
        let (_dir, store) = temp_store();
        let presenter = Presenter::new();

        let result = handle_config_command(
            ConfigAction::Set {
                key: "log_level".to_string(),
                value: "loud".to_string(),
            },
            &store,
            &presenter,
        );

        assert!(result.is_err());
        assert!(!store.exists());
    }

    #[test]
    fn init_twice_fails() {
        let (_dir, store) = temp_store();
        let presenter = Presenter::new();

        handle_config_command(ConfigAction::Init, &store, &presenter).unwrap();
        assert!(matches!(
            handle_config_command(ConfigAction::Init, &store, &presenter),
            Err(ConfigError::AlreadyExists(_))
        ));
    }
}
