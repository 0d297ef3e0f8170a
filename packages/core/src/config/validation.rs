//! Configuration validation with actionable error messages
//!
//! Validates the configuration and provides exact commands to fix issues.

use super::schema::Config;
use console::style;

/// A configuration validation error with an actionable fix command
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The config field that has an error
    pub field: String,
    /// Description of what's wrong
    pub message: String,
    /// Exact ptb command to fix the issue
    pub fix_command: String,
}

/// A configuration validation warning (non-fatal)
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The config field with a potential issue
    pub field: String,
    /// Description of the warning
    pub message: String,
}

/// Validate configuration and return warnings or first error
///
/// Returns Ok(warnings) if validation passes (possibly with non-fatal
/// warnings). Returns Err(error) on the first fatal validation error
/// encountered, in field order.
pub fn validate_config(config: &Config) -> Result<Vec<ValidationWarning>, ValidationError> {
    let mut warnings = Vec::new();

    if config.conda_env.trim().is_empty() {
        return Err(ValidationError {
            field: "conda_env".to_string(),
            message: "conda_env must not be empty".to_string(),
            fix_command: "ptb config reset".to_string(),
        });
    }

    if config.auth_script.trim().is_empty() {
        return Err(ValidationError {
            field: "auth_script".to_string(),
            message: "auth_script must not be empty".to_string(),
            fix_command: "ptb config reset".to_string(),
        });
    }

    if config.auth_key_file.trim().is_empty() {
        return Err(ValidationError {
            field: "auth_key_file".to_string(),
            message: "auth_key_file must not be empty".to_string(),
            fix_command: "ptb config reset".to_string(),
        });
    }

    // The script is handed to the python interpreter inside the env
    if !config.auth_script.ends_with(".py") {
        warnings.push(ValidationWarning {
            field: "auth_script".to_string(),
            message: format!(
                "'{}' does not look like a Python script; it will still be run as `python {} login`",
                config.auth_script, config.auth_script
            ),
        });
    }

    Ok(warnings)
}

/// Display a validation error with styled formatting
pub fn display_validation_error(error: &ValidationError) {
    eprintln!();
    eprintln!("{}", style("Error: Configuration error").red().bold());
    eprintln!();
    eprintln!("  {}  {}", style("Field:").dim(), error.field);
    eprintln!("  {}  {}", style("Problem:").dim(), error.message);
    eprintln!();
    eprintln!("{}:", style("To fix, run").dim());
    eprintln!("  {}", style(&error.fix_command).cyan());
    eprintln!();
}

/// Display a validation warning with styled formatting
pub fn display_validation_warning(warning: &ValidationWarning) {
    eprintln!(
        "{} {}: {}",
        style("Warning:").yellow().bold(),
        warning.field,
        warning.message
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config_passes() {
        let config = Config::default();
        let result = validate_config(&config);
        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn test_empty_conda_env() {
        let config = Config {
            conda_env: "  ".to_string(),
            ..Config::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert_eq!(err.field, "conda_env");
    }

    #[test]
    fn test_empty_auth_script() {
        let config = Config {
            auth_script: String::new(),
            ..Config::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert_eq!(err.field, "auth_script");
    }

    #[test]
    fn test_empty_auth_key_file() {
        let config = Config {
            auth_key_file: String::new(),
            ..Config::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert_eq!(err.field, "auth_key_file");
    }

    #[test]
    fn test_non_python_script_warns() {
        let config = Config {
            auth_script: "pixiv_auth".to_string(),
            ..Config::default()
        };
        let warnings = validate_config(&config).unwrap();
        assert!(warnings.iter().any(|w| w.field == "auth_script"));
    }
}
