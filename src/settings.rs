use std::env;

use anyhow::{Context, Result, bail};

/// Application settings, resolved by name at startup.
///
/// Two named objects exist: `production` (defaults plus environment
/// overrides) and `test` (fully fixed, so the test harness never
/// depends on ambient variables).
#[derive(Debug, Clone)]
pub struct Settings {
    /// Name this settings object was resolved from.
    pub name: String,
    /// True only for the test settings object.
    pub testing: bool,
    pub host: String,
    pub port: u16,
    /// Directory of static assets served at the web root.
    pub static_dir: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            name: "production".to_string(),
            testing: false,
            host: "0.0.0.0".to_string(),
            port: 5000,
            static_dir: "static".to_string(),
        }
    }
}

impl Settings {
    /// Resolve a settings object by name.
    ///
    /// Unknown names are an error; callers are expected to let it
    /// propagate to the process boundary.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "production" => Self::production(),
            "test" => Ok(Self::test()),
            other => bail!("unknown settings object: {other}"),
        }
    }

    /// Production settings: defaults plus environment overrides.
    pub fn production() -> Result<Self> {
        let defaults = Settings::default();

        let host = env::var("SPELL_CHECK_HOST").unwrap_or(defaults.host);

        let port = match env::var("SPELL_CHECK_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .context("SPELL_CHECK_PORT must be a valid port number (0-65535)")?,
            Err(_) => defaults.port,
        };

        let static_dir = env::var("SPELL_CHECK_STATIC_DIR").unwrap_or(defaults.static_dir);

        Ok(Settings {
            name: defaults.name,
            testing: false,
            host,
            port,
            static_dir,
        })
    }

    /// Fixed settings for the test harness.
    pub fn test() -> Self {
        Settings {
            name: "test".to_string(),
            testing: true,
            host: "127.0.0.1".to_string(),
            port: 0,
            static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/static").to_string(),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Settings object: {}", self.name);
        tracing::info!("  Static directory: {}", self.static_dir);
        tracing::info!("  Listening on: {}:{}", self.host, self.port);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env_vars() {
        unsafe {
            env::remove_var("SPELL_CHECK_HOST");
            env::remove_var("SPELL_CHECK_PORT");
            env::remove_var("SPELL_CHECK_STATIC_DIR");
        }
    }

    #[test]
    #[serial]
    fn test_production_defaults() {
        clear_env_vars();

        let settings = Settings::production().unwrap();

        assert_eq!(settings.name, "production");
        assert!(!settings.testing);
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 5000);
        assert_eq!(settings.static_dir, "static");
    }

    #[test]
    #[serial]
    fn test_production_with_overrides() {
        clear_env_vars();
        unsafe {
            env::set_var("SPELL_CHECK_HOST", "127.0.0.1");
            env::set_var("SPELL_CHECK_PORT", "8080");
            env::set_var("SPELL_CHECK_STATIC_DIR", "assets");
        }

        let settings = Settings::production().unwrap();

        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.static_dir, "assets");

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_invalid_port() {
        clear_env_vars();
        unsafe {
            env::set_var("SPELL_CHECK_PORT", "not-a-number");
        }

        let result = Settings::production();
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("SPELL_CHECK_PORT"));

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_port_out_of_range() {
        clear_env_vars();
        unsafe {
            env::set_var("SPELL_CHECK_PORT", "99999");
        }

        let result = Settings::production();
        assert!(result.is_err());

        clear_env_vars();
    }

    #[test]
    fn test_test_settings() {
        let settings = Settings::test();

        assert_eq!(settings.name, "test");
        assert!(settings.testing);
    }

    #[test]
    fn test_unknown_settings_name() {
        let result = Settings::from_name("staging");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("unknown settings object")
        );
    }
}
