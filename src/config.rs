use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};

use crate::i18n::Language;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: IpAddr,
    pub port: u16,

    // Locale used when the request carries no valid `lang` cookie
    pub default_language: Language,

    // Cosmetic delay before the logout/deactivate redirect
    pub redirect_delay_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string())
                .parse::<IpAddr>()
                .context("HOST must be an IP address")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,

            default_language: Language::from_code(
                &std::env::var("DEFAULT_LANGUAGE").unwrap_or_else(|_| "en".to_string()),
            )
            .context("DEFAULT_LANGUAGE must be a supported language")?,

            redirect_delay_secs: std::env::var("REDIRECT_DELAY_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 8080,
            default_language: Language::canonical(),
            redirect_delay_secs: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 4] = ["HOST", "PORT", "DEFAULT_LANGUAGE", "REDIRECT_DELAY_SECS"];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host.to_string(), "0.0.0.0");
        assert_eq!(config.default_language, Language::ENGLISH);
        assert_eq!(config.redirect_delay_secs, 2);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "3000");
        std::env::set_var("DEFAULT_LANGUAGE", "ar");
        std::env::set_var("REDIRECT_DELAY_SECS", "5");

        let config = Config::from_env().unwrap();
        assert_eq!(config.addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.default_language, Language::ARABIC);
        assert_eq!(config.redirect_delay_secs, 5);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_port() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("PORT"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_unsupported_language() {
        clear_env();
        std::env::set_var("DEFAULT_LANGUAGE", "de");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("DEFAULT_LANGUAGE"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_delay_falls_back() {
        clear_env();
        std::env::set_var("REDIRECT_DELAY_SECS", "soon");

        assert_eq!(Config::from_env().unwrap().redirect_delay_secs, 2);

        clear_env();
    }
}
