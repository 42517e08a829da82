use crate::animations::ambient::Intensity;
use crate::error::SiteError;
use serde::Deserialize;

/// Site settings baked in at build time through the `SITE_CONFIG` env var (JSON).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub log_level: String,
    pub company_name: String,
    pub contact_email: String,
    pub hero_intensity: Intensity,
    pub hero_colors: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            company_name: "Operarius".to_string(),
            contact_email: "hello@operarius.com".to_string(),
            hero_intensity: Intensity::Light,
            hero_colors: vec![
                "#4f46e5".to_string(),
                "#8b5cf6".to_string(),
                "#a855f7".to_string(),
            ],
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        if config.hero_colors.is_empty() {
            return Err(SiteError::Config("hero_colors must not be empty".to_string()));
        }
        Ok(config)
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

/// Loads the build-time config. Returns the defaults and the parse failure,
/// if any, so the caller can report it once logging is up.
pub fn load() -> (SiteConfig, Option<SiteError>) {
    match option_env!("SITE_CONFIG") {
        Some(raw) => match SiteConfig::from_json(raw) {
            Ok(config) => (config, None),
            Err(e) => (SiteConfig::default(), Some(e)),
        },
        None => (SiteConfig::default(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{"company_name": "Acme", "hero_intensity": "strong"}"#)
            .unwrap();
        assert_eq!(config.company_name, "Acme");
        assert_eq!(config.hero_intensity, Intensity::Strong);
        assert_eq!(config.contact_email, "hello@operarius.com");
        assert_eq!(config.hero_colors.len(), 3);
    }

    #[test]
    fn empty_colors_rejected() {
        let err = SiteConfig::from_json(r#"{"hero_colors": []}"#).unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = SiteConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }

    #[test]
    fn unknown_intensity_rejected() {
        assert!(SiteConfig::from_json(r#"{"hero_intensity": "blinding"}"#).is_err());
    }

    #[test]
    fn log_level_falls_back_to_info() {
        let mut config = SiteConfig::default();
        assert_eq!(config.log_level(), log::Level::Info);
        config.log_level = "debug".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.log_level = "loud".to_string();
        assert_eq!(config.log_level(), log::Level::Info);
    }
}
