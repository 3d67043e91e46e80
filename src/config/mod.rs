use serde::{Deserialize, Serialize};

pub mod validator;

use crate::lookup::DEFAULT_BASE_URL;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub lookup: LookupSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub widget: WidgetSettings,
}

/// Remote lookup service
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LookupSettings {
    /// Service origin; requests go to `{base_url}/v2/search/{query}`
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Where the widget snapshot is kept
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StorageSettings {
    /// Key prefix; empty means bare keys
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// State file used by the terminal host
    #[serde(default = "default_state_path")]
    pub path: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            path: default_state_path(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WidgetSettings {
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_namespace() -> String {
    "logo-search".to_string()
}

fn default_state_path() -> String {
    "logo-search-state.json".to_string()
}

fn default_placeholder() -> String {
    "Enter a brand to get started...".to_string()
}

impl Settings {
    pub fn validate(&self) -> crate::Result<()> {
        validator::ConfigValidator::validate(self).map_err(crate::Error::Validation)
    }
}

#[cfg(feature = "native")]
mod load {
    use std::path::Path;

    use config::{Config, Environment, File};

    use super::Settings;
    use crate::cli::Cli;
    use crate::error::Result;

    impl Settings {
        /// Load `path` (if present) and `LOGO_SEARCH__*` environment variables
        pub fn from_file(path: &Path) -> Result<Self> {
            let settings = Self::load(path)?;
            settings.validate()?;
            Ok(settings)
        }

        /// Config file named by the CLI, then CLI overrides (CLI > env vars > config file)
        pub fn new_with_cli(cli: &Cli) -> Result<Self> {
            let mut settings = Self::load(&cli.config)?;
            settings.apply_cli_overrides(cli);
            settings.validate()?;
            Ok(settings)
        }

        fn load(path: &Path) -> Result<Self> {
            let s = Config::builder()
                .add_source(File::from(path.to_path_buf()).required(false))
                .add_source(Environment::with_prefix("LOGO_SEARCH").separator("__"))
                .build()?;

            Ok(s.try_deserialize()?)
        }

        fn apply_cli_overrides(&mut self, cli: &Cli) {
            if let Some(base_url) = &cli.base_url {
                self.lookup.base_url = base_url.clone();
            }
            if let Some(namespace) = &cli.namespace {
                self.storage.namespace = namespace.clone();
            }
            if let Some(state) = &cli.state {
                self.storage.path = state.display().to_string();
            }
        }
    }
}
