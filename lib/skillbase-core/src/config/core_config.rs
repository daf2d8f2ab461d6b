use figment::Figment;
use figment::providers::Serialized;
#[cfg(feature = "config_env")]
use figment::providers::Env;
#[cfg(feature = "config_yaml")]
use figment::providers::{Format, Yaml};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub verification: VerificationConfig,
    pub certificate: CertificateConfig,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            verification: VerificationConfig::default(),
            certificate: CertificateConfig::default(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationConfig {
    /// Minimum AI score for a proof to be marked verified.
    pub pass_threshold: f32,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            pass_threshold: 70.0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificateConfig {
    /// Leading component of generated certificate numbers.
    pub number_prefix: String,
}

impl Default for CertificateConfig {
    fn default() -> Self {
        Self {
            number_prefix: "SKB".to_string(),
        }
    }
}

#[derive(Debug, Error)]
#[error("Configuration error: {0}")]
pub struct ConfigError(#[from] figment::Error);

impl CoreConfig {
    /// Defaults, overridden by an optional YAML file, overridden by
    /// `SKILLBASE_`-prefixed environment variables.
    pub fn load(config_file: Option<&std::path::Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(CoreConfig::default()));

        #[cfg(feature = "config_yaml")]
        if let Some(path) = config_file {
            figment = figment.merge(Yaml::file(path));
        }
        #[cfg(not(feature = "config_yaml"))]
        let _ = config_file;

        #[cfg(feature = "config_env")]
        {
            figment = figment.merge(Env::prefixed("SKILLBASE_").split("__"));
        }

        Ok(figment.extract()?)
    }
}
