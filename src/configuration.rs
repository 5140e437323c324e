use std::{collections::BTreeMap, num::NonZeroUsize};

use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

pub const DEFAULT_FALLBACK_MESSAGE: &str = "Aranan içerik Wikipedia kaynağında yok.";
pub const DEFAULT_MIN_SENTENCES: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(n) => n,
    None => unreachable!(),
};

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Settings {
    pub lookup: LookupSettings,
    pub http: HttpSettings,
}

/// Immutable per-lookup settings. Built once and moved into a `WikiLookup`.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LookupSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub min_sentences: NonZeroUsize,
    pub lang: String,
    pub region: String,
    pub site: String,
    pub fallback_message: String,
}

impl Default for LookupSettings {
    fn default() -> Self {
        LookupSettings {
            min_sentences: DEFAULT_MIN_SENTENCES,
            lang: "tr".to_string(),
            region: "tr".to_string(),
            site: "wikipedia.org".to_string(),
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
        }
    }
}

impl LookupSettings {
    /// `<lang>.<site>`, e.g. `tr.wikipedia.org`.
    pub fn target_domain(&self) -> String {
        format!("{}.{}", self.lang, self.site)
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct HttpSettings {
    pub headers: BTreeMap<String, String>,
    pub timeout_secs: Option<u64>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        HttpSettings {
            headers: BTreeMap::from([("User-Agent".to_string(), "Mozilla/5.0".to_string())]),
            timeout_secs: None,
        }
    }
}

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}

/// Layers `configuration/base.yaml`, `configuration/<APP_ENVIRONMENT>.yaml` and
/// `APP_` prefixed environment variables (`APP_LOOKUP__MIN_SENTENCES=5`).
/// Missing files fall back to the built-in defaults.
pub fn get_configuration() -> anyhow::Result<Settings> {
    let base_path = std::env::current_dir()?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(false))
        .add_source(
            config::File::from(configuration_directory.join(environment_filename)).required(false),
        )
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize::<Settings>()?)
}
