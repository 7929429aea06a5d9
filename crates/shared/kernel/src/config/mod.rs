use amia_domain::constants::ENV_PREFIX;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

const DEFAULT_CONFIG_FILE: &str = "server";

/// Config loading failures.
#[amia_derive::amia_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: ::config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration file and overlays environment overrides.
///
/// 1. **Base file**: `path` (extension optional, e.g. `server` finds `server.toml`),
///    defaulting to `server` in the working directory. The file must exist.
/// 2. **Environment**: variables prefixed with `AMIA__`, nested with double underscores
///    (`AMIA__MAIL__API_KEY` sets `mail.api_key`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing, unparsable, or does not
/// match the structure of `T`.
///
/// # Example
/// ```rust
/// use amia_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct SiteConfig {
///     port: u16,
/// }
///
/// let cfg: SiteConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let path = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());
    info!("Loading config from {}", path.display());

    ::config::Config::builder()
        .add_source(::config::File::from(path.as_path()).required(true))
        .add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
