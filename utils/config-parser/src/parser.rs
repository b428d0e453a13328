use {
    crate::error::Error,
    config::{Config, Environment, File, FileFormat},
    serde::de::DeserializeOwned,
    std::path::Path,
};

/// Separator between the prefix, sections and keys of environment overrides,
/// e.g. `RANKER__DEPLOYMENT__CONFIRMATIONS=3`.
pub const ENV_SEPARATOR: &str = "__";

/// Load a TOML config file and layer environment variable overrides on top.
///
/// A missing file is not an error: every field then comes from the
/// environment or from the `#[serde(default)]` values of `D`.
pub fn parse_config<D, P>(path: P, env_prefix: &str) -> Result<D, Error>
where
    D: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if path.is_dir() {
        return Err(Error::NotAFile(path.to_path_buf()));
    }

    let env_override = Environment::with_prefix(env_prefix)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
        .try_parsing(true);

    let config = Config::builder()
        .add_source(File::from(path).format(FileFormat::Toml).required(false))
        .add_source(env_override)
        .build()?;

    Ok(config.try_deserialize()?)
}

// ----------------------------------- tests -----------------------------------
