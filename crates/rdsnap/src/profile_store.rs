use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rdsnap_source::SourceConfig;

pub const ENV_ENDPOINT: &str = "RDSNAP_ENDPOINT";
pub const ENV_TOKEN: &str = "RDSNAP_TOKEN";

#[derive(serde::Serialize, serde::Deserialize, Default, Clone)]
pub struct ProfilesConfig {
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

#[derive(serde::Serialize, serde::Deserialize, Default, Clone, Debug, PartialEq)]
pub struct Profile {
    pub endpoint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
}

/// Endpoint settings after merging flags, the profile file and the environment.
#[derive(Debug)]
pub struct Resolved {
    pub source: SourceConfig,
    pub page_size: Option<usize>,
}

fn home_dir() -> anyhow::Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| anyhow::anyhow!("could not find home directory"))
}

pub fn profiles_path() -> anyhow::Result<PathBuf> {
    Ok(home_dir()?.join(".rdsnap").join("profiles.toml"))
}

pub fn load_profiles() -> anyhow::Result<ProfilesConfig> {
    match profiles_path() {
        Ok(path) => load_profiles_from(&path),
        Err(_) => Ok(ProfilesConfig::default()),
    }
}

pub fn save_profiles(config: &ProfilesConfig) -> anyhow::Result<()> {
    save_profiles_to(&profiles_path()?, config)
}

pub fn load_profiles_from(path: &Path) -> anyhow::Result<ProfilesConfig> {
    if !path.exists() {
        return Ok(ProfilesConfig::default());
    }
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| anyhow::anyhow!("invalid profile file {}: {e}", path.display()))
}

pub fn save_profiles_to(path: &Path, config: &ProfilesConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Flags win over the named profile, which wins over the environment.
pub fn resolve(
    config: &ProfilesConfig,
    profile: &str,
    endpoint: Option<String>,
    token: Option<String>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Resolved> {
    let entry = config.profiles.get(profile);

    let base_url = endpoint
        .or_else(|| entry.map(|p| p.endpoint.clone()))
        .or_else(|| env(ENV_ENDPOINT))
        .filter(|url| !url.is_empty())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "no endpoint configured; pass --endpoint, set {ENV_ENDPOINT}, or run `rdsnap profile set {profile} --endpoint <url>`"
            )
        })?;

    let bearer_token = token
        .or_else(|| entry.and_then(|p| p.access_token.clone()))
        .or_else(|| env(ENV_TOKEN))
        .filter(|t| !t.is_empty());

    Ok(Resolved {
        source: SourceConfig {
            base_url,
            bearer_token,
        },
        page_size: entry.and_then(|p| p.page_size),
    })
}
