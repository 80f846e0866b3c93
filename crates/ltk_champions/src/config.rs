//! Endpoint and policy configuration for the champion directory.

use serde::{Deserialize, Serialize};

/// Data Dragon version list (newest first).
pub const DEFAULT_VERSIONS_URL: &str = "https://ddragon.leagueoflegends.com/api/versions.json";
/// Data Dragon CDN root, used for the champion catalog and versioned icons.
pub const DEFAULT_CDN_BASE: &str = "https://ddragon.leagueoflegends.com";
/// CommunityDragon root, used for version-agnostic fallback icons and rank crests.
pub const DEFAULT_COMMUNITY_DRAGON_BASE: &str = "https://raw.communitydragon.org";
/// Version used for icon URLs until a live lookup succeeds.
pub const DEFAULT_FALLBACK_VERSION: &str = "15.3.1";
pub const DEFAULT_LOCALE: &str = "en_US";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// What a failed [`load`](crate::ChampionDirectory::load) means for later calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// The directory stays unloaded and the next `load` fetches again.
    #[default]
    Retry,
    /// The failure is final; later `load` calls return it without fetching.
    Sticky,
}

/// Where the directory fetches its data from and how it treats failures.
///
/// Every field has a default, so a partial TOML table is valid:
///
/// ```toml
/// locale = "fr_FR"
/// failure_policy = "sticky"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub versions_url: String,
    pub cdn_base: String,
    pub community_dragon_base: String,
    pub locale: String,
    pub fallback_version: String,
    /// HTTP client timeout applied to every request.
    pub timeout_ms: u64,
    pub failure_policy: FailurePolicy,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            versions_url: DEFAULT_VERSIONS_URL.to_string(),
            cdn_base: DEFAULT_CDN_BASE.to_string(),
            community_dragon_base: DEFAULT_COMMUNITY_DRAGON_BASE.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            fallback_version: DEFAULT_FALLBACK_VERSION.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl SourceConfig {
    pub fn cdn_base(&self) -> &str {
        self.cdn_base.trim_end_matches('/')
    }

    pub fn community_dragon_base(&self) -> &str {
        self.community_dragon_base.trim_end_matches('/')
    }

    /// Champion catalog URL for a given version.
    pub fn champions_url(&self, version: &str) -> String {
        format!(
            "{}/cdn/{}/data/{}/champion.json",
            self.cdn_base(),
            version,
            self.locale
        )
    }
}
