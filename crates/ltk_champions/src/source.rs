//! Remote data access behind the [`CatalogSource`] seam.

use crate::catalog::ChampionCatalog;
use crate::config::SourceConfig;
use crate::error::Result;
use std::sync::Arc;
use std::time::Duration;

/// Supplies the version list and champion catalog to a
/// [`ChampionDirectory`](crate::ChampionDirectory).
///
/// [`DataDragonSource`] is the production implementation; tests plug in
/// in-memory doubles.
pub trait CatalogSource: Send + Sync {
    /// All published versions, newest first.
    fn fetch_versions(&self) -> Result<Vec<String>>;

    /// The full champion catalog for one version.
    fn fetch_champions(&self, version: &str) -> Result<ChampionCatalog>;
}

impl<T: CatalogSource + ?Sized> CatalogSource for Arc<T> {
    fn fetch_versions(&self) -> Result<Vec<String>> {
        (**self).fetch_versions()
    }

    fn fetch_champions(&self, version: &str) -> Result<ChampionCatalog> {
        (**self).fetch_champions(version)
    }
}

/// Blocking HTTP client for Data Dragon.
pub struct DataDragonSource {
    client: reqwest::blocking::Client,
    config: SourceConfig,
}

impl DataDragonSource {
    pub fn new(config: SourceConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(format!(
                "ltk_champions/{} (+https://github.com/LeagueToolkit/league-mod)",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response> {
        tracing::debug!("GET {}", url);
        Ok(self.client.get(url).send()?.error_for_status()?)
    }
}

impl CatalogSource for DataDragonSource {
    fn fetch_versions(&self) -> Result<Vec<String>> {
        Ok(self.get(&self.config.versions_url)?.json()?)
    }

    fn fetch_champions(&self, version: &str) -> Result<ChampionCatalog> {
        let body = self.get(&self.config.champions_url(version))?.bytes()?;
        ChampionCatalog::from_json(&body)
    }
}
