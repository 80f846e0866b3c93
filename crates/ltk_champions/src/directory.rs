//! The cached champion directory.
//!
//! A [`ChampionDirectory`] starts unloaded. The first successful
//! [`load`](ChampionDirectory::load) fetches the current catalog version and
//! the full champion list, and swaps the whole directory in at once. From then
//! on every lookup is answered from memory.
//!
//! Lookups never fail. An unknown id, an unloaded directory and an outage of
//! the data service all degrade to placeholder names, fallback icon URLs, or
//! empty results. Callers that need to tell these apart inspect
//! [`LoadStatus`].

use crate::assets;
use crate::catalog::ChampionRecord;
use crate::config::{FailurePolicy, SourceConfig};
use crate::error::{Error, Result};
use crate::input::{classify_token, split_champion_list, ListToken};
use crate::normalize::normalize_name;
use crate::source::CatalogSource;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Outcome of the most recent load attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    NotAttempted,
    Loaded { version: String, champions: usize },
    LoadFailed { reason: String },
}

impl LoadStatus {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadStatus::Loaded { .. })
    }
}

/// A ranked autocomplete suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChampionMatch {
    pub id: u32,
    pub name: String,
}

struct DirectoryState {
    version: String,
    champions: BTreeMap<u32, ChampionRecord>,
    status: LoadStatus,
}

/// In-memory champion directory backed by a [`CatalogSource`].
///
/// The directory is `Sync`: lookups take a read lock, and concurrent first
/// calls to [`load`](Self::load) are serialized so only one fetch is issued.
pub struct ChampionDirectory<S> {
    source: S,
    config: SourceConfig,
    state: RwLock<DirectoryState>,
    load_gate: Mutex<()>,
}

impl<S: CatalogSource> ChampionDirectory<S> {
    pub fn new(source: S, config: SourceConfig) -> Self {
        let state = DirectoryState {
            version: config.fallback_version.clone(),
            champions: BTreeMap::new(),
            status: LoadStatus::NotAttempted,
        };
        Self {
            source,
            config,
            state: RwLock::new(state),
            load_gate: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    fn read_state(&self) -> RwLockReadGuard<'_, DirectoryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, DirectoryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Latest published catalog version, or the configured fallback if the
    /// version service is unreachable or returns nothing usable.
    pub fn resolve_catalog_version(&self) -> String {
        let latest = self.source.fetch_versions().and_then(|versions| {
            versions
                .into_iter()
                .next()
                .filter(|v| !v.trim().is_empty())
                .ok_or(Error::EmptyVersionList)
        });

        match latest {
            Ok(version) => version,
            Err(e) => {
                tracing::warn!(
                    "Failed to fetch Data Dragon version, using {}: {}",
                    self.config.fallback_version,
                    e
                );
                self.config.fallback_version.clone()
            }
        }
    }

    /// Loads the directory if it isn't loaded yet and reports the outcome.
    ///
    /// Once loaded, further calls return immediately. After a failure the
    /// [`FailurePolicy`] decides whether the next call fetches again.
    pub fn load(&self) -> LoadStatus {
        let _gate = self.load_gate.lock().unwrap_or_else(PoisonError::into_inner);

        {
            let state = self.read_state();
            match &state.status {
                LoadStatus::Loaded { .. } => return state.status.clone(),
                LoadStatus::LoadFailed { .. }
                    if self.config.failure_policy == FailurePolicy::Sticky =>
                {
                    return state.status.clone()
                }
                _ => {}
            }
        }

        let version = self.resolve_catalog_version();
        self.write_state().version = version.clone();

        let fetched = self.fetch_records(&version);
        let mut state = self.write_state();
        let status = match fetched {
            Ok(champions) => {
                let count = champions.len();
                state.champions = champions;
                tracing::info!(
                    "Champion data loaded: {} champions (Data Dragon v{})",
                    count,
                    version
                );
                LoadStatus::Loaded {
                    version,
                    champions: count,
                }
            }
            Err(e) => {
                tracing::error!("Failed to load champion data: {}", e);
                LoadStatus::LoadFailed {
                    reason: e.to_string(),
                }
            }
        };
        state.status = status.clone();
        status
    }

    fn fetch_records(&self, version: &str) -> Result<BTreeMap<u32, ChampionRecord>> {
        self.source.fetch_champions(version)?.into_records()
    }

    pub fn status(&self) -> LoadStatus {
        self.read_state().status.clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.read_state().status.is_loaded()
    }

    /// Catalog version used for icon URLs.
    pub fn version(&self) -> String {
        self.read_state().version.clone()
    }

    pub fn len(&self) -> usize {
        self.read_state().champions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_state().champions.is_empty()
    }

    pub fn get(&self, champion_id: u32) -> Option<ChampionRecord> {
        self.read_state().champions.get(&champion_id).cloned()
    }

    /// Snapshot of every loaded champion, ordered by id.
    pub fn champions(&self) -> Vec<ChampionRecord> {
        self.read_state().champions.values().cloned().collect()
    }

    /// Display name, or `"Champion {id}"` when the id isn't in the directory.
    pub fn name_of(&self, champion_id: u32) -> String {
        match self.read_state().champions.get(&champion_id) {
            Some(champ) => champ.name.clone(),
            None => format!("Champion {}", champion_id),
        }
    }

    /// Icon URL for a champion.
    ///
    /// Known champions get a versioned Data Dragon URL built from their slug;
    /// unknown ids fall back to CommunityDragon's id-keyed icon.
    pub fn icon_url(&self, champion_id: u32) -> String {
        let state = self.read_state();
        match state.champions.get(&champion_id) {
            Some(champ) => assets::champion_icon_url(&self.config, &state.version, &champ.id),
            None => assets::champion_icon_fallback_url(&self.config, champion_id),
        }
    }

    /// Resolves a name to a champion id, tolerating case, diacritics and
    /// punctuation.
    ///
    /// Tries, in order and each over the whole directory: exact display name,
    /// exact internal slug (`"MonkeyKing"`), then display-name prefix.
    pub fn id_by_name(&self, query: &str) -> Option<u32> {
        let state = self.read_state();
        if !state.status.is_loaded() {
            return None;
        }
        let needle = normalize_name(query);
        if needle.is_empty() {
            return None;
        }

        let folded: Vec<(u32, String, String)> = state
            .champions
            .values()
            .map(|c| (c.key, normalize_name(&c.name), normalize_name(&c.id)))
            .collect();

        folded
            .iter()
            .find(|(_, name, _)| *name == needle)
            .or_else(|| folded.iter().find(|(_, _, slug)| *slug == needle))
            .or_else(|| folded.iter().find(|(_, name, _)| name.starts_with(&needle)))
            .map(|(key, _, _)| *key)
    }

    /// Parses a free-text list of champion names and/or numeric ids.
    ///
    /// Numeric tokens are taken as-is; names go through
    /// [`id_by_name`](Self::id_by_name). Tokens that don't resolve are logged
    /// and dropped, so the result may be shorter than the input.
    pub fn parse_champion_list(&self, input: &str) -> Vec<u32> {
        let mut ids = Vec::new();
        for token in split_champion_list(input) {
            match classify_token(token) {
                Some(ListToken::Id(id)) => ids.push(id),
                Some(ListToken::Name(name)) => match self.id_by_name(name) {
                    Some(id) => ids.push(id),
                    None => tracing::warn!("Champion not found: \"{}\"", name),
                },
                None => tracing::warn!("Champion id out of range: \"{}\"", token),
            }
        }
        ids
    }

    /// Ranked autocomplete over display names.
    ///
    /// Prefix matches score `100 - len`, other substring matches `50 - len`,
    /// where `len` is the folded name length, so shorter names rank first
    /// within a tier. Ties keep directory order.
    pub fn search_champions(&self, query: &str, limit: usize) -> Vec<ChampionMatch> {
        let state = self.read_state();
        if !state.status.is_loaded() {
            return Vec::new();
        }
        let needle = normalize_name(query);
        if needle.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(i64, &ChampionRecord)> = state
            .champions
            .values()
            .filter_map(|champ| {
                let folded = normalize_name(&champ.name);
                let len = folded.len() as i64;
                if folded.starts_with(&needle) {
                    Some((100 - len, champ))
                } else if folded.contains(&needle) {
                    Some((50 - len, champ))
                } else {
                    None
                }
            })
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, champ)| ChampionMatch {
                id: champ.key,
                name: champ.name.clone(),
            })
            .collect()
    }

    pub fn spell_icon_url(&self, spell_id: u32) -> String {
        assets::spell_icon_url(&self.config, &self.read_state().version, spell_id)
    }

    pub fn item_icon_url(&self, item_id: u32) -> String {
        assets::item_icon_url(&self.config, &self.read_state().version, item_id)
    }

    pub fn rank_emblem_icon_url(&self, tier: Option<&str>) -> String {
        assets::rank_emblem_icon_url(&self.config, tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ChampionCatalog;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    const CATALOG: &str = r#"{ "version": "14.1.1", "data": {
        "Ahri": { "id": "Ahri", "key": "103", "name": "Ahri" },
        "Akali": { "id": "Akali", "key": "84", "name": "Akali" },
        "Kaisa": { "id": "Kaisa", "key": "145", "name": "Kai'Sa" },
        "Kayn": { "id": "Kayn", "key": "141", "name": "Kayn" },
        "MonkeyKing": { "id": "MonkeyKing", "key": "62", "name": "Wukong" },
        "Nunu": { "id": "Nunu", "key": "20", "name": "Nunu & Willump" },
        "Rakan": { "id": "Rakan", "key": "497", "name": "Rakan" },
        "Xayah": { "id": "Xayah", "key": "498", "name": "Xayah" },
        "Yasuo": { "id": "Yasuo", "key": "157", "name": "Yasuo" },
        "Yone": { "id": "Yone", "key": "777", "name": "Yone" },
        "Yuumi": { "id": "Yuumi", "key": "350", "name": "Yuumi" },
        "Zed": { "id": "Zed", "key": "238", "name": "Zed" }
    } }"#;

    /// In-memory source that counts fetches and can fail the first N loads.
    #[derive(Default)]
    struct FakeSource {
        versions: Option<Vec<String>>,
        catalog: String,
        fail_catalog_times: usize,
        delay: Option<Duration>,
        version_calls: AtomicUsize,
        catalog_calls: AtomicUsize,
    }

    impl FakeSource {
        fn healthy() -> Self {
            Self {
                versions: Some(vec!["14.1.1".to_string(), "13.24.1".to_string()]),
                catalog: CATALOG.to_string(),
                ..Default::default()
            }
        }

        fn catalog_calls(&self) -> usize {
            self.catalog_calls.load(Ordering::SeqCst)
        }
    }

    impl CatalogSource for FakeSource {
        fn fetch_versions(&self) -> Result<Vec<String>> {
            self.version_calls.fetch_add(1, Ordering::SeqCst);
            match &self.versions {
                Some(v) => Ok(v.clone()),
                None => Err(serde_json::from_str::<Vec<String>>("not json")
                    .unwrap_err()
                    .into()),
            }
        }

        fn fetch_champions(&self, _version: &str) -> Result<ChampionCatalog> {
            let call = self.catalog_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                std::thread::sleep(delay);
            }
            if call < self.fail_catalog_times {
                return Err(serde_json::from_str::<Vec<String>>("{")
                    .unwrap_err()
                    .into());
            }
            ChampionCatalog::from_json(self.catalog.as_bytes())
        }
    }

    fn loaded_directory() -> ChampionDirectory<FakeSource> {
        let dir = ChampionDirectory::new(FakeSource::healthy(), SourceConfig::default());
        assert!(dir.load().is_loaded());
        dir
    }

    #[test]
    fn test_unloaded_directory_degrades() {
        let dir = ChampionDirectory::new(FakeSource::healthy(), SourceConfig::default());
        assert_eq!(dir.status(), LoadStatus::NotAttempted);
        assert_eq!(dir.version(), "15.3.1");
        assert_eq!(dir.name_of(103), "Champion 103");
        assert_eq!(dir.id_by_name("Ahri"), None);
        assert!(dir.search_champions("a", 10).is_empty());
        assert!(dir.icon_url(103).contains("champion-icons/103.png"));
    }

    #[test]
    fn test_load_populates_directory() {
        let dir = loaded_directory();
        assert_eq!(
            dir.status(),
            LoadStatus::Loaded {
                version: "14.1.1".to_string(),
                champions: 12
            }
        );
        assert_eq!(dir.version(), "14.1.1");
        assert_eq!(dir.len(), 12);
        assert_eq!(dir.name_of(103), "Ahri");
        assert_eq!(dir.get(62).map(|c| c.id), Some("MonkeyKing".to_string()));
    }

    #[test]
    fn test_load_is_idempotent() {
        let dir = loaded_directory();
        let before = dir.champions();
        assert!(dir.load().is_loaded());
        assert_eq!(dir.champions(), before);
        assert_eq!(dir.source.catalog_calls(), 1);
        assert_eq!(dir.source.version_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unknown_id_placeholder() {
        let dir = loaded_directory();
        for id in [0, 1, 9999, u32::MAX] {
            assert_eq!(dir.name_of(id), format!("Champion {}", id));
        }
    }

    #[test]
    fn test_icon_url_schemes() {
        let dir = loaded_directory();
        let url = dir.icon_url(62);
        assert_eq!(
            url,
            "https://ddragon.leagueoflegends.com/cdn/14.1.1/img/champion/MonkeyKing.png"
        );
        assert_eq!(dir.icon_url(62), url);
        assert_eq!(
            dir.icon_url(9999),
            "https://raw.communitydragon.org/latest/plugins/rcp-be-lol-game-data/global/default/v1/champion-icons/9999.png"
        );
    }

    #[test]
    fn test_version_fallback_on_error() {
        let source = FakeSource {
            versions: None,
            ..FakeSource::healthy()
        };
        let dir = ChampionDirectory::new(source, SourceConfig::default());
        assert_eq!(dir.resolve_catalog_version(), "15.3.1");
        assert!(dir.load().is_loaded());
        assert_eq!(dir.version(), "15.3.1");
        assert!(dir.icon_url(103).contains("/cdn/15.3.1/"));
    }

    #[test]
    fn test_version_fallback_on_empty_list() {
        let source = FakeSource {
            versions: Some(Vec::new()),
            ..FakeSource::healthy()
        };
        let config = SourceConfig {
            fallback_version: "1.2.3".to_string(),
            ..Default::default()
        };
        let dir = ChampionDirectory::new(source, config);
        assert_eq!(dir.resolve_catalog_version(), "1.2.3");
    }

    #[test]
    fn test_id_by_name_case_and_diacritics() {
        let dir = loaded_directory();
        assert_eq!(dir.id_by_name("Kai'Sa"), Some(145));
        assert_eq!(dir.id_by_name("kaisa"), Some(145));
        assert_eq!(dir.id_by_name("KAISA"), Some(145));
        assert_eq!(dir.id_by_name("Kaï'Sà"), Some(145));
    }

    #[test]
    fn test_id_by_name_tiers() {
        let dir = loaded_directory();
        // internal slug
        assert_eq!(dir.id_by_name("MonkeyKing"), Some(62));
        assert_eq!(dir.id_by_name("nunu"), Some(20));
        // prefix, first by id: Yasuo (157) < Yuumi (350) < Yone (777)
        assert_eq!(dir.id_by_name("y"), Some(157));
        assert_eq!(dir.id_by_name("wu"), Some(62));
        assert_eq!(dir.id_by_name("Teemo"), None);
        assert_eq!(dir.id_by_name(""), None);
        assert_eq!(dir.id_by_name("'."), None);
    }

    #[test]
    fn test_non_latin_query_does_not_match() {
        let catalog = r#"{ "data": {
            "Alistar": { "id": "Alistar", "key": "12", "name": "Alistar" },
            "Ahri": { "id": "Ahri", "key": "103", "name": "Ahri" }
        } }"#;
        let source = FakeSource {
            catalog: catalog.to_string(),
            ..FakeSource::healthy()
        };
        let dir = ChampionDirectory::new(source, SourceConfig::default());
        assert!(dir.load().is_loaded());

        assert_eq!(dir.id_by_name("阿狸"), None);
        assert_eq!(dir.id_by_name("Ø"), None);
        assert_eq!(dir.parse_champion_list("阿狸, Ahri"), vec![103]);
        assert!(dir.search_champions("阿狸", 10).is_empty());
    }

    #[test]
    fn test_exact_name_beats_earlier_prefix() {
        let catalog = r#"{ "data": {
            "Vi": { "id": "Vi", "key": "254", "name": "Vi" },
            "Viego": { "id": "Viego", "key": "234", "name": "Viego" }
        } }"#;
        let source = FakeSource {
            catalog: catalog.to_string(),
            ..FakeSource::healthy()
        };
        let dir = ChampionDirectory::new(source, SourceConfig::default());
        dir.load();
        assert_eq!(dir.id_by_name("vi"), Some(254));
    }

    #[test]
    fn test_parse_champion_list() {
        let dir = loaded_directory();
        assert_eq!(
            dir.parse_champion_list("Ahri, Zed;  Yasuo"),
            vec![103, 238, 157]
        );
        assert_eq!(
            dir.parse_champion_list("Ahri, Teemo;  Yasuo"),
            vec![103, 157]
        );
        assert_eq!(dir.parse_champion_list("103, 9999"), vec![103, 9999]);
        assert!(dir.parse_champion_list("   ").is_empty());
    }

    #[test]
    fn test_search_ranking() {
        let dir = loaded_directory();
        let names: Vec<String> = dir
            .search_champions("ka", 10)
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["Kayn", "Kai'Sa", "Akali", "Rakan"]);
    }

    #[test]
    fn test_search_limit_and_containment() {
        let dir = loaded_directory();
        let results = dir.search_champions("ya", 5);
        assert!(results.len() <= 5);
        assert!(results
            .iter()
            .all(|m| normalize_name(&m.name).contains("ya")));
        assert_eq!(results[0].name, "Yasuo");
        assert_eq!(results[1].name, "Xayah");

        assert_eq!(dir.search_champions("a", 2).len(), 2);
        assert!(dir.search_champions("", 10).is_empty());
    }

    #[test]
    fn test_asset_helpers_use_loaded_version() {
        let dir = loaded_directory();
        assert_eq!(dir.item_icon_url(0), "");
        assert!(dir.item_icon_url(3031).contains("/cdn/14.1.1/img/item/3031.png"));
        assert!(dir.spell_icon_url(4).contains("/cdn/14.1.1/img/spell/SummonerFlash.png"));
        assert!(dir.rank_emblem_icon_url(Some("Gold")).ends_with("/gold.svg"));
    }

    #[test]
    fn test_retry_policy_reloads_after_failure() {
        let source = FakeSource {
            fail_catalog_times: 1,
            ..FakeSource::healthy()
        };
        let dir = ChampionDirectory::new(source, SourceConfig::default());

        assert!(matches!(dir.load(), LoadStatus::LoadFailed { .. }));
        assert!(!dir.is_loaded());
        assert!(dir.is_empty());
        assert_eq!(dir.name_of(103), "Champion 103");

        assert!(dir.load().is_loaded());
        assert_eq!(dir.source.catalog_calls(), 2);
        assert_eq!(dir.name_of(103), "Ahri");
    }

    #[test]
    fn test_sticky_policy_keeps_failure() {
        let source = FakeSource {
            fail_catalog_times: 1,
            ..FakeSource::healthy()
        };
        let config = SourceConfig {
            failure_policy: FailurePolicy::Sticky,
            ..Default::default()
        };
        let dir = ChampionDirectory::new(source, config);

        let first = dir.load();
        assert!(matches!(first, LoadStatus::LoadFailed { .. }));
        assert_eq!(dir.load(), first);
        assert_eq!(dir.source.catalog_calls(), 1);
        assert!(dir.is_empty());
        assert_eq!(dir.id_by_name("Ahri"), None);
    }

    #[test]
    fn test_invalid_key_leaves_directory_empty() {
        let source = FakeSource {
            catalog: r#"{ "data": {
                "Ahri": { "id": "Ahri", "key": "103", "name": "Ahri" },
                "Bad": { "id": "Bad", "key": "x", "name": "Bad" }
            } }"#
                .to_string(),
            ..FakeSource::healthy()
        };
        let dir = ChampionDirectory::new(source, SourceConfig::default());
        assert!(matches!(dir.load(), LoadStatus::LoadFailed { .. }));
        assert!(dir.is_empty());
    }

    #[test]
    fn test_concurrent_first_load_fetches_once() {
        let source = Arc::new(FakeSource {
            delay: Some(Duration::from_millis(50)),
            ..FakeSource::healthy()
        });
        let dir = ChampionDirectory::new(Arc::clone(&source), SourceConfig::default());

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| assert!(dir.load().is_loaded()));
            }
        });

        assert_eq!(source.catalog_calls(), 1);
        assert_eq!(dir.len(), 12);
    }
}
