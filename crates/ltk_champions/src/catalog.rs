//! Champion records and the Data Dragon `champion.json` wire format.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single champion as stored in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampionRecord {
    /// Internal slug, e.g. `"MonkeyKing"` for Wukong. Also the icon file name.
    pub id: String,
    /// Numeric champion id used by match data.
    pub key: u32,
    /// Localized display name.
    pub name: String,
}

/// Response body of `cdn/{version}/data/{locale}/champion.json`.
///
/// Only the fields the directory needs are decoded; the rest of each entry
/// (stats, tags, blurb, ...) is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ChampionCatalog {
    #[serde(default)]
    pub version: Option<String>,
    pub data: BTreeMap<String, CatalogEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    /// Numeric id, delivered as a string.
    pub key: String,
    pub name: String,
}

impl ChampionCatalog {
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Converts every entry into a [`ChampionRecord`] keyed by numeric id.
    ///
    /// Fails on the first entry whose `key` is not a valid id, so a catalog is
    /// either taken whole or not at all.
    pub fn into_records(self) -> Result<BTreeMap<u32, ChampionRecord>> {
        let mut records = BTreeMap::new();
        for entry in self.data.into_values() {
            let key = entry
                .key
                .trim()
                .parse::<u32>()
                .map_err(|_| Error::InvalidChampionKey {
                    id: entry.id.clone(),
                    key: entry.key.clone(),
                })?;
            records.insert(
                key,
                ChampionRecord {
                    id: entry.id,
                    key,
                    name: entry.name,
                },
            );
        }
        Ok(records)
    }
}
