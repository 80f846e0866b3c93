//! Champion directory for League of Legends tooling.
//!
//! This crate lazily loads the champion catalog from Data Dragon, keeps it in
//! memory, and answers the lookups tools need around match and draft data:
//!
//! - **Name/id resolution**: display names, internal slugs and numeric ids
//! - **Fuzzy lookup**: case-, diacritic- and punctuation-insensitive matching
//! - **Autocomplete**: ranked prefix/substring search
//! - **Free-text lists**: `"Ahri, Zed;  Yasuo"` into champion ids
//! - **Asset URLs**: champion, summoner spell, item and rank crest icons
//!
//! A data service outage never surfaces as an error from a lookup. Lookups
//! degrade to placeholders and fallback URLs, and [`LoadStatus`] tells the
//! caller what happened.
//!
//! # Example
//!
//! ```no_run
//! use ltk_champions::{ChampionDirectory, DataDragonSource, SourceConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SourceConfig::default();
//! let directory = ChampionDirectory::new(DataDragonSource::new(config.clone())?, config);
//!
//! let status = directory.load();
//! println!("{:?}", status);
//!
//! let ids = directory.parse_champion_list("Ahri, Zed;  Yasuo");
//! for id in ids {
//!     println!("{} -> {}", directory.name_of(id), directory.icon_url(id));
//! }
//! # Ok(())
//! # }
//! ```

pub mod assets;
pub mod catalog;
pub mod config;
pub mod directory;
pub mod error;
pub mod input;
pub mod normalize;
pub mod source;

pub use catalog::{ChampionCatalog, ChampionRecord};
pub use config::{FailurePolicy, SourceConfig};
pub use directory::{ChampionDirectory, ChampionMatch, LoadStatus};
pub use error::{Error, Result};
pub use normalize::normalize_name;
pub use source::{CatalogSource, DataDragonSource};
