use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    #[error("No champion matches \"{query}\"")]
    #[diagnostic(
        code(champion::not_found),
        help("Try 'league-champs search {query}' to see close matches")
    )]
    ChampionNotFound { query: String },

    #[error("Champion data is unavailable: {reason}")]
    #[diagnostic(
        code(champion::data_unavailable),
        help("Check your network connection or the 'source' table in config.toml")
    )]
    DataUnavailable { reason: String },

    #[error("Failed to create the Data Dragon client")]
    #[diagnostic(code(source::client_failed))]
    ClientFailed {
        #[source]
        source: ltk_champions::Error,
    },

    #[error("Configuration file error")]
    #[diagnostic(
        code(config::parse_error),
        help("Check config.toml for syntax errors, or run 'league-champs config reset'")
    )]
    ConfigParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine config path")]
    #[diagnostic(code(config::path_unknown))]
    ConfigPathUnknown,

    #[error("IO operation failed")]
    #[diagnostic(code(io::operation_failed))]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl CliError {
    pub fn champion_not_found(query: impl Into<String>) -> Self {
        Self::ChampionNotFound {
            query: query.into(),
        }
    }

    pub fn data_unavailable(reason: impl Into<String>) -> Self {
        Self::DataUnavailable {
            reason: reason.into(),
        }
    }

    pub fn client_failed(source: ltk_champions::Error) -> Self {
        Self::ClientFailed { source }
    }

    pub fn config_parse_error(path: PathBuf, source: toml::de::Error) -> Self {
        Self::ConfigParseError { path, source }
    }
}
