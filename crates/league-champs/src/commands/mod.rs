mod assets;
mod config;
mod lookup;

pub use assets::{item_icon, rank_emblem_icon, spell_icon};
pub use config::{reset_config, show_config};
pub use lookup::{
    champion_icon, champion_name, list_champions, parse_champions, resolve_champion,
    search_champions, show_version,
};

use crate::errors::CliError;
use crate::utils::config::AppConfig;
use crate::utils::print_ansi_boxed_lines;
use colored::Colorize;
use ltk_champions::{ChampionDirectory, DataDragonSource, LoadStatus};

pub type Directory = ChampionDirectory<DataDragonSource>;

/// Builds the directory and loads it.
///
/// An unreachable data service is reported as a warning only; lookups still
/// answer with placeholder names and fallback icons.
pub fn load_directory(cfg: &AppConfig) -> miette::Result<Directory> {
    let source = DataDragonSource::new(cfg.source.clone()).map_err(CliError::client_failed)?;
    let directory = ChampionDirectory::new(source, cfg.source.clone());

    if let LoadStatus::LoadFailed { reason } = directory.load() {
        let line1 = format!(
            "{} {}",
            "⚠ Champion data unavailable:".bright_yellow().bold(),
            reason.bright_white()
        );
        let line2 = "Names and icons fall back to placeholders."
            .bright_cyan()
            .to_string();
        print_ansi_boxed_lines(&[line1, line2]);
    }

    Ok(directory)
}

/// Prints a value as pretty JSON.
fn print_json<T: serde::Serialize>(value: &T) -> miette::Result<()> {
    use miette::IntoDiagnostic;

    let json = serde_json::to_string_pretty(value).into_diagnostic()?;
    println!("{}", json);
    Ok(())
}
