use super::{print_json, Directory};
use crate::errors::CliError;
use crate::println_pad;
use colored::Colorize;
use ltk_champions::LoadStatus;
use miette::Result;

pub fn show_version(directory: &Directory) -> Result<()> {
    let status = match directory.status() {
        LoadStatus::Loaded { champions, .. } => {
            format!("loaded ({} champions)", champions).bright_green()
        }
        LoadStatus::LoadFailed { reason } => format!("failed ({})", reason).bright_red(),
        LoadStatus::NotAttempted => "not loaded".bright_yellow(),
    };

    println_pad!(
        "{} {}",
        "🏷️ Data Dragon:".bright_blue().bold(),
        directory.version().bright_white().bold()
    );
    println_pad!("{} {}", "📦 Catalog:".bright_green(), status);
    Ok(())
}

pub fn champion_name(directory: &Directory, champion_id: u32) -> Result<()> {
    println!("{}", directory.name_of(champion_id));
    Ok(())
}

pub fn champion_icon(directory: &Directory, champion_id: u32) -> Result<()> {
    println!("{}", directory.icon_url(champion_id));
    Ok(())
}

pub fn resolve_champion(directory: &Directory, query: &str, json: bool) -> Result<()> {
    let champion = directory
        .id_by_name(query)
        .and_then(|id| directory.get(id))
        .ok_or_else(|| CliError::champion_not_found(query))?;

    if json {
        return print_json(&champion);
    }

    println_pad!(
        "{} {} {}",
        champion.name.bright_cyan().bold(),
        format!("(id: {})", champion.key).dimmed(),
        format!("[{}]", champion.id).dimmed()
    );
    Ok(())
}

pub fn parse_champions(directory: &Directory, input: &str, json: bool) -> Result<()> {
    let ids = directory.parse_champion_list(input);

    if json {
        return print_json(&ids);
    }

    for id in ids {
        println_pad!(
            "{} {} {}",
            "•".bright_cyan(),
            id.to_string().bright_white().bold(),
            directory.name_of(id).bright_cyan()
        );
    }
    Ok(())
}

pub fn search_champions(
    directory: &Directory,
    query: &str,
    limit: usize,
    json: bool,
) -> Result<()> {
    let matches = directory.search_champions(query, limit);

    if json {
        return print_json(&matches);
    }

    if matches.is_empty() {
        println_pad!(
            "{}",
            format!("No champions match \"{}\"", query).bright_yellow()
        );
        return Ok(());
    }

    for m in matches {
        println_pad!(
            "{} {} {}",
            "•".bright_cyan(),
            m.name.bright_cyan().bold(),
            format!("(id: {})", m.id).dimmed()
        );
    }
    Ok(())
}

pub fn list_champions(directory: &Directory, json: bool) -> Result<()> {
    if let LoadStatus::LoadFailed { reason } = directory.status() {
        return Err(CliError::data_unavailable(reason).into());
    }

    let champions = directory.champions();
    if json {
        return print_json(&champions);
    }

    println_pad!(
        "{} {}",
        "🏗️  Champions:".bright_magenta().bold(),
        format!("({}, Data Dragon v{})", champions.len(), directory.version()).dimmed()
    );
    for champ in champions {
        println_pad!(
            "   {} {} {}",
            format!("{:>4}", champ.key).bright_white(),
            champ.name.bright_cyan().bold(),
            format!("[{}]", champ.id).dimmed()
        );
    }
    Ok(())
}
