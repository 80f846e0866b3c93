use crate::utils::config::{self, AppConfig};
use colored::Colorize;
use miette::Result;

pub fn show_config() -> Result<()> {
    let cfg = config::load_config();
    let config_path = config::default_config_path()
        .map(|p| p.to_string())
        .unwrap_or_else(|| "Unknown".to_string());
    let source = &cfg.source;

    println!();
    println!("  {} {}", "config_file:".bright_white(), config_path);
    println!("  {} {}", "versions_url:".bright_white(), source.versions_url);
    println!("  {} {}", "cdn_base:".bright_white(), source.cdn_base);
    println!(
        "  {} {}",
        "community_dragon_base:".bright_white(),
        source.community_dragon_base
    );
    println!("  {} {}", "locale:".bright_white(), source.locale);
    println!(
        "  {} {}",
        "fallback_version:".bright_white(),
        source.fallback_version
    );
    println!("  {} {}ms", "timeout:".bright_white(), source.timeout_ms);
    println!(
        "  {} {:?}",
        "failure_policy:".bright_white(),
        source.failure_policy
    );
    println!();
    Ok(())
}

pub fn reset_config() -> Result<()> {
    let path = config::save_config(&AppConfig::default())?;

    println!(
        "{}",
        "✓ Configuration reset to defaults".bright_green().bold()
    );
    println!();
    println!("  {} {}", "Config file:".bright_white().bold(), path);
    println!();

    Ok(())
}
