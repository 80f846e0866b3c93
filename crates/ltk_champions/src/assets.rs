//! Icon URL construction for champions, summoner spells, items and rank crests.
//!
//! Nothing here performs a request; URLs are derived from ids and the catalog
//! version and are never checked for existence.

use crate::config::SourceConfig;

/// Maps a summoner spell id to its Data Dragon asset name.
pub fn summoner_spell_slug(spell_id: u32) -> Option<&'static str> {
    let slug = match spell_id {
        1 => "SummonerBoost", // Cleanse
        3 => "SummonerExhaust",
        4 => "SummonerFlash",
        6 => "SummonerHaste", // Ghost
        7 => "SummonerHeal",
        11 => "SummonerSmite",
        12 => "SummonerTeleport",
        13 => "SummonerMana", // Clarity
        14 => "SummonerDot",  // Ignite
        21 => "SummonerBarrier",
        30 => "SummonerPoroRecall",
        31 => "SummonerPoroThrow",
        32 => "SummonerSnowball",
        39 => "SummonerSnowURFSnowball_Mark",
        54 => "Summoner_UltBookPlaceholder",
        55 => "Summoner_UltBookSmitePlaceholder",
        _ => return None,
    };
    Some(slug)
}

/// Versioned Data Dragon icon for a champion slug.
pub fn champion_icon_url(config: &SourceConfig, version: &str, champion_slug: &str) -> String {
    format!(
        "{}/cdn/{}/img/champion/{}.png",
        config.cdn_base(),
        version,
        champion_slug
    )
}

/// Version-agnostic CommunityDragon icon keyed by numeric champion id.
pub fn champion_icon_fallback_url(config: &SourceConfig, champion_id: u32) -> String {
    format!(
        "{}/latest/plugins/rcp-be-lol-game-data/global/default/v1/champion-icons/{}.png",
        config.community_dragon_base(),
        champion_id
    )
}

/// Summoner spell icon. Unknown ids use CommunityDragon's generic path.
pub fn spell_icon_url(config: &SourceConfig, version: &str, spell_id: u32) -> String {
    match summoner_spell_slug(spell_id) {
        Some(slug) => format!("{}/cdn/{}/img/spell/{}.png", config.cdn_base(), version, slug),
        None => format!(
            "{}/latest/plugins/rcp-be-lol-game-data/global/default/data/spells/icons2d/summoner_{}.png",
            config.community_dragon_base(),
            spell_id
        ),
    }
}

/// Item icon. Item `0` is an empty slot and yields an empty string.
pub fn item_icon_url(config: &SourceConfig, version: &str, item_id: u32) -> String {
    if item_id == 0 {
        return String::new();
    }
    format!("{}/cdn/{}/img/item/{}.png", config.cdn_base(), version, item_id)
}

/// Ranked mini crest for a tier name (`"GOLD"`, `"Challenger"`, ...).
///
/// A missing or blank tier (unranked) yields an empty string.
pub fn rank_emblem_icon_url(config: &SourceConfig, tier: Option<&str>) -> String {
    let tier = match tier.map(str::trim) {
        Some(t) if !t.is_empty() => t.to_lowercase(),
        _ => return String::new(),
    };
    format!(
        "{}/latest/plugins/rcp-fe-lol-static-assets/global/default/images/ranked-mini-crests/{}.svg",
        config.community_dragon_base(),
        tier
    )
}
