use super::Directory;
use miette::Result;

pub fn spell_icon(directory: &Directory, spell_id: u32) -> Result<()> {
    println!("{}", directory.spell_icon_url(spell_id));
    Ok(())
}

pub fn item_icon(directory: &Directory, item_id: u32) -> Result<()> {
    println!("{}", directory.item_icon_url(item_id));
    Ok(())
}

pub fn rank_emblem_icon(directory: &Directory, tier: Option<&str>) -> Result<()> {
    println!("{}", directory.rank_emblem_icon_url(tier));
    Ok(())
}
