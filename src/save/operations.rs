// Save file I/O

use std::path::Path;

use super::SaveResult;
use super::types::SaveGame;

/// Read and parse a save file
pub fn read_save(path: &Path) -> SaveResult<SaveGame> {
    log::debug!("Reading file: {}", path.display());
    let contents = std::fs::read_to_string(path)?;

    log::debug!("Parsing XML ({} bytes)", contents.len());
    parse_save(&contents)
}

/// Parse the XML text of a save file
pub fn parse_save(xml: &str) -> SaveResult<SaveGame> {
    // The game writes a byte order mark in front of the declaration
    let xml = xml.trim_start_matches('\u{feff}');
    let save: SaveGame = quick_xml::de::from_str(xml)?;
    Ok(save)
}
