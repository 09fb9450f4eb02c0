use crate::config::pure::{merge_vars, parse_dotenv};
use crate::config::types::{DewConfig, DewSettings};
use crate::paths::{PATH_DEWTITLE, PATH_DOTENV};

use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn load_cfg() -> DewSettings {
    let path = PATH_DEWTITLE.join("settings.json");

    if let Ok(file) = File::open(&path) {
        match serde_json::from_reader::<_, DewSettings>(BufReader::new(file)) {
            Ok(settings) => {
                log::debug!("Loaded settings from {}", path.display());
                return settings;
            }
            Err(e) => {
                log::warn!("Ignoring unreadable {}: {}", path.display(), e);
            }
        }
    }

    // Return default settings if file doesn't exist or has error
    DewSettings::default()
}

pub fn save_cfg(settings: &DewSettings) -> Result<(), Box<dyn Error>> {
    std::fs::create_dir_all(&*PATH_DEWTITLE)?;
    let path = PATH_DEWTITLE.join("settings.json");
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, settings)?;
    Ok(())
}

/// Read a `.env` file; a missing file is just an empty set
pub fn load_dotenv(path: &Path) -> HashMap<String, String> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let vars = parse_dotenv(&contents);
            log::debug!("Read {} entries from {}", vars.len(), path.display());
            vars
        }
        Err(_) => HashMap::new(),
    }
}

/// settings.json, then `.env`, then the real environment
pub fn load_config() -> DewConfig {
    let settings = load_cfg();
    let dotenv = load_dotenv(&PATH_DOTENV);
    let env: HashMap<String, String> = std::env::vars().collect();

    DewConfig::resolve(settings, &merge_vars(&[dotenv, env]))
}
