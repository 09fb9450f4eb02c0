use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

pub static PATH_HOME: LazyLock<PathBuf> =
    LazyLock::new(|| PathBuf::from(env::var("HOME").unwrap_or_default()));

pub static PATH_CONFIG: LazyLock<PathBuf> = LazyLock::new(|| {
    if let Ok(xdg_config_home) = env::var("XDG_CONFIG_HOME") {
        if !xdg_config_home.is_empty() {
            return PathBuf::from(xdg_config_home);
        }
    }
    PATH_HOME.join(".config")
});

/// Directory holding our own settings.json
pub static PATH_DEWTITLE: LazyLock<PathBuf> = LazyLock::new(|| PATH_CONFIG.join("dewtitle"));

/// Where the game writes its saves on Linux, used when SAVE_DIR is unset
pub static PATH_STARDEW_SAVES: LazyLock<PathBuf> = LazyLock::new(|| {
    // Flatpak Steam keeps the game's config under its own sandbox
    let flatpak = PATH_HOME
        .join(".var/app/com.valvesoftware.Steam/.config/StardewValley/Saves");
    if !PATH_CONFIG.join("StardewValley/Saves").exists() && flatpak.exists() {
        return flatpak;
    }
    PATH_CONFIG.join("StardewValley/Saves")
});

/// Path of the optional `.env` file, relative to the working directory
pub static PATH_DOTENV: LazyLock<PathBuf> = LazyLock::new(|| PathBuf::from(".env"));
