mod config;
mod paths;
mod perfection;
mod save;
mod session;
mod title;
mod twitch;
mod watcher;

use crate::config::{load_cfg, load_config, save_cfg};
use crate::paths::PATH_DEWTITLE;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("dewtitle=info"))
        .init();

    if std::env::args().any(|arg| arg == "--help") {
        println!("{}", USAGE_TEXT);
        std::process::exit(0);
    }

    if let Some(arg) = std::env::args().skip(1).find(|arg| arg != "--init-config") {
        eprintln!("Unknown option: {}", arg);
        eprintln!("{}", USAGE_TEXT);
        std::process::exit(1);
    }

    if std::env::args().any(|arg| arg == "--init-config") {
        match save_cfg(&load_cfg()) {
            Ok(()) => {
                log::info!(
                    "Wrote {}",
                    PATH_DEWTITLE.join("settings.json").display()
                );
                std::process::exit(0);
            }
            Err(e) => {
                log::error!("Failed to write settings: {}", e);
                std::process::exit(1);
            }
        }
    }

    let config = load_config();
    log::debug!("Save directory: {}", config.save_dir.display());

    let handles = match session::start(&config) {
        Ok(handles) => handles,
        Err(e) => {
            log::error!("{}", e);
            if let Some(message) = e.console_message() {
                eprintln!("{}", message);
            }
            std::process::exit(e.exit_code());
        }
    };

    // Watch threads only stop if they panic
    for handle in handles {
        if handle.join().is_err() {
            log::error!("A save watcher stopped unexpectedly");
        }
    }
}

static USAGE_TEXT: &str = r#"
Usage: dewtitle [OPTIONS]

Watches every Stardew Valley save slot and keeps the Twitch stream title at
"<STREAM_TITLE> | Day <d> of <Season>, Year <y> | <n>% perfection".

Options:
    --init-config   Write settings.json (with defaults for anything unset) and exit
    --help          Show this text

Environment (also read from ./.env):
    ACCESS_TOKEN        Twitch user token with channel:manage:broadcast
    CLIENT_ID           Twitch application client id
    REDIRECT_URI        OAuth redirect registered for the application
    SAVE_DIR            Save root, defaults to ~/.config/StardewValley/Saves
    STREAM_TITLE        Text in front of the date and perfection
    POLL_INTERVAL_MS    How often save files are checked (default 2000)
    MULTIPLAYER         Count the extra multiplayer crafting recipe
    HTTP_TIMEOUT_SECS   Timeout for Twitch requests (default none)
    RUST_LOG            Log filter (default dewtitle=info)
"#;
