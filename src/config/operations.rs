mod io;

pub use io::{load_cfg, load_config, save_cfg};
