use std::path::{Path, PathBuf};

/// `$XDG_CONFIG_HOME/vida`, falling back to `$HOME/.config/vida`.
pub fn get_config_dir() -> PathBuf {
    config_dir_from(
        std::env::var_os("XDG_CONFIG_HOME").as_deref().map(Path::new),
        std::env::var_os("HOME").as_deref().map(Path::new),
    )
}

pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

fn config_dir_from(xdg_config_home: Option<&Path>, home: Option<&Path>) -> PathBuf {
    // relative XDG values are ignored, as the base directory spec requires
    match xdg_config_home.filter(|p| p.is_absolute()) {
        Some(base) => base.join("vida"),
        None => home
            .unwrap_or_else(|| Path::new("."))
            .join(".config")
            .join("vida"),
    }
}
