use std::path::PathBuf;

pub fn get_config_dir() -> PathBuf {
    let config_home = dirs::config_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".config")
    });
    config_home.join("chatshade")
}

pub fn find_config_file() -> Option<PathBuf> {
    find_config_in(get_config_dir(), dirs::home_dir())
}

fn find_config_in(config_dir: PathBuf, home: Option<PathBuf>) -> Option<PathBuf> {
    let mut paths = vec![config_dir.join("config.toml")];
    if let Some(home) = home {
        paths.push(home.join(".chatshade").join("config.toml"));
    }

    paths.into_iter().find(|p| p.exists())
}

/// User theme directory, whether or not it exists yet
pub fn user_theme_dir() -> PathBuf {
    get_config_dir().join("themes")
}
