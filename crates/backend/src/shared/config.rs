use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub paths: PathsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PathsConfig {
    /// Compiled client (trunk `dist/`).
    pub static_dir: String,
    /// Directory holding `ar.html` and `en.html`.
    pub content_dir: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 3000

[paths]
static_dir = "crates/frontend/dist"
content_dir = "content"
"#;

/// Loaded configuration plus the directory relative paths resolve against.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub base_dir: PathBuf,
}

impl LoadedConfig {
    pub fn static_dir(&self) -> PathBuf {
        resolve_path(&self.base_dir, &self.config.paths.static_dir)
    }

    pub fn content_dir(&self) -> PathBuf {
        resolve_path(&self.base_dir, &self.config.paths.content_dir)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.config.server.host, self.config.server.port)
    }
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config: Config = toml::from_str(contents)?;
    if let Ok(port) = std::env::var("PORT") {
        config.server.port = port
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid PORT '{port}': {e}"))?;
    }
    Ok(config)
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Current working directory (for `cargo run`)
/// 3. Falls back to embedded default config
///
/// The `PORT` environment variable overrides `server.port`.
pub fn load_config() -> anyhow::Result<LoadedConfig> {
    let cwd = std::env::current_dir()?;
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf));

    for dir in exe_dir.into_iter().chain(std::iter::once(cwd.clone())) {
        let config_path = dir.join("config.toml");
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return Ok(LoadedConfig {
                config: parse_config(&contents)?,
                base_dir: dir,
            });
        }
        tracing::debug!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    Ok(LoadedConfig {
        config: parse_config(DEFAULT_CONFIG)?,
        base_dir: cwd,
    })
}

/// Absolute paths are used as is; relative ones are joined to `base`.
pub fn resolve_path(base: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
