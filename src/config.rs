use crate::events::AppEvent;
use crate::gui::indicator::HasContent;
use crate::style::{Orientation, Paint, Preset, ScrollDirection, StyleConfig};
use async_channel::Sender;
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use thiserror::Error;

macro_rules! style_overrides {
    ($($field:ident: $ty:ty),* $(,)?) => {
        /// Optional per-field replacements applied over a preset.
        #[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
        pub struct StyleOverrides {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl StyleOverrides {
            pub fn apply(&self, base: StyleConfig) -> StyleConfig {
                StyleConfig {
                    $($field: self.$field.unwrap_or(base.$field),)*
                    ..base
                }
            }
        }
    };
}

style_overrides! {
    scroll_direction: ScrollDirection,
    dot_spacing: f64,
    dot_size: f64,
    visible_dots: u32,
    indicator_width: f64,
    vertical_padding: f64,
    horizontal_padding: f64,
    background_corner_radius: f64,
    background_color: Paint,
    selected_dot_color: Paint,
    active_dot_color: Paint,
    inactive_dot_color: Paint,
    selected_dot_scale: f64,
    normal_dot_scale: f64,
    selected_dot_opacity: f64,
    normal_dot_opacity: f64,
    animation_response: f64,
    animation_damping_fraction: f64,
}

const DEFAULT_TOTAL_ITEMS: usize = 10;

fn default_total_items() -> usize {
    DEFAULT_TOTAL_ITEMS
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_total_items")]
    pub total_items: usize,
    #[serde(default)]
    pub initial_index: i64,
    /// Pages drawn with the inactive dot color.
    #[serde(default)]
    pub empty_pages: Vec<usize>,
    #[serde(default)]
    pub preset: Preset,
    #[serde(default)]
    pub vertical: StyleOverrides,
    #[serde(default)]
    pub horizontal: StyleOverrides,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            total_items: DEFAULT_TOTAL_ITEMS,
            initial_index: 0,
            empty_pages: Vec::new(),
            preset: Preset::default(),
            vertical: StyleOverrides::default(),
            horizontal: StyleOverrides::default(),
        }
    }
}

impl Config {
    pub fn has_content(&self) -> HasContent {
        let empty = self.empty_pages.clone();
        HasContent::new(move |i| !empty.contains(&i))
    }

    pub fn vertical_style(&self) -> StyleConfig {
        self.vertical
            .apply(self.preset.style())
            .with_orientation(Orientation::Vertical)
    }

    pub fn horizontal_style(&self) -> StyleConfig {
        self.horizontal
            .apply(self.preset.style())
            .with_orientation(Orientation::Horizontal)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "dotpage", "dotpage").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// Environment layer: `DOTPAGE_TOTAL_ITEMS`, `DOTPAGE_VERTICAL__DOT_SPACING`, ...
fn environment() -> config::Environment {
    config::Environment::with_prefix("DOTPAGE")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn build<S>(file: S, env: config::Environment) -> Result<Config, ConfigError>
where
    S: config::Source + Send + Sync + 'static,
{
    let s = config::Config::builder()
        .add_source(file)
        .add_source(env)
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;
    build(
        config::File::from(config_path).required(false),
        environment(),
    )
}

/// Parses a TOML document on its own, without the file or environment layers.
pub fn parse_config(source: &str) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from_str(source, config::FileFormat::Toml))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> Config {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", e);
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}
