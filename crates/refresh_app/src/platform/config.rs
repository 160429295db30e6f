use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use refresh_core::{AnimationTiming, Color, PullConfig};
use refresh_logging::{refresh_info, refresh_warn};
use serde::{Deserialize, Serialize};

pub(crate) const CONFIG_FILENAME: &str = "pull_refresh.ron";

/// On-disk shape of the configuration. Missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
struct ConfigFile {
    trigger_distance: f32,
    max_drag_distance: f32,
    displacement: f32,
    edge_offset: f32,
    /// `#RRGGBB` or `#RRGGBBAA`.
    color: String,
    fade_in_ms: u64,
    fade_out_ms: u64,
    spin_period_ms: u64,
    haptics: bool,
    reduce_motion: bool,
    /// Simulated latency of the demo refresh operation.
    refresh_delay_ms: u64,
    /// Makes the demo refresh operation fail, to show the failure path.
    refresh_fails: bool,
    /// Runs one refresh before the scripted pull, like a first load.
    refresh_on_start: bool,
}

impl Default for ConfigFile {
    fn default() -> Self {
        AppSettings::default().into()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AppSettings {
    pub pull: PullConfig,
    pub haptics: bool,
    pub reduce_motion: bool,
    pub refresh_delay: Duration,
    pub refresh_fails: bool,
    pub refresh_on_start: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            pull: PullConfig::default(),
            haptics: true,
            reduce_motion: false,
            refresh_delay: Duration::from_millis(600),
            refresh_fails: false,
            refresh_on_start: false,
        }
    }
}

impl From<AppSettings> for ConfigFile {
    fn from(settings: AppSettings) -> Self {
        let pull = settings.pull;
        Self {
            trigger_distance: pull.trigger_distance,
            max_drag_distance: pull.max_drag_distance,
            displacement: pull.displacement,
            edge_offset: pull.edge_offset,
            color: color_to_hex(pull.color),
            fade_in_ms: millis(pull.timing.fade_in),
            fade_out_ms: millis(pull.timing.fade_out),
            spin_period_ms: millis(pull.timing.spin_period),
            haptics: settings.haptics,
            reduce_motion: settings.reduce_motion,
            refresh_delay_ms: millis(settings.refresh_delay),
            refresh_fails: settings.refresh_fails,
            refresh_on_start: settings.refresh_on_start,
        }
    }
}

/// Loads settings from `path`. Any problem is logged and yields defaults.
pub(crate) fn load_settings(path: &Path) -> AppSettings {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            refresh_info!("No config at {:?}; using defaults", path);
            return AppSettings::default();
        }
        Err(err) => {
            refresh_warn!("Failed to read config from {:?}: {}", path, err);
            return AppSettings::default();
        }
    };

    let file: ConfigFile = match ron::from_str(&content) {
        Ok(file) => file,
        Err(err) => {
            refresh_warn!("Failed to parse config from {:?}: {}", path, err);
            return AppSettings::default();
        }
    };

    let settings = into_settings(file);
    if let Err(err) = settings.pull.validate() {
        refresh_warn!("Invalid config in {:?}: {}; using defaults", path, err);
        return AppSettings::default();
    }

    refresh_info!("Loaded config from {:?}", path);
    settings
}

/// Writes the default settings to `path` as a starting point for editing.
pub(crate) fn write_template(path: &Path) -> anyhow::Result<()> {
    let pretty = ron::ser::PrettyConfig::new();
    let content = ron::ser::to_string_pretty(&ConfigFile::default(), pretty)
        .context("serialize default config")?;
    fs::write(path, content).with_context(|| format!("write config template to {path:?}"))?;
    Ok(())
}

fn into_settings(file: ConfigFile) -> AppSettings {
    let color = Color::from_hex(&file.color).unwrap_or_else(|| {
        refresh_warn!("Unrecognised color {:?}; using the default accent", file.color);
        Color::default()
    });

    AppSettings {
        pull: PullConfig {
            trigger_distance: file.trigger_distance,
            max_drag_distance: file.max_drag_distance,
            displacement: file.displacement,
            edge_offset: file.edge_offset,
            color,
            timing: AnimationTiming {
                fade_in: Duration::from_millis(file.fade_in_ms),
                fade_out: Duration::from_millis(file.fade_out_ms),
                spin_period: Duration::from_millis(file.spin_period_ms),
            },
        },
        haptics: file.haptics,
        reduce_motion: file.reduce_motion,
        refresh_delay: Duration::from_millis(file.refresh_delay_ms),
        refresh_fails: file.refresh_fails,
        refresh_on_start: file.refresh_on_start,
    }
}

fn color_to_hex(color: Color) -> String {
    if color.a == 0xFF {
        format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b)
    } else {
        format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            color.r, color.g, color.b, color.a
        )
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
