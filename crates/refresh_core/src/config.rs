use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_TRIGGER_DISTANCE: f32 = 100.0;
pub const DEFAULT_MAX_DRAG_DISTANCE: f32 = 150.0;
pub const DEFAULT_DISPLACEMENT: f32 = 40.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("trigger distance must be positive, got {0}")]
    TriggerDistance(f32),
    #[error("max drag distance {max} is below trigger distance {trigger}")]
    MaxDragBelowTrigger { max: f32, trigger: f32 },
    #[error("displacement must be positive, got {0}")]
    Displacement(f32),
    #[error("edge offset must not be negative, got {0}")]
    EdgeOffset(f32),
    #[error("spin period must be non-zero")]
    SpinPeriod,
}

/// Accent color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn from_hex(raw: &str) -> Option<Self> {
        let hex = raw.trim().trim_start_matches('#');
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
                a: channel(6)?,
            }),
            _ => None,
        }
    }

    /// Same color with alpha multiplied by `factor` (clamped to `[0, 1]`).
    pub fn scale_alpha(self, factor: f32) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        Self {
            a: (f32::from(self.a) * factor).round() as u8,
            ..self
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        // Teal accent used by the dashboard theme.
        Self::rgb(0x00, 0xBF, 0xA5)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTiming {
    pub fade_in: Duration,
    pub fade_out: Duration,
    /// Time for one full turn of the refreshing spinner.
    pub spin_period: Duration,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            fade_in: Duration::from_millis(150),
            fade_out: Duration::from_millis(200),
            spin_period: Duration::from_millis(1000),
        }
    }
}

/// Construction-time parameters of a pull-to-refresh control.
///
/// Distances are logical pixels along the scroll axis.
#[derive(Debug, Clone, PartialEq)]
pub struct PullConfig {
    /// Drag distance at which the gesture arms.
    pub trigger_distance: f32,
    /// Visual cap of the drag offset.
    pub max_drag_distance: f32,
    /// Resting offset of the indicator while refreshing.
    pub displacement: f32,
    /// Extra offset when the scroll region starts below a fixed element.
    pub edge_offset: f32,
    pub color: Color,
    pub timing: AnimationTiming,
}

impl Default for PullConfig {
    fn default() -> Self {
        Self {
            trigger_distance: DEFAULT_TRIGGER_DISTANCE,
            max_drag_distance: DEFAULT_MAX_DRAG_DISTANCE,
            displacement: DEFAULT_DISPLACEMENT,
            edge_offset: 0.0,
            color: Color::default(),
            timing: AnimationTiming::default(),
        }
    }
}

impl PullConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Written as negated comparisons so NaN is rejected too.
        if !(self.trigger_distance > 0.0) {
            return Err(ConfigError::TriggerDistance(self.trigger_distance));
        }
        if !(self.max_drag_distance >= self.trigger_distance) {
            return Err(ConfigError::MaxDragBelowTrigger {
                max: self.max_drag_distance,
                trigger: self.trigger_distance,
            });
        }
        if !(self.displacement > 0.0) {
            return Err(ConfigError::Displacement(self.displacement));
        }
        if !(self.edge_offset >= 0.0) {
            return Err(ConfigError::EdgeOffset(self.edge_offset));
        }
        if self.timing.spin_period.is_zero() {
            return Err(ConfigError::SpinPeriod);
        }
        Ok(())
    }

    /// Drag offset clamped into `[0, max_drag_distance]`.
    pub fn clamp_offset(&self, overscroll: f32) -> f32 {
        if overscroll.is_nan() {
            return 0.0;
        }
        overscroll.clamp(0.0, self.max_drag_distance)
    }

    /// Offset at which the indicator rests while a refresh is running.
    pub fn resting_offset(&self) -> f32 {
        self.clamp_offset(self.displacement)
    }
}
