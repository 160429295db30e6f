//! Pull-to-refresh core: scroll normalization, the pure gesture state machine
//! and the indicator's visual mapping.
mod clock;
mod config;
mod effect;
mod indicator;
mod msg;
mod scroll;
mod state;
mod update;
mod view_model;

pub use clock::{AnimationClock, FadeClock, FadeDirection};
pub use config::{
    AnimationTiming, Color, ConfigError, PullConfig, DEFAULT_DISPLACEMENT,
    DEFAULT_MAX_DRAG_DISTANCE, DEFAULT_TRIGGER_DISTANCE,
};
pub use effect::Effect;
pub use indicator::{
    visual_state, IndicatorRenderer, IndicatorVisualState, MIN_SCALE, PULL_GLOW_MAX,
    REFRESH_ARC_SWEEP, REFRESH_GLOW,
};
pub use msg::{Msg, RefreshOutcome};
pub use scroll::{PullSignal, ScrollNotification, ScrollPhysicsMonitor};
pub use state::{GestureSession, PullControlState, PullState};
pub use update::update;
pub use view_model::PullViewModel;
