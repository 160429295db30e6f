use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use refresh_core::{
    update, IndicatorRenderer, IndicatorVisualState, Msg, PullConfig, PullControlState, PullState,
    ScrollNotification, ScrollPhysicsMonitor,
};
use refresh_engine::{refresh_fn, HapticFeedback, NoopHaptics, RefreshError, RefreshOperation};
use refresh_logging::{refresh_info, set_frame_tick};

use super::config::{self, AppSettings};
use super::effects::EffectRunner;
use super::haptics::LogHaptics;
use super::logging::{self, LogDestination};
use super::ui;

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::from_env());

    let mut args = std::env::args().skip(1);
    let first = args.next();
    if first.as_deref() == Some("--init-config") {
        let path = args
            .next()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(config::CONFIG_FILENAME));
        config::write_template(&path)?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let config_path = first
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::CONFIG_FILENAME));
    let settings = config::load_settings(&config_path);

    let log_haptics = LogHaptics::default();
    let haptic_fires = log_haptics.counter();
    let haptics: Box<dyn HapticFeedback> = if settings.haptics {
        Box::new(log_haptics)
    } else {
        Box::new(NoopHaptics)
    };
    let mut controller = PullController::new(
        settings.pull.clone(),
        demo_operation(&settings),
        haptics,
    )?;
    controller.set_reduce_motion(settings.reduce_motion);
    if settings.refresh_on_start {
        controller.show();
    }

    let script = demo_script();
    let mut last_line = String::new();
    for frame in 0..ui::constants::MAX_FRAMES {
        set_frame_tick(frame);
        if let Some(notification) = usize::try_from(frame).ok().and_then(|i| script.get(i)) {
            controller.on_scroll(*notification);
        }
        controller.tick(ui::constants::FRAME);

        if controller.needs_redraw() {
            let line = ui::render::render(controller.phase(), controller.frame().as_ref());
            if line != last_line {
                println!("{line}");
                last_line = line;
            }
        }

        let script_done = usize::try_from(frame).map_or(true, |i| i >= script.len());
        if script_done && controller.phase() == PullState::Idle {
            break;
        }
        thread::sleep(ui::constants::FRAME);
    }

    refresh_info!(
        "demo finished in {:?} (refresh in flight: {}, haptic ticks: {})",
        controller.phase(),
        controller.effects.refresh_in_flight(),
        haptic_fires.load(std::sync::atomic::Ordering::Relaxed)
    );
    controller.dispose();
    Ok(())
}

/// Reload of the plan list the control sits on top of, simulated with a delay.
fn demo_operation(settings: &AppSettings) -> Arc<dyn RefreshOperation> {
    let delay = settings.refresh_delay;
    let fails = settings.refresh_fails;
    Arc::new(refresh_fn(move || async move {
        tokio::time::sleep(delay).await;
        if fails {
            Err(RefreshError::failed("plans endpoint unavailable"))
        } else {
            Ok(())
        }
    }))
}

/// Scroll positions of one pull: to 60 px, past the trigger, back below it,
/// past it again, then release.
fn demo_script() -> Vec<ScrollNotification> {
    let mut script = Vec::new();
    let mut ramp = |from: f32, to: f32, steps: u16| {
        for step in 1..=steps {
            let t = f32::from(step) / f32::from(steps);
            script.push(ScrollNotification::Update {
                pixels: -(from + (to - from) * t),
            });
        }
    };
    ramp(0.0, 60.0, 8);
    ramp(60.0, 110.0, 6);
    ramp(110.0, 80.0, 4);
    ramp(80.0, 200.0, 8);
    script.push(ScrollNotification::End);
    script
}

/// Wires the scroll monitor, the state machine, the renderer and the effect
/// runner together on the UI thread. Messages are handled strictly in
/// arrival order.
pub(crate) struct PullController {
    state: PullControlState,
    monitor: ScrollPhysicsMonitor,
    renderer: IndicatorRenderer,
    effects: EffectRunner,
    inbox: VecDeque<Msg>,
    dirty: bool,
}

impl PullController {
    pub fn new(
        config: PullConfig,
        operation: Arc<dyn RefreshOperation>,
        haptics: Box<dyn HapticFeedback>,
    ) -> anyhow::Result<Self> {
        let renderer = IndicatorRenderer::new(config.timing);
        let state = PullControlState::new(config)?;
        Ok(Self {
            state,
            monitor: ScrollPhysicsMonitor::new(),
            renderer,
            effects: EffectRunner::new(operation, haptics)?,
            inbox: VecDeque::new(),
            dirty: true,
        })
    }

    /// Observes a host scroll notification; the host keeps handling it too.
    pub fn on_scroll(&mut self, notification: ScrollNotification) {
        let signal = self.monitor.observe(notification);
        self.inbox.push_back(signal.into());
        self.drain();
    }

    /// Starts a refresh without a gesture.
    pub fn show(&mut self) {
        self.inbox.push_back(Msg::ShowRequested);
        self.drain();
    }

    pub fn set_reduce_motion(&mut self, enabled: bool) {
        if let Some(msg) = self.renderer.set_reduce_motion(enabled) {
            self.inbox.push_back(msg);
        }
        self.drain();
    }

    /// Advances one frame: collects refresh completions, then the clocks.
    pub fn tick(&mut self, dt: Duration) {
        self.inbox.extend(self.effects.poll());
        self.drain();
        if let Some(msg) = self.renderer.advance(dt) {
            self.inbox.push_back(msg);
        }
        self.drain();
    }

    pub fn phase(&self) -> PullState {
        self.state.phase()
    }

    /// Whether the indicator changed since the last call, either through a
    /// state change or because a clock is running.
    pub fn needs_redraw(&mut self) -> bool {
        std::mem::take(&mut self.dirty) || self.renderer.is_animating()
    }

    pub fn frame(&self) -> Option<IndicatorVisualState> {
        self.renderer.frame(&self.state.view())
    }

    /// Releases the clocks. A refresh still in flight runs to completion on
    /// the adapter's runtime until the controller is dropped.
    pub fn dispose(&mut self) {
        self.renderer.dispose();
        self.inbox.clear();
    }

    fn drain(&mut self) {
        while let Some(msg) = self.inbox.pop_front() {
            self.dispatch(msg);
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        for effect in effects {
            if let Some(follow_up) = self.renderer.apply(effect) {
                self.inbox.push_back(follow_up);
            }
            if let Some(follow_up) = self.effects.run(effect) {
                self.inbox.push_back(follow_up);
            }
        }
        self.dirty |= state.consume_dirty();
        self.state = state;
    }
}
