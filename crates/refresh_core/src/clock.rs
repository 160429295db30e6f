use std::time::Duration;

/// Owned animation clock advanced explicitly by the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationClock {
    elapsed: Duration,
    running: bool,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// Freezes the clock at its current value.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    pub fn advance(&mut self, dt: Duration) {
        if self.running {
            self.elapsed = self.elapsed.saturating_add(dt);
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirection {
    In,
    Out,
}

/// Linear opacity transition driven by an [`AnimationClock`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeClock {
    direction: FadeDirection,
    clock: AnimationClock,
    duration: Duration,
    /// Opacity when the current fade started.
    from: f32,
    out_completed: bool,
}

impl Default for FadeClock {
    fn default() -> Self {
        Self {
            direction: FadeDirection::Out,
            clock: AnimationClock::new(),
            duration: Duration::ZERO,
            from: 0.0,
            out_completed: false,
        }
    }
}

impl FadeClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fade from the current opacity, replacing any fade in progress.
    pub fn start(&mut self, direction: FadeDirection, duration: Duration) {
        self.from = self.opacity();
        self.direction = direction;
        self.duration = duration;
        self.out_completed = false;
        self.clock.reset();
        self.clock.start();
        if duration.is_zero() {
            self.finish();
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        if !self.clock.is_running() {
            return;
        }
        self.clock.advance(dt);
        if self.clock.elapsed() >= self.duration {
            self.finish();
        }
    }

    /// Jumps straight to the end value of the current fade.
    pub fn finish(&mut self) {
        if !self.clock.is_running() {
            return;
        }
        self.clock.stop();
        self.clock.reset();
        self.from = match self.direction {
            FadeDirection::In => 1.0,
            FadeDirection::Out => 0.0,
        };
        self.out_completed = self.direction == FadeDirection::Out;
    }

    pub fn opacity(&self) -> f32 {
        if !self.clock.is_running() {
            return self.from;
        }
        let progress = (self.clock.elapsed().as_secs_f32() / self.duration.as_secs_f32()).min(1.0);
        match self.direction {
            FadeDirection::In => self.from + (1.0 - self.from) * progress,
            FadeDirection::Out => self.from * (1.0 - progress),
        }
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Returns `true` once after a fade-out has reached zero opacity.
    pub fn take_out_completed(&mut self) -> bool {
        std::mem::take(&mut self.out_completed)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
