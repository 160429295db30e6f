//! Normalizes the host's scroll notifications into pull signals.
//!
//! The monitor only observes: the host scrollable keeps processing every
//! notification it reports here.

use crate::Msg;

/// Raw notification from the host scrollable, along the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollNotification {
    /// Scroll position changed. Negative `pixels` means past the top edge.
    Update { pixels: f32 },
    /// Separately reported overscroll (clamping platforms). A negative
    /// `delta` pulls past the top edge; positive deltas are bounce-back.
    Overscroll { delta: f32 },
    /// The user lifted their finger or the scroll settled.
    End,
}

/// One normalized fact per notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PullSignal {
    /// Overscrolled past the top by this many px (0 = within bounds).
    Overscroll(f32),
    Released,
}

impl From<PullSignal> for Msg {
    fn from(signal: PullSignal) -> Self {
        match signal {
            PullSignal::Overscroll(px) => Msg::OverscrollChanged(px),
            PullSignal::Released => Msg::ScrollEnded,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScrollPhysicsMonitor {
    accumulated: f32,
}

impl ScrollPhysicsMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, notification: ScrollNotification) -> PullSignal {
        match notification {
            ScrollNotification::Update { pixels } => {
                if pixels < 0.0 {
                    self.accumulated = -pixels;
                } else {
                    self.accumulated = 0.0;
                }
                PullSignal::Overscroll(self.accumulated)
            }
            ScrollNotification::Overscroll { delta } => {
                if delta < 0.0 {
                    self.accumulated += -delta;
                }
                PullSignal::Overscroll(self.accumulated)
            }
            ScrollNotification::End => {
                self.accumulated = 0.0;
                PullSignal::Released
            }
        }
    }

    /// Overscroll accumulated so far in the current gesture.
    pub fn overscroll(&self) -> f32 {
        self.accumulated
    }
}
