use std::time::Duration;

/// One frame of the demo loop (~60 fps).
pub const FRAME: Duration = Duration::from_millis(16);
/// Cells used to draw a full circle of arc.
pub const ARC_CELLS: usize = 16;
pub const ARC_FILLED: char = '#';
pub const ARC_EMPTY: char = '.';
/// Spinner glyphs for each quarter turn.
pub const SPINNER: [char; 4] = ['|', '/', '-', '\\'];
/// Upper bound on demo frames, in case a refresh never completes.
pub const MAX_FRAMES: u64 = 60 * 30;
