use refresh_core::{Color, IndicatorVisualState, PullState};

use super::constants::*;

/// One terminal line describing the indicator for the current frame.
pub fn render(phase: PullState, frame: Option<&IndicatorVisualState>) -> String {
    let Some(frame) = frame else {
        return format!("{:<10} (indicator hidden)", phase_label(phase));
    };

    format!(
        "{:<10} y={:>6.1} [{}] {} scale {:.2} rot {:>3.0}\u{b0} glow {:.2} alpha {:.2} {}",
        phase_label(phase),
        frame.offset_y,
        arc_bar(frame.arc_sweep),
        spinner_glyph(frame.rotation_degrees),
        frame.scale,
        frame.rotation_degrees,
        frame.glow_intensity,
        frame.opacity,
        hex(frame.glow_color),
    )
}

fn phase_label(phase: PullState) -> &'static str {
    match phase {
        PullState::Idle => "Idle",
        PullState::Drag => "Drag",
        PullState::Armed => "Armed",
        PullState::Refreshing => "Refreshing",
        PullState::Done => "Done",
    }
}

fn arc_bar(sweep: f32) -> String {
    let filled = ((sweep.clamp(0.0, 1.0) * ARC_CELLS as f32).round() as usize).min(ARC_CELLS);
    let mut bar = String::with_capacity(ARC_CELLS);
    bar.extend(std::iter::repeat(ARC_FILLED).take(filled));
    bar.extend(std::iter::repeat(ARC_EMPTY).take(ARC_CELLS - filled));
    bar
}

fn spinner_glyph(rotation_degrees: f32) -> char {
    let quarter = (rotation_degrees.rem_euclid(360.0) / 90.0) as usize;
    SPINNER[quarter.min(SPINNER.len() - 1)]
}

fn hex(color: Color) -> String {
    format!(
        "#{:02X}{:02X}{:02X}{:02X}",
        color.r, color.g, color.b, color.a
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(arc_sweep: f32, rotation_degrees: f32) -> IndicatorVisualState {
        IndicatorVisualState {
            offset_y: 40.0,
            pull_progress: 1.0,
            scale: 1.0,
            arc_sweep,
            rotation_degrees,
            glow_intensity: 0.8,
            opacity: 1.0,
            color: Color::rgb(0, 0xBF, 0xA5),
            glow_color: Color::rgb(0, 0xBF, 0xA5).scale_alpha(0.8),
        }
    }

    #[test]
    fn hidden_indicator_renders_placeholder() {
        assert_eq!(render(PullState::Idle, None), "Idle       (indicator hidden)");
    }

    #[test]
    fn arc_bar_tracks_sweep() {
        assert_eq!(arc_bar(0.0), "................");
        assert_eq!(arc_bar(0.75), "############....");
        assert_eq!(arc_bar(2.0), "################");
    }

    #[test]
    fn spinner_follows_rotation() {
        assert_eq!(spinner_glyph(0.0), '|');
        assert_eq!(spinner_glyph(100.0), '/');
        assert_eq!(spinner_glyph(359.9), '\\');
    }

    #[test]
    fn refreshing_line_mentions_phase_and_glow_color() {
        let line = render(PullState::Refreshing, Some(&frame(0.75, 180.0)));
        assert!(line.starts_with("Refreshing y=  40.0 [############....] -"));
        assert!(line.ends_with("#00BFA5CC"));
    }
}
