//! Animated spinner for per-view loading states

use ratatui::{
    style::{Color, Style},
    text::Span,
};
use std::time::{Duration, Instant};

const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Braille-dot spinner, ticked once per render pass
#[derive(Debug)]
pub struct Spinner {
    current_frame: usize,
    last_update: Instant,
    frame_duration: Duration,
    color: Color,
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spinner {
    pub fn new() -> Self {
        Self {
            current_frame: 0,
            last_update: Instant::now(),
            frame_duration: Duration::from_millis(80),
            color: Color::Cyan,
        }
    }

    /// Advance the animation if enough time elapsed
    pub fn tick(&mut self) {
        let now = Instant::now();
        if now.duration_since(self.last_update) >= self.frame_duration {
            self.current_frame = (self.current_frame + 1) % FRAMES.len();
            self.last_update = now;
        }
    }

    /// Current frame as a styled span
    pub fn frame(&self) -> Span<'static> {
        Span::styled(FRAMES[self.current_frame], Style::default().fg(self.color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_stays_in_range() {
        let mut spinner = Spinner::new();
        for _ in 0..25 {
            spinner.tick();
            assert!(spinner.current_frame < FRAMES.len());
        }
    }
}
