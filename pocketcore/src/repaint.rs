//! Repaint controller
//!
//! egui redraws every frame it is woken for. The calculator only changes
//! when a key is tapped, so nothing should be scheduled while idle.
//!
//! `RepaintController` records *why* a frame is being painted and asks for
//! a follow-up frame only when the app marked its state dirty during this
//! one (a theme switch restyles the context and needs one more pass to show
//! the new colours everywhere).

/// Why this frame is being painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepaintReason {
    /// First frame — always paint.
    Init,
    /// User input (pointer, tap, key event).
    Input,
    /// App-requested repaint (state changed outside of input).
    StateChange,
}

/// Decide the reason for a frame from what is known at its start.
pub fn classify(frame: u64, had_input: bool, needs_repaint: bool) -> RepaintReason {
    if frame == 0 {
        RepaintReason::Init
    } else if needs_repaint && !had_input {
        RepaintReason::StateChange
    } else {
        // Woken by egui for input, or for something we didn't track.
        RepaintReason::Input
    }
}

/// Drop this into your app struct and call [`RepaintController::begin_frame`]
/// at the top of `update()` and [`RepaintController::end_frame`] at the bottom.
#[derive(Debug)]
pub struct RepaintController {
    needs_repaint: bool,
    frame: u64,
    reason: RepaintReason,
}

impl Default for RepaintController {
    fn default() -> Self {
        Self::new()
    }
}

impl RepaintController {
    pub fn new() -> Self {
        Self {
            needs_repaint: false,
            frame: 0,
            reason: RepaintReason::Init,
        }
    }

    /// Request a single repaint after this frame.
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    pub fn reason(&self) -> RepaintReason {
        self.reason
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Call at the **start** of `update()`.
    pub fn begin_frame(&mut self, ctx: &egui::Context) {
        let had_input = ctx.input(|i| {
            !i.events.is_empty()
                || i.pointer.any_pressed()
                || i.pointer.any_released()
                || i.pointer.is_moving()
        });
        self.observe(had_input);
    }

    /// Call at the **end** of `update()`.
    pub fn end_frame(&mut self, ctx: &egui::Context) {
        if self.finish() {
            ctx.request_repaint();
        }
    }

    fn observe(&mut self, had_input: bool) {
        self.reason = classify(self.frame, had_input, self.needs_repaint);
        // The one-shot flag is consumed by the frame that sees it.
        self.needs_repaint = false;
    }

    /// Advance the frame counter; true when a repaint must be scheduled.
    fn finish(&mut self) -> bool {
        self.frame += 1;
        self.needs_repaint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify(0, true, true), RepaintReason::Init);
        assert_eq!(classify(3, true, false), RepaintReason::Input);
        assert_eq!(classify(3, false, true), RepaintReason::StateChange);
        assert_eq!(classify(3, true, true), RepaintReason::Input);
        assert_eq!(classify(3, false, false), RepaintReason::Input);
    }

    #[test]
    fn test_idle_frames_schedule_nothing() {
        let mut rc = RepaintController::new();
        rc.observe(false);
        assert_eq!(rc.reason(), RepaintReason::Init);
        assert!(!rc.finish());
        rc.observe(true);
        assert!(!rc.finish());
        assert_eq!(rc.frame(), 2);
    }

    #[test]
    fn test_mark_schedules_one_frame() {
        let mut rc = RepaintController::new();
        rc.observe(false);
        rc.mark_needs_repaint();
        assert!(rc.finish());

        rc.observe(false);
        assert_eq!(rc.reason(), RepaintReason::StateChange);
        assert!(!rc.needs_repaint());
        assert!(!rc.finish());
    }
}
