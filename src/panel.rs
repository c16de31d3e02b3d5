// irc_overlay — An in-game IRC chat overlay for the terminal
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Open/close animation driver for the overlay panel.

/// Progress change per frame.
pub const DEFAULT_STEP: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Closed,
    Opening,
    Open,
    Closing,
}

#[derive(Debug, Clone)]
pub struct Panel {
    state: PanelState,
    progress: f32,
    step: f32,
}

impl Panel {
    pub fn new(step: f32) -> Self {
        Self { state: PanelState::Closed, progress: 0.0, step }
    }

    #[must_use]
    pub fn state(&self) -> PanelState {
        self.state
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Reverse direction. Toggling mid-animation continues from the current
    /// progress instead of snapping to an end.
    pub fn toggle(&mut self) {
        match self.state {
            PanelState::Closed | PanelState::Closing => {
                self.state = PanelState::Opening;
                self.progress = self.progress.max(0.0);
            }
            PanelState::Opening | PanelState::Open => {
                self.state = PanelState::Closing;
                self.progress = self.progress.min(1.0);
            }
        }
        tracing::debug!(state = ?self.state, progress = self.progress, "panel toggled");
    }

    /// Advance one frame.
    pub fn tick(&mut self) {
        match self.state {
            PanelState::Opening => {
                self.progress += self.step;
                if self.progress >= 1.0 {
                    self.progress = 1.0;
                    self.state = PanelState::Open;
                }
            }
            PanelState::Closing => {
                self.progress -= self.step;
                if self.progress <= 0.0 {
                    self.progress = 0.0;
                    self.state = PanelState::Closed;
                }
            }
            PanelState::Closed | PanelState::Open => {}
        }
    }

    /// Whether key events go to the overlay.
    #[must_use]
    pub fn captures_input(&self) -> bool {
        matches!(self.state, PanelState::Opening | PanelState::Open)
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state != PanelState::Closed
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new(DEFAULT_STEP)
    }
}

/// Ease-out curve `sin(acos(1 - t))` for `t` in `[0, 1]`.
#[must_use]
pub fn fly_in(t: f32) -> f32 {
    (1.0 - t.clamp(0.0, 1.0)).acos().sin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn opened(step: f32) -> Panel {
        let mut panel = Panel::new(step);
        panel.toggle();
        while panel.state() != PanelState::Open {
            panel.tick();
        }
        panel
    }

    #[test]
    fn starts_closed_and_inert() {
        let panel = Panel::default();
        assert_eq!(panel.state(), PanelState::Closed);
        assert_eq!(panel.progress(), 0.0);
        assert!(!panel.captures_input());
        assert!(!panel.is_visible());
    }

    #[test]
    fn opens_after_exact_number_of_steps() {
        let mut panel = Panel::new(0.25);
        panel.toggle();
        assert_eq!(panel.state(), PanelState::Opening);
        for _ in 0..3 {
            panel.tick();
            assert_eq!(panel.state(), PanelState::Opening);
        }
        panel.tick();
        assert_eq!(panel.state(), PanelState::Open);
        assert_eq!(panel.progress(), 1.0);
    }

    #[test]
    fn overshoot_is_clamped_to_one() {
        let mut panel = Panel::new(0.3);
        panel.toggle();
        for _ in 0..4 {
            panel.tick();
        }
        assert_eq!(panel.state(), PanelState::Open);
        assert_eq!(panel.progress(), 1.0);
    }

    #[test]
    fn closes_back_to_zero() {
        let mut panel = opened(0.25);
        panel.toggle();
        assert_eq!(panel.state(), PanelState::Closing);
        assert!(!panel.captures_input());
        assert!(panel.is_visible());
        for _ in 0..4 {
            panel.tick();
        }
        assert_eq!(panel.state(), PanelState::Closed);
        assert_eq!(panel.progress(), 0.0);
    }

    #[test]
    fn toggle_mid_opening_reverses_from_current_progress() {
        let mut panel = Panel::new(0.125);
        panel.toggle();
        for _ in 0..3 {
            panel.tick();
        }
        let mid = panel.progress();
        assert_eq!(mid, 0.375);

        panel.toggle();
        assert_eq!(panel.state(), PanelState::Closing);
        assert_eq!(panel.progress(), mid);
        panel.tick();
        assert_eq!(panel.progress(), 0.25);
    }

    #[test]
    fn toggle_mid_closing_reopens_without_reaching_closed() {
        let mut panel = opened(0.25);
        panel.toggle();
        panel.tick();
        panel.toggle();
        assert_eq!(panel.state(), PanelState::Opening);
        assert_eq!(panel.progress(), 0.75);
        panel.tick();
        assert_eq!(panel.state(), PanelState::Open);
    }

    #[test]
    fn idle_states_do_not_move() {
        let mut panel = Panel::default();
        panel.tick();
        assert_eq!(panel.progress(), 0.0);

        let mut panel = opened(0.5);
        panel.tick();
        assert_eq!(panel.state(), PanelState::Open);
        assert_eq!(panel.progress(), 1.0);
    }

    #[test]
    fn fly_in_endpoints() {
        assert_eq!(fly_in(0.0), 0.0);
        assert!((fly_in(1.0) - 1.0).abs() < f32::EPSILON);
        // Ease-out: ahead of linear in the middle.
        assert!(fly_in(0.5) > 0.5);
    }

    #[test]
    fn fly_in_clamps_outside_domain() {
        assert_eq!(fly_in(-0.5), fly_in(0.0));
        assert_eq!(fly_in(1.5), fly_in(1.0));
    }
}
