/// Offsets strictly above this show the scroll-to-top button.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;
/// Fade duration in either direction. Keep in sync with `input.css`.
pub const FADE_DURATION_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Hidden,
    Visible,
    /// Fading out; becomes `Hidden` when the animation completes.
    Fading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateTransition {
    FadeIn,
    FadeOut,
}

/// Drives the visibility of the floating scroll-to-top button from the
/// current scroll offset.
#[derive(Debug, Clone)]
pub struct VisibilityGate {
    state: GateState,
    threshold: f64,
}

impl Default for VisibilityGate {
    fn default() -> Self {
        Self::new(SCROLL_TOP_THRESHOLD)
    }
}

impl VisibilityGate {
    pub fn new(threshold: f64) -> Self {
        Self {
            state: GateState::Hidden,
            threshold,
        }
    }

    /// Feeds one scroll offset. Events are handled in arrival order, so
    /// several crossings inside one frame each produce a transition.
    pub fn observe(&mut self, offset: f64) -> Option<GateTransition> {
        let above = offset > self.threshold;
        let transition = match (self.state, above) {
            (GateState::Hidden | GateState::Fading, true) => {
                self.state = GateState::Visible;
                Some(GateTransition::FadeIn)
            }
            (GateState::Visible, false) => {
                self.state = GateState::Fading;
                Some(GateTransition::FadeOut)
            }
            _ => None,
        };
        if let Some(t) = transition {
            log::debug!("scroll-to-top gate {t:?} at offset {offset}");
        }
        transition
    }

    /// Completion callback of the fade-out animation. Ignored unless a
    /// fade-out is still pending.
    pub fn fade_complete(&mut self) -> bool {
        if self.state == GateState::Fading {
            self.state = GateState::Hidden;
            true
        } else {
            false
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == GateState::Visible
    }
}

impl GateState {
    /// Whether the control takes part in hit-testing.
    pub fn is_interactive(self) -> bool {
        self != GateState::Hidden
    }

    pub fn target_opacity(self) -> f64 {
        match self {
            GateState::Visible => 1.0,
            GateState::Hidden | GateState::Fading => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        let mut gate = VisibilityGate::default();
        let visible: Vec<bool> = [0.0, 150.0, 299.0, 300.0, 301.0, 250.0]
            .into_iter()
            .map(|offset| {
                gate.observe(offset);
                gate.is_visible()
            })
            .collect();
        assert_eq!(visible, vec![false, false, false, false, true, false]);
    }

    #[test]
    fn test_one_transition_per_crossing() {
        let mut gate = VisibilityGate::default();
        let transitions: Vec<_> = [10.0, 200.0, 320.0, 480.0, 900.0, 650.0, 300.0, 120.0, 0.0]
            .into_iter()
            .filter_map(|offset| gate.observe(offset))
            .collect();
        assert_eq!(
            transitions,
            vec![GateTransition::FadeIn, GateTransition::FadeOut]
        );
    }

    #[test]
    fn test_fade_out_then_hide() {
        let mut gate = VisibilityGate::default();
        gate.observe(500.0);
        assert_eq!(gate.observe(100.0), Some(GateTransition::FadeOut));
        assert_eq!(gate.state(), GateState::Fading);
        assert!(gate.state().is_interactive());

        assert!(gate.fade_complete());
        assert_eq!(gate.state(), GateState::Hidden);
        assert!(!gate.state().is_interactive());

        // a second completion event changes nothing
        assert!(!gate.fade_complete());
    }

    #[test]
    fn test_fade_in_completion_is_ignored() {
        let mut gate = VisibilityGate::default();
        gate.observe(700.0);
        assert!(!gate.fade_complete());
        assert_eq!(gate.state(), GateState::Visible);
    }

    #[test]
    fn test_recross_during_fade_out() {
        let mut gate = VisibilityGate::default();
        gate.observe(400.0);
        gate.observe(300.0);
        assert_eq!(gate.observe(301.0), Some(GateTransition::FadeIn));
        assert_eq!(gate.state(), GateState::Visible);

        // the stale completion of the interrupted fade-out must not hide it
        assert!(!gate.fade_complete());
        assert!(gate.is_visible());
    }

    #[test]
    fn test_target_opacity() {
        assert_eq!(GateState::Visible.target_opacity(), 1.0);
        assert_eq!(GateState::Fading.target_opacity(), 0.0);
        assert_eq!(GateState::Hidden.target_opacity(), 0.0);
    }
}
