use std::rc::Rc;
use yew::Reducible;

/// Easing used for the hidden -> visible transition.
pub const REVEAL_EASING: &str = "cubic-bezier(0.25, 0.1, 0.25, 1)";
/// Seconds spent sliding back to the hidden state when `once` is off.
pub const HIDE_DURATION: f64 = 0.1;

/// Side the block slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
    None,
}

impl Direction {
    /// Offset of the hidden state as `(x, y)` in pixels.
    pub fn hidden_offset(self, distance: f64) -> (f64, f64) {
        match self {
            Direction::Up => (0.0, distance),
            Direction::Down => (0.0, -distance),
            Direction::Left => (distance, 0.0),
            Direction::Right => (-distance, 0.0),
            Direction::None => (0.0, 0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    pub delay: f64,
    pub direction: Direction,
    pub duration: f64,
    pub once: bool,
    pub distance: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            delay: 0.0,
            direction: Direction::Up,
            duration: 0.5,
            once: true,
            distance: 20.0,
        }
    }
}

impl RevealConfig {
    /// Inline style for the block in the given visibility.
    pub fn style(&self, visible: bool) -> String {
        if visible {
            format!(
                "opacity: 1; transform: translate3d(0px, 0px, 0px); \
                 transition: opacity {d}s {e} {delay}s, transform {d}s {e} {delay}s;",
                d = self.duration,
                e = REVEAL_EASING,
                delay = self.delay,
            )
        } else {
            let (x, y) = self.direction.hidden_offset(self.distance);
            format!(
                "opacity: 0; transform: translate3d({x}px, {y}px, 0px); \
                 transition: opacity {h}s, transform {h}s;",
                h = HIDE_DURATION,
            )
        }
    }
}

/// Visibility of one reveal block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealState {
    pub visible: bool,
    pub triggered_once: bool,
}

pub enum RevealAction {
    /// An intersection report for the observed block.
    Intersect { intersecting: bool, once: bool },
}

impl RevealState {
    /// Applies one intersection report. Returns true when the state changed.
    pub fn observe(&mut self, intersecting: bool, once: bool) -> bool {
        let before = *self;
        if once {
            if self.triggered_once {
                return false;
            }
            if intersecting {
                self.visible = true;
                self.triggered_once = true;
            }
        } else {
            self.visible = intersecting;
            if intersecting {
                self.triggered_once = true;
            }
        }
        *self != before
    }

    /// Once-blocks stop listening after the first reveal.
    pub fn is_settled(&self, once: bool) -> bool {
        once && self.triggered_once
    }
}

impl Reducible for RevealState {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RevealAction::Intersect { intersecting, once } => {
                let mut next = *self;
                if next.observe(intersecting, once) {
                    Rc::new(next)
                } else {
                    self
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_stays_visible_after_first_reveal() {
        let mut state = RevealState::default();
        assert!(!state.observe(false, true));
        assert!(state.observe(true, true));
        for intersecting in [false, true, false, false, true, false] {
            assert!(!state.observe(intersecting, true));
            assert!(state.visible);
        }
        assert!(state.is_settled(true));
    }

    #[test]
    fn repeat_tracks_latest_intersection() {
        let mut state = RevealState::default();
        for intersecting in [true, false, false, true, true, false] {
            state.observe(intersecting, false);
            assert_eq!(state.visible, intersecting);
        }
        assert!(!state.is_settled(false));
    }

    #[test]
    fn already_in_view_reveals_on_first_report() {
        let mut state = RevealState::default();
        state.observe(true, true);
        assert!(state.visible);
    }

    #[test]
    fn reducer_keeps_same_rc_when_nothing_changes() {
        let state = Rc::new(RevealState::default());
        let next = state.clone().reduce(RevealAction::Intersect {
            intersecting: false,
            once: true,
        });
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn hidden_offsets_follow_direction() {
        assert_eq!(Direction::Up.hidden_offset(20.0), (0.0, 20.0));
        assert_eq!(Direction::Down.hidden_offset(20.0), (0.0, -20.0));
        assert_eq!(Direction::Left.hidden_offset(30.0), (30.0, 0.0));
        assert_eq!(Direction::Right.hidden_offset(30.0), (-30.0, 0.0));
        assert_eq!(Direction::None.hidden_offset(30.0), (0.0, 0.0));
    }

    #[test]
    fn styles_carry_timing() {
        let config = RevealConfig {
            delay: 0.3,
            duration: 0.8,
            ..RevealConfig::default()
        };
        let visible = config.style(true);
        assert!(visible.starts_with("opacity: 1;"));
        assert!(visible.contains("0.8s cubic-bezier(0.25, 0.1, 0.25, 1) 0.3s"));

        let hidden = config.style(false);
        assert!(hidden.starts_with("opacity: 0;"));
        assert!(hidden.contains("translate3d(0px, 20px, 0px)"));
        assert!(hidden.contains("0.1s"));
    }

    #[test]
    fn none_direction_only_fades() {
        let config = RevealConfig {
            direction: Direction::None,
            ..RevealConfig::default()
        };
        assert!(config.style(false).contains("translate3d(0px, 0px, 0px)"));
    }
}
