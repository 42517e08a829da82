use std::rc::Rc;
use yew::Reducible;

pub const TYPE_STEP_MS: u32 = 30;
pub const HOLD_MS: u32 = 3_000;
pub const RESTART_MS: u32 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    /// Full text on screen.
    Holding,
    /// Cleared, waiting to type again.
    Resting,
}

/// Types a snippet out one character at a time, then loops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    total: usize,
    shown: usize,
    phase: Phase,
    phase_ms: u32,
}

pub struct Elapsed(pub u32);

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            total: text.chars().count(),
            shown: 0,
            phase: Phase::Typing,
            phase_ms: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn advance(&mut self, ms: u32) {
        let mut budget = ms;
        loop {
            let (limit, step_done) = match self.phase {
                Phase::Typing if self.shown >= self.total => {
                    self.enter(Phase::Holding);
                    continue;
                }
                Phase::Typing => (TYPE_STEP_MS, None),
                Phase::Holding => (HOLD_MS, Some(Phase::Resting)),
                Phase::Resting => (RESTART_MS, Some(Phase::Typing)),
            };
            let needed = limit - self.phase_ms;
            if budget < needed {
                self.phase_ms += budget;
                return;
            }
            budget -= needed;
            match step_done {
                None => {
                    self.shown += 1;
                    self.phase_ms = 0;
                }
                Some(Phase::Resting) => {
                    self.shown = 0;
                    self.enter(Phase::Resting);
                }
                Some(phase) => self.enter(phase),
            }
        }
    }

    /// Prefix of `text` currently on screen.
    pub fn visible<'a>(&self, text: &'a str) -> &'a str {
        match text.char_indices().nth(self.shown) {
            Some((end, _)) => &text[..end],
            None => text,
        }
    }

    fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        self.phase_ms = 0;
    }
}

impl Reducible for Typewriter {
    type Action = Elapsed;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.advance(action.0);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_one_char_per_step() {
        let text = "fn main()";
        let mut t = Typewriter::new(text);
        assert_eq!(t.visible(text), "");
        t.advance(TYPE_STEP_MS);
        assert_eq!(t.visible(text), "f");
        t.advance(TYPE_STEP_MS * 2 + 10);
        assert_eq!(t.visible(text), "fn ");
        t.advance(20);
        assert_eq!(t.visible(text), "fn m");
    }

    #[test]
    fn holds_then_clears_then_restarts() {
        let text = "abc";
        let mut t = Typewriter::new(text);
        t.advance(TYPE_STEP_MS * 3);
        assert_eq!(t.visible(text), "abc");
        t.advance(1);
        assert_eq!(t.phase(), Phase::Holding);

        t.advance(HOLD_MS);
        assert_eq!(t.phase(), Phase::Resting);
        assert_eq!(t.visible(text), "");

        t.advance(RESTART_MS);
        assert_eq!(t.phase(), Phase::Typing);
        t.advance(TYPE_STEP_MS);
        assert_eq!(t.visible(text), "a");
    }

    #[test]
    fn loops_indefinitely() {
        let text = "xy";
        let cycle = TYPE_STEP_MS * 2 + HOLD_MS + RESTART_MS;
        let mut t = Typewriter::new(text);
        for _ in 0..5 {
            t.advance(cycle);
            assert_eq!(t.phase(), Phase::Typing);
            assert_eq!(t.visible(text), "");
        }
    }

    #[test]
    fn multibyte_text_splits_on_char_boundaries() {
        let text = "→ ✓";
        let mut t = Typewriter::new(text);
        t.advance(TYPE_STEP_MS);
        assert_eq!(t.visible(text), "→");
        t.advance(TYPE_STEP_MS * 5);
        assert_eq!(t.visible(text), text);
    }
}
