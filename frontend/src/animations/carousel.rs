use crate::error::SiteError;
use std::rc::Rc;
use yew::Reducible;

/// Delay between automatic advances.
pub const AUTO_ADVANCE_MS: u32 = 8_000;
/// Horizontal travel of the slide transition, in pixels.
pub const SLIDE_DISTANCE: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    Forward,
    Backward,
}

impl SlideDirection {
    /// Pixel offset the incoming card starts from. The outgoing card leaves
    /// toward the opposite side.
    pub fn enter_offset(self) -> i32 {
        match self {
            SlideDirection::Forward => SLIDE_DISTANCE,
            SlideDirection::Backward => -SLIDE_DISTANCE,
        }
    }

    /// Inline style feeding the offset to the slide keyframes.
    pub fn offset_style(self) -> String {
        format!("--slide-offset: {}px;", self.enter_offset())
    }
}

pub enum CarouselAction {
    Next,
    Prev,
    Jump(usize),
    PointerEnter,
    PointerLeave,
    /// Time passed on the armed auto-advance timer.
    Elapsed(u32),
}

/// Position and autoplay state of the testimonial rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
    auto_advance: bool,
    armed_ms: u32,
    direction: SlideDirection,
}

impl Carousel {
    pub fn new(len: usize) -> Result<Self, SiteError> {
        if len == 0 {
            return Err(SiteError::EmptyCarousel);
        }
        Ok(Self {
            len,
            current: 0,
            auto_advance: true,
            armed_ms: 0,
            direction: SlideDirection::Forward,
        })
    }

    pub fn item_count(&self) -> usize {
        self.len
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    pub fn direction(&self) -> SlideDirection {
        self.direction
    }

    pub fn next(&mut self) {
        self.show((self.current + 1) % self.len, SlideDirection::Forward);
    }

    pub fn prev(&mut self) {
        self.show((self.current + self.len - 1) % self.len, SlideDirection::Backward);
    }

    /// Out-of-range targets are ignored.
    pub fn jump(&mut self, index: usize) {
        if index >= self.len || index == self.current {
            return;
        }
        let direction = if index > self.current {
            SlideDirection::Forward
        } else {
            SlideDirection::Backward
        };
        self.show(index, direction);
    }

    pub fn set_auto_advance(&mut self, enabled: bool) {
        if self.auto_advance != enabled {
            self.auto_advance = enabled;
            self.armed_ms = 0;
        }
    }

    /// Feeds time to the auto-advance timer. Nothing accumulates while paused.
    pub fn elapse(&mut self, ms: u32) {
        if !self.auto_advance {
            return;
        }
        self.armed_ms = self.armed_ms.saturating_add(ms);
        while self.armed_ms >= AUTO_ADVANCE_MS {
            let carry = self.armed_ms - AUTO_ADVANCE_MS;
            self.next();
            self.armed_ms = carry;
        }
    }

    // Any index change re-arms the timer.
    fn show(&mut self, index: usize, direction: SlideDirection) {
        self.current = index;
        self.direction = direction;
        self.armed_ms = 0;
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CarouselAction::Next => next.next(),
            CarouselAction::Prev => next.prev(),
            CarouselAction::Jump(index) => next.jump(index),
            CarouselAction::PointerEnter => next.set_auto_advance(false),
            CarouselAction::PointerLeave => next.set_auto_advance(true),
            CarouselAction::Elapsed(ms) => next.elapse(ms),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_rejected() {
        assert_eq!(Carousel::new(0), Err(SiteError::EmptyCarousel));
    }

    #[test]
    fn next_and_prev_wrap_around() {
        for len in 1..=6 {
            for start in 0..len {
                let mut c = Carousel::new(len).unwrap();
                c.jump(start);
                for _ in 0..len {
                    c.next();
                }
                assert_eq!(c.current(), start);
                for _ in 0..len {
                    c.prev();
                }
                assert_eq!(c.current(), start);
            }
        }
    }

    #[test]
    fn jump_lands_exactly() {
        let mut c = Carousel::new(5).unwrap();
        for k in [3, 0, 4, 1, 1] {
            c.jump(k);
            assert_eq!(c.current(), k);
        }
        c.jump(5);
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn auto_advance_every_interval() {
        let mut c = Carousel::new(3).unwrap();
        c.elapse(AUTO_ADVANCE_MS - 1);
        assert_eq!(c.current(), 0);
        c.elapse(1);
        assert_eq!(c.current(), 1);
        c.elapse(2 * AUTO_ADVANCE_MS);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn hover_pauses_until_pointer_leaves() {
        let mut c = Carousel::new(3).unwrap();
        c.elapse(5_000);
        c.set_auto_advance(false);
        for _ in 0..5 {
            c.elapse(AUTO_ADVANCE_MS);
        }
        assert_eq!(c.current(), 0);
        assert!(!c.auto_advance());

        c.set_auto_advance(true);
        // Re-armed on resume, the 5s before the pause is gone.
        c.elapse(AUTO_ADVANCE_MS - 1);
        assert_eq!(c.current(), 0);
        c.elapse(1);
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn manual_navigation_rearms_timer() {
        let mut c = Carousel::new(3).unwrap();
        c.elapse(7_000);
        c.next();
        c.elapse(7_000);
        assert_eq!(c.current(), 1);
        c.elapse(1_000);
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn three_item_walkthrough() {
        let c = Rc::new(Carousel::new(3).unwrap());
        let c = c.reduce(CarouselAction::Elapsed(AUTO_ADVANCE_MS));
        assert_eq!(c.current(), 1);
        let c = c.reduce(CarouselAction::Prev);
        assert_eq!(c.current(), 0);
        assert_eq!(c.direction(), SlideDirection::Backward);
        let c = c.reduce(CarouselAction::Jump(2));
        assert_eq!(c.current(), 2);
        assert_eq!(c.direction(), SlideDirection::Forward);
        let c = c.reduce(CarouselAction::Next);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn reducer_dedupes_pointer_events() {
        let c = Rc::new(Carousel::new(2).unwrap());
        let paused = c.clone().reduce(CarouselAction::PointerEnter);
        assert!(!Rc::ptr_eq(&c, &paused));
        let again = paused.clone().reduce(CarouselAction::PointerEnter);
        assert!(Rc::ptr_eq(&paused, &again));
        let resumed = again.reduce(CarouselAction::PointerLeave);
        assert!(resumed.auto_advance());
    }

    #[test]
    fn slide_offsets_mirror() {
        assert_eq!(SlideDirection::Forward.enter_offset(), 100);
        assert_eq!(SlideDirection::Backward.enter_offset(), -100);
        assert_eq!(SlideDirection::Backward.offset_style(), "--slide-offset: -100px;");
    }
}
