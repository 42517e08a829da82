/// Scroll offset past which the navbar switches to its compact style.
pub const NAV_SCROLL_THRESHOLD: f64 = 10.0;
/// Fraction of the hero scrolled away at which the fade completes.
pub const HERO_FADE_END: f64 = 0.5;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLL_THRESHOLD
}

/// How far the page has scrolled through a section of `height` px, in [0, 1].
pub fn progress(scroll_y: f64, height: f64) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }
    (scroll_y / height).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroTransform {
    pub opacity: f64,
    pub scale: f64,
    pub translate_y: f64,
}

impl HeroTransform {
    pub fn at(progress: f64) -> Self {
        let t = (progress / HERO_FADE_END).clamp(0.0, 1.0);
        Self {
            opacity: lerp(1.0, 0.0, t),
            scale: lerp(1.0, 0.8, t),
            translate_y: lerp(0.0, 100.0, t),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translateY({:.1}px) scale({:.3});",
            self.opacity, self.translate_y, self.scale
        )
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn navbar_threshold_is_strict() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(10.0));
        assert!(is_scrolled(10.5));
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(progress(-50.0, 800.0), 0.0);
        assert_eq!(progress(400.0, 800.0), 0.5);
        assert_eq!(progress(5_000.0, 800.0), 1.0);
        assert_eq!(progress(100.0, 0.0), 0.0);
    }

    #[test]
    fn hero_fades_over_first_half() {
        let start = HeroTransform::at(0.0);
        assert_eq!(
            start,
            HeroTransform {
                opacity: 1.0,
                scale: 1.0,
                translate_y: 0.0
            }
        );

        let mid = HeroTransform::at(0.25);
        assert!(close(mid.opacity, 0.5));
        assert!(close(mid.scale, 0.9));
        assert!(close(mid.translate_y, 50.0));

        for p in [0.5, 0.75, 1.0] {
            let end = HeroTransform::at(p);
            assert!(close(end.opacity, 0.0));
            assert!(close(end.scale, 0.8));
            assert!(close(end.translate_y, 100.0));
        }
    }

    #[test]
    fn style_is_rounded() {
        assert_eq!(
            HeroTransform::at(0.25).style(),
            "opacity: 0.500; transform: translateY(50.0px) scale(0.900);"
        );
    }
}
