//! Drifting color blobs behind the hero sections.
//!
//! The field is plain data advanced by [`AmbientField::step`]; painting goes
//! through the [`Painter`] trait so the canvas stays at the edge.

use crate::error::SiteError;
use rand::Rng;
use serde::Deserialize;

/// Duration of one display frame at 60 Hz. Velocities are expressed per frame.
pub const FRAME_MS: f64 = 1000.0 / 60.0;
/// Longest step taken in one tick, so a backgrounded tab does not teleport blobs.
pub const MAX_TICK_MS: f64 = 100.0;

pub const MIN_RADIUS: f64 = 200.0;
pub const RADIUS_SPREAD: f64 = 300.0;
pub const MAX_START_SPEED: f64 = 0.2;

pub const DEFAULT_COLORS: [&str; 3] = ["#6366f1", "#8b5cf6", "#d946ef"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Light,
    #[default]
    Medium,
    Strong,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityPreset {
    pub blur: f64,
    pub opacity: f64,
    pub speed: f64,
}

impl Intensity {
    pub fn preset(self) -> IntensityPreset {
        match self {
            Intensity::Light => IntensityPreset {
                blur: 100.0,
                opacity: 0.3,
                speed: 0.001,
            },
            Intensity::Medium => IntensityPreset {
                blur: 150.0,
                opacity: 0.5,
                speed: 0.002,
            },
            Intensity::Strong => IntensityPreset {
                blur: 200.0,
                opacity: 0.7,
                speed: 0.003,
            },
        }
    }
}

impl IntensityPreset {
    /// Velocity multiplier. Medium drifts at the base rate.
    pub fn speed_scale(&self) -> f64 {
        self.speed / Intensity::Medium.preset().speed
    }

    pub fn blur_filter(&self) -> String {
        format!("blur({}px)", self.blur)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlobParticle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub color: String,
}

impl BlobParticle {
    pub fn spawn<R: Rng + ?Sized>(color: &str, viewport: Viewport, rng: &mut R) -> Self {
        Self {
            x: rng.gen::<f64>() * viewport.width,
            y: rng.gen::<f64>() * viewport.height,
            radius: rng.gen::<f64>() * RADIUS_SPREAD + MIN_RADIUS,
            vx: rng.gen::<f64>() * 2.0 * MAX_START_SPEED - MAX_START_SPEED,
            vy: rng.gen::<f64>() * 2.0 * MAX_START_SPEED - MAX_START_SPEED,
            color: color.to_string(),
        }
    }

    /// Moves by `frames` worth of velocity, then turns back toward the
    /// viewport on any axis where the center is out of bounds.
    pub fn advance(&mut self, frames: f64, viewport: Viewport) {
        self.x += self.vx * frames;
        self.y += self.vy * frames;
        self.vx = bounce(self.x, self.vx, viewport.width);
        self.vy = bounce(self.y, self.vy, viewport.height);
    }
}

// A center past an edge always heads back inward. A blob left outside after a
// resize keeps a single inward heading instead of flipping every frame.
fn bounce(position: f64, velocity: f64, extent: f64) -> f64 {
    if position < 0.0 {
        velocity.abs()
    } else if position > extent {
        -velocity.abs()
    } else {
        velocity
    }
}

/// Drawing surface for the field.
pub trait Painter {
    fn clear(&mut self, viewport: Viewport);
    fn paint_blob(&mut self, blob: &BlobParticle, opacity: f64) -> Result<(), SiteError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct AmbientField {
    pub particles: Vec<BlobParticle>,
    pub viewport: Viewport,
    pub preset: IntensityPreset,
}

impl AmbientField {
    pub fn new<R: Rng + ?Sized>(
        colors: &[String],
        viewport: Viewport,
        intensity: Intensity,
        rng: &mut R,
    ) -> Self {
        let particles = colors
            .iter()
            .map(|color| BlobParticle::spawn(color, viewport, &mut *rng))
            .collect();
        Self {
            particles,
            viewport,
            preset: intensity.preset(),
        }
    }

    /// Advances every particle by `elapsed_ms` of wall time.
    pub fn step(&mut self, elapsed_ms: f64) {
        let frames = elapsed_ms.clamp(0.0, MAX_TICK_MS) / FRAME_MS * self.preset.speed_scale();
        let viewport = self.viewport;
        for particle in &mut self.particles {
            particle.advance(frames, viewport);
        }
    }

    /// Only the surface changes size; positions are left alone.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn render<P: Painter + ?Sized>(&self, painter: &mut P) -> Result<(), SiteError> {
        painter.clear(self.viewport);
        for particle in &self.particles {
            painter.paint_blob(particle, self.preset.opacity)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const VIEW: Viewport = Viewport {
        width: 1000.0,
        height: 800.0,
    };

    fn blob(x: f64, y: f64, vx: f64, vy: f64) -> BlobParticle {
        BlobParticle {
            x,
            y,
            vx,
            vy,
            radius: 300.0,
            color: "#6366f1".to_string(),
        }
    }

    fn colors() -> Vec<String> {
        DEFAULT_COLORS.iter().map(|c| c.to_string()).collect()
    }

    #[derive(Default)]
    struct Recorder {
        clears: usize,
        blobs: Vec<(f64, f64, f64, String)>,
    }

    impl Painter for Recorder {
        fn clear(&mut self, _viewport: Viewport) {
            self.clears += 1;
        }

        fn paint_blob(&mut self, blob: &BlobParticle, opacity: f64) -> Result<(), SiteError> {
            self.blobs.push((blob.x, blob.y, opacity, blob.color.clone()));
            Ok(())
        }
    }

    #[test]
    fn presets_match_intensity_table() {
        assert_eq!(Intensity::Light.preset().blur, 100.0);
        assert_eq!(Intensity::Medium.preset().opacity, 0.5);
        assert_eq!(Intensity::Strong.preset().blur_filter(), "blur(200px)");
        assert_eq!(Intensity::Medium.preset().speed_scale(), 1.0);
        assert!(Intensity::Light.preset().speed_scale() < 1.0);
        assert!(Intensity::Strong.preset().speed_scale() > 1.0);
    }

    #[test]
    fn zero_rng_spawns_at_origin_with_minimum_radius() {
        let mut rng = StepRng::new(0, 0);
        let field = AmbientField::new(&colors(), VIEW, Intensity::Medium, &mut rng);
        assert_eq!(field.particles.len(), 3);
        for (particle, color) in field.particles.iter().zip(DEFAULT_COLORS) {
            assert_eq!((particle.x, particle.y), (0.0, 0.0));
            assert_eq!(particle.radius, MIN_RADIUS);
            assert_eq!((particle.vx, particle.vy), (-0.2, -0.2));
            assert_eq!(particle.color, color);
        }
    }

    #[test]
    fn seeded_spawn_stays_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let many: Vec<String> = (0..64).map(|i| format!("#{:06x}", i)).collect();
        let field = AmbientField::new(&many, VIEW, Intensity::Light, &mut rng);
        for p in &field.particles {
            assert!((0.0..VIEW.width).contains(&p.x));
            assert!((0.0..VIEW.height).contains(&p.y));
            assert!((200.0..500.0).contains(&p.radius));
            assert!((-0.2..0.2).contains(&p.vx));
            assert!((-0.2..0.2).contains(&p.vy));
        }
    }

    #[test]
    fn same_seed_gives_same_trajectory() {
        let run = || {
            let mut rng = StdRng::seed_from_u64(42);
            let mut field = AmbientField::new(&colors(), VIEW, Intensity::Strong, &mut rng);
            for _ in 0..500 {
                field.step(FRAME_MS);
            }
            field
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn frames_without_crossing_keep_velocity() {
        let mut p = blob(500.0, 400.0, 0.2, -0.15);
        for _ in 0..100 {
            p.advance(1.0, VIEW);
        }
        assert_eq!((p.vx, p.vy), (0.2, -0.15));
        assert!((p.x - 520.0).abs() < 1e-9);
        assert!((p.y - 385.0).abs() < 1e-9);
    }

    #[test]
    fn crossing_flips_only_that_axis_once() {
        let mut p = blob(999.9, 400.0, 0.2, 0.1);
        p.advance(1.0, VIEW);
        assert_eq!((p.vx, p.vy), (-0.2, 0.1));
        // Back in bounds on the next frame, no second flip.
        p.advance(1.0, VIEW);
        assert_eq!(p.vx, -0.2);

        let mut p = blob(500.0, 0.1, 0.1, -0.2);
        p.advance(1.0, VIEW);
        assert_eq!((p.vx, p.vy), (0.1, 0.2));
    }

    #[test]
    fn corner_crossing_flips_both_axes() {
        let mut p = blob(0.1, 0.1, -0.2, -0.2);
        p.advance(1.0, VIEW);
        assert_eq!((p.vx, p.vy), (0.2, 0.2));
    }

    #[test]
    fn shrink_leaves_positions_and_steers_back() {
        let mut rng = StepRng::new(0, 0);
        let mut field = AmbientField::new(&["#fff".to_string()], VIEW, Intensity::Medium, &mut rng);
        field.particles[0] = blob(900.0, 100.0, 0.2, 0.0);
        field.resize(Viewport {
            width: 400.0,
            height: 800.0,
        });
        assert_eq!(field.particles[0].x, 900.0);

        field.step(FRAME_MS);
        assert_eq!(field.particles[0].vx, -0.2);
        let mut last_x = field.particles[0].x;
        for _ in 0..10 {
            field.step(FRAME_MS);
            let x = field.particles[0].x;
            assert!(x < last_x);
            last_x = x;
        }
    }

    #[test]
    fn tick_clamps_long_gaps() {
        let mut rng = StepRng::new(0, 0);
        let mut field = AmbientField::new(&["#fff".to_string()], VIEW, Intensity::Medium, &mut rng);
        field.particles[0] = blob(500.0, 400.0, 0.2, 0.0);
        field.step(10_000.0);
        let moved = field.particles[0].x - 500.0;
        assert!((moved - 0.2 * MAX_TICK_MS / FRAME_MS).abs() < 1e-9);
    }

    #[test]
    fn render_clears_then_paints_every_blob() {
        let mut rng = StepRng::new(0, 0);
        let field = AmbientField::new(&colors(), VIEW, Intensity::Strong, &mut rng);
        let mut recorder = Recorder::default();
        field.render(&mut recorder).unwrap();
        assert_eq!(recorder.clears, 1);
        assert_eq!(recorder.blobs.len(), 3);
        assert!(recorder.blobs.iter().all(|b| b.2 == 0.7));
        assert_eq!(recorder.blobs[2].3, "#d946ef");
    }
}
