//! Celebratory confetti overlay. The progression engine only decides
//! *whether* to fire it; this module owns the particles and their short
//! lives. Fire-and-forget: a burst animates for a couple of seconds and
//! drains itself.

use egui::{Color32, Context, Id, LayerId, Order, Pos2, Rect, Vec2};
use rand::Rng;

/// Burst intensity. Defaults match the celebration the app fires on a
/// high-score finish: 150 particles, 90° spread, origin at 60% height.
pub struct ConfettiParams {
    pub particle_count: usize,
    pub spread_degrees: f32,
    /// Origin as screen fractions (x, y) in 0..=1.
    pub origin: Vec2,
}

impl Default for ConfettiParams {
    fn default() -> Self {
        Self {
            particle_count: 150,
            spread_degrees: 90.0,
            origin: Vec2::new(0.5, 0.6),
        }
    }
}

struct Particle {
    pos: Pos2,
    vel: Vec2,
    color: Color32,
    radius: f32,
    ttl: f32,
}

#[derive(Default)]
pub struct Confetti {
    particles: Vec<Particle>,
}

const GRAVITY: f32 = 600.0;

const PALETTE: [Color32; 6] = [
    Color32::from_rgb(14, 165, 233),  // sky
    Color32::from_rgb(245, 158, 11),  // amber
    Color32::from_rgb(34, 197, 94),   // green
    Color32::from_rgb(239, 68, 68),   // red
    Color32::from_rgb(168, 85, 247),  // purple
    Color32::from_rgb(236, 72, 153),  // pink
];

impl Confetti {
    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    pub fn burst(&mut self, params: &ConfettiParams, screen: Rect, rng: &mut impl Rng) {
        let origin = Pos2::new(
            screen.min.x + screen.width() * params.origin.x,
            screen.min.y + screen.height() * params.origin.y,
        );
        let spread = params.spread_degrees.to_radians();
        for _ in 0..params.particle_count {
            // Fan upwards around straight up, within the configured spread.
            let angle = -std::f32::consts::FRAC_PI_2 + rng.gen_range(-0.5..=0.5) * spread;
            let speed = rng.gen_range(250.0..=700.0);
            self.particles.push(Particle {
                pos: origin,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                color: PALETTE[rng.gen_range(0..PALETTE.len())],
                radius: rng.gen_range(2.0..=4.5),
                ttl: rng.gen_range(1.2..=2.4),
            });
        }
    }

    /// Advances and draws the particles on the foreground layer. Keeps the
    /// UI repainting while anything is still falling.
    pub fn paint(&mut self, ctx: &Context) {
        if self.particles.is_empty() {
            return;
        }
        let dt = ctx.input(|i| i.stable_dt).min(1.0 / 30.0);
        for p in &mut self.particles {
            p.vel.y += GRAVITY * dt;
            p.pos += p.vel * dt;
            p.ttl -= dt;
        }
        let screen = ctx.screen_rect();
        self.particles
            .retain(|p| p.ttl > 0.0 && p.pos.y < screen.max.y + 20.0);

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("confetti_overlay")));
        for p in &self.particles {
            painter.circle_filled(p.pos, p.radius, p.color);
        }
        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn burst_spawns_the_configured_particle_count() {
        let mut confetti = Confetti::default();
        assert!(!confetti.is_active());

        let mut rng = StdRng::seed_from_u64(3);
        let screen = Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0));
        confetti.burst(&ConfettiParams::default(), screen, &mut rng);

        assert!(confetti.is_active());
        assert_eq!(confetti.particles.len(), 150);
        // Every particle starts at the burst origin (60% down the screen).
        for p in &confetti.particles {
            assert_eq!(p.pos, Pos2::new(400.0, 360.0));
            assert!(p.ttl > 0.0);
        }
    }
}
