//! Flame Particles
//!
//! Short-lived particles spawned around the pointer.

/// Spawn period while hovering a buy button
pub const SPAWN_INTERVAL_MS: u32 = 50;
/// Particle lifetime
pub const LIFETIME_MS: f64 = 1000.0;
/// Max offset from the pointer on each axis
pub const JITTER_PX: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub born_at: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlameField {
    particles: Vec<Particle>,
    next_id: u64,
}

impl FlameField {
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Spawn at the pointer; `jx`/`jy` are uniform rolls in `[0, 1)`
    pub fn spawn(&mut self, x: f64, y: f64, jx: f64, jy: f64, now_ms: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.particles.push(Particle {
            id,
            x: x + (jx * 2.0 - 1.0) * JITTER_PX,
            y: y + (jy * 2.0 - 1.0) * JITTER_PX,
            born_at: now_ms,
        });
        id
    }

    /// Drop particles older than their lifetime
    pub fn expire(&mut self, now_ms: f64) {
        self.particles.retain(|p| now_ms - p.born_at < LIFETIME_MS);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particles_expire_after_lifetime() {
        let mut field = FlameField::default();
        field.spawn(100.0, 100.0, 0.5, 0.5, 0.0);
        field.spawn(100.0, 100.0, 0.5, 0.5, 500.0);
        field.expire(999.0);
        assert_eq!(field.particles().len(), 2);
        field.expire(1000.0);
        assert_eq!(field.particles().len(), 1);
        field.expire(1500.0);
        assert!(field.particles().is_empty());
    }

    #[test]
    fn test_jitter_stays_in_range() {
        let mut field = FlameField::default();
        field.spawn(50.0, 80.0, 0.0, 0.999, 0.0);
        let p = field.particles()[0];
        assert!((p.x - 40.0).abs() < 1e-9);
        assert!(p.y < 90.0 && p.y > 89.9);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut field = FlameField::default();
        let a = field.spawn(0.0, 0.0, 0.5, 0.5, 0.0);
        field.clear();
        let b = field.spawn(0.0, 0.0, 0.5, 0.5, 0.0);
        assert_ne!(a, b);
    }
}
