use bevy::prelude::*;

use super::tween::Ease;

/// Back-and-forth motion between 0 and `amplitude`, one leg per `half_period`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Yoyo {
    pub amplitude: f32,
    pub half_period: f32,
    pub ease: Ease,
}

impl Yoyo {
    pub fn sine(amplitude: f32, half_period: f32) -> Self {
        Self {
            amplitude,
            half_period,
            ease: Ease::SineInOut,
        }
    }

    /// Displacement `elapsed` seconds after the motion started.
    pub fn offset_at(&self, elapsed: f32) -> f32 {
        if self.half_period <= 0.0 {
            return 0.0;
        }
        let cycle = elapsed.max(0.0).rem_euclid(self.half_period * 2.0) / self.half_period;
        let leg = if cycle <= 1.0 { cycle } else { 2.0 - cycle };
        self.amplitude * self.ease.apply(leg)
    }
}

/// Vertical bob of the particle cloud around `base_y`.
#[derive(Component, Debug, Clone, Copy)]
pub struct ParticleBob {
    pub base_y: f32,
    pub started_at: f32,
    pub yoyo: Yoyo,
}

impl ParticleBob {
    pub fn new(base_y: f32, started_at: f32, yoyo: Yoyo) -> Self {
        Self {
            base_y,
            started_at,
            yoyo,
        }
    }
}

pub fn bob_particle_cloud(time: Res<Time>, mut query: Query<(&mut Transform, &ParticleBob)>) {
    let now = time.elapsed_secs();
    for (mut transform, bob) in &mut query {
        transform.translation.y = bob.base_y + bob.yoyo.offset_at(now - bob.started_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn yoyo_turns_at_amplitude() {
        let yoyo = Yoyo::sine(0.2, 2.0);
        assert!(yoyo.offset_at(0.0).abs() < EPSILON);
        assert!((yoyo.offset_at(1.0) - 0.1).abs() < EPSILON);
        assert!((yoyo.offset_at(2.0) - 0.2).abs() < EPSILON);
        assert!(yoyo.offset_at(4.0).abs() < EPSILON);
    }

    #[test]
    fn return_leg_mirrors_outward_leg() {
        let yoyo = Yoyo::sine(0.2, 2.0);
        for t in [0.3, 0.9, 1.7] {
            assert!((yoyo.offset_at(t) - yoyo.offset_at(4.0 - t)).abs() < EPSILON);
        }
    }

    #[test]
    fn yoyo_repeats_forever() {
        let yoyo = Yoyo::sine(0.2, 2.0);
        assert!((yoyo.offset_at(0.7) - yoyo.offset_at(400.7)).abs() < 1e-3);
    }

    #[test]
    fn zero_period_does_not_move() {
        assert_eq!(Yoyo::sine(0.2, 0.0).offset_at(3.0), 0.0);
    }
}
