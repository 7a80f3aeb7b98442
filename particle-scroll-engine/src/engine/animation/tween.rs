use std::f32::consts::PI;

/// Easing curves, named after their GSAP counterparts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    /// Quadratic ease-out (`power1.out`).
    #[default]
    Power1Out,
    /// Cubic ease-out (`power2.out`).
    Power2Out,
    /// Half-cosine ease-in-out (`sine.inOut`).
    SineInOut,
}

impl Ease {
    /// Eased progress for `t`, clamped to `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::SineInOut => -((PI * t).cos() - 1.0) * 0.5,
        }
    }
}

/// Interpolates a scalar from `from` to `to` over `duration` seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    ease: Ease,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            ease,
        }
    }

    /// A finished tween resting at `value`.
    pub fn settled(value: f32) -> Self {
        Self::new(value, value, 0.0, Ease::Linear)
    }

    pub fn value(&self) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let progress = self.ease.apply(self.elapsed / self.duration);
        self.from + (self.to - self.from) * progress
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn advance(&mut self, delta_secs: f32) -> f32 {
        self.elapsed = (self.elapsed + delta_secs.max(0.0)).min(self.duration);
        self.value()
    }

    /// Restarts toward `to` from wherever the tween currently is.
    pub fn retarget(&mut self, to: f32, duration: f32, ease: Ease) {
        *self = Self::new(self.value(), to, duration, ease);
    }
}
