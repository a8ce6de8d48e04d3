/// Physical parameters of a [`Spring`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// The spring is settled once it is closer than this to its target...
    pub rest_delta: f32,
    /// ...and moving slower than this (units per second).
    pub rest_speed: f32,
}

impl SpringConfig {
    /// A fast, slightly overshooting throw.
    pub const FLY_OUT: Self = Self {
        stiffness: 400.0,
        damping: 30.0,
        mass: 1.0,
        rest_delta: 0.5,
        rest_speed: 10.0,
    };

    /// A softer rebound towards the origin after a release inside the dead zone.
    pub const SNAP_BACK: Self = Self {
        stiffness: 500.0,
        damping: 35.0,
        mass: 1.0,
        rest_delta: 0.5,
        rest_speed: 10.0,
    };

    pub fn with_stiffness(mut self, stiffness: f32) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    /// `damping / (2 * sqrt(stiffness * mass))`; below 1 the spring overshoots.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::FLY_OUT
    }
}

/// A damped harmonic oscillator sampled analytically, for adapter-driven animation.
///
/// Sampling is a pure function of `now_ms`, so adapters may call `sample` at any frame rate
/// (or skip frames) without accumulating integration error.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spring {
    pub from: f32,
    pub to: f32,
    /// Initial velocity in units per second.
    pub velocity: f32,
    pub start_ms: u64,
    pub config: SpringConfig,
}

impl Spring {
    pub fn new(from: f32, to: f32, velocity: f32, start_ms: u64, config: SpringConfig) -> Self {
        Self {
            from,
            to,
            velocity,
            start_ms,
            config,
        }
    }

    /// Position and velocity at `now_ms`.
    pub fn state(&self, now_ms: u64) -> (f32, f32) {
        let t = now_ms.saturating_sub(self.start_ms) as f32 / 1000.0;
        let SpringConfig {
            stiffness,
            damping,
            mass,
            ..
        } = self.config;
        let mass = mass.max(f32::EPSILON);
        let stiffness = stiffness.max(f32::EPSILON);

        let x0 = self.from - self.to;
        let v0 = self.velocity;
        let w0 = (stiffness / mass).sqrt();
        let zeta = damping / (2.0 * (stiffness * mass).sqrt());

        let (x, v) = if zeta < 1.0 - 1e-4 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let a = x0;
            let b = (v0 + zeta * w0 * x0) / wd;
            let env = (-zeta * w0 * t).exp();
            let (sin, cos) = (wd * t).sin_cos();
            let x = env * (a * cos + b * sin);
            let v = env * ((b * wd - zeta * w0 * a) * cos - (a * wd + zeta * w0 * b) * sin);
            (x, v)
        } else if zeta > 1.0 + 1e-4 {
            let wo = w0 * (zeta * zeta - 1.0).sqrt();
            let r1 = -zeta * w0 + wo;
            let r2 = -zeta * w0 - wo;
            let c1 = (v0 - r2 * x0) / (r1 - r2);
            let c2 = x0 - c1;
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
            (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
        } else {
            let b = v0 + w0 * x0;
            let env = (-w0 * t).exp();
            ((x0 + b * t) * env, env * (b - w0 * (x0 + b * t)))
        };

        (self.to + x, v)
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        let (pos, vel) = self.state(now_ms);
        (pos - self.to).abs() <= self.config.rest_delta && vel.abs() <= self.config.rest_speed
    }

    /// Position at `now_ms`; snaps to the target once settled.
    pub fn sample(&self, now_ms: u64) -> f32 {
        if self.is_done(now_ms) {
            return self.to;
        }
        self.state(now_ms).0
    }
}
