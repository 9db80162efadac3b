/// Interpolation curve applied to a track's normalized progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Constant-rate progress.
    Linear,
    /// Accelerating: slow start, fast finish. Used for fade-out.
    InQuad,
    /// Decelerating: fast start, slow finish. Used for fade-in.
    OutQuad,
    /// Accelerate then decelerate, symmetric about the midpoint. Used for
    /// translations so drift eases at both ends of a frame's lifetime.
    InOutSine,
}

impl Ease {
    /// Map linear progress `t` in `[0, 1]` through the curve. Inputs outside
    /// the unit interval are clamped.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutSine => 0.5 - 0.5 * (std::f64::consts::PI * t).cos(),
        }
    }
}
