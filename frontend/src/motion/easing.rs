#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    Power3Out,
}

impl Ease {
    /// Maps linear progress `t` in 0..=1 onto the eased curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            // "power3" names the quartic curve.
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
        }
    }
}

pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        for ease in [Ease::Linear, Ease::Power3Out] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
        }
    }

    #[test]
    fn power3_out_front_loads_motion() {
        assert!(Ease::Power3Out.apply(0.25) > 0.6);
        assert!(Ease::Power3Out.apply(0.5) > Ease::Linear.apply(0.5));
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(Ease::Linear.apply(-1.0), 0.0);
        assert_eq!(Ease::Power3Out.apply(3.0), 1.0);
    }

    #[test]
    fn lerp_midpoint() {
        assert_eq!(lerp(10.0, 20.0, 0.5), 15.0);
    }
}
