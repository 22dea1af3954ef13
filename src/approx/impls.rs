use super::ApproxEq;

impl ApproxEq for f64 {
    fn abs_diff_eq(&self, other: &Self, abs_tolerance: f64) -> bool {
        if !self.is_finite() || !other.is_finite() {
            // Ensures that `inf == inf`, `-inf == -inf` and `inf != -inf`.
            return self == other;
        }

        let diff = (self - other).abs();
        diff <= abs_tolerance
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: f64) -> bool {
        if !self.is_finite() || !other.is_finite() {
            // Ensures that `inf == inf`, `-inf == -inf` and `inf != -inf`.
            return self == other;
        }

        let abs_diff = (self - other).abs();
        let largest = f64::max(self.abs(), other.abs());

        abs_diff <= largest * rel_tolerance
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        if self.is_sign_negative() != other.is_sign_negative() {
            return self == other; // `-0.0` == `+0.0`
        }

        if self.is_nan() || other.is_nan() {
            return false;
        }

        let diff = self.to_bits().abs_diff(other.to_bits());
        diff <= u64::from(ulps_tolerance)
    }
}

impl ApproxEq for [f64] {
    fn abs_diff_eq(&self, other: &Self, abs_tolerance: f64) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.abs_diff_eq(b, abs_tolerance))
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: f64) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.rel_diff_eq(b, rel_tolerance))
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.ulps_diff_eq(b, ulps_tolerance))
    }
}

impl<const N: usize> ApproxEq for [f64; N] {
    fn abs_diff_eq(&self, other: &Self, abs_tolerance: f64) -> bool {
        self[..].abs_diff_eq(&other[..], abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: f64) -> bool {
        self[..].rel_diff_eq(&other[..], rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self[..].ulps_diff_eq(&other[..], ulps_tolerance)
    }
}

impl ApproxEq for Vec<f64> {
    fn abs_diff_eq(&self, other: &Self, abs_tolerance: f64) -> bool {
        self[..].abs_diff_eq(&other[..], abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: f64) -> bool {
        self[..].rel_diff_eq(&other[..], rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self[..].ulps_diff_eq(&other[..], ulps_tolerance)
    }
}

impl ApproxEq for (f64, f64) {
    fn abs_diff_eq(&self, other: &Self, abs_tolerance: f64) -> bool {
        [self.0, self.1].abs_diff_eq(&[other.0, other.1], abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: f64) -> bool {
        [self.0, self.1].rel_diff_eq(&[other.0, other.1], rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        [self.0, self.1].ulps_diff_eq(&[other.0, other.1], ulps_tolerance)
    }
}

impl ApproxEq for (f64, f64, f64) {
    fn abs_diff_eq(&self, other: &Self, abs_tolerance: f64) -> bool {
        [self.0, self.1, self.2].abs_diff_eq(&[other.0, other.1, other.2], abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: f64) -> bool {
        [self.0, self.1, self.2].rel_diff_eq(&[other.0, other.1, other.2], rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        [self.0, self.1, self.2].ulps_diff_eq(&[other.0, other.1, other.2], ulps_tolerance)
    }
}
