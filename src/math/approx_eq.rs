pub const EPSILON: f64 = 1.0e-5;
pub const LOW_PREC_EPSILON: f64 = 1.0e-4;

pub trait ApproxEq<Rhs = Self> {
    fn approx_eq_epsilon(&self, rhs: &Rhs, epsilon: f64) -> bool;

    fn approx_eq(&self, rhs: &Rhs) -> bool {
        self.approx_eq_epsilon(rhs, EPSILON)
    }

    /// For values quoted to five significant digits.
    fn approx_eq_low_prec(&self, rhs: &Rhs) -> bool {
        self.approx_eq_epsilon(rhs, LOW_PREC_EPSILON)
    }
}

impl ApproxEq for f64 {
    fn approx_eq_epsilon(&self, rhs: &Self, epsilon: f64) -> bool {
        if self == rhs {
            return true;
        }
        (self - rhs).abs() < epsilon
    }
}

impl<T: ApproxEq> ApproxEq for &T {
    fn approx_eq_epsilon(&self, rhs: &Self, epsilon: f64) -> bool {
        (*self).approx_eq_epsilon(*rhs, epsilon)
    }
}

#[macro_export]
macro_rules! assert_approx_eq_low_prec {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left, right) => {
                assert!(
                    $crate::math::approx_eq::ApproxEq::approx_eq_low_prec(left, right),
                    "assertion `left ≈ right` failed\n  left: {:?}\n right: {:?}",
                    left,
                    right
                );
            }
        }
    };
}
