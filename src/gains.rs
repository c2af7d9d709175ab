extern crate nalgebra as na;

/// Controller gains, normally produced offline by pole placement or LQR/Kalman design.
///
/// A zero `L` disables estimator correction from the measurement and a zero `I`
/// disables integral action. Both are handled by the same update formula, so
/// the zero matrices are plain defaults rather than special cases.
#[allow(non_snake_case)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Gains<const X: usize, const U: usize, const Y: usize = X> {
    /// Regulator gain, u = -K*x_hat
    pub K: na::SMatrix<f64, U, X>,
    /// Estimator gain
    pub L: na::SMatrix<f64, X, Y>,
    /// Integral gain
    pub I: na::SMatrix<f64, U, Y>,
}

#[allow(non_snake_case)]
impl<const X: usize, const U: usize, const Y: usize> Gains<X, U, Y> {
    pub fn new(
        K: na::SMatrix<f64, U, X>,
        L: na::SMatrix<f64, X, Y>,
        I: na::SMatrix<f64, U, Y>,
    ) -> Self {
        Self { K, L, I }
    }

    /// Pure state feedback with estimation and integral action disabled.
    pub fn regulator(K: na::SMatrix<f64, U, X>) -> Self {
        Self::new(K, na::SMatrix::zeros(), na::SMatrix::zeros())
    }

    pub fn with_estimator(mut self, L: na::SMatrix<f64, X, Y>) -> Self {
        self.L = L;
        self
    }

    pub fn with_integral(mut self, I: na::SMatrix<f64, U, Y>) -> Self {
        self.I = I;
        self
    }
}

impl<const X: usize, const U: usize, const Y: usize> Default for Gains<X, U, Y> {
    fn default() -> Self {
        Self::regulator(na::SMatrix::zeros())
    }
}
