extern crate nalgebra as na;

/// Read-only source of a continuous-time LTI plant model.
/// dx/dt = A*x + B*u
/// y = C*x + D*u
///
/// Dimensions are fixed at compile time: `X` states, `U` inputs, `Y` outputs.
#[allow(non_snake_case)]
pub trait Model<const X: usize, const U: usize, const Y: usize = X> {
    fn A(&self) -> &na::SMatrix<f64, X, X>;
    fn B(&self) -> &na::SMatrix<f64, X, U>;
    fn C(&self) -> &na::SMatrix<f64, Y, X>;
    fn D(&self) -> &na::SMatrix<f64, Y, U>;

    fn inputs(&self) -> usize {
        U
    }

    fn outputs(&self) -> usize {
        Y
    }
}

/// Linear Time-Invariant System
/// dx/dt = A*x + B*u
/// y = C*x + D*u
#[allow(non_snake_case)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinearSystem<const X: usize, const U: usize, const Y: usize = X> {
    pub A: na::SMatrix<f64, X, X>,
    pub B: na::SMatrix<f64, X, U>,
    pub C: na::SMatrix<f64, Y, X>,
    pub D: na::SMatrix<f64, Y, U>,
}

#[allow(non_snake_case)]
impl<const X: usize, const U: usize, const Y: usize> LinearSystem<X, U, Y> {
    pub fn new(
        A: na::SMatrix<f64, X, X>,
        B: na::SMatrix<f64, X, U>,
        C: na::SMatrix<f64, Y, X>,
        D: na::SMatrix<f64, Y, U>,
    ) -> Self {
        Self { A, B, C, D }
    }
}

#[allow(non_snake_case)]
impl<const X: usize, const U: usize, const Y: usize> Model<X, U, Y> for LinearSystem<X, U, Y> {
    fn A(&self) -> &na::SMatrix<f64, X, X> {
        &self.A
    }
    fn B(&self) -> &na::SMatrix<f64, X, U> {
        &self.B
    }
    fn C(&self) -> &na::SMatrix<f64, Y, X> {
        &self.C
    }
    fn D(&self) -> &na::SMatrix<f64, Y, U> {
        &self.D
    }
}
