extern crate nalgebra as na;

use crate::models::Model;

/// Open loop plant simulator, a stand-in for hardware when testing controllers.
/// x += (A*x + B*u) * dt, y = C*x
pub struct Simulation<'a, M, const X: usize, const U: usize, const Y: usize = X>
where
    M: Model<X, U, Y> + ?Sized,
{
    model: &'a M,
    x: na::SVector<f64, X>,
}

impl<'a, M, const X: usize, const U: usize, const Y: usize> Simulation<'a, M, X, U, Y>
where
    M: Model<X, U, Y> + ?Sized,
{
    pub fn new(model: &'a M) -> Self {
        Self {
            model,
            x: na::SVector::zeros(),
        }
    }

    /// Advance the plant by one forward Euler step and return the new output.
    pub fn step(&mut self, u: &na::SVector<f64, U>, dt: f64) -> na::SVector<f64, Y> {
        self.x += (self.model.A() * self.x + self.model.B() * u) * dt;
        self.output()
    }

    pub fn output(&self) -> na::SVector<f64, Y> {
        self.model.C() * self.x
    }

    pub fn state(&self) -> &na::SVector<f64, X> {
        &self.x
    }

    pub fn set_state(&mut self, x: na::SVector<f64, X>) {
        self.x = x;
    }

    pub fn model(&self) -> &'a M {
        self.model
    }
}
