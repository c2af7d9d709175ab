extern crate nalgebra as na;

use crate::error::ControlError;
use crate::gains::Gains;
use crate::linsystheory::reference_blocks;
use crate::models::Model;

/// Observer based state feedback controller with reference feedforward and integral action.
///
/// The model is borrowed, so it must outlive the controller and can be shared
/// read-only with other controllers and simulations of the same plant.
#[allow(non_snake_case)]
#[derive(Clone, Debug)]
pub struct Controller<'a, M, const X: usize, const U: usize, const Y: usize = X>
where
    M: Model<X, U, Y> + ?Sized,
{
    model: &'a M,
    gains: Gains<X, U, Y>,

    // Cached by initialise: A - L*C and the reference feedforward gain
    ALC: na::SMatrix<f64, X, X>,
    N_bar: na::SMatrix<f64, U, Y>,
    initialised: bool,

    x_hat: na::SVector<f64, X>,
    u: na::SVector<f64, U>,
    r: na::SVector<f64, Y>,
    w_hat: na::SVector<f64, U>,
}

#[allow(non_snake_case)]
impl<'a, M, const X: usize, const U: usize, const Y: usize> Controller<'a, M, X, U, Y>
where
    M: Model<X, U, Y> + ?Sized,
{
    pub fn new(model: &'a M, gains: Gains<X, U, Y>) -> Self {
        Self {
            model,
            gains,
            ALC: na::SMatrix::zeros(),
            N_bar: na::SMatrix::zeros(),
            initialised: false,
            x_hat: na::SVector::zeros(),
            u: na::SVector::zeros(),
            r: na::SVector::zeros(),
            w_hat: na::SVector::zeros(),
        }
    }

    /// Precompute A - L*C and the feedforward gain N_bar.
    ///
    /// Must be called again after the gains change. On a singular augmented
    /// system N_bar is left untouched and the controller keeps regulating to zero.
    pub fn initialise(&mut self) -> Result<(), ControlError> {
        self.ALC = self.model.A() - self.gains.L * self.model.C();

        let blocks = match reference_blocks(self.model) {
            Ok(blocks) => blocks,
            Err(err) => {
                log::warn!("Reference feedforward unavailable: {err}");
                self.initialised = false;
                return Err(err);
            }
        };
        self.N_bar = blocks.feedforward_gain(&self.gains.K);
        self.initialised = true;

        log::debug!(
            "Initialised with {:?} pseudo-inverse, N_bar = {}",
            blocks.branch,
            self.N_bar
        );
        Ok(())
    }

    /// Advance the estimate by `dt` seconds using the measurement `y` and return the new control input.
    ///
    /// `dt = 0.0` freezes the estimator and integrator but still recomputes `u`.
    /// A negative `dt` integrates both backward; keeping `dt >= 0` is up to the caller.
    pub fn update(&mut self, y: &na::SVector<f64, Y>, dt: f64) -> na::SVector<f64, U> {
        let Gains { K, L, I } = &self.gains;

        // Observer, forward Euler. self.u still holds the previous input here.
        self.x_hat += (self.ALC * self.x_hat + self.model.B() * self.u + L * y) * dt;

        self.u = -(K * self.x_hat) + self.N_bar * self.r;

        self.w_hat += I * (y - self.r) * dt;
        self.u += self.w_hat;

        self.u
    }

    /// Zero the estimate, control input and disturbance estimate. Reference and gains are kept.
    pub fn reset(&mut self) {
        self.x_hat = na::SVector::zeros();
        self.u = na::SVector::zeros();
        self.w_hat = na::SVector::zeros();
    }

    /// Replace the gains. The cached ALC and N_bar are cleared until the next `initialise`.
    pub fn set_gains(&mut self, gains: Gains<X, U, Y>) {
        log::debug!("Gains replaced, controller needs initialise");
        self.gains = gains;
        self.ALC = na::SMatrix::zeros();
        self.N_bar = na::SMatrix::zeros();
        self.initialised = false;
    }

    pub fn set_reference(&mut self, r: na::SVector<f64, Y>) {
        self.r = r;
    }

    pub fn set_estimate(&mut self, x_hat: na::SVector<f64, X>) {
        self.x_hat = x_hat;
    }

    pub fn is_initialised(&self) -> bool {
        self.initialised
    }

    pub fn model(&self) -> &'a M {
        self.model
    }

    pub fn gains(&self) -> &Gains<X, U, Y> {
        &self.gains
    }

    pub fn estimate(&self) -> &na::SVector<f64, X> {
        &self.x_hat
    }

    pub fn control_input(&self) -> &na::SVector<f64, U> {
        &self.u
    }

    pub fn reference(&self) -> &na::SVector<f64, Y> {
        &self.r
    }

    pub fn disturbance_estimate(&self) -> &na::SVector<f64, U> {
        &self.w_hat
    }

    pub fn feedforward_gain(&self) -> &na::SMatrix<f64, U, Y> {
        &self.N_bar
    }

    /// A - L*C as cached by the last `initialise`.
    pub fn observer_matrix(&self) -> &na::SMatrix<f64, X, X> {
        &self.ALC
    }
}
