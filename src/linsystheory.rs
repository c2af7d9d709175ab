extern crate nalgebra as na;

use crate::error::ControlError;
use crate::models::Model;

/// Which pseudo-inverse of the augmented system `[A B; C D]` is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PseudoInverse {
    /// (sys' * sys)^-1 * sys'
    Left,
    /// sys' * (sys * sys')^-1
    Right,
}

impl PseudoInverse {
    /// Pick the branch that inverts the smaller of `sys' * sys` and `sys * sys'`.
    pub fn select(inputs: usize, outputs: usize) -> Self {
        if outputs < inputs {
            PseudoInverse::Right
        } else {
            PseudoInverse::Left
        }
    }
}

/// The columns of `pinv([A B; C D])` that multiply the output block.
/// Maps a reference r to the steady state pair (x_ss, u_ss) = (top * r, bottom * r)
/// solving A*x + B*u = 0, C*x + D*u = r (in the least squares sense when not exact).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceBlocks<const X: usize, const U: usize, const Y: usize> {
    pub top: na::SMatrix<f64, X, Y>,
    pub bottom: na::SMatrix<f64, U, Y>,
    pub branch: PseudoInverse,
}

impl<const X: usize, const U: usize, const Y: usize> ReferenceBlocks<X, U, Y> {
    #[allow(non_snake_case)]
    /// N_bar = K * top + bottom for the regulator gain K.
    pub fn feedforward_gain(&self, K: &na::SMatrix<f64, U, X>) -> na::SMatrix<f64, U, Y> {
        K * self.top + self.bottom
    }
}

#[allow(non_snake_case)]
/// Evaluate the pseudo-inverse blocks without forming the (X+Y)x(X+U) matrix.
///
/// The Gram matrix of the chosen branch is split into blocks and inverted through
/// its Schur complement, so only X x X, U x U and Y x Y inverses are taken.
/// An invertible Gram matrix is positive definite, which makes both the leading
/// block and the Schur complement invertible as well.
pub fn reference_blocks<M, const X: usize, const U: usize, const Y: usize>(
    model: &M,
) -> Result<ReferenceBlocks<X, U, Y>, ControlError>
where
    M: Model<X, U, Y> + ?Sized,
{
    let (A, B, C, D) = (model.A(), model.B(), model.C(), model.D());
    let (A_t, B_t, C_t, D_t) = (A.transpose(), B.transpose(), C.transpose(), D.transpose());

    let branch = PseudoInverse::select(model.inputs(), model.outputs());
    let singular = |block: &'static str| ControlError::SingularMatrix { branch, block };

    let (top, bottom) = match branch {
        PseudoInverse::Left => {
            // sys' * sys = [M11 M12; M12' M22]
            let M11 = A_t * A + C_t * C;
            let M12 = A_t * B + C_t * D;
            let M22 = B_t * B + D_t * D;

            let M11_inv = M11.try_inverse().ok_or(singular("A'A + C'C"))?;
            let M21_M11_inv = M12.transpose() * M11_inv;
            let S_inv = (M22 - M21_M11_inv * M12)
                .try_inverse()
                .ok_or(singular("Schur complement of A'A + C'C"))?;

            let bottom = S_inv * (D_t - M21_M11_inv * C_t);
            let top = M11_inv * (C_t - M12 * bottom);
            (top, bottom)
        }
        PseudoInverse::Right => {
            // sys * sys' = [N11 N12; N12' N22]
            let N11 = A * A_t + B * B_t;
            let N12 = A * C_t + B * D_t;
            let N22 = C * C_t + D * D_t;

            let N11_inv = N11.try_inverse().ok_or(singular("AA' + BB'"))?;
            let Z2 = (N22 - N12.transpose() * N11_inv * N12)
                .try_inverse()
                .ok_or(singular("Schur complement of AA' + BB'"))?;
            let Z1 = -(N11_inv * N12 * Z2);

            let top = A_t * Z1 + C_t * Z2;
            let bottom = B_t * Z1 + D_t * Z2;
            (top, bottom)
        }
    };

    Ok(ReferenceBlocks {
        top,
        bottom,
        branch,
    })
}

#[allow(non_snake_case)]
/// Feedforward gain N_bar = K * top + bottom, mapping a reference to a control input offset.
pub fn feedforward_gain<M, const X: usize, const U: usize, const Y: usize>(
    model: &M,
    K: &na::SMatrix<f64, U, X>,
) -> Result<na::SMatrix<f64, U, Y>, ControlError>
where
    M: Model<X, U, Y> + ?Sized,
{
    Ok(reference_blocks(model)?.feedforward_gain(K))
}
