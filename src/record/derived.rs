use serde::{Deserialize, Serialize};

/// Fields computed once from the base triple when a record is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedFields {
    /// `alpha + beta`
    pub delta: i32,
    /// `beta + gamma`
    pub epsilon: i32,
    /// `delta - epsilon`
    pub zeta: i32,
}

impl DerivedFields {
    pub fn from_base(alpha: i32, beta: i32, gamma: i32) -> Self {
        let delta = alpha.wrapping_add(beta);
        let epsilon = beta.wrapping_add(gamma);

        Self {
            delta,
            epsilon,
            zeta: delta.wrapping_sub(epsilon),
        }
    }
}
