//! The minimal contract a driver exercises against any simulation model.

use thiserror::Error;

/// Errors surfaced by the model contract and configuration handling.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The concrete model type does not provide this contract operation.
    #[error("model does not implement `{0}`")]
    Unsupported(&'static str),
    /// A configuration field lies outside its documented domain.
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
    /// Configuration may only change while the ledger and stock are clear.
    #[error("configuration can only be applied to a freshly built or reset model")]
    DirtyState,
}

/// Two-method contract every model offers to the surrounding driver.
///
/// Both operations default to the unimplemented-capability fault, so a
/// model type that never provided one of them fails loudly the first time
/// the driver calls it. That fault marks an integration error, not a
/// runtime condition.
pub trait Model {
    /// Run the model to completion, updating its internal outcome state.
    fn run(&mut self) -> Result<(), ModelError> {
        Err(ModelError::Unsupported("run"))
    }

    /// Return the model to its initial outcome state so it can run again.
    fn reset(&mut self) -> Result<(), ModelError> {
        Err(ModelError::Unsupported("reset"))
    }
}
