//! Error handling and exit codes.

use workshop_core::constants::exit_codes;
use workshop_core::strategy::WorkshopError;

/// Map a strategy error to its exit code.
pub fn handle_error(err: &WorkshopError) -> i32 {
    match err {
        WorkshopError::Validation(_) => exit_codes::ERROR_VALIDATION,
        WorkshopError::Precondition(_) => exit_codes::ERROR_PRECONDITION,
        WorkshopError::NotFound(_) => exit_codes::ERROR_NOT_FOUND,
    }
}

/// Exit code for any application error; non-strategy errors are generic.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<WorkshopError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}

/// [`exit_code`] narrowed to a process exit status.
pub fn exit_status(err: &anyhow::Error) -> u8 {
    u8::try_from(exit_code(err)).unwrap_or(1)
}
