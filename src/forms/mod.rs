//! Request bodies and query strings accepted by the client routes.

use thiserror::Error;
use validator::ValidationErrors;

use crate::pagination::SortParseError;

pub mod client;
pub mod page;

#[derive(Debug, Error)]
/// Errors that can occur when processing request input.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid sort: {0}")]
    InvalidSort(#[from] SortParseError),

    #[error("page {0} is out of range")]
    PageOutOfRange(usize),

    #[error("invalid name")]
    InvalidName,

    #[error("invalid cpf")]
    InvalidCpf,

    #[error("invalid income")]
    InvalidIncome,

    #[error("invalid children count")]
    InvalidChildren,
}
