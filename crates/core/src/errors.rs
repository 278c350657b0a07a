use thiserror::Error;

#[derive(Error, Debug)]
pub enum AcademyError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Duplicate account: {0}")]
    DuplicateAccount(String),

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Backend error: {0}")]
    Backend(#[from] eyre::Report),

    #[error("Internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type AcademyResult<T> = Result<T, AcademyError>;
