use thiserror::Error;

use splitr_core::error::Error as CoreError;
use splitr_io::error::Error as IoError;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Io(#[from] IoError),
}

impl ExecError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ExecError::Core(e) if e.is_invalid_argument())
    }

    pub fn is_io(&self) -> bool {
        matches!(self, ExecError::Io(_))
    }

    pub fn suggestions(&self) -> Vec<String> {
        match self {
            ExecError::Core(e) => e.suggestions(),
            ExecError::Io(e) => e.suggestions(),
        }
    }
}
