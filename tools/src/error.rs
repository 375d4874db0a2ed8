use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

#[derive(Debug)]
pub enum ChainError {
    Submission(String),
    ConfirmationTimeout(String),
    Read(String),
}

impl Display for ChainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ChainError::Submission(reason) => {
                write!(f, "transaction submission failed: {reason}")
            }
            ChainError::ConfirmationTimeout(detail) => {
                write!(f, "timed out waiting for confirmation: {detail}")
            }
            ChainError::Read(reason) => write!(f, "contract read failed: {reason}"),
        }
    }
}

impl Error for ChainError {}

#[cfg(test)]
mod tests {
    use super::ChainError;

    #[test]
    fn display_names_the_failure_class() {
        let submission = ChainError::Submission("no signing credential".to_string());
        assert!(submission.to_string().contains("submission failed"));

        let timeout = ChainError::ConfirmationTimeout("0xabc".to_string());
        assert!(timeout.to_string().contains("timed out"));

        let read = ChainError::Read("no contract code".to_string());
        assert!(read.to_string().contains("read failed"));
    }
}
