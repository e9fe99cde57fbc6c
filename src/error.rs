use thiserror::Error;

pub type ModebarResult<T> = Result<T, ModebarError>;

#[derive(Debug, Error)]
pub enum ModebarError {
    #[error("*{option}* configuration options {reason}")]
    InvalidConfiguration { option: &'static str, reason: String },

    #[error("*modeBarButtons* configuration options invalid button name `{name}`")]
    UnresolvedButton { name: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl ModebarError {
    pub(crate) fn invalid_configuration(option: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            option,
            reason: reason.into(),
        }
    }
}
