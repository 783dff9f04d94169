use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn interrupted(context: impl Into<String>) -> Error {
        Error(
            ErrorKind::Interrupted {
                context: context.into(),
            }
            .into(),
        )
    }

    pub fn task_failed(context: impl Into<String>) -> Error {
        Error(
            ErrorKind::TaskFailed {
                context: context.into(),
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("blocking wait interrupted in '{context}'")]
    Interrupted { context: String },

    #[error("scheduled task failed: {context}")]
    TaskFailed { context: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
