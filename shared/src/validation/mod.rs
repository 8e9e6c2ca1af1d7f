pub mod enrollment;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationState<T> {
    Unused,
    Valid,
    Invalid(T),
}

impl<T> Default for ValidationState<T> {
    fn default() -> Self {
        Self::Unused
    }
}

impl<T> ValidationState<T> {
    pub const fn error(&self) -> Option<&T> {
        match self {
            Self::Invalid(e) => Some(e),
            Self::Unused | Self::Valid => None,
        }
    }
}

impl<T> From<Result<(), T>> for ValidationState<T> {
    fn from(result: Result<(), T>) -> Self {
        match result {
            Ok(()) => Self::Valid,
            Err(e) => Self::Invalid(e),
        }
    }
}
