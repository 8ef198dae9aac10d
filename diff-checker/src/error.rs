use std::{fmt, io};

#[derive(Debug)]
pub enum CheckerError {
    Io(io::Error),

    /// A constraint names an element outside `1..=len`.
    ElementOutOfRange {
        case: usize,
        element: usize,
        len: usize,
    },
}

impl fmt::Display for CheckerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckerError::Io(e) => write!(f, "i/o error: {e}"),
            CheckerError::ElementOutOfRange { case, element, len } => {
                write!(f, "test case {case}: element {element} is outside 1..={len}")
            }
        }
    }
}

impl std::error::Error for CheckerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckerError::Io(e) => Some(e),
            CheckerError::ElementOutOfRange { .. } => None,
        }
    }
}

impl From<io::Error> for CheckerError {
    fn from(e: io::Error) -> Self {
        CheckerError::Io(e)
    }
}
