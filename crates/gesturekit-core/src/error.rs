use std::fmt;

/// Misuse of a gesture recogniser's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureError {
    /// The gesture was disposed and has released its host.
    Disposed { gesture: &'static str },
    /// The host display object was dropped while the gesture still needed it.
    HostDropped { gesture: &'static str },
}

impl fmt::Display for GestureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GestureError::Disposed { gesture } => {
                write!(f, "{gesture} was disposed and cannot be reused")
            }
            GestureError::HostDropped { gesture } => {
                write!(f, "{gesture} host was dropped")
            }
        }
    }
}

impl std::error::Error for GestureError {}
