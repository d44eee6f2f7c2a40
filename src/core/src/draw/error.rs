use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    /// Every attempt within the budget ran into a dead end.
    Exhausted { attempts: usize },
    InvalidCatalog(String),
    InvalidHosts(String),
    InvalidSettings(String),
}

impl DrawError {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, DrawError::Exhausted { .. })
    }
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DrawError::Exhausted { attempts } => {
                write!(f, "Failed to generate a valid draw after {} attempts", attempts)
            }
            DrawError::InvalidCatalog(msg) => write!(f, "Invalid catalog: {}", msg),
            DrawError::InvalidHosts(msg) => write!(f, "Invalid host placement: {}", msg),
            DrawError::InvalidSettings(msg) => write!(f, "Invalid draw settings: {}", msg),
        }
    }
}

impl std::error::Error for DrawError {}
