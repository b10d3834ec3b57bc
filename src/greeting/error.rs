use std::fmt;

/// Errors that can occur while rendering and writing the greeting
#[derive(Debug)]
pub enum GreeterError {
    /// Writing to the output target failed
    OutputError {
        target: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An environment toggle held an unrecognized value
    InvalidToggle { variable: String, value: String },
}

impl fmt::Display for GreeterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GreeterError::OutputError { target, .. } => {
                write!(f, "Failed to write to {}", target)
            }
            GreeterError::InvalidToggle { variable, value } => {
                write!(
                    f,
                    "Invalid value '{}' for {} (expected true/1 or false/0)",
                    value, variable
                )
            }
        }
    }
}

impl std::error::Error for GreeterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GreeterError::OutputError { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl GreeterError {
    /// Create an output error
    pub fn output_error(target: &str, source: std::io::Error) -> Self {
        GreeterError::OutputError {
            target: target.to_string(),
            source: Box::new(source),
        }
    }

    /// Create an invalid toggle error
    pub fn invalid_toggle(variable: &str, value: &str) -> Self {
        GreeterError::InvalidToggle {
            variable: variable.to_string(),
            value: value.to_string(),
        }
    }
}

/// Result type alias for greeter operations
pub type GreeterResult<T> = Result<T, GreeterError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_output_error_display_and_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = GreeterError::output_error("stdout", io_err);

        assert_eq!(err.to_string(), "Failed to write to stdout");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_invalid_toggle_display() {
        let err = GreeterError::invalid_toggle("PLAIN_OUTPUT", "yes");

        assert_eq!(
            err.to_string(),
            "Invalid value 'yes' for PLAIN_OUTPUT (expected true/1 or false/0)"
        );
        assert!(err.source().is_none());
    }
}
