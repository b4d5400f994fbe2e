use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    OutOfRange { field: &'static str, min: u32, actual: u32 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::OutOfRange { field, min, actual } => {
                write!(f, "{field} out of range: {actual} (expected at least {min})")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "fid" };
        assert_eq!(err.to_string(), "fid must not be empty");

        let err = ValidationError::OutOfRange {
            field: "playtimes",
            min: 1,
            actual: 0,
        };
        assert_eq!(
            err.to_string(),
            "playtimes out of range: 0 (expected at least 1)"
        );
    }
}
