use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Validation(String),
    Storage(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(message) => write!(formatter, "{message}"),
            AppError::Storage(message) => write!(formatter, "Storage error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn validation_displays_the_bare_message() {
        let err = AppError::Validation("Please enter your brand code.".into());
        assert_eq!(err.to_string(), "Please enter your brand code.");
    }

    #[test]
    fn storage_displays_with_its_prefix() {
        let err = AppError::Storage("localStorage unavailable".into());
        assert_eq!(err.to_string(), "Storage error: localStorage unavailable");
    }
}
