use super::types::Credentials;
use crate::app_lib::AppError;
use gloo_timers::future::TimeoutFuture;

/// Fixed artificial round-trip so the form behaves like a network call.
const SIMULATED_LATENCY_MS: u32 = 1_000;

/// Validates the login form. Empty required fields are the only failure
/// path the demo flow has.
pub(crate) fn validate(credentials: &Credentials) -> Result<(), AppError> {
    if credentials.brand_code.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter your brand code.".to_string(),
        ));
    }
    if credentials.email.trim().is_empty() || credentials.password.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter your email and password.".to_string(),
        ));
    }
    Ok(())
}

/// Simulated sign-in: waits the artificial delay, then applies the same
/// validation the form shows inline. Any non-empty credentials succeed.
pub(crate) async fn login(credentials: &Credentials) -> Result<(), AppError> {
    TimeoutFuture::new(SIMULATED_LATENCY_MS).await;
    validate(credentials)
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::features::auth::types::Credentials;

    fn filled() -> Credentials {
        Credentials {
            brand_code: "SOBOK".to_string(),
            email: "admin@sobok.example".to_string(),
            password: "hunter2".to_string(),
        }
    }

    #[test]
    fn accepts_non_empty_credentials() {
        assert!(validate(&filled()).is_ok());
    }

    #[test]
    fn rejects_missing_brand_code() {
        let mut credentials = filled();
        credentials.brand_code = "  ".to_string();
        let err = validate(&credentials).unwrap_err();
        assert!(err.to_string().contains("brand code"));
    }

    #[test]
    fn rejects_missing_email_or_password() {
        let mut credentials = filled();
        credentials.email.clear();
        assert!(validate(&credentials).is_err());

        let mut credentials = filled();
        credentials.password = " ".to_string();
        assert!(validate(&credentials).is_err());
    }
}
