use crate::error::AppError;

/// Validate that a string fits its column (counted in Unicode characters).
pub fn validate_max_chars(value: &str, field: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

/// Same as [`validate_max_chars`] for optional fields; `None` always passes.
pub fn validate_optional_max_chars(
    value: Option<&str>,
    field: &str,
    max: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) => validate_max_chars(v, field, max),
        None => Ok(()),
    }
}

/// Shape check for an email address: `local@domain.tld`, no whitespace.
pub fn validate_email(email: &str) -> Result<(), AppError> {
    let invalid = || AppError::Validation("Email must be a valid email address".into());

    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return Err(invalid());
    }
    Ok(())
}

/// Canonical stored form of an address: the domain is case-insensitive and
/// lower-cased, the local part is kept as sent.
pub fn normalize_email(email: &str) -> String {
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_lowercase()),
        None => email.to_string(),
    }
}
