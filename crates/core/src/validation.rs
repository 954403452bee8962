//! Input validation helpers shared by the repository and API layers.
//!
//! Each helper returns `Ok(())` or a human-readable message suitable for a
//! `400 Bad Request` body.

/// Minimum password length accepted at signup and password change.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum length of category and budget item names.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length of free-text descriptions and notes.
pub const MAX_TEXT_LENGTH: usize = 500;

/// Amounts must be finite and strictly positive.
pub fn validate_amount(amount: f64) -> Result<(), String> {
    if !amount.is_finite() {
        return Err("Amount must be a finite number".to_string());
    }
    if amount <= 0.0 {
        return Err("Amount must be greater than zero".to_string());
    }
    Ok(())
}

/// Names must be non-blank and at most [`MAX_NAME_LENGTH`] characters.
pub fn validate_name(field: &str, value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(format!(
            "{field} must be at most {MAX_NAME_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Optional free text is capped at [`MAX_TEXT_LENGTH`] characters.
pub fn validate_text(field: &str, value: &str) -> Result<(), String> {
    if value.chars().count() > MAX_TEXT_LENGTH {
        return Err(format!(
            "{field} must be at most {MAX_TEXT_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Colors are `#RRGGBB` hex strings.
pub fn validate_color(color: &str) -> Result<(), String> {
    let valid = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(())
    } else {
        Err(format!("Invalid color '{color}'. Expected #RRGGBB"))
    }
}

/// Optional time-of-day is `HH:MM` on a 24-hour clock.
pub fn validate_time_of_day(time: &str) -> Result<(), String> {
    chrono::NaiveTime::parse_from_str(time, "%H:%M")
        .map(|_| ())
        .map_err(|_| format!("Invalid time '{time}'. Expected HH:MM"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_must_be_positive_and_finite() {
        assert!(validate_amount(0.01).is_ok());
        assert!(validate_amount(1500.0).is_ok());
        assert!(validate_amount(0.0).is_err());
        assert!(validate_amount(-5.0).is_err());
        assert!(validate_amount(f64::NAN).is_err());
        assert!(validate_amount(f64::INFINITY).is_err());
    }

    #[test]
    fn blank_names_rejected() {
        assert!(validate_name("Name", "Groceries").is_ok());
        let err = validate_name("Name", "   ").unwrap_err();
        assert_eq!(err, "Name must not be empty");
    }

    #[test]
    fn long_names_rejected() {
        let long = "x".repeat(MAX_NAME_LENGTH + 1);
        assert!(validate_name("Name", &long).is_err());
        assert!(validate_name("Name", &long[1..]).is_ok());
    }

    #[test]
    fn color_format() {
        assert!(validate_color("#a1B2c3").is_ok());
        assert!(validate_color("a1B2c3").is_err());
        assert!(validate_color("#a1B2c").is_err());
        assert!(validate_color("#g1B2c3").is_err());
    }

    #[test]
    fn time_of_day_format() {
        assert!(validate_time_of_day("09:30").is_ok());
        assert!(validate_time_of_day("23:59").is_ok());
        assert!(validate_time_of_day("24:00").is_err());
        assert!(validate_time_of_day("9am").is_err());
    }
}
