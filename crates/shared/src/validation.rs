//! Common validation utilities for request DTOs.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// `#RGB` or `#RRGGBB` hex color values, as stored by the CMS theme tables.
    static ref HEX_COLOR: Regex = Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap();
}

/// Validates that a latitude value is within valid range (-90 to 90).
pub fn validate_latitude(lat: f64) -> Result<(), ValidationError> {
    if (-90.0..=90.0).contains(&lat) {
        Ok(())
    } else {
        let mut err = ValidationError::new("latitude_range");
        err.message = Some("Latitude must be between -90 and 90".into());
        Err(err)
    }
}

/// Validates that a longitude value is within valid range (-180 to 180).
pub fn validate_longitude(lon: f64) -> Result<(), ValidationError> {
    if (-180.0..=180.0).contains(&lon) {
        Ok(())
    } else {
        let mut err = ValidationError::new("longitude_range");
        err.message = Some("Longitude must be between -180 and 180".into());
        Err(err)
    }
}

/// Validates a CSS hex color (`#fff` or `#ffffff`).
pub fn validate_hex_color(value: &str) -> Result<(), ValidationError> {
    if HEX_COLOR.is_match(value) {
        Ok(())
    } else {
        let mut err = ValidationError::new("hex_color");
        err.message = Some("Color must be a #RGB or #RRGGBB hex value".into());
        Err(err)
    }
}

/// Validates that a rating is within the 1-5 star range.
pub fn validate_rating(rating: i32) -> Result<(), ValidationError> {
    if (1..=5).contains(&rating) {
        Ok(())
    } else {
        let mut err = ValidationError::new("rating_range");
        err.message = Some("Rating must be between 1 and 5".into());
        Err(err)
    }
}

/// Validates that an ordering index is non-negative.
pub fn validate_ordering(ordering: i32) -> Result<(), ValidationError> {
    if ordering >= 0 {
        Ok(())
    } else {
        let mut err = ValidationError::new("ordering_range");
        err.message = Some("Ordering must be non-negative".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_bounds() {
        assert!(validate_latitude(0.0).is_ok());
        assert!(validate_latitude(90.0).is_ok());
        assert!(validate_latitude(-90.0).is_ok());
        assert!(validate_latitude(90.1).is_err());
        assert!(validate_latitude(-90.1).is_err());
    }

    #[test]
    fn test_longitude_bounds() {
        assert!(validate_longitude(180.0).is_ok());
        assert!(validate_longitude(-180.0).is_ok());
        assert!(validate_longitude(180.5).is_err());
    }

    #[test]
    fn test_hex_color_accepts_short_and_long() {
        assert!(validate_hex_color("#fff").is_ok());
        assert!(validate_hex_color("#112250").is_ok());
        assert!(validate_hex_color("#D8C18D").is_ok());
    }

    #[test]
    fn test_hex_color_rejects_malformed() {
        assert!(validate_hex_color("112250").is_err());
        assert!(validate_hex_color("#12").is_err());
        assert!(validate_hex_color("#12345g").is_err());
        assert!(validate_hex_color("rgb(0,0,0)").is_err());
    }

    #[test]
    fn test_rating_range() {
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
    }

    #[test]
    fn test_ordering_non_negative() {
        assert!(validate_ordering(0).is_ok());
        assert!(validate_ordering(42).is_ok());
        assert!(validate_ordering(-1).is_err());
    }
}
