//! Package field validation

use thiserror::Error;

/// Errors that can occur during package validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PackageValidationError {
    #[error("Tracking number cannot be empty")]
    EmptyTrackingNumber,

    #[error("Tracking number cannot exceed {0} characters")]
    TrackingNumberTooLong(usize),

    #[error("Courier cannot be empty")]
    EmptyCourier,

    #[error("Courier cannot exceed {0} characters")]
    CourierTooLong(usize),

    #[error("Origin cannot be empty")]
    EmptyOrigin,

    #[error("Destination cannot be empty")]
    EmptyDestination,
}

pub const MAX_TRACKING_NUMBER_LENGTH: usize = 50;
pub const MAX_COURIER_LENGTH: usize = 100;

/// Validate a tracking number. Callers trim before validating; a
/// whitespace-only input therefore fails as empty.
pub fn validate_tracking_number(tracking_number: &str) -> Result<(), PackageValidationError> {
    if tracking_number.is_empty() {
        return Err(PackageValidationError::EmptyTrackingNumber);
    }

    if tracking_number.len() > MAX_TRACKING_NUMBER_LENGTH {
        return Err(PackageValidationError::TrackingNumberTooLong(
            MAX_TRACKING_NUMBER_LENGTH,
        ));
    }

    Ok(())
}

/// Validate a courier name
pub fn validate_courier(courier: &str) -> Result<(), PackageValidationError> {
    if courier.is_empty() {
        return Err(PackageValidationError::EmptyCourier);
    }

    if courier.len() > MAX_COURIER_LENGTH {
        return Err(PackageValidationError::CourierTooLong(MAX_COURIER_LENGTH));
    }

    Ok(())
}

/// Validate an origin location
pub fn validate_origin(origin: &str) -> Result<(), PackageValidationError> {
    if origin.is_empty() {
        return Err(PackageValidationError::EmptyOrigin);
    }

    Ok(())
}

/// Validate a destination location
pub fn validate_destination(destination: &str) -> Result<(), PackageValidationError> {
    if destination.is_empty() {
        return Err(PackageValidationError::EmptyDestination);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_tracking_number() {
        assert!(validate_tracking_number("ABC123").is_ok());
        assert!(validate_tracking_number("1Z999AA10123456784").is_ok());
    }

    #[test]
    fn test_empty_tracking_number() {
        assert_eq!(
            validate_tracking_number(""),
            Err(PackageValidationError::EmptyTrackingNumber)
        );
    }

    #[test]
    fn test_tracking_number_at_boundary() {
        let at_limit = "a".repeat(50);
        assert!(validate_tracking_number(&at_limit).is_ok());
    }

    #[test]
    fn test_tracking_number_too_long() {
        let over_limit = "a".repeat(51);
        assert_eq!(
            validate_tracking_number(&over_limit),
            Err(PackageValidationError::TrackingNumberTooLong(50))
        );
    }

    #[test]
    fn test_valid_courier() {
        assert!(validate_courier("DHL").is_ok());
        assert!(validate_courier("United Parcel Service").is_ok());
    }

    #[test]
    fn test_empty_courier() {
        assert_eq!(validate_courier(""), Err(PackageValidationError::EmptyCourier));
    }

    #[test]
    fn test_courier_at_boundary() {
        let at_limit = "a".repeat(100);
        assert!(validate_courier(&at_limit).is_ok());
    }

    #[test]
    fn test_courier_too_long() {
        let over_limit = "a".repeat(101);
        assert_eq!(
            validate_courier(&over_limit),
            Err(PackageValidationError::CourierTooLong(100))
        );
    }

    #[test]
    fn test_empty_origin_and_destination() {
        assert_eq!(validate_origin(""), Err(PackageValidationError::EmptyOrigin));
        assert_eq!(
            validate_destination(""),
            Err(PackageValidationError::EmptyDestination)
        );
        assert!(validate_origin("Berlin").is_ok());
        assert!(validate_destination("Madrid").is_ok());
    }
}
