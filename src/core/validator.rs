use crate::core::{Phone, PhoneValidator};

#[derive(Debug, Clone, Copy, Default)]
pub struct GeneralPhoneValidator;

impl GeneralPhoneValidator {
    pub fn new() -> Self {
        Self
    }
}

impl PhoneValidator for GeneralPhoneValidator {
    fn is_valid(&self, phone: &Phone) -> bool {
        !phone.model().is_empty() && phone.price() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phone() {
        let validator = GeneralPhoneValidator::new();
        assert!(validator.is_valid(&Phone::new("Nokia 3310", 1500)));
        assert!(validator.is_valid(&Phone::new("x", 1)));
    }

    #[test]
    fn test_invalid_phones() {
        let validator = GeneralPhoneValidator::new();
        assert!(!validator.is_valid(&Phone::new("", 1500)));
        assert!(!validator.is_valid(&Phone::new("iPhone", 0)));
        assert!(!validator.is_valid(&Phone::new("iPhone", -5)));
        assert!(!validator.is_valid(&Phone::new("iPhone", i32::MIN)));
    }

    #[test]
    fn test_revalidation_is_stable() {
        let validator = GeneralPhoneValidator::new();
        for phone in [Phone::new("Pixel", 10), Phone::new("Pixel", -10)] {
            assert_eq!(validator.is_valid(&phone), validator.is_valid(&phone));
        }
    }
}
