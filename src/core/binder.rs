use crate::core::{Phone, PhoneBinder, RawInput, Result};
use crate::utils::error::StoreError;

/// 將 `[model, price]` 兩個欄位綁定成 `Phone`
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneralPhoneBinder;

impl GeneralPhoneBinder {
    pub fn new() -> Self {
        Self
    }
}

impl PhoneBinder for GeneralPhoneBinder {
    fn create_phone(&self, raw: &RawInput) -> Result<Phone> {
        let [model, price] = raw.fields() else {
            return Err(StoreError::binding(format!(
                "expected 2 fields, got {}",
                raw.len()
            )));
        };

        let model = match model.as_deref() {
            Some(model) if !model.is_empty() => model,
            _ => return Err(StoreError::binding("model must not be empty")),
        };

        let price_text = price
            .as_deref()
            .ok_or_else(|| StoreError::binding("price is missing"))?;

        let price = price_text.trim().parse::<i32>().map_err(|e| {
            StoreError::binding(format!("price '{}' is not an integer: {}", price_text, e))
        })?;

        tracing::debug!("Bound phone model={:?} price={}", model, price);
        Ok(Phone::new(model, price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bind(raw: RawInput) -> Result<Phone> {
        GeneralPhoneBinder::new().create_phone(&raw)
    }

    #[test]
    fn test_bind_valid_input() {
        let phone = bind(RawInput::from(("Nokia 3310", "1500"))).unwrap();
        assert_eq!(phone.model(), "Nokia 3310");
        assert_eq!(phone.price(), 1500);
    }

    #[test]
    fn test_bind_negative_price_is_not_a_binding_concern() {
        let phone = bind(RawInput::from(("iPhone", "-5"))).unwrap();
        assert_eq!(phone.price(), -5);
    }

    #[test]
    fn test_bind_tolerates_whitespace_around_price() {
        let phone = bind(RawInput::from(("Pixel", " 42 "))).unwrap();
        assert_eq!(phone.price(), 42);
    }

    #[test]
    fn test_bind_rejects_empty_model() {
        let err = bind(RawInput::from(("", "1500"))).unwrap_err();
        assert!(matches!(err, StoreError::Binding { .. }));
    }

    #[test]
    fn test_bind_rejects_missing_fields() {
        assert!(matches!(
            bind(RawInput::new(None, Some("1500".to_string()))),
            Err(StoreError::Binding { .. })
        ));
        assert!(matches!(
            bind(RawInput::new(Some("Pixel".to_string()), None)),
            Err(StoreError::Binding { .. })
        ));
    }

    #[test]
    fn test_bind_rejects_non_numeric_price() {
        for price in ["abc", "", "12.5", "99999999999"] {
            let result = bind(RawInput::from(("Pixel", price)));
            assert!(
                matches!(result, Err(StoreError::Binding { .. })),
                "price {:?} should fail",
                price
            );
        }
    }

    #[test]
    fn test_bind_rejects_wrong_shape() {
        let one = RawInput::from_fields(vec![Some("Pixel".to_string())]);
        let three = RawInput::from_fields(vec![
            Some("Pixel".to_string()),
            Some("10".to_string()),
            Some("extra".to_string()),
        ]);

        assert!(matches!(bind(one), Err(StoreError::Binding { .. })));
        assert!(matches!(bind(three), Err(StoreError::Binding { .. })));
        assert!(matches!(
            bind(RawInput::default()),
            Err(StoreError::Binding { .. })
        ));
    }
}
