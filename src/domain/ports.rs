use crate::domain::model::{Phone, RawInput};
use crate::utils::error::Result;
use std::path::Path;

/// Input source. Missing values come back as `None`, never as an error.
pub trait PhoneReader {
    fn read_input(&self) -> RawInput;
}

pub trait PhoneBinder {
    fn create_phone(&self, raw: &RawInput) -> Result<Phone>;
}

pub trait PhoneValidator {
    fn is_valid(&self, phone: &Phone) -> bool;
}

/// Appends a phone to `destination`. The sink is released before returning.
pub trait PhoneSaver {
    fn save(&self, phone: &Phone, destination: &Path) -> Result<()>;
}

pub trait ConfigProvider {
    fn output_path(&self) -> &str;
    fn output_format(&self) -> &str;
    fn input_path(&self) -> Option<&str>;
    fn requests(&self) -> usize;
}
