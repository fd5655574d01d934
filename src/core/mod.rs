pub mod binder;
pub mod store;
pub mod validator;

pub use crate::domain::model::{Phone, ProcessOutcome, RawInput};
pub use crate::domain::ports::{
    ConfigProvider, PhoneBinder, PhoneReader, PhoneSaver, PhoneValidator,
};
pub use crate::utils::error::Result;
pub use binder::GeneralPhoneBinder;
pub use validator::GeneralPhoneValidator;
