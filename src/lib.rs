pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{
    saver_for, ConsolePhoneReader, CsvPhoneSaver, JsonLinesPhoneSaver, SaveFormat,
    ScriptedPhoneReader, TextPhoneSaver,
};
pub use self::core::{
    store::MobileStore, ConfigProvider, GeneralPhoneBinder, GeneralPhoneValidator, Phone,
    PhoneBinder, PhoneReader, PhoneSaver, PhoneValidator, ProcessOutcome, RawInput,
};
pub use utils::error::{Result, StoreError};
