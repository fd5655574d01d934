// Adapters layer: concrete implementations of the domain ports (terminal/scripted input, file sinks).

pub mod reader;
pub mod saver;

pub use reader::{ConsolePhoneReader, ScriptedPhoneReader};
pub use saver::{saver_for, CsvPhoneSaver, JsonLinesPhoneSaver, SaveFormat, TextPhoneSaver};
