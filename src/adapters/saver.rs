use crate::core::{Phone, PhoneSaver, Result};
use crate::utils::error::StoreError;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

/// 以附加模式開啟目的檔，不存在時建立
fn open_append(destination: &Path) -> Result<File> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(destination)?;
    Ok(file)
}

/// Two lines per phone: the model, then the price.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPhoneSaver;

impl PhoneSaver for TextPhoneSaver {
    fn save(&self, phone: &Phone, destination: &Path) -> Result<()> {
        let mut file = open_append(destination)?;
        // 單次寫入，避免只留下半筆記錄
        let entry = format!("{}\n{}\n", phone.model(), phone.price());
        file.write_all(entry.as_bytes())?;

        tracing::debug!("Appended {} bytes to {}", entry.len(), destination.display());
        Ok(())
    }
}

/// One `model,price` row per phone, no header.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvPhoneSaver;

impl PhoneSaver for CsvPhoneSaver {
    fn save(&self, phone: &Phone, destination: &Path) -> Result<()> {
        let file = open_append(destination)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        let price = phone.price().to_string();
        writer.write_record([phone.model(), price.as_str()])?;
        writer.flush()?;

        tracing::debug!("Appended CSV row to {}", destination.display());
        Ok(())
    }
}

/// One JSON object per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLinesPhoneSaver;

impl PhoneSaver for JsonLinesPhoneSaver {
    fn save(&self, phone: &Phone, destination: &Path) -> Result<()> {
        let mut line = serde_json::to_string(phone)?;
        line.push('\n');

        let mut file = open_append(destination)?;
        file.write_all(line.as_bytes())?;

        tracing::debug!("Appended JSON line to {}", destination.display());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveFormat {
    #[default]
    Text,
    Csv,
    JsonLines,
}

impl SaveFormat {
    pub const NAMES: [&'static str; 3] = ["text", "csv", "jsonl"];

    pub fn as_str(&self) -> &'static str {
        match self {
            SaveFormat::Text => "text",
            SaveFormat::Csv => "csv",
            SaveFormat::JsonLines => "jsonl",
        }
    }
}

impl fmt::Display for SaveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SaveFormat {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(SaveFormat::Text),
            "csv" => Ok(SaveFormat::Csv),
            "jsonl" | "json-lines" => Ok(SaveFormat::JsonLines),
            other => Err(StoreError::InvalidConfigValue {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    Self::NAMES.join(", ")
                ),
            }),
        }
    }
}

pub fn saver_for(format: SaveFormat) -> Box<dyn PhoneSaver> {
    match format {
        SaveFormat::Text => Box::new(TextPhoneSaver),
        SaveFormat::Csv => Box::new(CsvPhoneSaver),
        SaveFormat::JsonLines => Box::new(JsonLinesPhoneSaver),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn read(path: &Path) -> String {
        std::fs::read_to_string(path).unwrap()
    }

    #[test]
    fn test_text_saver_writes_two_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.txt");

        TextPhoneSaver.save(&Phone::new("Nokia 3310", 1500), &path).unwrap();

        assert_eq!(read(&path), "Nokia 3310\n1500\n");
    }

    #[test]
    fn test_text_saver_appends_to_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.txt");
        std::fs::write(&path, "Old phone\n10\n").unwrap();

        TextPhoneSaver.save(&Phone::new("Pixel", 700), &path).unwrap();
        TextPhoneSaver.save(&Phone::new("iPhone", 999), &path).unwrap();

        let content = read(&path);
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, ["Old phone", "10", "Pixel", "700", "iPhone", "999"]);
    }

    #[test]
    fn test_text_saver_reports_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("store.txt");

        let err = TextPhoneSaver.save(&Phone::new("Pixel", 700), &path).unwrap_err();

        assert!(matches!(err, StoreError::Io(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_csv_saver_appends_rows_without_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.csv");

        CsvPhoneSaver.save(&Phone::new("Nokia 3310", 1500), &path).unwrap();
        CsvPhoneSaver.save(&Phone::new("Galaxy S, Ultra", 1200), &path).unwrap();

        assert_eq!(read(&path), "Nokia 3310,1500\n\"Galaxy S, Ultra\",1200\n");
    }

    #[test]
    fn test_json_lines_saver() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.jsonl");

        JsonLinesPhoneSaver.save(&Phone::new("Pixel", 700), &path).unwrap();
        JsonLinesPhoneSaver.save(&Phone::new("iPhone", 999), &path).unwrap();

        let content = read(&path);
        let phones: Vec<Phone> = content
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(phones, [Phone::new("Pixel", 700), Phone::new("iPhone", 999)]);
    }

    #[test]
    fn test_save_format_parsing() {
        assert_eq!("text".parse::<SaveFormat>().unwrap(), SaveFormat::Text);
        assert_eq!("CSV".parse::<SaveFormat>().unwrap(), SaveFormat::Csv);
        assert_eq!("jsonl".parse::<SaveFormat>().unwrap(), SaveFormat::JsonLines);
        assert!("xml".parse::<SaveFormat>().is_err());
        for name in SaveFormat::NAMES {
            assert_eq!(name.parse::<SaveFormat>().unwrap().as_str(), name);
        }
    }

    #[test]
    fn test_saver_for_selects_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.csv");

        saver_for(SaveFormat::Csv)
            .save(&Phone::new("Pixel", 700), &path)
            .unwrap();

        assert_eq!(read(&path), "Pixel,700\n");
    }
}
