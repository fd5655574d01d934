use crate::core::{
    Phone, PhoneBinder, PhoneReader, PhoneSaver, PhoneValidator, ProcessOutcome, Result,
};
use std::path::{Path, PathBuf};

/// 串接 reader → binder → validator → saver 的協調者。
///
/// The collaborators are borrowed, so one set of them can drive several stores.
/// The store owns only the list of accepted phones, which grows monotonically.
pub struct MobileStore<'a> {
    phones: Vec<Phone>,
    reader: &'a dyn PhoneReader,
    binder: &'a dyn PhoneBinder,
    validator: &'a dyn PhoneValidator,
    saver: &'a dyn PhoneSaver,
    destination: PathBuf,
}

impl<'a> MobileStore<'a> {
    pub fn new(
        reader: &'a dyn PhoneReader,
        binder: &'a dyn PhoneBinder,
        validator: &'a dyn PhoneValidator,
        saver: &'a dyn PhoneSaver,
        destination: impl Into<PathBuf>,
    ) -> Self {
        Self {
            phones: Vec::new(),
            reader,
            binder,
            validator,
            saver,
            destination: destination.into(),
        }
    }

    /// Runs one request through the pipeline.
    ///
    /// Binding and I/O failures propagate to the caller and leave the store
    /// untouched. A phone that fails validation is reported as
    /// [`ProcessOutcome::Rejected`].
    pub fn process(&mut self) -> Result<ProcessOutcome> {
        let raw = self.reader.read_input();
        tracing::debug!("Read raw input with {} fields", raw.len());

        let phone = self.binder.create_phone(&raw)?;

        if !self.validator.is_valid(&phone) {
            tracing::warn!(
                "⚠️ Rejected phone model={:?} price={}",
                phone.model(),
                phone.price()
            );
            return Ok(ProcessOutcome::Rejected);
        }

        // 先寫入再加入清單，寫入失敗時清單保持不變
        self.saver.save(&phone, &self.destination)?;
        tracing::info!(
            "✅ Accepted phone model={:?} price={} ({} total)",
            phone.model(),
            phone.price(),
            self.phones.len() + 1
        );
        self.phones.push(phone);

        Ok(ProcessOutcome::Accepted)
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }
}
