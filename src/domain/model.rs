use serde::{Deserialize, Serialize};

/// 一筆手機記錄，建立後不可變更
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    model: String,
    price: i32,
}

impl Phone {
    pub fn new(model: impl Into<String>, price: i32) -> Self {
        Self {
            model: model.into(),
            price,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn price(&self) -> i32 {
        self.price
    }
}

/// 輸入來源取得的原始欄位，依序為 model、price；尚未做任何檢查
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    fields: Vec<Option<String>>,
}

impl RawInput {
    pub fn new(model: Option<String>, price: Option<String>) -> Self {
        Self {
            fields: vec![model, price],
        }
    }

    /// Builds an input of arbitrary shape, e.g. from a line-oriented script.
    pub fn from_fields(fields: Vec<Option<String>>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[Option<String>] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<M: Into<String>, P: Into<String>> From<(M, P)> for RawInput {
    fn from((model, price): (M, P)) -> Self {
        Self::new(Some(model.into()), Some(price.into()))
    }
}

/// 單次處理的結果；驗證失敗屬於正常結果，不是錯誤
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    Accepted,
    Rejected,
}
