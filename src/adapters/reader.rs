use crate::core::{PhoneReader, RawInput, Result};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader, StdinLock, Stdout, Write};
use std::path::Path;

const MODEL_PROMPT: &str = "Enter model:";
const PRICE_PROMPT: &str = "Enter price:";

/// 以兩次提示、兩次讀行取得 model 與 price。
///
/// Generic over the line source and the prompt sink, so the same reader serves the
/// terminal, a scripted input file, or a test buffer.
pub struct ConsolePhoneReader<R: BufRead, W: Write> {
    input: RefCell<R>,
    prompt: RefCell<W>,
}

impl<R: BufRead, W: Write> ConsolePhoneReader<R, W> {
    pub fn new(input: R, prompt: W) -> Self {
        Self {
            input: RefCell::new(input),
            prompt: RefCell::new(prompt),
        }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input.into_inner(), self.prompt.into_inner())
    }

    fn ask(&self, question: &str) -> Option<String> {
        {
            let mut prompt = self.prompt.borrow_mut();
            if let Err(e) = writeln!(prompt, "{}", question).and_then(|_| prompt.flush()) {
                tracing::warn!("Failed to write prompt: {}", e);
            }
        }

        let mut line = String::new();
        match self.input.borrow_mut().read_line(&mut line) {
            Ok(0) => {
                tracing::debug!("Input exhausted while waiting for '{}'", question);
                None
            }
            Ok(_) => {
                let trimmed = line.trim_end_matches(['\n', '\r']);
                Some(trimmed.to_string())
            }
            Err(e) => {
                tracing::warn!("Failed to read input: {}", e);
                None
            }
        }
    }
}

impl ConsolePhoneReader<StdinLock<'static>, Stdout> {
    /// 互動式終端機
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl ConsolePhoneReader<BufReader<File>, io::Sink> {
    /// Replays a script of alternating model/price lines without printing prompts.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        tracing::debug!("Reading scripted input from {}", path.as_ref().display());
        Ok(Self::new(BufReader::new(file), io::sink()))
    }
}

impl<R: BufRead, W: Write> PhoneReader for ConsolePhoneReader<R, W> {
    fn read_input(&self) -> RawInput {
        let model = self.ask(MODEL_PROMPT);
        let price = self.ask(PRICE_PROMPT);
        RawInput::new(model, price)
    }
}

/// 預先排好的輸入佇列；用完後回傳空欄位
#[derive(Debug, Default)]
pub struct ScriptedPhoneReader {
    queue: RefCell<VecDeque<RawInput>>,
}

impl ScriptedPhoneReader {
    pub fn new(inputs: impl IntoIterator<Item = RawInput>) -> Self {
        Self {
            queue: RefCell::new(inputs.into_iter().collect()),
        }
    }

    pub fn push(&self, input: RawInput) {
        self.queue.borrow_mut().push_back(input);
    }

    pub fn remaining(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl PhoneReader for ScriptedPhoneReader {
    fn read_input(&self) -> RawInput {
        self.queue
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| RawInput::new(None, None))
    }
}
