use clap::Parser;
use mobile_store::utils::error::ErrorSeverity;
use mobile_store::utils::{logger, validation::Validate};
use mobile_store::{
    saver_for, CliConfig, ConfigProvider, ConsolePhoneReader, GeneralPhoneBinder,
    GeneralPhoneValidator, MobileStore, PhoneReader, ProcessOutcome, SaveFormat, StoreError,
    TomlConfig,
};

fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Low => 0,      // 警告，但成功
        ErrorSeverity::Medium => 2,   // 重試錯誤
        ErrorSeverity::High => 1,     // 輸入或配置錯誤
        ErrorSeverity::Critical => 3, // 寫入錯誤
    }
}

fn report_and_exit(e: &StoreError) {
    tracing::error!(
        "❌ Processing failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let code = exit_code(e.severity());
    if code > 0 {
        std::process::exit(code);
    }
}

fn run(config: &dyn ConfigProvider) -> mobile_store::Result<usize> {
    let format: SaveFormat = config.output_format().parse()?;
    let saver = saver_for(format);

    let reader: Box<dyn PhoneReader> = match config.input_path() {
        Some(path) => Box::new(ConsolePhoneReader::from_path(path)?),
        None => Box::new(ConsolePhoneReader::stdio()),
    };

    let binder = GeneralPhoneBinder::new();
    let validator = GeneralPhoneValidator::new();
    let mut store = MobileStore::new(
        reader.as_ref(),
        &binder,
        &validator,
        saver.as_ref(),
        config.output_path(),
    );

    tracing::info!(
        "Processing {} request(s) into {} ({})",
        config.requests(),
        store.destination().display(),
        format
    );

    for request in 1..=config.requests() {
        tracing::debug!("Request {}/{}", request, config.requests());
        match store.process()? {
            ProcessOutcome::Accepted => println!("✅ Data processed successfully"),
            ProcessOutcome::Rejected => println!("⚠️ Invalid data"),
        }
    }

    Ok(store.phones().len())
}

fn main() {
    let cli = CliConfig::parse();

    let toml = cli.config.as_deref().map(TomlConfig::from_file);
    let log_level = toml
        .as_ref()
        .and_then(|c| c.as_ref().ok())
        .and_then(TomlConfig::log_level);

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, log_level);

    tracing::info!("Starting mobile-store CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let toml = match toml.transpose() {
        Ok(toml) => toml,
        Err(e) => {
            report_and_exit(&e);
            return;
        }
    };

    let config: &dyn ConfigProvider = match &toml {
        Some(toml) => {
            tracing::info!("Using configuration from {}", cli.config.as_deref().unwrap_or(""));
            toml
        }
        None => &cli,
    };

    // 驗證配置
    let validated = match &toml {
        Some(toml) => toml.validate(),
        None => cli.validate(),
    };
    if let Err(e) = validated {
        tracing::error!("❌ Configuration validation failed: {}", e);
        report_and_exit(&e);
        return;
    }

    match run(config) {
        Ok(accepted) => {
            tracing::info!("📁 {} phone(s) stored in {}", accepted, config.output_path());
        }
        Err(e) => report_and_exit(&e),
    }
}
