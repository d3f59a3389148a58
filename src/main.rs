use clap::Parser;
use math_ops::adapters::digit_source::source_for_seed;
use math_ops::utils::error::MathError;
use math_ops::utils::{logger, validation::Validate};
use math_ops::{CliConfig, MathOperations, Runner};

fn exit_with(e: &MathError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code());
}

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let settings = match config.resolve_settings() {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    let operations = MathOperations::with_source(source_for_seed(settings.seed));
    let mut runner = Runner::new(operations, settings.format);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = runner.run(config.task(), &mut out) {
        exit_with(&e);
    }
}
