use clap::Parser;
use pet_age::core::report;
use pet_age::utils::logger;
use pet_age::{app, CliConfig, LocalStore, Locale, PetAgeError};

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(&e, cli.locale.unwrap_or_default()),
    };

    let store = LocalStore::new(config.store_path());
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = app::execute(cli.command.as_ref(), &config, store, &mut stdout) {
        exit_with(&e, config.display.locale);
    }
}

fn exit_with(e: &PetAgeError, locale: Locale) -> ! {
    // 輸入錯誤已直接顯示給使用者，不再重複記錄
    if e.is_validation() {
        tracing::debug!("Validation failed: {}", e);
    } else {
        tracing::error!(
            "❌ pet-age failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
    }

    eprintln!("{}", report::render_error(e, locale));
    eprintln!("{}", report::render_suggestion(e, locale));

    std::process::exit(e.severity().exit_code());
}
