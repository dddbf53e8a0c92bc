use chrono::Utc;
use clap::Parser;
use locale_helpers::config::Command;
use locale_helpers::utils::logger;
use locale_helpers::{format_currency, format_date, format_date_in, generate_id, Amount, CliConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 設定檔錯誤時 logger 尚未初始化，直接輸出到 stderr
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if config.json_logs() {
        logger::init_json_logger(config.verbose());
    } else {
        logger::init_cli_logger(config.verbose());
    }

    tracing::debug!("CLI config: {:?}", cli);

    match &cli.command {
        Command::Currency { amount } => {
            println!("{}", format_currency(Amount::coerce_str(amount)));
        }
        Command::Date {
            timestamp_millis, ..
        } => {
            let millis = Amount::coerce_str(timestamp_millis).value();
            let formatted = if config.use_utc() {
                format_date_in(millis, &Utc)
            } else {
                format_date(millis)
            };
            println!("{}", formatted);
        }
        Command::Id { .. } => {
            let count = config.id_count();
            tracing::debug!("Generating {} id(s)", count);
            for _ in 0..count {
                println!("{}", generate_id());
            }
        }
    }

    Ok(())
}
