use clap::Parser;
use fluent_api::app::command;
use fluent_api::config::cli::CliArgs;
use fluent_api::utils::error::ErrorSeverity;
use fluent_api::utils::logger;
use fluent_api::FluentApi;

fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let setup = command::resolve_config(&args).and_then(|config| FluentApi::from_config(&config));
    let api = match setup {
        Ok(api) => api,
        Err(e) => {
            tracing::error!("❌ Client setup failed: {} (Severity: {:?})", e, e.severity());
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code(e.severity()).max(1));
        }
    };

    match command::run(&api, &args).await {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Err(e) => {
            tracing::error!(
                "❌ {} {}/{} failed: {} (Severity: {:?})",
                args.action,
                args.service,
                args.resource,
                e,
                e.severity()
            );
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());

            let code = exit_code(e.severity());
            if code > 0 {
                std::process::exit(code);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluent_api::ClientConfig;

    #[test]
    fn test_client_setup_error_exits_nonzero() {
        let config = ClientConfig::new("https://console-api.example.com").with_token("bad\ntoken");
        let err = FluentApi::from_config(&config).err().unwrap();
        assert!(exit_code(err.severity()) > 0);
        assert!(!err.recovery_suggestion().is_empty());
    }

    #[test]
    fn test_exit_codes_follow_severity() {
        assert_eq!(exit_code(ErrorSeverity::Low), 0);
        assert_eq!(exit_code(ErrorSeverity::Medium), 2);
        assert_eq!(exit_code(ErrorSeverity::High), 1);
        assert_eq!(exit_code(ErrorSeverity::Critical), 3);
    }
}
