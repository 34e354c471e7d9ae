use clap::Parser;
use orkg_fair_checker::config::cli::OutputFormat;
use orkg_fair_checker::core::render::{
    render_json, render_resolution, render_text, RunDocument, EXIT_ASSESSMENT_FAILED,
    EXIT_INVALID_RESOURCE, EXIT_OK,
};
use orkg_fair_checker::core::session::ActionOutcome;
use orkg_fair_checker::utils::{logger, validation::Validate};
use orkg_fair_checker::{CliConfig, FairChecker, FairError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting orkg-fair");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 載入並驗證配置
    let settings = match config.settings().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };
    tracing::debug!("Effective settings: {:?}", settings);

    let checker = match FairChecker::from_config(&settings) {
        Ok(checker) => checker,
        Err(e) => exit_with(&e),
    };

    let (mut document, uris) = if config.direct {
        (RunDocument::new(&config.uri, None), vec![config.uri.clone()])
    } else {
        let resolved = checker.load_uri(&config.uri).await.applied().unwrap_or_default();
        if config.format == OutputFormat::Text {
            println!("{}", render_resolution(&resolved));
        }
        let targets = config.targets();
        let uris: Vec<String> = resolved
            .targets()
            .into_iter()
            .filter(|(kind, _)| targets.contains(kind))
            .map(|(_, uri)| uri.to_string())
            .collect();
        (RunDocument::new(&config.uri, Some(resolved)), uris)
    };

    if !document.is_invalid_resource() {
        for uri in &uris {
            if config.format == OutputFormat::Text {
                println!("\nFetching FAIR-Checker API Data for {}...", uri);
            }
            let ActionOutcome::Applied(display) = checker.assess(uri).await else {
                continue;
            };
            if config.format == OutputFormat::Text {
                println!("{}", render_text(&display));
            }
            document.push(uri, display);
        }
    }

    if config.format == OutputFormat::Json {
        println!("{}", render_json(&document)?);
    }

    let exit_code = document.exit_code();
    if exit_code == EXIT_INVALID_RESOURCE {
        tracing::warn!("❌ {} is not a valid ORKG resource", config.uri);
    } else if exit_code == EXIT_ASSESSMENT_FAILED {
        tracing::warn!("❌ At least one FAIR-Checker assessment failed");
    }
    if exit_code != EXIT_OK {
        std::process::exit(exit_code);
    }

    tracing::info!("✅ Done");
    Ok(())
}

fn exit_with(e: &FairError) -> ! {
    tracing::error!(
        "❌ orkg-fair failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    std::process::exit(e.exit_code())
}
