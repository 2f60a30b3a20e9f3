use clap::Parser;
use form_replica::core::ConfigProvider;
use form_replica::utils::validation::Validate;
use form_replica::utils::{error::ConvertError, logger};
use form_replica::{
    convert, CliConfig, ConversionEngine, FormDocument, FormPipeline, HttpFetcher, LocalStorage,
    TomlConfig,
};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting form-replica");
    tracing::debug!("CLI config: {:?}", cli);

    let result = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(file) => run(cli.merge_into(file), &cli).await,
                Err(e) => Err(e),
            }
        }
        None => run(cli.clone(), &cli).await,
    };

    if let Err(e) = result {
        // 記錄詳細錯誤信息
        tracing::error!(
            "❌ Conversion failed: {} (Category: {:?})",
            e,
            e.category()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        // 使用者只看到一則訊息
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

async fn run<C>(config: C, cli: &CliConfig) -> Result<(), ConvertError>
where
    C: ConfigProvider + Validate,
{
    config.validate()?;

    let fetcher = HttpFetcher::new(config.proxy_endpoint().map(str::to_string));
    if let Some(proxy) = config.proxy_endpoint() {
        tracing::info!("🔁 Fetching through proxy: {}", proxy);
    }

    if cli.stdout {
        let output = convert(&fetcher, config.source_url()).await?;
        print_preview(&output.preview, cli.preview_json, true)?;
        print!("{}", output.html_source);
        return Ok(());
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = FormPipeline::new(storage, config, fetcher);
    let engine = ConversionEngine::new(pipeline);

    let report = engine.run().await?;
    print_preview(&report.preview, cli.preview_json, false)?;
    println!("✅ Form converted successfully!");
    println!("📁 Output saved to: {}", report.output_path);
    Ok(())
}

// --stdout 時預覽寫到 stderr，避免混入 HTML
fn print_preview(preview: &FormDocument, as_json: bool, to_stderr: bool) -> Result<(), ConvertError> {
    let rendered = if as_json {
        serde_json::to_string_pretty(preview).map_err(|e| ConvertError::IoError(e.into()))?
    } else {
        preview.to_string()
    };

    if to_stderr {
        eprintln!("{}", rendered);
    } else {
        println!("{}", rendered);
    }
    Ok(())
}
