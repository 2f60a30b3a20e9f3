use clap::Parser;
use form_replica::adapters::proxy::{self, ProxyState, DEFAULT_PORT};
use form_replica::utils::logger;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "form-proxy")]
#[command(about = "Same-origin proxy that fetches form pages for the browser")]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Directory served for all other paths
    #[arg(long, default_value = ".")]
    static_dir: PathBuf,

    /// Do not serve static files
    #[arg(long)]
    no_static: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    let static_dir = if args.no_static {
        None
    } else {
        tracing::info!("📁 Serving static files from: {}", args.static_dir.display());
        Some(args.static_dir)
    };

    let addr = SocketAddr::new(args.host, args.port);
    proxy::start(addr, Arc::new(ProxyState::default()), static_dir).await
}
