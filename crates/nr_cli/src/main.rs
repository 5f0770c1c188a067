use clap::Parser;
use nr_automation::AutomationController;
use nr_core::{Credentials, Error, NewsSource, Result};
use nr_news::CatalogSource;
use nr_publisher::TelegramPublisher;
use nr_web::client::poll;
use nr_web::{AppState, AutomationClient};
use std::net::SocketAddr;
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

mod duration;
mod render;

use duration::HumanDuration;

#[derive(Parser, Debug)]
#[command(author, version, about = "Fetch, rewrite and relay news to a Telegram channel", long_about = None)]
pub struct Cli {
    /// Timeout for every outbound HTTP call (e.g. 30s, 1m)
    #[arg(long, global = true, env = "NR_HTTP_TIMEOUT", default_value = "30s")]
    timeout: HumanDuration,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the automation server
    Serve(ServeArgs),
    /// Follow a running server's status, refreshing on an interval
    Watch {
        #[command(flatten)]
        server: ServerArgs,
        #[arg(long, default_value = "5s")]
        every: HumanDuration,
    },
    /// Start the automation on a running server
    Start {
        #[command(flatten)]
        server: ServerArgs,
        #[command(flatten)]
        credentials: CredentialArgs,
    },
    /// Stop the automation on a running server
    Stop {
        #[command(flatten)]
        server: ServerArgs,
    },
    /// Run a single cycle now and print what was published
    Run {
        #[command(flatten)]
        server: ServerArgs,
        #[command(flatten)]
        credentials: CredentialArgs,
    },
    /// Print the server's current status once
    Status {
        #[command(flatten)]
        server: ServerArgs,
    },
    /// Print a sample article from the news catalog
    News {
        /// List every catalog entry instead
        #[arg(long)]
        all: bool,
    },
}

#[derive(clap::Args, Debug)]
struct ServeArgs {
    #[arg(long, env = "NR_HOST", default_value = "0.0.0.0")]
    host: String,
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    #[arg(long, env = "NR_MODEL", default_value = "gemini", help = "Rewriter to use. Available models: gemini (default), dummy")]
    model: String,
    #[arg(long, env = "GEMINI_MODEL")]
    model_name: Option<String>,
    #[arg(long, env = "GEMINI_BASE_URL")]
    gemini_base_url: Option<String>,
    #[arg(long, env = "TELEGRAM_BASE_URL")]
    telegram_base_url: Option<String>,
    /// Period between scheduled cycles (e.g. 30m, 1h)
    #[arg(long, env = "NR_INTERVAL", default_value = "30m")]
    interval: HumanDuration,
    /// Directory holding a built frontend to serve alongside the API
    #[arg(long, env = "NR_STATIC_DIR")]
    static_dir: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
struct ServerArgs {
    #[arg(long, env = "NR_SERVER", default_value = "http://localhost:3000")]
    server: String,
}

#[derive(clap::Args, Debug)]
struct CredentialArgs {
    #[arg(long, env = "TELEGRAM_BOT_TOKEN", hide_env_values = true)]
    token: String,
    #[arg(long, env = "TELEGRAM_CHANNEL_ID")]
    channel: String,
}

impl From<CredentialArgs> for Credentials {
    fn from(args: CredentialArgs) -> Self {
        Credentials::new(args.token, args.channel)
    }
}

async fn serve(args: ServeArgs, timeout: HumanDuration) -> Result<()> {
    let inference_config = nr_inference::Config {
        model: args.model,
        model_name: args.model_name,
        base_url: args.gemini_base_url,
        timeout: timeout.as_duration(),
    };
    let rewriter = nr_inference::create_rewriter(&inference_config)?;
    if args.api_key.is_none() {
        tracing::warn!("⚠️ GEMINI_API_KEY is not set; cycles will fail until it is provided");
    }

    let publisher = TelegramPublisher::new(&nr_publisher::Config {
        base_url: args.telegram_base_url,
        timeout: timeout.as_duration(),
    })?;
    let news = CatalogSource::new();
    info!("🦗 News source ready: {} ({} items)", news.name(), news.entries().len());

    let controller = AutomationController::new(
        nr_automation::Config {
            api_key: args.api_key,
            interval: args.interval.as_duration(),
            ..Default::default()
        },
        Arc::new(news),
        rewriter,
        Arc::new(publisher),
    )?;
    info!("⏱️ Cycles run every {} once started", args.interval);

    let mut state = AppState::new(controller);
    if let Some(dir) = args.static_dir {
        state = state.with_static_dir(dir);
    }

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| Error::Validation(format!("Invalid listen address: {}", e)))?;
    nr_web::serve(addr, nr_web::create_app(state)).await
}

async fn watch(client: &AutomationClient, every: HumanDuration) {
    info!("👀 Watching {} every {}", client.base_url(), every);
    poll(client, every.as_duration(), |mirror| {
        // Clear the terminal and redraw from the top.
        print!("\x1B[2J\x1B[H");
        println!("{}", render::render_mirror(mirror));
        ControlFlow::Continue(())
    })
    .await;
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    nr_core::logging::init_logging("info");
    let cli = Cli::parse();
    let timeout = cli.timeout;

    let client = |server: &ServerArgs| AutomationClient::new(&server.server, timeout.as_duration());

    match cli.command {
        Commands::Serve(args) => serve(args, timeout).await?,
        Commands::Watch { server, every } => {
            watch(&client(&server)?, every).await;
        }
        Commands::Start { server, credentials } => {
            let response = client(&server)?.start(&credentials.into()).await?;
            println!("{}", response.message);
        }
        Commands::Stop { server } => {
            let response = client(&server)?.stop().await?;
            println!("{}", response.message);
        }
        Commands::Run { server, credentials } => {
            let processed = client(&server)?.run_manual(&credentials.into()).await?;
            println!("{}", render::render_rewritten(&processed));
        }
        Commands::Status { server } => {
            let status = client(&server)?.status().await?;
            print!("{}", render::render_status(&status));
        }
        Commands::News { all } => {
            let news = CatalogSource::new();
            if all {
                for (index, entry) in news.entries().iter().enumerate() {
                    println!("{:>2}. {} ({})", index, entry.title, entry.source_name);
                }
            } else {
                println!("{}", render::render_article(&news.fetch()));
            }
        }
    }

    Ok(())
}
