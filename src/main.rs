use clap::{Parser, ValueEnum};
use express_authorize::application::authorize::ExpressAuthorizeRequest;
use express_authorize::infrastructure::in_memory::InMemoryGateway;
use express_authorize::interfaces::csv::payload_writer::PayloadWriter;
use express_authorize::interfaces::json::reader::JsonReader;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file holding the request parameters
    input: PathBuf,

    /// How to print the payload
    #[arg(long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// JSON file with a canned gateway reply. If provided, the request is sent
    /// through an in-memory gateway and the redirect URL is logged.
    #[arg(long)]
    reply: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    let file = File::open(&cli.input).into_diagnostic()?;
    let params = JsonReader::new(file).params().into_diagnostic()?;
    let request = ExpressAuthorizeRequest::new(params);

    let payload = request.get_data().into_diagnostic()?;

    let stdout = io::stdout();
    match cli.format {
        OutputFormat::Csv => {
            let mut writer = PayloadWriter::new(stdout.lock());
            writer.write_payload(&payload).into_diagnostic()?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(stdout.lock(), &payload).into_diagnostic()?;
            println!();
        }
    }

    if let Some(reply_path) = cli.reply {
        let file = File::open(reply_path).into_diagnostic()?;
        let reply = JsonReader::new(file).reply().into_diagnostic()?;
        let gateway = InMemoryGateway::replying(reply);

        let response = request.send(&gateway).await.into_diagnostic()?;
        match response.redirect_url().into_diagnostic()? {
            Some(url) => tracing::info!(%url, "redirect payer to approve"),
            None => miette::bail!(
                "gateway declined SetExpressCheckout: {}",
                response.message().unwrap_or("no message")
            ),
        }
    }

    Ok(())
}
