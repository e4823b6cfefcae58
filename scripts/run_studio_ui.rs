use clap::Parser;
use scengen_adaptor_web::{StudioConfig, StudioServer};
use scengen_core::{init_logging, load_env, SessionStore};
use scengen_plugin_extract::StandardExtractor;
use scengen_provider_ollama::OllamaClient;
use std::sync::Arc;

#[derive(Parser, Debug)]
struct Cli {
    #[arg(long, env = "SCENGEN_LOG_LEVEL", default_value = "info")]
    log_level: String,

    #[arg(long, env = "SCENGEN_HOST", default_value = "127.0.0.1")]
    host: String,

    #[arg(long, env = "SCENGEN_PORT", default_value_t = 8501)]
    port: u16,

    #[arg(long, env = "OLLAMA_BASE_URL")]
    ollama_url: Option<String>,

    #[arg(long, env = "OLLAMA_MODEL")]
    model: Option<String>,
}

fn main() -> scengen_core::Result<()> {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap();
    rt.block_on(async move {
        let cli = Cli::parse();
        std::env::set_var("RUST_LOG", &cli.log_level);
        std::env::set_var("SCENGEN_LOG_LEVEL", &cli.log_level);
        init_logging();
        load_env().ok();

        // Scan for a free port starting at the preferred one
        let port = {
            let preferred = cli.port;
            let mut port = preferred;
            let limit = 200u16;
            let mut tried = 0u16;
            loop {
                match std::net::TcpListener::bind((cli.host.as_str(), port)) {
                    Ok(l) => { drop(l); break port; }
                    Err(_) => {
                        tried = tried.saturating_add(1);
                        if tried >= limit { break preferred; }
                        port = port.saturating_add(1);
                    }
                }
            }
        };

        let llm = Arc::new(OllamaClient::new(cli.ollama_url.clone(), cli.model.clone())?);
        println!("[runner] Model endpoint: {} (model: {})", llm.base_url(), llm.model());

        let config = StudioConfig { host: cli.host.clone(), port, ..StudioConfig::from_env() };
        let mut server = StudioServer::new(
            config,
            SessionStore::new(),
            llm,
            Arc::new(StandardExtractor),
        );
        server.start().await?;

        println!("Scenario Studio: http://{}:{}/", cli.host, port);

        let mut term = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()).ok();
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = async {
                if let Some(ref mut s) = term { s.recv().await; }
            } => {},
        }
        server.stop().await?;
        Ok(())
    })
}
