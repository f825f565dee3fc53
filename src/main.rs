use anyhow::{Context, Result};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use loterias::cli::Shell;
use loterias::config;
use loterias::{DrawFetcher, HttpDrawSource, ResultStore, ResultsUseCase, SaveOptions};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("erro na sessão: {:?}", e);
            eprintln!("❌ Erro ao processar resultados: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let config = config::load()?;
    tracing::info!("Vamos consultar os resultados das loterias.");

    let source = HttpDrawSource::new(&config.api_url, config.http_timeout)?;
    let store = ResultStore::new(&config.data_dir).with_context(|| {
        format!("Não foi possível criar o diretório de dados {}", config.data_dir.display())
    })?;
    let use_case = ResultsUseCase::new(
        DrawFetcher::new(source),
        store,
        SaveOptions {
            save_as_text: config.save_as_text,
        },
    );

    Shell::new().run(&use_case).await
}
