use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.guidi.dev.br/loteria";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub data_dir: PathBuf,
    /// `None` leaves the HTTP client without a request timeout.
    pub http_timeout: Option<Duration>,
    pub save_as_text: bool,
}

pub fn load() -> Result<Config> {
    let api_url = env::var("LOTERIAS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

    let data_dir = env::var("LOTERIAS_DATA_DIR")
        .unwrap_or_else(|_| "data".to_string())
        .into();

    let http_timeout = match env::var("LOTERIAS_HTTP_TIMEOUT_SECS") {
        Ok(raw) => Some(Duration::from_secs(
            raw.trim()
                .parse()
                .with_context(|| format!("LOTERIAS_HTTP_TIMEOUT_SECS inválido: {}", raw))?,
        )),
        Err(_) => None,
    };

    let save_as_text = match env::var("LOTERIAS_SAVE_AS_TEXT") {
        Ok(raw) => parse_bool(&raw)
            .with_context(|| format!("LOTERIAS_SAVE_AS_TEXT inválido: {}", raw))?,
        Err(_) => true,
    };

    Ok(Config {
        api_url,
        data_dir,
        http_timeout,
        save_as_text,
    })
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "sim" => Ok(true),
        "0" | "false" | "no" | "nao" | "não" => Ok(false),
        other => anyhow::bail!("esperado verdadeiro ou falso, recebido {:?}", other),
    }
}
