use std::path::PathBuf;

use thiserror::Error;

use crate::types::LotteryType;

#[derive(Error, Debug)]
pub enum LotteryError {
    #[error("Falha na requisição HTTP: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Erro da API (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("Resposta malformada da API: {reason}")]
    MalformedPayload { reason: String },

    #[error("Erro de JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Erro ao salvar resultados de {lottery} em {}: {source}", .path.display())]
    Storage {
        lottery: LotteryType,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Erro na entrada interativa: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl LotteryError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        LotteryError::MalformedPayload {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LotteryError>;
