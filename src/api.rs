use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::error::{LotteryError, Result};
use crate::types::{
    ApiDraw, ApiPrizeTier, ApiWinnerCity, DrawRecord, LotteryType, PrizeTier, WinnerCity,
};
use crate::utils::parse_draw_date;

/// Which draw to ask the results API for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawRef {
    Latest,
    Concurso(u32),
}

impl DrawRef {
    fn path_segment(&self) -> String {
        match self {
            DrawRef::Latest => "ultimo".to_string(),
            DrawRef::Concurso(concurso) => concurso.to_string(),
        }
    }
}

/// Source of draw results. `Ok(None)` means the source answered with an
/// empty payload.
#[async_trait]
pub trait DrawSource: Send + Sync {
    async fn fetch_draw(&self, lottery: LotteryType, draw: DrawRef) -> Result<Option<DrawRecord>>;
}

pub struct HttpDrawSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDrawSource {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, lottery: LotteryType, draw: DrawRef) -> String {
        format!("{}/{}/{}", self.base_url, lottery, draw.path_segment())
    }
}

#[async_trait]
impl DrawSource for HttpDrawSource {
    async fn fetch_draw(&self, lottery: LotteryType, draw: DrawRef) -> Result<Option<DrawRecord>> {
        let url = self.url_for(lottery, draw);
        info!("📡 GET {}", url);

        let started = Instant::now();
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        info!(
            "✅ Resposta recebida em {}ms - Status: {}",
            started.elapsed().as_millis(),
            status.as_u16()
        );

        decode_response(lottery, status, &body)
    }
}

/// A non-2xx status is an error that keeps the body for the log; a 2xx body
/// goes through `parse_draw_body`.
pub fn decode_response(
    lottery: LotteryType,
    status: StatusCode,
    body: &str,
) -> Result<Option<DrawRecord>> {
    if !status.is_success() {
        return Err(LotteryError::Status {
            status: status.as_u16(),
            body: body.to_string(),
        });
    }

    parse_draw_body(lottery, body)
}

/// Turns a raw response body into a record. Blank bodies and `null` are
/// empty payloads, not errors.
pub fn parse_draw_body(lottery: LotteryType, body: &str) -> Result<Option<DrawRecord>> {
    if body.trim().is_empty() {
        return Ok(None);
    }

    let raw: Option<ApiDraw> = serde_json::from_str(body)?;
    match raw {
        Some(raw) => map_api_draw(raw, lottery).map(Some),
        None => Ok(None),
    }
}

/// Maps one upstream draw onto a `DrawRecord`. `numero` and `dataApuracao`
/// are required, everything else falls back to an empty value.
pub fn map_api_draw(raw: ApiDraw, lottery: LotteryType) -> Result<DrawRecord> {
    let concurso = match raw.numero {
        Some(n) if n > 0 => n,
        Some(n) => return Err(LotteryError::malformed(format!("numero inválido {}", n))),
        None => return Err(LotteryError::malformed("numero ausente")),
    };
    debug!("🔄 Mapeando dados de {} #{}", lottery, concurso);

    let raw_date = raw
        .data_apuracao
        .ok_or_else(|| LotteryError::malformed(format!("#{} sem dataApuracao", concurso)))?;
    let date = parse_draw_date(&raw_date).ok_or_else(|| {
        LotteryError::malformed(format!("#{} dataApuracao inválida {:?}", concurso, raw_date))
    })?;

    // Optional dates are informational only; an unreadable one is dropped.
    let next_draw_date = raw
        .data_proximo_concurso
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| {
            let parsed = parse_draw_date(d);
            if parsed.is_none() {
                debug!("Ignorando dataProximoConcurso ilegível {:?}", d);
            }
            parsed
        });

    let rollover_amount = raw.valor_acumulado_proximo_concurso.unwrap_or(0.0);

    Ok(DrawRecord {
        lottery,
        concurso,
        date,
        numbers: raw.lista_dezenas.unwrap_or_default(),
        prizes: raw
            .lista_rateio_premio
            .unwrap_or_default()
            .into_iter()
            .map(map_prize_tier)
            .collect(),
        rollover: rollover_amount > 0.0,
        rollover_amount,
        next_draw_date,
        next_draw_estimate: raw.valor_estimado_proximo_concurso.unwrap_or(0.0),
        location: raw.local_sorteio.unwrap_or_default(),
        location_city: raw.nome_municipio_uf_sorteio.unwrap_or_default(),
        winner_cities: raw
            .lista_municipio_uf_ganhadores
            .unwrap_or_default()
            .into_iter()
            .map(map_winner_city)
            .collect(),
    })
}

fn map_prize_tier(raw: ApiPrizeTier) -> PrizeTier {
    PrizeTier {
        descricao_faixa: raw.descricao_faixa.unwrap_or_default(),
        faixa: raw.faixa.unwrap_or(0),
        numero_de_ganhadores: raw.numero_de_ganhadores.unwrap_or(0),
        valor_premio: raw.valor_premio.unwrap_or(0.0),
    }
}

fn map_winner_city(raw: ApiWinnerCity) -> WinnerCity {
    WinnerCity {
        ganhadores: raw.ganhadores.unwrap_or(0),
        municipio: raw.municipio.unwrap_or_default(),
        uf: raw.uf.unwrap_or_default(),
        posicao: raw.posicao,
        nome_fantasia: raw.nome_fantasia.filter(|n| !n.is_empty()),
        serie: raw.serie.filter(|s| !s.is_empty()),
    }
}
