use chrono::Datelike;
use tracing::{info, warn};

use crate::api::{DrawRef, DrawSource};
use crate::error::LotteryError;
use crate::types::{DrawRecord, LotteryType};

pub const DEFAULT_LIMIT: u32 = 10;

/// Upper bound on the backward scan when a filter, not a count, decides
/// where it stops.
pub const FILTERED_SCAN_CEILING: u32 = 1000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchFilter {
    pub from_year: Option<i32>,
    pub from_concurso: Option<u32>,
}

impl FetchFilter {
    pub fn from_year(year: i32) -> Self {
        Self {
            from_year: Some(year),
            from_concurso: None,
        }
    }

    pub fn from_concurso(concurso: u32) -> Self {
        Self {
            from_year: None,
            from_concurso: Some(concurso),
        }
    }

    pub fn is_active(&self) -> bool {
        self.from_year.is_some() || self.from_concurso.is_some()
    }
}

/// Result of asking for a single draw.
#[derive(Debug)]
pub enum FetchOutcome {
    Ok(DrawRecord),
    Unavailable(String),
}

impl FetchOutcome {
    fn from_result(result: Result<Option<DrawRecord>, LotteryError>) -> Self {
        match result {
            Ok(Some(record)) => FetchOutcome::Ok(record),
            Ok(None) => FetchOutcome::Unavailable("resposta vazia".to_string()),
            Err(e) => FetchOutcome::Unavailable(e.to_string()),
        }
    }
}

pub struct DrawFetcher<S> {
    source: S,
}

impl<S: DrawSource> DrawFetcher<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    #[cfg(test)]
    pub(crate) fn source(&self) -> &S {
        &self.source
    }

    async fn fetch_one(&self, lottery: LotteryType, draw: DrawRef) -> FetchOutcome {
        FetchOutcome::from_result(self.source.fetch_draw(lottery, draw).await)
    }

    /// Fetches the latest draw and walks backwards one concurso at a time.
    ///
    /// The output starts with the latest draw (when the filter admits it) and
    /// continues in strictly decreasing concurso order. With `from_year` set
    /// the walk stops at the first draw older than that year. A draw that
    /// cannot be fetched is skipped. If the latest draw itself is unavailable
    /// the result is empty and nothing else is requested.
    pub async fn fetch(
        &self,
        lottery: LotteryType,
        limit: u32,
        filter: FetchFilter,
    ) -> Vec<DrawRecord> {
        info!("🔍 Iniciando busca de resultados para {}...", lottery);

        let latest = match self.fetch_one(lottery, DrawRef::Latest).await {
            FetchOutcome::Ok(record) => record,
            FetchOutcome::Unavailable(reason) => {
                warn!("❌ Não foi possível obter o último concurso de {}: {}", lottery, reason);
                return Vec::new();
            }
        };
        info!(
            "✅ Último concurso obtido: {} #{} ({})",
            lottery,
            latest.concurso,
            crate::utils::format_draw_date(&latest.date)
        );

        let limit = if filter.is_active() {
            FILTERED_SCAN_CEILING
        } else {
            limit
        };
        let start = latest.concurso;
        // Concursos start at 1.
        let from_concurso = filter.from_concurso.map(|from| from.max(1));
        let end = match from_concurso {
            Some(from) => {
                info!("🔍 Buscando resultados a partir do concurso #{}", from);
                from
            }
            None => start.saturating_sub(limit).saturating_add(1).max(1),
        };

        let mut results = Vec::new();
        let latest_in_range = from_concurso.is_none_or(|from| from <= start)
            && filter
                .from_year
                .is_none_or(|year| latest.date.year() >= year);
        if latest_in_range {
            results.push(latest);
        }

        if start > end {
            info!("📡 Buscando concursos de {} ({} até {})...", lottery, end, start - 1);

            for concurso in (end..start).rev() {
                let record = match self.fetch_one(lottery, DrawRef::Concurso(concurso)).await {
                    FetchOutcome::Ok(record) => record,
                    FetchOutcome::Unavailable(reason) => {
                        warn!("❌ Não foi possível obter {} #{}: {}", lottery, concurso, reason);
                        continue;
                    }
                };

                if let Some(from_year) = filter.from_year {
                    let year = record.date.year();
                    if year < from_year {
                        info!(
                            "⏭️ Concurso #{} é de {}, anterior ao ano {}, parando busca.",
                            concurso, year, from_year
                        );
                        break;
                    }
                }

                results.push(record);
            }
        }

        info!("🎉 Total de {} resultados obtidos para {}", results.len(), lottery);
        results
    }
}
