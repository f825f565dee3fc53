use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use crate::api::DrawSource;
use crate::fetcher::{DrawFetcher, FetchFilter};
use crate::storage::ResultStore;
use crate::types::LotteryType;

#[derive(Debug, Clone, Copy)]
pub struct SaveOptions {
    /// Also write the detailed text report.
    pub save_as_text: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self { save_as_text: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub lottery: LotteryType,
    pub limit: u32,
    pub filter: FetchFilter,
}

#[derive(Debug, Default)]
pub struct SaveSummary {
    pub count: usize,
    pub json_path: Option<PathBuf>,
    pub numbers_path: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
}

impl SaveSummary {
    /// The file worth showing to the operator: the detailed report if one
    /// was written, else the JSON dump.
    pub fn primary_path(&self) -> Option<&PathBuf> {
        self.report_path.as_ref().or(self.json_path.as_ref())
    }
}

pub struct ResultsUseCase<S> {
    fetcher: DrawFetcher<S>,
    store: ResultStore,
    options: SaveOptions,
}

impl<S: DrawSource> ResultsUseCase<S> {
    pub fn new(fetcher: DrawFetcher<S>, store: ResultStore, options: SaveOptions) -> Self {
        Self {
            fetcher,
            store,
            options,
        }
    }

    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    /// Runs one fetch and writes whatever came back. Nothing is written when
    /// the fetch is empty. Write failures are returned to the caller.
    pub async fn fetch_and_save(&self, request: &FetchRequest) -> Result<SaveSummary> {
        let lottery = request.lottery;
        info!("📊 Iniciando processo para {} - Limite: {} resultados", lottery, request.limit);
        if let Some(year) = request.filter.from_year {
            info!("📅 Filtrando resultados a partir do ano {}", year);
        }
        if let Some(concurso) = request.filter.from_concurso {
            info!("🔢 Filtrando resultados a partir do concurso #{}", concurso);
        }

        let results = self
            .fetcher
            .fetch(lottery, request.limit, request.filter)
            .await;

        if results.is_empty() {
            info!("⚠️ Nenhum resultado encontrado para {}", lottery);
            return Ok(SaveSummary::default());
        }

        let mut summary = SaveSummary {
            count: results.len(),
            ..SaveSummary::default()
        };

        let json_path = self.store.save_json(lottery, &results)?;
        info!("✅ Arquivo JSON salvo em: {}", json_path.display());
        summary.json_path = Some(json_path);

        let numbers_path = self.store.save_numbers_only(lottery, &results)?;
        info!("✅ Arquivo de números salvo em: {}", numbers_path.display());
        summary.numbers_path = Some(numbers_path);

        if self.options.save_as_text {
            let report_path = self.store.save_report(lottery, &results)?;
            info!("✅ Arquivo de texto detalhado salvo em: {}", report_path.display());
            summary.report_path = Some(report_path);
        }

        Ok(summary)
    }
}
