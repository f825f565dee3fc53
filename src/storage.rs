use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use crate::error::{LotteryError, Result};
use crate::reports::{render_detailed_report, render_numbers_only};
use crate::types::{DrawRecord, LotteryType};

/// Writes draw results under a base directory, one set of files per
/// lottery type. Every save replaces the previous file.
pub struct ResultStore {
    base_dir: PathBuf,
}

impl ResultStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir)?;
        info!("📁 Diretório garantido: {}", base_dir.display());
        Ok(Self { base_dir })
    }

    pub fn json_path(&self, lottery: LotteryType) -> PathBuf {
        self.base_dir.join(format!("{}.json", lottery))
    }

    pub fn report_path(&self, lottery: LotteryType) -> PathBuf {
        self.base_dir.join(format!("{}.txt", lottery))
    }

    pub fn numbers_path(&self, lottery: LotteryType) -> PathBuf {
        self.base_dir.join(format!("{}_numeros.txt", lottery))
    }

    fn write(&self, lottery: LotteryType, path: PathBuf, contents: &str) -> Result<PathBuf> {
        match fs::write(&path, contents) {
            Ok(()) => Ok(path),
            Err(source) => {
                error!(
                    "❌ Erro ao salvar resultados de {} em {}: {}",
                    lottery,
                    path.display(),
                    source
                );
                Err(LotteryError::Storage {
                    lottery,
                    path,
                    source,
                })
            }
        }
    }

    pub fn save_json(&self, lottery: LotteryType, results: &[DrawRecord]) -> Result<PathBuf> {
        let json = serde_json::to_string_pretty(results)?;
        self.write(lottery, self.json_path(lottery), &json)
    }

    pub fn save_report(&self, lottery: LotteryType, results: &[DrawRecord]) -> Result<PathBuf> {
        let text = render_detailed_report(lottery, results);
        self.write(lottery, self.report_path(lottery), &text)
    }

    pub fn save_numbers_only(
        &self,
        lottery: LotteryType,
        results: &[DrawRecord],
    ) -> Result<PathBuf> {
        let text = render_numbers_only(lottery, results);
        self.write(lottery, self.numbers_path(lottery), &text)
    }

    /// Loads the last JSON dump for `lottery`. A missing or unreadable file
    /// yields an empty list.
    pub fn load(&self, lottery: LotteryType) -> Vec<DrawRecord> {
        let path = self.json_path(lottery);
        if !path.exists() {
            return Vec::new();
        }

        match read_results(&path) {
            Ok(results) => results,
            Err(e) => {
                warn!("⚠ Erro ao carregar resultados de {} de {}: {}", lottery, path.display(), e);
                Vec::new()
            }
        }
    }
}

fn read_results(path: &Path) -> anyhow::Result<Vec<DrawRecord>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::tests::record;
    use crate::types::{PrizeTier, WinnerCity};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn results() -> Vec<DrawRecord> {
        let mut latest = record(
            LotteryType::MaisMilionaria,
            150,
            NaiveDate::from_ymd_opt(2024, 5, 4).unwrap(),
        );
        latest.numbers = ["07", "13", "22", "31", "40", "49", "2", "5"]
            .map(String::from)
            .to_vec();
        latest.prizes = vec![PrizeTier {
            descricao_faixa: "6 acertos + 2 trevos".to_string(),
            faixa: 1,
            numero_de_ganhadores: 0,
            valor_premio: 0.0,
        }];
        latest.rollover = true;
        latest.rollover_amount = 152_000_000.5;
        latest.next_draw_date = NaiveDate::from_ymd_opt(2024, 5, 11);
        latest.next_draw_estimate = 160_000_000.0;
        latest.winner_cities = vec![WinnerCity {
            ganhadores: 2,
            municipio: "RECIFE".to_string(),
            uf: "PE".to_string(),
            posicao: None,
            nome_fantasia: Some("LOTERICA BOA SORTE".to_string()),
            serie: None,
        }];

        let previous = record(
            LotteryType::MaisMilionaria,
            149,
            NaiveDate::from_ymd_opt(2024, 4, 27).unwrap(),
        );
        vec![latest, previous]
    }

    #[test]
    fn test_new_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("data");

        ResultStore::new(&base).unwrap();
        assert!(base.is_dir());
        ResultStore::new(&base).unwrap();
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = ResultStore::new(temp_dir.path()).unwrap();
        let saved = results();

        let path = store.save_json(LotteryType::MaisMilionaria, &saved).unwrap();
        assert_eq!(path, temp_dir.path().join("maismilionaria.json"));

        let loaded = store.load(LotteryType::MaisMilionaria);
        assert_eq!(loaded, saved);
    }

    #[test]
    fn test_json_keeps_every_field() {
        let temp_dir = TempDir::new().unwrap();
        let store = ResultStore::new(temp_dir.path()).unwrap();
        let saved = results();

        let path = store.save_json(LotteryType::MaisMilionaria, &saved).unwrap();
        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();

        let previous = &raw[1];
        assert_eq!(previous["type"], "maismilionaria");
        assert_eq!(previous["data"], "27/04/2024");
        assert!(previous["dataProximoConcurso"].is_null());
        assert_eq!(previous["valorEstimadoProximoConcurso"], 0.0);
        assert_eq!(previous["localSorteio"], "");
        assert_eq!(previous["listaMunicipioUFGanhadores"], serde_json::json!([]));
    }

    #[test]
    fn test_round_trip_keeps_full_precision_amounts() {
        let temp_dir = TempDir::new().unwrap();
        let store = ResultStore::new(temp_dir.path()).unwrap();
        let mut saved = results();
        saved[0].rollover_amount = 221916.07898958714;
        saved[0].next_draw_estimate = 0.1 + 0.2;
        saved[0].prizes[0].valor_premio = 1234567.8901234567;
        saved[1].rollover_amount = f64::MAX;

        store.save_json(LotteryType::MaisMilionaria, &saved).unwrap();
        let loaded = store.load(LotteryType::MaisMilionaria);

        assert_eq!(loaded[0].rollover_amount.to_bits(), 221916.07898958714f64.to_bits());
        assert_eq!(loaded, saved);
    }

    #[test]
    fn test_load_without_save_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = ResultStore::new(temp_dir.path()).unwrap();

        assert!(store.load(LotteryType::Loteca).is_empty());
    }

    #[test]
    fn test_load_unparsable_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = ResultStore::new(temp_dir.path()).unwrap();
        fs::write(store.json_path(LotteryType::Federal), "{ not json").unwrap();

        assert!(store.load(LotteryType::Federal).is_empty());
    }

    #[test]
    fn test_save_overwrites_previous_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = ResultStore::new(temp_dir.path()).unwrap();
        let saved = results();

        store.save_json(LotteryType::MaisMilionaria, &saved).unwrap();
        store
            .save_json(LotteryType::MaisMilionaria, &saved[1..])
            .unwrap();

        assert_eq!(store.load(LotteryType::MaisMilionaria), saved[1..].to_vec());
    }

    #[test]
    fn test_text_artifacts_paths() {
        let temp_dir = TempDir::new().unwrap();
        let store = ResultStore::new(temp_dir.path()).unwrap();
        let saved = results();

        let report = store.save_report(LotteryType::MaisMilionaria, &saved).unwrap();
        let numbers = store
            .save_numbers_only(LotteryType::MaisMilionaria, &saved)
            .unwrap();

        assert_eq!(report, temp_dir.path().join("maismilionaria.txt"));
        assert_eq!(numbers, temp_dir.path().join("maismilionaria_numeros.txt"));
        let listing = fs::read_to_string(numbers).unwrap();
        assert!(listing.contains("Concurso: 0150 Data: 04/05/2024 Dezenas: 07 13 22 31 40 49 2 5"));
    }

    #[test]
    fn test_write_failure_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = ResultStore::new(temp_dir.path()).unwrap();
        // A directory where the file should go makes the write fail.
        fs::create_dir(store.report_path(LotteryType::Quina)).unwrap();

        let err = store.save_report(LotteryType::Quina, &[]).unwrap_err();
        assert!(matches!(
            err,
            LotteryError::Storage {
                lottery: LotteryType::Quina,
                ..
            }
        ));
    }
}
