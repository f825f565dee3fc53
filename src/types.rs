use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LotteryType {
    MegaSena,
    Quina,
    Lotofacil,
    Lotomania,
    DuplaSena,
    Timemania,
    DiaDeSorte,
    Federal,
    Loteca,
    SuperSete,
    MaisMilionaria,
}

impl LotteryType {
    pub const ALL: [LotteryType; 11] = [
        LotteryType::MegaSena,
        LotteryType::Lotofacil,
        LotteryType::Quina,
        LotteryType::Lotomania,
        LotteryType::Timemania,
        LotteryType::DuplaSena,
        LotteryType::DiaDeSorte,
        LotteryType::SuperSete,
        LotteryType::MaisMilionaria,
        LotteryType::Federal,
        LotteryType::Loteca,
    ];

    /// Path segment used by the results API and by the saved file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            LotteryType::MegaSena => "megasena",
            LotteryType::Quina => "quina",
            LotteryType::Lotofacil => "lotofacil",
            LotteryType::Lotomania => "lotomania",
            LotteryType::DuplaSena => "duplasena",
            LotteryType::Timemania => "timemania",
            LotteryType::DiaDeSorte => "diadesorte",
            LotteryType::Federal => "federal",
            LotteryType::Loteca => "loteca",
            LotteryType::SuperSete => "supersete",
            LotteryType::MaisMilionaria => "maismilionaria",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LotteryType::MegaSena => "Mega-Sena",
            LotteryType::Quina => "Quina",
            LotteryType::Lotofacil => "Lotofácil",
            LotteryType::Lotomania => "Lotomania",
            LotteryType::DuplaSena => "Dupla Sena",
            LotteryType::Timemania => "Timemania",
            LotteryType::DiaDeSorte => "Dia de Sorte",
            LotteryType::Federal => "Federal",
            LotteryType::Loteca => "Loteca",
            LotteryType::SuperSete => "Super Sete",
            LotteryType::MaisMilionaria => "+Milionária",
        }
    }
}

impl fmt::Display for LotteryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One draw as persisted by the result store. Keys match the JSON files
/// written by earlier versions of the tool so old dumps still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawRecord {
    #[serde(rename = "type")]
    pub lottery: LotteryType,
    pub concurso: u32,
    #[serde(rename = "data", with = "crate::utils::draw_date")]
    pub date: NaiveDate,
    #[serde(rename = "numeros")]
    pub numbers: Vec<String>,
    #[serde(rename = "premiacoes")]
    pub prizes: Vec<PrizeTier>,
    #[serde(rename = "acumulado")]
    pub rollover: bool,
    #[serde(rename = "valorAcumulado")]
    pub rollover_amount: f64,
    #[serde(
        rename = "dataProximoConcurso",
        with = "crate::utils::optional_draw_date"
    )]
    pub next_draw_date: Option<NaiveDate>,
    #[serde(rename = "valorEstimadoProximoConcurso")]
    pub next_draw_estimate: f64,
    #[serde(rename = "localSorteio")]
    pub location: String,
    #[serde(rename = "nomeMunicipioUFSorteio")]
    pub location_city: String,
    #[serde(rename = "listaMunicipioUFGanhadores")]
    pub winner_cities: Vec<WinnerCity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrizeTier {
    pub descricao_faixa: String,
    pub faixa: u32,
    pub numero_de_ganhadores: u64,
    pub valor_premio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinnerCity {
    pub ganhadores: u32,
    pub municipio: String,
    pub uf: String,
    pub posicao: Option<u32>,
    #[serde(rename = "nomeFatansiaUL")]
    pub nome_fantasia: Option<String>,
    pub serie: Option<String>,
}

// Upstream payloads. Everything is optional here; `api::map_api_draw`
// decides what is required.

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApiDraw {
    pub numero: Option<u32>,
    pub data_apuracao: Option<String>,
    #[serde(default)]
    pub lista_dezenas: Option<Vec<String>>,
    #[serde(default)]
    pub lista_rateio_premio: Option<Vec<ApiPrizeTier>>,
    pub valor_acumulado_proximo_concurso: Option<f64>,
    pub data_proximo_concurso: Option<String>,
    pub valor_estimado_proximo_concurso: Option<f64>,
    pub local_sorteio: Option<String>,
    #[serde(rename = "nomeMunicipioUFSorteio")]
    pub nome_municipio_uf_sorteio: Option<String>,
    #[serde(rename = "listaMunicipioUFGanhadores", default)]
    pub lista_municipio_uf_ganhadores: Option<Vec<ApiWinnerCity>>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ApiPrizeTier {
    pub descricao_faixa: Option<String>,
    pub faixa: Option<u32>,
    pub numero_de_ganhadores: Option<u64>,
    pub valor_premio: Option<f64>,
}

#[derive(Deserialize, Debug)]
pub struct ApiWinnerCity {
    pub ganhadores: Option<u32>,
    pub municipio: Option<String>,
    pub uf: Option<String>,
    pub posicao: Option<u32>,
    #[serde(rename = "nomeFatansiaUL")]
    pub nome_fantasia: Option<String>,
    pub serie: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lottery_type_slugs_match_serde() {
        for lottery in LotteryType::ALL {
            let json = serde_json::to_string(&lottery).unwrap();
            assert_eq!(json, format!("\"{}\"", lottery.as_str()));
        }
    }

    #[test]
    fn test_all_lottery_types_are_distinct() {
        let mut slugs: Vec<_> = LotteryType::ALL.iter().map(|l| l.as_str()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), 11);
    }

    #[test]
    fn test_api_draw_ignores_unknown_fields() {
        let raw = r#"{
            "numero": 2700,
            "dataApuracao": "20/04/2024",
            "listaDezenas": ["01", "07", "19", "33", "41", "58"],
            "tipoJogo": "MEGA_SENA",
            "exibirDetalhamentoPorCidade": true
        }"#;
        let draw: ApiDraw = serde_json::from_str(raw).unwrap();
        assert_eq!(draw.numero, Some(2700));
        assert_eq!(draw.lista_dezenas.unwrap().len(), 6);
        assert!(draw.lista_rateio_premio.is_none());
    }
}
