use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

use crate::api::DrawSource;
use crate::error::Result;
use crate::fetcher::{DEFAULT_LIMIT, FILTERED_SCAN_CEILING, FetchFilter};
use crate::types::LotteryType;
use crate::use_cases::{FetchRequest, ResultsUseCase};
use crate::utils::current_year;

pub const FIRST_DRAW_YEAR: i32 = 1996;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeMode {
    Last(u32),
    Custom,
    FromYear,
    FromConcurso,
}

pub const RANGE_OPTIONS: [(&str, RangeMode); 7] = [
    ("Último resultado", RangeMode::Last(1)),
    ("Últimos 5 resultados", RangeMode::Last(5)),
    ("Últimos 10 resultados", RangeMode::Last(DEFAULT_LIMIT)),
    ("Últimos 20 resultados", RangeMode::Last(20)),
    ("Quantidade personalizada", RangeMode::Custom),
    ("A partir de um ano específico", RangeMode::FromYear),
    ("A partir de um concurso específico", RangeMode::FromConcurso),
];

/// What the operator asked for once the mode-specific value is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSelection {
    Last(u32),
    FromYear(i32),
    FromConcurso(u32),
}

impl RangeSelection {
    pub fn into_request(self, lottery: LotteryType) -> FetchRequest {
        match self {
            RangeSelection::Last(limit) => FetchRequest {
                lottery,
                limit,
                filter: FetchFilter::default(),
            },
            RangeSelection::FromYear(year) => FetchRequest {
                lottery,
                limit: FILTERED_SCAN_CEILING,
                filter: FetchFilter::from_year(year),
            },
            RangeSelection::FromConcurso(concurso) => FetchRequest {
                lottery,
                limit: FILTERED_SCAN_CEILING,
                filter: FetchFilter::from_concurso(concurso),
            },
        }
    }
}

pub fn validate_limit(limit: u32) -> std::result::Result<(), String> {
    if limit < 1 {
        return Err("Por favor, digite um número válido maior que zero.".to_string());
    }
    Ok(())
}

pub fn validate_year(year: i32, current_year: i32) -> std::result::Result<(), String> {
    if !(FIRST_DRAW_YEAR..=current_year).contains(&year) {
        return Err(format!(
            "Por favor, digite um ano válido entre {} e {}.",
            FIRST_DRAW_YEAR, current_year
        ));
    }
    Ok(())
}

pub fn validate_concurso(concurso: u32) -> std::result::Result<(), String> {
    if concurso < 1 {
        return Err("Por favor, digite um número de concurso válido maior que zero.".to_string());
    }
    Ok(())
}

pub struct Shell {
    theme: ColorfulTheme,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    pub fn prompt_lottery(&self) -> Result<LotteryType> {
        let names: Vec<&str> = LotteryType::ALL.iter().map(|l| l.display_name()).collect();
        let index = Select::with_theme(&self.theme)
            .with_prompt("Escolha uma loteria")
            .items(&names)
            .default(0)
            .interact()?;
        Ok(LotteryType::ALL[index])
    }

    pub fn prompt_range(&self) -> Result<RangeSelection> {
        let labels: Vec<&str> = RANGE_OPTIONS.iter().map(|(label, _)| *label).collect();
        let index = Select::with_theme(&self.theme)
            .with_prompt("Como deseja filtrar os resultados?")
            .items(&labels)
            .default(2)
            .interact()?;

        let selection = match RANGE_OPTIONS[index].1 {
            RangeMode::Last(limit) => RangeSelection::Last(limit),
            RangeMode::Custom => {
                let limit: u32 = Input::with_theme(&self.theme)
                    .with_prompt("Digite a quantidade de resultados desejados")
                    .validate_with(|v: &u32| validate_limit(*v))
                    .interact_text()?;
                RangeSelection::Last(limit)
            }
            RangeMode::FromYear => {
                let max_year = current_year();
                let year: i32 = Input::with_theme(&self.theme)
                    .with_prompt("Digite o ano a partir do qual deseja obter resultados")
                    .validate_with(move |v: &i32| validate_year(*v, max_year))
                    .interact_text()?;
                RangeSelection::FromYear(year)
            }
            RangeMode::FromConcurso => {
                let concurso: u32 = Input::with_theme(&self.theme)
                    .with_prompt(
                        "Digite o número do concurso a partir do qual deseja obter resultados",
                    )
                    .validate_with(|v: &u32| validate_concurso(*v))
                    .interact_text()?;
                RangeSelection::FromConcurso(concurso)
            }
        };

        Ok(selection)
    }

    pub fn prompt_request(&self) -> Result<FetchRequest> {
        let lottery = self.prompt_lottery()?;
        let range = self.prompt_range()?;
        Ok(range.into_request(lottery))
    }

    pub fn prompt_continue(&self) -> Result<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt("Deseja consultar outra loteria?")
            .default(true)
            .interact()?)
    }

    pub fn show_welcome(&self) {
        println!("\n===================================");
        println!("🎲 CONSULTA DE RESULTADOS DE LOTERIAS 🎲");
        println!("===================================\n");
        println!("Bem-vindo ao sistema de consulta de resultados de loterias!");
        println!("Este programa permite consultar os últimos resultados das loterias da Caixa.\n");
    }

    pub fn show_goodbye(&self) {
        println!("\n===================================");
        println!("Obrigado por usar o sistema de consulta de loterias!");
        println!("===================================\n");
    }

    /// Prompts, fetches and saves until the operator declines to go on.
    pub async fn run<S: DrawSource>(&self, use_case: &ResultsUseCase<S>) -> anyhow::Result<()> {
        self.show_welcome();

        loop {
            let request = self.prompt_request()?;
            println!(
                "\n🎲 Obtendo resultados da {}...",
                request.lottery.as_str().to_uppercase()
            );

            let summary = use_case.fetch_and_save(&request).await?;
            match summary.primary_path() {
                Some(path) => println!(
                    "\n✅ {} resultados salvos com sucesso em: {}",
                    summary.count,
                    path.display()
                ),
                None => println!(
                    "\n⚠️ Nenhum resultado encontrado para {}",
                    request.lottery.as_str().to_uppercase()
                ),
            }

            if !self.prompt_continue()? {
                break;
            }
        }

        self.show_goodbye();
        Ok(())
    }
}
