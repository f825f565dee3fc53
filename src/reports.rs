use crate::types::{DrawRecord, LotteryType};
use crate::utils::format_draw_date;

const RULE_WIDTH: usize = 40;

/// Formats an amount the way Caixa prints it: `1.234.567,89`.
pub fn format_brl(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let units = (cents / 100).to_string();

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, digit) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    format!("{}{},{:02}", sign, grouped, cents % 100)
}

fn or_na(value: &str) -> &str {
    if value.is_empty() { "N/A" } else { value }
}

pub fn render_detailed_report(lottery: LotteryType, results: &[DrawRecord]) -> String {
    let mut text = String::new();
    text.push_str(&format!("Resultados da {}\n", lottery.as_str().to_uppercase()));
    text.push_str(&format!("{}\n\n", "=".repeat(RULE_WIDTH)));

    for result in results {
        text.push_str(&format!(
            "Concurso: {} - Data: {}\n",
            result.concurso,
            format_draw_date(&result.date)
        ));
        text.push_str(&format!("Números: {}\n", result.numbers.join(", ")));
        text.push_str(&format!(
            "Local do Sorteio: {} - {}\n\n",
            or_na(&result.location),
            or_na(&result.location_city)
        ));

        if !result.prizes.is_empty() {
            text.push_str("Premiações:\n");
            for prize in &result.prizes {
                text.push_str(&format!(
                    "  {}: {} ganhadores - R$ {}\n",
                    prize.descricao_faixa,
                    prize.numero_de_ganhadores,
                    format_brl(prize.valor_premio)
                ));
            }
            text.push('\n');
        }

        if !result.winner_cities.is_empty() {
            text.push_str("Cidades com ganhadores:\n");
            for city in &result.winner_cities {
                text.push_str(&format!(
                    "  {}/{}: {} ganhador(es)\n",
                    city.municipio, city.uf, city.ganhadores
                ));
            }
            text.push('\n');
        }

        text.push_str(&format!(
            "Acumulado: {}\n",
            if result.rollover { "Sim" } else { "Não" }
        ));

        if let Some(next_date) = &result.next_draw_date {
            text.push_str(&format!(
                "Próximo Concurso: {} - Valor Estimado: R$ {}\n",
                format_draw_date(next_date),
                format_brl(result.next_draw_estimate)
            ));
        }

        text.push_str(&format!("\n{}\n\n", "-".repeat(RULE_WIDTH)));
    }

    text
}

pub fn render_numbers_only(lottery: LotteryType, results: &[DrawRecord]) -> String {
    let mut text = String::new();
    text.push_str(&format!("Números sorteados - {}\n", lottery.as_str().to_uppercase()));
    text.push_str(&format!("{}\n\n", "=".repeat(RULE_WIDTH)));

    for result in results {
        text.push_str(&format!(
            "Concurso: {:04} Data: {} Dezenas: {}\n",
            result.concurso,
            format_draw_date(&result.date),
            result.numbers.join(" ")
        ));
    }

    text
}
