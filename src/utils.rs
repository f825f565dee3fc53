use chrono::{Datelike, Local, NaiveDate};

/// Caixa publishes every date as `dd/mm/yyyy`.
pub const DRAW_DATE_FORMAT: &str = "%d/%m/%Y";

pub fn parse_draw_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DRAW_DATE_FORMAT).ok()
}

pub fn format_draw_date(date: &NaiveDate) -> String {
    date.format(DRAW_DATE_FORMAT).to_string()
}

pub fn current_year() -> i32 {
    Local::now().year()
}

pub mod draw_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_draw_date(date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_draw_date(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("data de sorteio inválida: {}", raw)))
    }
}

pub mod optional_draw_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.serialize_some(&super::format_draw_date(date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if !raw.trim().is_empty() => super::parse_draw_date(&raw)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("data de sorteio inválida: {}", raw))),
            _ => Ok(None),
        }
    }
}
