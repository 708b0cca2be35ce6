use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SeatMapError;

pub type SeatId = i64;

// Запись места в том виде, в котором её отдает API перевозчика.
// row/col могут отсутствовать целиком (тогда раскладка синтезируется 2+2).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seat {
    pub id: SeatId,
    #[serde(deserialize_with = "number_from_int_or_string")]
    pub number: i32,
    #[serde(default = "default_deck")]
    pub deck: u8,
    #[serde(default)]
    pub row: Option<i32>,
    #[serde(default)]
    pub col: Option<i32>,
    #[serde(default, deserialize_with = "kind_lenient")]
    pub kind: SeatKind,
    #[serde(default)]
    pub is_accessible: bool,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Seat {
    pub fn has_coordinates(&self) -> bool {
        self.row.is_some() && self.col.is_some()
    }

    // Текст подсказки: номер, этаж, класс места, доступность для МГН
    pub fn tooltip(&self) -> String {
        let mut text = format!(
            "Место {}, этаж {}, {}",
            self.number,
            self.deck,
            self.kind.label()
        );
        if self.is_accessible {
            text.push_str(", доступно для МГН");
        }
        if !self.active {
            text.push_str(", не продается");
        }
        text
    }
}

// Класс места (Semi Cama / Cama / Leito - классы дальних автобусов).
// Влияет только на отображение, не на раскладку.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatKind {
    #[default]
    Normal,
    SemiCama,
    Cama,
    Leito,
    Especial,
}

impl SeatKind {
    pub fn label(&self) -> &'static str {
        match self {
            SeatKind::Normal => "Стандарт",
            SeatKind::SemiCama => "Semi Cama",
            SeatKind::Cama => "Cama",
            SeatKind::Leito => "Leito",
            SeatKind::Especial => "Especial",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeatKind::Normal => "NORMAL",
            SeatKind::SemiCama => "SEMI_CAMA",
            SeatKind::Cama => "CAMA",
            SeatKind::Leito => "LEITO",
            SeatKind::Especial => "ESPECIAL",
        }
    }
}

impl fmt::Display for SeatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeatKind {
    type Err = SeatMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NORMAL" => Ok(SeatKind::Normal),
            "SEMI_CAMA" => Ok(SeatKind::SemiCama),
            "CAMA" => Ok(SeatKind::Cama),
            "LEITO" => Ok(SeatKind::Leito),
            "ESPECIAL" => Ok(SeatKind::Especial),
            other => Err(SeatMapError::UnknownKind(other.to_string())),
        }
    }
}

fn default_deck() -> u8 {
    1
}

fn default_active() -> bool {
    true
}

// API отдает номер места то числом, то строкой
fn number_from_int_or_string<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Str(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(v) => i32::try_from(v).map_err(|_| D::Error::custom("seat number out of range")),
        Raw::Str(s) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("seat number is not numeric: {s}"))),
    }
}

// Неизвестный класс места не должен ронять весь снапшот: считаем его NORMAL
fn kind_lenient<'de, D>(deserializer: D) -> Result<SeatKind, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        None => Ok(SeatKind::default()),
        Some(s) => Ok(s.parse().unwrap_or_else(|_| {
            tracing::warn!(kind = %s, "unknown seat kind, falling back to NORMAL");
            SeatKind::Normal
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_seat_with_string_number() {
        let seat: Seat = serde_json::from_str(
            r#"{"id": 7, "number": "12", "deck": 2, "row": 3, "col": 1, "kind": "CAMA"}"#,
        )
        .unwrap();
        assert_eq!(seat.number, 12);
        assert_eq!(seat.deck, 2);
        assert_eq!(seat.kind, SeatKind::Cama);
        assert!(seat.active);
        assert!(seat.has_coordinates());
    }

    #[test]
    fn missing_optional_fields_get_defaults() {
        let seat: Seat = serde_json::from_str(r#"{"id": 1, "number": 1}"#).unwrap();
        assert_eq!(seat.deck, 1);
        assert_eq!(seat.row, None);
        assert_eq!(seat.col, None);
        assert_eq!(seat.kind, SeatKind::Normal);
        assert!(!seat.is_accessible);
        assert!(seat.active);
    }

    #[test]
    fn unknown_kind_does_not_fail_snapshot() {
        let seat: Seat =
            serde_json::from_str(r#"{"id": 1, "number": 1, "kind": "VIP_LOUNGE"}"#).unwrap();
        assert_eq!(seat.kind, SeatKind::Normal);
    }

    #[test]
    fn kind_from_str_is_strict() {
        assert_eq!("SEMI_CAMA".parse::<SeatKind>().unwrap(), SeatKind::SemiCama);
        assert!("semi_cama".parse::<SeatKind>().is_err());
    }

    #[test]
    fn tooltip_mentions_accessibility() {
        let seat = Seat {
            id: 5,
            number: 14,
            deck: 1,
            row: Some(4),
            col: Some(2),
            kind: SeatKind::SemiCama,
            is_accessible: true,
            active: true,
        };
        let tooltip = seat.tooltip();
        assert!(tooltip.contains("Место 14"));
        assert!(tooltip.contains("этаж 1"));
        assert!(tooltip.contains("Semi Cama"));
        assert!(tooltip.contains("МГН"));
    }

    #[test]
    fn tooltip_marks_inactive_seat() {
        let seat = Seat {
            id: 5,
            number: 2,
            deck: 1,
            row: None,
            col: None,
            kind: SeatKind::Normal,
            is_accessible: false,
            active: false,
        };
        assert!(seat.tooltip().contains("не продается"));
    }
}
