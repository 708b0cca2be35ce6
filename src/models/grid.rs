use serde::{Deserialize, Serialize};

use crate::models::seat::SeatId;

// Одна ячейка сетки: место, подготовленное к отрисовке
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatCell {
    pub id: SeatId,
    pub number: i32,
    pub is_reserved: bool,
    pub is_selected: bool,
    pub tooltip: String,
}

// Пустая ячейка - проход или отсутствующее место
pub type Cell = Option<SeatCell>;

/// Прямоугольная сетка одного этажа. Строки сверху вниз, колонки слева направо.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckGrid {
    pub rows: Vec<Vec<Cell>>,
}

impl DeckGrid {
    pub fn width(&self) -> usize {
        self.rows.first().map(|row| row.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn seat_count(&self) -> usize {
        self.rows.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    pub fn cells(&self) -> impl Iterator<Item = &SeatCell> {
        self.rows.iter().flatten().filter_map(|cell| cell.as_ref())
    }

    pub fn is_rectangular(&self) -> bool {
        let width = self.width();
        self.rows.iter().all(|row| row.len() == width)
    }
}
