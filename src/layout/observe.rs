use std::collections::BTreeMap;

use crate::models::SeatId;

// Стратегия раскладки, выбранная для конкретного этажа
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Coordinate,
    Sequential,
}

/// Хук для наблюдения за промежуточными шагами раскладки.
///
/// Исходный дашборд на каждом пересчете писал в debug-консоль; здесь вместо
/// этого вызывающий код может подписаться на промежуточные значения, не
/// привязывая чистую функцию к конкретному логгеру. Все методы опциональны.
pub trait LayoutObserver {
    fn mode_selected(&mut self, _mode: LayoutMode, _seat_count: usize) {}

    // Место без координат схлопнуто в (1,1) - известный дефект данных бэкенда
    fn coordinates_defaulted(&mut self, _seat: SeatId) {}

    // Два места попали в одну ячейку, последнее перезаписало предыдущее
    fn cell_overwritten(&mut self, _row: i32, _col: i32, _kept: SeatId, _lost: SeatId) {}

    fn aisle_detected(&mut self, _column: i32, _votes: &BTreeMap<i32, u32>) {}
}

pub struct NoopObserver;

impl LayoutObserver for NoopObserver {}
