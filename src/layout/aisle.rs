use std::collections::BTreeMap;

use tracing::debug;

// Колонка прохода по умолчанию: классическая схема 2+2
pub const DEFAULT_AISLE_AFTER_COL: i32 = 2;

/// Автоопределение колонки прохода по координатам мест.
///
/// Для каждого ряда сканируем отсортированные колонки; разрыв больше единицы
/// между соседними колонками - голос за меньшую из двух. Побеждает колонка с
/// максимумом голосов, при равенстве - меньшая (детерминированный обход
/// BTreeMap по возрастанию). Без единого разрыва возвращаем 2.
pub(crate) fn detect_aisle_column(cols_by_row: &BTreeMap<i32, Vec<i32>>) -> (i32, BTreeMap<i32, u32>) {
    let mut votes: BTreeMap<i32, u32> = BTreeMap::new();

    for cols in cols_by_row.values() {
        for pair in cols.windows(2) {
            if pair[1] - pair[0] > 1 {
                *votes.entry(pair[0]).or_insert(0) += 1;
            }
        }
    }

    let mut winner: Option<(i32, u32)> = None;
    for (&col, &count) in &votes {
        match winner {
            Some((_, best)) if count <= best => {}
            _ => winner = Some((col, count)),
        }
    }

    let column = winner.map(|(col, _)| col).unwrap_or(DEFAULT_AISLE_AFTER_COL);
    debug!(column, ?votes, "aisle detection finished");
    (column, votes)
}
