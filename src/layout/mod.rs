pub mod aisle;
pub mod observe;

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use tracing::{debug, warn};

use crate::models::{Cell, DeckGrid, Seat, SeatCell, SeatId, Selection};
use self::observe::{LayoutMode, LayoutObserver, NoopObserver};

/// Строит сетку одного этажа из плоского списка мест.
///
/// Вызывающий код сам фильтрует места по этажу (см. `SeatMap::deck_grid`);
/// смешанный список раскладывается как один этаж. Функция чистая и тотальная:
/// пустой вход дает сетку без строк, кривые координаты нормализуются, паник
/// нет ни на каком корректно типизированном входе.
pub fn build_deck_grid(
    seats: &[Seat],
    occupancy: &HashSet<SeatId>,
    selection: &Selection,
    aisle_after_col: Option<i32>,
) -> DeckGrid {
    build_deck_grid_observed(seats, occupancy, selection, aisle_after_col, &mut NoopObserver)
}

/// То же, что `build_deck_grid`, но с подпиской на промежуточные шаги.
pub fn build_deck_grid_observed(
    seats: &[Seat],
    occupancy: &HashSet<SeatId>,
    selection: &Selection,
    aisle_after_col: Option<i32>,
    observer: &mut dyn LayoutObserver,
) -> DeckGrid {
    if seats.is_empty() {
        return DeckGrid::default();
    }

    // Режим выбирается на каждый вызов: хватает одного места с полными
    // координатами, чтобы весь этаж раскладывался по координатам
    let mode = if seats.iter().any(Seat::has_coordinates) {
        LayoutMode::Coordinate
    } else {
        LayoutMode::Sequential
    };
    observer.mode_selected(mode, seats.len());
    debug!(?mode, seats = seats.len(), "building deck grid");

    match mode {
        LayoutMode::Coordinate => {
            coordinate_grid(seats, occupancy, selection, aisle_after_col, observer)
        }
        LayoutMode::Sequential => sequential_grid(seats, occupancy, selection, aisle_after_col),
    }
}

// === Координатный режим ===

fn coordinate_grid(
    seats: &[Seat],
    occupancy: &HashSet<SeatId>,
    selection: &Selection,
    aisle_after_col: Option<i32>,
    observer: &mut dyn LayoutObserver,
) -> DeckGrid {
    let mut by_pos: HashMap<(i32, i32), &Seat> = HashMap::with_capacity(seats.len());
    let mut row_values: BTreeSet<i32> = BTreeSet::new();
    let mut col_values: BTreeSet<i32> = BTreeSet::new();

    for seat in seats {
        // Отсутствующая координата трактуется как 1. Это дефект данных
        // бэкенда, а не пространственный дефолт: места без координат
        // схлопываются в одну ячейку, поэтому путь никогда не молчит.
        if !seat.has_coordinates() {
            warn!(seat = seat.id, "seat without full coordinates collapsed to (1,1)");
            observer.coordinates_defaulted(seat.id);
        }
        let row = seat.row.unwrap_or(1);
        let col = seat.col.unwrap_or(1);
        row_values.insert(row);
        col_values.insert(col);

        if let Some(previous) = by_pos.insert((row, col), seat) {
            warn!(
                row,
                col,
                kept = seat.id,
                lost = previous.id,
                "two seats mapped to the same cell"
            );
            observer.cell_overwritten(row, col, seat.id, previous.id);
        }
    }

    let aisle_after = match aisle_after_col {
        Some(column) => column,
        None => {
            let mut cols_by_row: BTreeMap<i32, Vec<i32>> = BTreeMap::new();
            for &(row, col) in by_pos.keys() {
                cols_by_row.entry(row).or_default().push(col);
            }
            for cols in cols_by_row.values_mut() {
                cols.sort_unstable();
            }
            let (column, votes) = aisle::detect_aisle_column(&cols_by_row);
            observer.aisle_detected(column, &votes);
            column
        }
    };

    // Каждая строка обходит один и тот же список колонок, поэтому сетка
    // прямоугольна автоматически. Проход - одна пустая ячейка перед первой
    // колонкой правее aisle_after (колонки aisle_after+1 в списке может
    // не быть вовсе, см. автобусы с нумерацией 1,2,4,5).
    let mut rows = Vec::with_capacity(row_values.len());
    for &row in &row_values {
        let mut cells: Vec<Cell> = Vec::with_capacity(col_values.len() + 1);
        let mut gap_emitted = false;
        for &col in &col_values {
            if !gap_emitted && col > aisle_after {
                cells.push(None);
                gap_emitted = true;
            }
            cells.push(by_pos.get(&(row, col)).map(|&seat| annotate(seat, occupancy, selection)));
        }
        rows.push(cells);
    }

    DeckGrid { rows }
}

// === Последовательный режим (координат нет вообще) ===

fn sequential_grid(
    seats: &[Seat],
    occupancy: &HashSet<SeatId>,
    selection: &Selection,
    aisle_after_col: Option<i32>,
) -> DeckGrid {
    let mut ordered: Vec<&Seat> = seats.iter().collect();
    ordered.sort_by_key(|seat| (seat.number, seat.id));

    // max(1, aisle || 2): ноль и отсутствие значения одинаково дают 2+2,
    // как в исходном дашборде
    let left = match aisle_after_col {
        None | Some(0) => 2,
        Some(column) => column.max(1),
    } as usize;
    let width = left * 2 + 1;

    let mut rows: Vec<Vec<Cell>> = Vec::new();
    let mut current: Vec<Cell> = Vec::with_capacity(width);

    for seat in ordered {
        if current.len() == left {
            current.push(None); // проход
        }
        current.push(Some(annotate(seat, occupancy, selection)));
        if current.len() == width {
            rows.push(current);
            current = Vec::with_capacity(width);
        }
    }

    // Последний неполный ряд добивается пустыми ячейками до полной ширины,
    // чтобы проход остался на своем месте
    if !current.is_empty() {
        current.resize(width, None);
        rows.push(current);
    }

    DeckGrid { rows }
}

fn annotate(seat: &Seat, occupancy: &HashSet<SeatId>, selection: &Selection) -> SeatCell {
    SeatCell {
        id: seat.id,
        number: seat.number,
        is_reserved: occupancy.contains(&seat.id) || !seat.active,
        is_selected: selection.contains(seat.id),
        tooltip: seat.tooltip(),
    }
}
