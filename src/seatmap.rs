use std::collections::{BTreeMap, BTreeSet, HashSet};

use tracing::info;

use crate::error::SeatMapError;
use crate::layout;
use crate::models::{DeckGrid, Seat, SeatId, Selection};

/// Неизменяемый снапшот мест одного автобуса.
///
/// Единая точка входа для пикера места и сеточной формы заказа: в исходном
/// дашборде раскладка была продублирована в обоих компонентах, здесь оба
/// потребителя идут через `deck_grid`/`grids`. Снапшот загружается один раз
/// на контекст (выбранный рейс) и не мутируется.
#[derive(Debug, Clone, Default)]
pub struct SeatMap {
    seats: Vec<Seat>,
}

impl SeatMap {
    pub fn new(seats: Vec<Seat>) -> Self {
        Self { seats }
    }

    // Снапшот приходит от API как JSON-массив мест
    pub fn from_json_slice(data: &[u8]) -> Result<Self, SeatMapError> {
        let seats: Vec<Seat> = serde_json::from_slice(data)?;
        info!("Loaded seat snapshot: {} seats", seats.len());
        Ok(Self::new(seats))
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    // Список этажей, реально присутствующих в данных (автобусы бывают 1- и 2-этажные)
    pub fn decks(&self) -> Vec<u8> {
        let decks: BTreeSet<u8> = self.seats.iter().map(|seat| seat.deck).collect();
        decks.into_iter().collect()
    }

    pub fn deck_seats(&self, deck: u8) -> Vec<Seat> {
        self.seats.iter().filter(|seat| seat.deck == deck).cloned().collect()
    }

    /// Сетка одного этажа; этажи раскладываются независимо друг от друга.
    pub fn deck_grid(
        &self,
        deck: u8,
        occupancy: &HashSet<SeatId>,
        selection: &Selection,
        aisle_after_col: Option<i32>,
    ) -> DeckGrid {
        layout::build_deck_grid(&self.deck_seats(deck), occupancy, selection, aisle_after_col)
    }

    /// Сетки всех этажей сразу, в порядке возрастания номера этажа.
    pub fn grids(
        &self,
        occupancy: &HashSet<SeatId>,
        selection: &Selection,
        aisle_after_col: Option<i32>,
    ) -> BTreeMap<u8, DeckGrid> {
        self.decks()
            .into_iter()
            .map(|deck| (deck, self.deck_grid(deck, occupancy, selection, aisle_after_col)))
            .collect()
    }
}
