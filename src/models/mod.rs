pub mod grid;
pub mod seat;
pub mod selection;

pub use grid::{Cell, DeckGrid, SeatCell};
pub use seat::{Seat, SeatId, SeatKind};
pub use selection::Selection;
