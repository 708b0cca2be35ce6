pub mod config;
pub mod error;
pub mod layout;
pub mod models;
pub mod seatmap;

// Реэкспорт основных типов движка
pub use error::SeatMapError;
pub use layout::observe::{LayoutMode, LayoutObserver, NoopObserver};
pub use layout::{build_deck_grid, build_deck_grid_observed};
pub use models::{Cell, DeckGrid, Seat, SeatCell, SeatId, SeatKind, Selection};
pub use seatmap::SeatMap;
