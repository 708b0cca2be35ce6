use std::collections::HashSet;

use crate::models::seat::SeatId;

// Состояние выбора принадлежит вызывающему коду: пикер держит одно место,
// форма создания заказа - произвольный набор. Движок его только читает.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Single(Option<SeatId>),
    Many(HashSet<SeatId>),
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Single(None)
    }
}

impl Selection {
    pub fn none() -> Self {
        Selection::default()
    }

    pub fn single(id: SeatId) -> Self {
        Selection::Single(Some(id))
    }

    pub fn many<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = SeatId>,
    {
        Selection::Many(ids.into_iter().collect())
    }

    pub fn contains(&self, id: SeatId) -> bool {
        match self {
            Selection::Single(selected) => *selected == Some(id),
            Selection::Many(ids) => ids.contains(&id),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Selection::Single(selected) => selected.is_none(),
            Selection::Many(ids) => ids.is_empty(),
        }
    }
}
