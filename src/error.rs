use thiserror::Error;

// Движок раскладки тотален и ошибок не возвращает; ошибки живут на границе
// загрузки данных (снапшот мест, разбор класса места).
#[derive(Debug, Error)]
pub enum SeatMapError {
    #[error("не удалось разобрать снапшот мест: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("неизвестный класс места: {0}")]
    UnknownKind(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_error_wraps_serde_json() {
        let err = serde_json::from_str::<Vec<i64>>("not json").unwrap_err();
        let wrapped = SeatMapError::from(err);
        assert!(wrapped.to_string().contains("снапшот"));
    }
}
