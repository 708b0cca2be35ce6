use serde::Deserialize;
use std::env;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub layout: LayoutConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub rust_log: String,
}

// Настройки раскладки
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    // Явная колонка прохода для автобусов с заведомо кривыми метаданными;
    // по умолчанию проход определяется автоматически
    pub aisle_after_col: Option<i32>,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "bus_seatmap=debug".to_string()),
            },
            layout: LayoutConfig {
                aisle_after_col: env::var("SEATMAP_AISLE_AFTER_COL").ok().map(|v| {
                    v.parse()
                        .expect("SEATMAP_AISLE_AFTER_COL must be a valid number")
                }),
            },
        }
    }
}
