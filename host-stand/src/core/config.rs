use crate::seating::{DEFAULT_RESTAURANT_NAME, DEFAULT_TABLE_CAPACITY};
use shared::error::{AppError, AppResult, ErrorCode};

const NO_TABLES_MESSAGE: &str = "TABLE_COUNT must be at least 1";

/// 前台配置 - 餐厅与日志的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | RESTAURANT_NAME | Restaurant | 餐厅名称 |
/// | TABLE_COUNT | 4 | 桌台数量 |
/// | TABLE_CAPACITY | 4 | 每桌座位数 |
/// | TABLE_CAPACITIES | (未设置) | 逗号分隔的每桌座位数，覆盖上面两项 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (未设置) | 日志目录，设置后按天滚动写入文件 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// RESTAURANT_NAME="Chez Nous" TABLE_CAPACITIES=2,2,4,6 cargo run -p host-stand
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub restaurant_name: String,
    pub table_count: usize,
    /// Seats per table when `table_capacities` is not set
    pub table_capacity: u32,
    /// Raw comma-separated list, validated by [`Config::capacities`]
    pub table_capacities: Option<String>,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            restaurant_name: std::env::var("RESTAURANT_NAME")
                .unwrap_or_else(|_| DEFAULT_RESTAURANT_NAME.into()),
            table_count: std::env::var("TABLE_COUNT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(4),
            table_capacity: std::env::var("TABLE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TABLE_CAPACITY),
            table_capacities: std::env::var("TABLE_CAPACITIES")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|v| !v.trim().is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Fixed restaurant layout, ignoring the table variables
    ///
    /// 常用于测试场景
    pub fn with_tables(restaurant_name: impl Into<String>, capacities: Vec<u32>) -> Self {
        let mut config = Self::from_env();
        config.restaurant_name = restaurant_name.into();
        config.table_count = capacities.len();
        config.table_capacities = Some(
            capacities
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(","),
        );
        config
    }

    /// Seats per table, in table order
    pub fn capacities(&self) -> AppResult<Vec<u32>> {
        let Some(list) = &self.table_capacities else {
            if self.table_count == 0 {
                return Err(AppError::config(NO_TABLES_MESSAGE));
            }
            return Ok(vec![self.table_capacity; self.table_count]);
        };
        if list.trim().is_empty() {
            return Err(AppError::config(NO_TABLES_MESSAGE));
        }

        list.split(',')
            .map(str::trim)
            .map(|item| {
                item.parse::<u32>().map_err(|_| {
                    AppError::with_message(
                        ErrorCode::ConfigError,
                        format!("TABLE_CAPACITIES entry '{}' is not a seat count", item),
                    )
                    .with_detail("entry", item)
                })
            })
            .collect()
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
