//! Host stand - 餐厅前台候位与入座
//!
//! # 架构概述
//!
//! - **座位核心** (`seating`): 桌台状态机、候位队列、入座分配
//! - **命令处理** (`manager`): 幂等命令执行 + 单锁并发封装
//! - **配置** (`core`): 环境变量配置
//! - **日志** (`utils`): tracing 日志初始化
//! - **前台命令行** (`cli`): 文本输入解析与输出渲染
//!
//! # 模块结构
//!
//! ```text
//! host-stand/src/
//! ├── seating/       # Table, Waitlist, Restaurant, assignment
//! ├── manager/       # SeatingManager, SeatingService
//! ├── core/          # 配置
//! ├── utils/         # 日志
//! └── cli/           # 解析与渲染
//! ```

pub mod cli;
pub mod core;
pub mod manager;
pub mod seating;
pub mod utils;

// Re-export 公共类型
pub use crate::core::Config;
pub use manager::{SeatingManager, SeatingService};
pub use seating::{Restaurant, SeatingError, SeatingResult, Table, Waitlist};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv, 日志) 并返回配置
pub fn setup_environment() -> Config {
    // .env is optional
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}
