//! Restaurant Server - 餐厅记录服务
//!
//! Keeps restaurant records in an embedded SurrealDB and refreshes each
//! restaurant's capacity counters (table count, active order count) whenever
//! it is read.
//!
//! ```text
//! restaurant-server/src/
//! ├── core/          # 配置、状态、错误、HTTP 服务器
//! ├── capacity/      # 容量统计 (RestaurantStore + CapacityAggregator)
//! ├── db/            # SurrealDB 模型与仓储
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 日志等工具
//! ```

pub mod api;
pub mod capacity;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use capacity::{CapacityAggregator, RestaurantStore};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 设置运行环境: 加载 .env，读取配置，初始化日志
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}

pub fn print_banner() {
    println!(
        r#"
  ___         _                         _
 | _ \___ ___| |_ __ _ _  _ _ _ __ _ _ _| |_
 |   / -_|_-<|  _/ _` | || | '_/ _` | ' \  _|
 |_|_\___/__/ \__\__,_|\_,_|_| \__,_|_||_\__|
    "#
    );
}
