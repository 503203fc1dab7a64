use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::capacity::CapacityAggregator;
use crate::core::{Config, Result, ServerError};
use crate::db::DbService;
use crate::db::repository::RestaurantRepository;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc / 句柄实现浅拷贝，每个请求克隆的成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | capacity | CapacityAggregator | 容量统计 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// 容量统计 (基于 RestaurantRepository)
    pub capacity: CapacityAggregator,
}

impl ServerState {
    /// 基于已打开的数据库构造状态
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        let store = Arc::new(RestaurantRepository::new(db.clone()));
        Self {
            config,
            db,
            capacity: CapacityAggregator::new(store),
        }
    }

    /// 初始化服务器状态
    ///
    /// 创建工作目录并打开数据库
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db_path = config.database_path();
        std::fs::create_dir_all(&db_path).map_err(|e| {
            ServerError::Config(format!(
                "Failed to create database directory {}: {e}",
                db_path.display()
            ))
        })?;

        let db_path = db_path.to_string_lossy().into_owned();
        let db_service =
            DbService::new(&db_path, &config.db_namespace, &config.db_database).await?;

        Ok(Self::new(config.clone(), db_service.db))
    }
}
