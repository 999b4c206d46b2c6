// ==========================================
// 仓储绩效指标引擎 - 数据仓储层
// ==========================================
// 职责: 外部协作方接口（指标库、层级注册表）及内存实现
// 红线: 引擎层只经由这些接口读取数据
// ==========================================

pub mod error;
pub mod hierarchy_registry;
pub mod metrics_store;

// 重导出核心类型
pub use error::{RepositoryError, RepositoryResult};
pub use hierarchy_registry::{HierarchyRegistry, HierarchySnapshot, InMemoryHierarchyRegistry};
pub use metrics_store::{InMemoryMetricsStore, MetricsStore};
