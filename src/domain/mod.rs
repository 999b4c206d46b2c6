// ==========================================
// 仓储绩效指标引擎 - 领域模型层
// ==========================================
// 职责: 定义指标记录、组织层级、聚合/排名结果及枚举类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod aggregate;
pub mod hierarchy;
pub mod metric;
pub mod types;

// 重导出核心类型
pub use aggregate::{AggregateResult, RankCandidate, RankingEntry};
pub use hierarchy::{HierarchyNode, JobFunction, Region, Site, Task};
pub use metric::{DateRange, MetricRecord};
pub use types::{HierarchyLevel, RankingCriterion, Role, VarianceKind};
