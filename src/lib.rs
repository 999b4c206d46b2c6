// ==========================================
// 仓储绩效指标引擎 - 核心库
// ==========================================
// 系统定位: 仓储运营绩效看板的计算核心
// 覆盖: 层级聚合、对比期、排名、角色下钻、低绩效过滤
// 红线: 引擎同步纯计算, 取数经 repository 接口注入
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 指标库与层级注册表
pub mod repository;

// 引擎层 - 计算规则
pub mod engine;

// 配置层 - 阈值与截断参数
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 看板接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{HierarchyLevel, RankingCriterion, Role, VarianceKind};

// 领域实体
pub use domain::{
    AggregateResult, DateRange, HierarchyNode, JobFunction, MetricRecord, RankCandidate,
    RankingEntry, Region, Site, Task,
};

// 引擎
pub use engine::{
    AggregationEngine, ComparisonPeriodCalculator, DrillDownController, HierarchyRollup,
    RankingEngine, RecordFilter, VarianceCalculator,
};

// 仓储
pub use repository::{
    HierarchyRegistry, InMemoryHierarchyRegistry, InMemoryMetricsStore, MetricsStore,
};

// 配置
pub use config::EngineConfig;

// API
pub use api::{DashboardApi, DashboardQuery};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "仓储绩效指标引擎";
