// ==========================================
// 仓储绩效指标引擎 - 引擎层
// ==========================================
// 职责: 聚合、对比期、排名、下钻、过滤、偏差、趋势、层级汇总
// 红线: 引擎不做 I/O, 同步纯计算, 每次输入变化全量重算
// ==========================================

pub mod aggregation;
pub mod comparison;
pub mod drill_down;
pub mod filter;
pub mod ranking;
pub mod rollup;
pub mod trend;
pub mod variance;

// 重导出核心引擎
pub use aggregation::{average_performance, consistency_score, improvement_rate, AggregationEngine};
pub use comparison::ComparisonPeriodCalculator;
pub use drill_down::{Breadcrumb, DrillDownController, DrillDownCursor};
pub use filter::{top_n, RecordFilter};
pub use ranking::{percentile, RankingEngine};
pub use rollup::{HierarchyRollup, HierarchyRow};
pub use trend::{daily_series, TrendPoint};
pub use variance::{VarianceCalculator, VarianceMeasure};
