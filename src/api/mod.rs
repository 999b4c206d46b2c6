// ==========================================
// 仓储绩效指标引擎 - API 层
// ==========================================
// 职责: 提供看板查询接口,供宿主表现层调用
// ==========================================

pub mod dashboard_api;
pub mod dto;
pub mod error;

// 重导出核心类型
pub use dashboard_api::DashboardApi;
pub use dto::{DashboardQuery, DistributionSlice, VarianceRow};
pub use error::{ApiError, ApiResult};
