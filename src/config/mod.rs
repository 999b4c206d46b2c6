// ==========================================
// 仓储绩效指标引擎 - 配置层
// ==========================================
// 职责: 引擎阈值与截断参数,支持 JSON 覆写
// ==========================================

pub mod engine_config;
pub mod error;

// 重导出核心配置
pub use engine_config::{defaults, EngineConfig};
pub use error::{ConfigError, ConfigResult};
