// ==========================================
// 仓储绩效指标引擎 - API层错误类型
// ==========================================
// 职责: 定义 API 层错误类型, 转换仓储/配置错误为可展示的错误消息
// 说明: 引擎计算本身不报错; 此处只覆盖查询参数与数据装载问题
// ==========================================

use crate::config::error::ConfigError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("日期范围无效: start={start}, end={end}")]
    InvalidDateRange { start: String, end: String },

    #[error("数据源错误: {0}")]
    DataSourceError(String),

    #[error("配置错误: {0}")]
    ConfigError(#[from] ConfigError),
}

// ==========================================
// 从 RepositoryError 转换
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DataSourceUnavailable(msg) => ApiError::DataSourceError(msg),
            RepositoryError::Io { path, source } => {
                ApiError::DataSourceError(format!("{}: {}", path, source))
            }
            RepositoryError::Deserialize(e) => {
                ApiError::InvalidInput(format!("数据格式错误: {}", e))
            }
            RepositoryError::DuplicateNode { entity, id } => {
                ApiError::InvalidInput(format!("{}(id={})重复", entity, id))
            }
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
