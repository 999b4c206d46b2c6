// ==========================================
// 仓储绩效指标引擎 - 仓储层错误类型
// ==========================================
// 职责: 数据访问协作方（指标库/层级注册表）的失败
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("数据源不可用: {0}")]
    DataSourceUnavailable(String),

    #[error("数据解析失败: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("数据文件读取失败 (path={path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("重复的层级节点: {entity} with id={id}")]
    DuplicateNode { entity: String, id: String },
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
