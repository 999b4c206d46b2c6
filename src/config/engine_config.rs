// ==========================================
// 仓储绩效指标引擎 - 引擎配置
// ==========================================
// 职责: 阈值/截断数量等可调参数,支持 JSON 覆写
// 说明: 缺省字段回落到默认值,加载后统一校验
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::error::{ConfigError, ConfigResult};

pub mod defaults {
    /// 低绩效过滤阈值（严格小于）
    pub const UNDERPERFORMING_THRESHOLD: f64 = 95.0;
    /// 饼图等有界可视化的最大分组数
    pub const TOP_N_LIMIT: usize = 8;
    /// 迷你趋势线取最近记录条数
    pub const RECENT_SERIES_LEN: usize = 7;
    /// 前 25% 徽章阈值
    pub const TOP_QUARTILE_PERCENTILE: f64 = 75.0;
    /// 绩效目标值（偏差基线）
    pub const PERFORMANCE_TARGET: f64 = 100.0;
}

/// 引擎配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    #[serde(default = "default_underperforming_threshold")]
    pub underperforming_threshold: f64,

    #[serde(default = "default_top_n_limit")]
    pub top_n_limit: usize,

    #[serde(default = "default_recent_series_len")]
    pub recent_series_len: usize,

    #[serde(default = "default_top_quartile_percentile")]
    pub top_quartile_percentile: f64,

    #[serde(default = "default_performance_target")]
    pub performance_target: f64,
}

fn default_underperforming_threshold() -> f64 {
    defaults::UNDERPERFORMING_THRESHOLD
}

fn default_top_n_limit() -> usize {
    defaults::TOP_N_LIMIT
}

fn default_recent_series_len() -> usize {
    defaults::RECENT_SERIES_LEN
}

fn default_top_quartile_percentile() -> f64 {
    defaults::TOP_QUARTILE_PERCENTILE
}

fn default_performance_target() -> f64 {
    defaults::PERFORMANCE_TARGET
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            underperforming_threshold: defaults::UNDERPERFORMING_THRESHOLD,
            top_n_limit: defaults::TOP_N_LIMIT,
            recent_series_len: defaults::RECENT_SERIES_LEN,
            top_quartile_percentile: defaults::TOP_QUARTILE_PERCENTILE,
            performance_target: defaults::PERFORMANCE_TARGET,
        }
    }
}

impl EngineConfig {
    /// 从 JSON 字符串加载（缺省字段取默认值）
    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        let config: EngineConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件加载
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json_str(&raw)?;
        tracing::info!(path = %path.display(), "已加载引擎配置");
        Ok(config)
    }

    /// 配置快照（JSON）
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// 校验参数取值范围
    pub fn validate(&self) -> ConfigResult<()> {
        if self.top_n_limit == 0 {
            return Err(ConfigError::InvalidValue {
                key: "topNLimit".to_string(),
                message: "必须大于 0".to_string(),
            });
        }
        if self.recent_series_len == 0 {
            return Err(ConfigError::InvalidValue {
                key: "recentSeriesLen".to_string(),
                message: "必须大于 0".to_string(),
            });
        }
        if !(0.0..=100.0).contains(&self.top_quartile_percentile) {
            return Err(ConfigError::InvalidValue {
                key: "topQuartilePercentile".to_string(),
                message: format!("超出 0~100 范围: {}", self.top_quartile_percentile),
            });
        }
        if !self.underperforming_threshold.is_finite() || !self.performance_target.is_finite() {
            return Err(ConfigError::InvalidValue {
                key: "underperformingThreshold/performanceTarget".to_string(),
                message: "必须为有限数值".to_string(),
            });
        }
        Ok(())
    }
}
