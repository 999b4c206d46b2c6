// ==========================================
// 仓储绩效指标引擎 - 聚合结果与排名条目
// ==========================================
// 职责: 定义分组聚合输出及排名输出
// 红线: 每次调用重新计算,不持久化
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::RankingCriterion;

/// 分组聚合结果
///
/// 除计数/合计外,所有派生指标在除数为 0 或无数据时为 None
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    pub average_performance: Option<f64>,
    pub efficiency: Option<f64>,
    pub budget_adherence: Option<f64>,
    pub improvement_rate: Option<f64>,
    pub consistency_score: Option<f64>,
    pub total_volume: f64,
    pub total_expected_hours: f64,
    pub total_actual_hours: f64,
    pub record_count: usize,
    pub completed_count: usize,
    /// 最近若干条记录的绩效（缺失记 0）,供迷你趋势线使用
    pub recent_series: Vec<f64>,
}

impl AggregateResult {
    /// 按排名口径取值
    ///
    /// 产量口径要求严格大于 0,其余口径以 None 表示缺失
    pub fn criterion_value(&self, criterion: RankingCriterion) -> Option<f64> {
        match criterion {
            RankingCriterion::Performance => self.average_performance,
            RankingCriterion::Efficiency => self.efficiency,
            RankingCriterion::BudgetAdherence => self.budget_adherence,
            RankingCriterion::Improvement => self.improvement_rate,
            RankingCriterion::Consistency => self.consistency_score,
            RankingCriterion::Volume => {
                if self.total_volume > 0.0 {
                    Some(self.total_volume)
                } else {
                    None
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}

/// 排名输入: 已聚合的分组 + 展示信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankCandidate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub is_current: bool,
    #[serde(flatten)]
    pub aggregate: AggregateResult,
}

impl RankCandidate {
    pub fn new(id: impl Into<String>, name: impl Into<String>, aggregate: AggregateResult) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subtitle: String::new(),
            is_current: false,
            aggregate,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn with_current(mut self, is_current: bool) -> Self {
        self.is_current = is_current;
        self
    }
}

/// 排名条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    pub id: String,
    pub name: String,
    pub subtitle: String,
    pub is_current: bool,
    #[serde(flatten)]
    pub aggregate: AggregateResult,
    /// 名次变化: 正数表示较对比期上升
    pub rank_change: i32,
    /// 对比期是否存在名次（false 时 rank_change 恒为 0, 表示"无历史数据"）
    pub has_prior_rank: bool,
    /// 百分位 (N - i) / N * 100
    pub percentile: f64,
}

impl RankingEntry {
    /// 是否为真实的"名次未变"（区别于无历史数据）
    pub fn is_unchanged(&self) -> bool {
        self.has_prior_rank && self.rank_change == 0
    }
}
