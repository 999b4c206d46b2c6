// ==========================================
// 仓储绩效指标引擎 - 排名引擎
// ==========================================
// 职责: 按排名口径过滤/排序已聚合分组,并计算较对比期的名次变化
// 输入: 本期候选 + 对比期候选
// 输出: 排序后的 RankingEntry 列表
// ==========================================
// 步骤:
// 1) 过滤: 口径值缺失（产量口径要求 > 0）的分组剔除
// 2) 排序: 口径值降序; 同值按名称升序, 再按 id 升序
// 3) 名次变化: 对比期按绩效口径同样过滤排序, 变化 = 旧下标 - 新下标
// 4) 百分位: (N - i) / N * 100
// ==========================================

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::config::EngineConfig;
use crate::domain::aggregate::{RankCandidate, RankingEntry};
use crate::domain::types::RankingCriterion;

// ==========================================
// RankingEngine - 排名引擎
// ==========================================
#[derive(Debug, Clone)]
pub struct RankingEngine {
    top_quartile_percentile: f64,
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RankingEngine {
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            top_quartile_percentile: config.top_quartile_percentile,
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 排名
    ///
    /// # 参数
    /// - `entries`: 本期已聚合分组
    /// - `criterion`: 排名口径
    /// - `comparison`: 对比期已聚合分组（仅用绩效口径计算名次变化）
    pub fn rank(
        &self,
        entries: &[RankCandidate],
        criterion: RankingCriterion,
        comparison: &[RankCandidate],
    ) -> Vec<RankingEntry> {
        let current = Self::filter_and_sort(entries, criterion);

        let previous_index: HashMap<&str, usize> =
            Self::filter_and_sort(comparison, RankingCriterion::Performance)
                .iter()
                .enumerate()
                .map(|(index, (candidate, _))| (candidate.id.as_str(), index))
                .collect();

        let total = current.len();
        current
            .into_iter()
            .enumerate()
            .map(|(index, (candidate, _))| {
                let (rank_change, has_prior_rank) = match previous_index.get(candidate.id.as_str())
                {
                    Some(&previous) => (previous as i32 - index as i32, true),
                    None => (0, false),
                };
                RankingEntry {
                    id: candidate.id.clone(),
                    name: candidate.name.clone(),
                    subtitle: candidate.subtitle.clone(),
                    is_current: candidate.is_current,
                    aggregate: candidate.aggregate.clone(),
                    rank_change,
                    has_prior_rank,
                    percentile: percentile(index, total),
                }
            })
            .collect()
    }

    /// 是否进入前 25%
    pub fn is_top_quartile(&self, entry: &RankingEntry) -> bool {
        entry.percentile >= self.top_quartile_percentile
    }

    /// 过滤口径缺失项并降序排序
    fn filter_and_sort(
        entries: &[RankCandidate],
        criterion: RankingCriterion,
    ) -> Vec<(&RankCandidate, f64)> {
        let mut ranked: Vec<(&RankCandidate, f64)> = entries
            .iter()
            .filter_map(|c| c.aggregate.criterion_value(criterion).map(|v| (c, v)))
            .collect();
        ranked.sort_by(|a, b| compare(a, b));
        ranked
    }
}

/// 降序比较; 同值按名称、id 升序
fn compare(a: &(&RankCandidate, f64), b: &(&RankCandidate, f64)) -> Ordering {
    b.1.total_cmp(&a.1)
        .then_with(|| a.0.name.cmp(&b.0.name))
        .then_with(|| a.0.id.cmp(&b.0.id))
}

/// 百分位 (N - i) / N * 100, i 为从 0 开始的名次下标
pub fn percentile(index: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (total - index.min(total)) as f64 / total as f64 * 100.0
}
