// ==========================================
// 仓储绩效指标引擎 - 聚合引擎
// ==========================================
// 职责: 按任意键对指标记录分组,按组计算固定统计包
// 输入: 日绩效记录（可附对比期记录）
// 输出: AggregateResult
// ==========================================
// 红线: 无状态引擎,所有方法都是纯函数
// 红线: 除数为 0 时输出 None,不产生 Infinity/NaN
// 红线: 不校验输入（负工时等原样参与计算）
// ==========================================

use std::borrow::Borrow;
use std::collections::BTreeMap;
use tracing::instrument;

use crate::config::EngineConfig;
use crate::domain::aggregate::AggregateResult;
use crate::domain::metric::MetricRecord;
use crate::domain::types::HierarchyLevel;


// ==========================================
// AggregationEngine - 聚合引擎
// ==========================================
#[derive(Debug, Clone)]
pub struct AggregationEngine {
    recent_series_len: usize,
}

impl Default for AggregationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AggregationEngine {
    /// 使用默认配置创建
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            recent_series_len: config.recent_series_len,
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算统计包（不含改善率）
    ///
    /// 空输入返回全 None / 0 的结果
    pub fn aggregate<R: Borrow<MetricRecord>>(&self, records: &[R]) -> AggregateResult {
        let mut total_expected_hours = 0.0;
        let mut total_budgeted_hours = 0.0;
        let mut total_actual_hours = 0.0;
        let mut total_volume = 0.0;
        let mut completed_count = 0;
        let mut performances = Vec::with_capacity(records.len());

        for record in records {
            let record: &MetricRecord = record.borrow();
            total_expected_hours += record.expected_hours;
            total_budgeted_hours += record.budgeted_hours;
            total_actual_hours += record.actual_hours.unwrap_or(0.0);
            total_volume += record.actual_volume.unwrap_or(0.0);
            if record.is_completed() {
                completed_count += 1;
            }
            if let Some(p) = record.performance {
                performances.push(p);
            }
        }

        let efficiency = if total_actual_hours == 0.0 {
            None
        } else {
            Some(total_expected_hours / total_actual_hours * 100.0)
        };

        let budget_adherence = if total_budgeted_hours == 0.0 {
            None
        } else {
            Some(
                (1.0 - (total_budgeted_hours - total_actual_hours).abs() / total_budgeted_hours)
                    * 100.0,
            )
        };

        let tail_start = records.len().saturating_sub(self.recent_series_len);
        let recent_series = records[tail_start..]
            .iter()
            .map(|r| {
                let record: &MetricRecord = r.borrow();
                record.performance.unwrap_or(0.0)
            })
            .collect();

        AggregateResult {
            average_performance: mean(&performances),
            efficiency,
            budget_adherence,
            improvement_rate: None,
            consistency_score: consistency_score(&performances),
            total_volume,
            total_expected_hours,
            total_actual_hours,
            record_count: records.len(),
            completed_count,
            recent_series,
        }
    }

    /// 计算统计包并附带对比期改善率
    pub fn aggregate_with_comparison<R, C>(&self, records: &[R], comparison: &[C]) -> AggregateResult
    where
        R: Borrow<MetricRecord>,
        C: Borrow<MetricRecord>,
    {
        let mut result = self.aggregate(records);
        let previous = average_performance(comparison);
        result.improvement_rate = improvement_rate(result.average_performance, previous);
        result
    }

    // ==========================================
    // 分组
    // ==========================================

    /// 按键函数分组
    ///
    /// 组内保持输入顺序; 有序 Map 保证遍历顺序确定
    pub fn group_by<'a, K, F>(
        &self,
        records: &'a [MetricRecord],
        key_fn: F,
    ) -> BTreeMap<K, Vec<&'a MetricRecord>>
    where
        K: Ord,
        F: Fn(&'a MetricRecord) -> K,
    {
        let mut groups: BTreeMap<K, Vec<&'a MetricRecord>> = BTreeMap::new();
        for record in records {
            groups.entry(key_fn(record)).or_default().push(record);
        }
        groups
    }

    /// 按层级分组（站点 / 作业职能 / 任务）
    ///
    /// Region 不在记录上,需由调用方经注册表映射后自行分组; 此处返回空
    pub fn group_by_level<'a>(
        &self,
        records: &'a [MetricRecord],
        level: HierarchyLevel,
    ) -> BTreeMap<&'a str, Vec<&'a MetricRecord>> {
        let mut groups: BTreeMap<&'a str, Vec<&'a MetricRecord>> = BTreeMap::new();
        for record in records {
            if let Some(key) = record.key_for(level) {
                groups.entry(key).or_default().push(record);
            }
        }
        groups
    }

    /// 逐组聚合,对比期同键分组用于改善率
    #[instrument(skip(self, groups, comparison_groups), fields(groups = groups.len()))]
    pub fn aggregate_groups<'a>(
        &self,
        groups: &BTreeMap<&'a str, Vec<&'a MetricRecord>>,
        comparison_groups: &BTreeMap<&'a str, Vec<&'a MetricRecord>>,
    ) -> BTreeMap<&'a str, AggregateResult> {
        groups
            .iter()
            .filter(|(_, records)| !records.is_empty())
            .map(|(key, records)| {
                let comparison: &[&MetricRecord] = comparison_groups
                    .get(key)
                    .map(|v| v.as_slice())
                    .unwrap_or(&[]);
                (*key, self.aggregate_with_comparison(records.as_slice(), comparison))
            })
            .collect()
    }
}

// ==========================================
// 统计函数
// ==========================================

/// 有绩效记录的平均绩效
pub fn average_performance<R: Borrow<MetricRecord>>(records: &[R]) -> Option<f64> {
    let values: Vec<f64> = records
        .iter()
        .filter_map(|r| {
            let record: &MetricRecord = r.borrow();
            record.performance
        })
        .collect();
    mean(&values)
}

/// 改善率 = 本期平均绩效 - 对比期平均绩效
pub fn improvement_rate(current: Option<f64>, previous: Option<f64>) -> Option<f64> {
    match (current, previous) {
        (Some(current), Some(previous)) => Some(current - previous),
        _ => None,
    }
}

/// 稳定性评分 = max(0, 100 - 总体标准差)
///
/// 单值或全部相等时恒为 100
pub fn consistency_score(values: &[f64]) -> Option<f64> {
    match values {
        [] => None,
        [_] => Some(100.0),
        [first, rest @ ..] if rest.iter().all(|v| v == first) => Some(100.0),
        _ => {
            let avg = mean(values)?;
            let variance =
                values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
            Some((100.0 - variance.sqrt()).clamp(0.0, 100.0))
        }
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
