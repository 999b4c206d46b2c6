// ==========================================
// 仓储绩效指标引擎 - 低绩效过滤与 Top-N 截断
// ==========================================
// 低绩效过滤: 分组前执行, 仅保留 performance 存在且 < 阈值（严格小于）
// Top-N 截断: 分组后执行, 按当前取值降序排序后保留前 N 个
// ==========================================

use std::borrow::Borrow;

use crate::config::EngineConfig;
use crate::domain::metric::MetricRecord;

#[derive(Debug, Clone)]
pub struct RecordFilter {
    underperforming_threshold: f64,
    top_n_limit: usize,
}

impl Default for RecordFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            underperforming_threshold: config.underperforming_threshold,
            top_n_limit: config.top_n_limit,
        }
    }

    /// 是否为低绩效记录（未上报绩效的记录不算）
    pub fn is_underperforming(&self, record: &MetricRecord) -> bool {
        record
            .performance
            .map_or(false, |p| p < self.underperforming_threshold)
    }

    /// 低绩效过滤
    pub fn underperforming<R>(&self, records: &[R]) -> Vec<R>
    where
        R: Borrow<MetricRecord> + Clone,
    {
        records
            .iter()
            .filter(|r| {
                let record: &MetricRecord = (*r).borrow();
                self.is_underperforming(record)
            })
            .cloned()
            .collect()
    }

    /// 按开关决定是否过滤; 关闭时原样返回
    pub fn apply<R>(&self, records: Vec<R>, underperforming_only: bool) -> Vec<R>
    where
        R: Borrow<MetricRecord>,
    {
        if !underperforming_only {
            return records;
        }
        records
            .into_iter()
            .filter(|r| {
                let record: &MetricRecord = r.borrow();
                self.is_underperforming(record)
            })
            .collect()
    }

    /// Top-N 截断（按配置上限）
    pub fn top_n<T, F>(&self, items: Vec<T>, value_fn: F) -> Vec<T>
    where
        F: Fn(&T) -> f64,
    {
        top_n(items, value_fn, self.top_n_limit)
    }
}

/// 按取值降序稳定排序后保留前 `limit` 个
///
/// 少于 `limit` 的输入同样排序后全部返回
pub fn top_n<T, F>(mut items: Vec<T>, value_fn: F, limit: usize) -> Vec<T>
where
    F: Fn(&T) -> f64,
{
    items.sort_by(|a, b| value_fn(b).total_cmp(&value_fn(a)));
    items.truncate(limit);
    items
}
