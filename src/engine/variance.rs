// ==========================================
// 仓储绩效指标引擎 - 偏差计算
// ==========================================
// 职责: 预算/目标 vs 实际的偏差,供工时/产量偏差图与绩效偏差图使用
// 口径:
//   Hours       : Σ实际工时 - Σ预算工时（仅已上报记录）, ≤ 0 为有利
//   Volume      : Σ实际产量 - Σ预算产量（仅已上报记录）, ≤ 0 为有利
//   Performance : 平均绩效 - 绩效目标, ≥ 0 为有利
// ==========================================
// 红线: 方向按类型区分,不统一
// ==========================================

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

use crate::config::EngineConfig;
use crate::domain::metric::MetricRecord;
use crate::domain::types::VarianceKind;
use crate::engine::aggregation::average_performance;

/// 单组偏差
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VarianceMeasure {
    pub kind: VarianceKind,
    /// 预算值或目标值
    pub baseline: f64,
    pub actual: f64,
    /// actual - baseline
    pub variance: f64,
    /// 相对基线百分比; 基线为 0 时为 None
    pub variance_pct: Option<f64>,
    pub favorable: bool,
}

#[derive(Debug, Clone)]
pub struct VarianceCalculator {
    performance_target: f64,
}

impl Default for VarianceCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl VarianceCalculator {
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            performance_target: config.performance_target,
        }
    }

    /// 计算一组记录的偏差; 无可用数据时为 None
    pub fn measure<R: Borrow<MetricRecord>>(
        &self,
        kind: VarianceKind,
        records: &[R],
    ) -> Option<VarianceMeasure> {
        let (baseline, actual) = match kind {
            VarianceKind::Hours => sum_reported(records, |r| {
                r.actual_hours.map(|actual| (r.budgeted_hours, actual))
            })?,
            VarianceKind::Volume => sum_reported(records, |r| {
                r.actual_volume.map(|actual| (r.budgeted_volume, actual))
            })?,
            VarianceKind::Performance => (self.performance_target, average_performance(records)?),
        };

        let variance = actual - baseline;
        let variance_pct = if baseline == 0.0 {
            None
        } else {
            Some(variance / baseline * 100.0)
        };

        Some(VarianceMeasure {
            kind,
            baseline,
            actual,
            variance,
            variance_pct,
            favorable: kind.is_favorable(variance),
        })
    }
}

/// 仅累计已上报记录的 (基线, 实际)
fn sum_reported<R, F>(records: &[R], pick: F) -> Option<(f64, f64)>
where
    R: Borrow<MetricRecord>,
    F: Fn(&MetricRecord) -> Option<(f64, f64)>,
{
    let mut reported = false;
    let mut baseline = 0.0;
    let mut actual = 0.0;
    for record in records {
        let record: &MetricRecord = record.borrow();
        if let Some((b, a)) = pick(record) {
            reported = true;
            baseline += b;
            actual += a;
        }
    }
    reported.then_some((baseline, actual))
}
