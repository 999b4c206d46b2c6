// ==========================================
// 仓储绩效指标引擎 - 趋势序列
// ==========================================
// 职责: 按日汇总绩效,供趋势图在当前下钻范围内绘制
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeMap;

use crate::domain::metric::MetricRecord;
use crate::engine::aggregation::average_performance;

/// 单日趋势点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub average_performance: Option<f64>,
    pub total_actual_hours: f64,
    pub total_volume: f64,
    pub record_count: usize,
}

/// 按日期升序输出; 无记录的日期不出现
pub fn daily_series<R: Borrow<MetricRecord>>(records: &[R]) -> Vec<TrendPoint> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&MetricRecord>> = BTreeMap::new();
    for record in records {
        let record: &MetricRecord = record.borrow();
        by_date.entry(record.date).or_default().push(record);
    }

    by_date
        .into_iter()
        .map(|(date, day)| TrendPoint {
            date,
            average_performance: average_performance(day.as_slice()),
            total_actual_hours: day.iter().map(|r| r.actual_hours.unwrap_or(0.0)).sum(),
            total_volume: day.iter().map(|r| r.actual_volume.unwrap_or(0.0)).sum(),
            record_count: day.len(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(day: u32, performance: Option<f64>) -> MetricRecord {
        MetricRecord {
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            site_id: "site-1".to_string(),
            job_function_id: "jf-1".to_string(),
            task_id: "t-1".to_string(),
            expected_hours: 8.0,
            budgeted_hours: 8.0,
            actual_hours: performance.map(|_| 6.0),
            budgeted_volume: 100.0,
            actual_volume: performance.map(|_| 50.0),
            forecasted_volume: 100.0,
            budgeted_rate: 12.5,
            performance,
        }
    }

    #[test]
    fn test_daily_series_groups_and_orders_by_date() {
        let records = vec![
            record(3, Some(100.0)),
            record(1, Some(90.0)),
            record(3, Some(80.0)),
            record(2, None),
        ];

        let series = daily_series(&records);

        assert_eq!(series.len(), 3);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(series[0].average_performance, Some(90.0));
        assert_eq!(series[1].average_performance, None);
        assert_eq!(series[1].total_actual_hours, 0.0);
        assert_eq!(series[2].average_performance, Some(90.0));
        assert_eq!(series[2].record_count, 2);
        assert_eq!(series[2].total_volume, 100.0);
    }

    #[test]
    fn test_empty_input_yields_empty_series() {
        let records: Vec<MetricRecord> = Vec::new();
        assert!(daily_series(&records).is_empty());
    }
}
