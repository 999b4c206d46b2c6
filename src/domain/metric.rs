// ==========================================
// 仓储绩效指标引擎 - 指标记录与日期范围
// ==========================================
// 职责: 定义日粒度绩效记录 (date, site, job function, task)
// 红线: 记录一经产生不可变更,引擎只读不写
// ==========================================

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::types::HierarchyLevel;

// ==========================================
// MetricRecord - 日绩效记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricRecord {
    /// 日历日
    pub date: NaiveDate,

    pub site_id: String,
    pub job_function_id: String,
    pub task_id: String,

    /// 标准工时
    pub expected_hours: f64,

    /// 预算工时
    pub budgeted_hours: f64,

    /// 实际工时（None 表示尚未上报）
    #[serde(default)]
    pub actual_hours: Option<f64>,

    /// 预算产量
    pub budgeted_volume: f64,

    /// 实际产量（None 表示尚未上报）
    #[serde(default)]
    pub actual_volume: Option<f64>,

    /// 预测产量
    pub forecasted_volume: f64,

    /// 预算效率 (件/小时)
    pub budgeted_rate: f64,

    /// 绩效百分比（仅在实际值上报后存在）
    #[serde(default)]
    pub performance: Option<f64>,
}

impl MetricRecord {
    /// 按层级取分组键
    ///
    /// Region 不在记录上直接出现,需经注册表由站点映射
    pub fn key_for(&self, level: HierarchyLevel) -> Option<&str> {
        match level {
            HierarchyLevel::Site => Some(&self.site_id),
            HierarchyLevel::JobFunction => Some(&self.job_function_id),
            HierarchyLevel::Task => Some(&self.task_id),
            HierarchyLevel::Region => None,
        }
    }

    /// 实际值是否已上报
    pub fn is_completed(&self) -> bool {
        self.actual_hours.is_some()
    }
}

// ==========================================
// DateRange - 闭区间日期范围
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// 起止颠倒时交换,保证 start <= end
    pub fn normalized(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self { start: end, end: start }
        }
    }

    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }

    /// 闭区间天数 (end - start + 1)
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// 截取到可用范围内; 无交集时返回 None
    pub fn clamp_to(&self, bounds: &DateRange) -> Option<DateRange> {
        let start = self.start.max(bounds.start);
        let end = self.end.min(bounds.end);
        if start <= end {
            Some(DateRange { start, end })
        } else {
            None
        }
    }

    /// 逐日迭代
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..self.day_count().max(0)).map(move |offset| self.start + Duration::days(offset))
    }
}
