// ==========================================
// 仓储绩效指标引擎 - 对比期计算
// ==========================================
// 职责: 推导紧邻当前区间之前、等长的对比区间
// 说明: 只计算区间,取数交给指标库
// ==========================================

use chrono::{Duration, NaiveDate};

use crate::domain::metric::DateRange;

// ==========================================
// ComparisonPeriodCalculator - 对比期计算器
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct ComparisonPeriodCalculator;

impl ComparisonPeriodCalculator {
    pub fn new() -> Self {
        Self
    }

    /// 对比窗口: 闭区间天数与 [start, end] 相同, 结束于 start 前一天
    ///
    /// 起止颠倒时先交换; 超出日期下界时截在 `NaiveDate::MIN`, 此时窗口会变短
    ///
    /// # 示例
    /// [2024-03-01, 2024-03-30] → [2024-01-31, 2024-02-29]
    pub fn comparison_window(&self, start: NaiveDate, end: NaiveDate) -> DateRange {
        let current = DateRange::normalized(start, end);
        let day_count = current.day_count();
        let comparison_end = current.start.pred_opt().unwrap_or(NaiveDate::MIN);
        let comparison_start = comparison_end
            .checked_sub_signed(Duration::days(day_count - 1))
            .unwrap_or(NaiveDate::MIN);
        DateRange::new(comparison_start, comparison_end)
    }

    /// 以 DateRange 为入参的便捷形式
    pub fn comparison_range(&self, range: &DateRange) -> DateRange {
        self.comparison_window(range.start, range.end)
    }
}
