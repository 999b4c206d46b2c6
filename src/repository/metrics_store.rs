// ==========================================
// 仓储绩效指标引擎 - 指标库
// ==========================================
// 职责: 按日期范围（可选站点）提供日绩效记录
// 说明: MetricsStore 为外部协作方接口; InMemoryMetricsStore 供宿主与测试使用
// ==========================================

use std::path::Path;

use crate::domain::metric::{DateRange, MetricRecord};
use crate::repository::error::{RepositoryError, RepositoryResult};

/// 指标库接口
pub trait MetricsStore {
    /// 日期范围内全部记录（按日期升序）
    fn metrics_by_date_range(&self, range: &DateRange) -> RepositoryResult<Vec<MetricRecord>>;

    /// 指定站点在日期范围内的记录（按日期升序）
    fn metrics_by_site_and_date_range(
        &self,
        site_id: &str,
        range: &DateRange,
    ) -> RepositoryResult<Vec<MetricRecord>>;

    /// 可查询的日期边界; 无数据时为 None
    fn available_date_range(&self) -> RepositoryResult<Option<DateRange>>;
}

// ==========================================
// InMemoryMetricsStore - 内存指标库
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct InMemoryMetricsStore {
    records: Vec<MetricRecord>,
}

impl InMemoryMetricsStore {
    /// 创建指标库,记录按日期稳定排序
    pub fn new(mut records: Vec<MetricRecord>) -> Self {
        records.sort_by(|a, b| a.date.cmp(&b.date));
        Self { records }
    }

    /// 从 JSON 数组加载
    pub fn from_json_str(raw: &str) -> RepositoryResult<Self> {
        let records: Vec<MetricRecord> = serde_json::from_str(raw)?;
        Ok(Self::new(records))
    }

    /// 从 JSON 文件加载
    pub fn from_file(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| RepositoryError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let store = Self::from_json_str(&raw)?;
        tracing::info!(path = %path.display(), count = store.len(), "已加载指标记录");
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn select<F>(&self, range: &DateRange, predicate: F) -> Vec<MetricRecord>
    where
        F: Fn(&MetricRecord) -> bool,
    {
        self.records
            .iter()
            .filter(|r| range.contains(r.date) && predicate(r))
            .cloned()
            .collect()
    }
}

impl MetricsStore for InMemoryMetricsStore {
    fn metrics_by_date_range(&self, range: &DateRange) -> RepositoryResult<Vec<MetricRecord>> {
        Ok(self.select(range, |_| true))
    }

    fn metrics_by_site_and_date_range(
        &self,
        site_id: &str,
        range: &DateRange,
    ) -> RepositoryResult<Vec<MetricRecord>> {
        Ok(self.select(range, |r| r.site_id == site_id))
    }

    fn available_date_range(&self) -> RepositoryResult<Option<DateRange>> {
        let first = self.records.first().map(|r| r.date);
        let last = self.records.last().map(|r| r.date);
        Ok(first.zip(last).map(|(start, end)| DateRange::new(start, end)))
    }
}
