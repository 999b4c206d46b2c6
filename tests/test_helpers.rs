// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供集成测试所需的指标记录构建器与标准组织层级
// ==========================================
#![allow(dead_code)]

use chrono::NaiveDate;
use std::sync::Arc;
use warehouse_perf::domain::metric::{DateRange, MetricRecord};
use warehouse_perf::repository::{InMemoryHierarchyRegistry, InMemoryMetricsStore};

/// 2024 年 3 月的某一天
pub fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
}

/// 本期: 3/8 ~ 3/12（对比期 3/3 ~ 3/7）
pub fn current_period() -> DateRange {
    DateRange::new(d(8), d(12))
}

// ==========================================
// MetricRecord 构建器
// ==========================================

pub struct MetricBuilder {
    record: MetricRecord,
}

impl MetricBuilder {
    /// 默认: 预算/实际工时 8, 产量 100, 绩效 100
    pub fn new(day: u32, site_id: &str, job_function_id: &str, task_id: &str) -> Self {
        Self {
            record: MetricRecord {
                date: d(day),
                site_id: site_id.to_string(),
                job_function_id: job_function_id.to_string(),
                task_id: task_id.to_string(),
                expected_hours: 8.0,
                budgeted_hours: 8.0,
                actual_hours: Some(8.0),
                budgeted_volume: 100.0,
                actual_volume: Some(100.0),
                forecasted_volume: 100.0,
                budgeted_rate: 12.5,
                performance: Some(100.0),
            },
        }
    }

    pub fn performance(mut self, performance: f64) -> Self {
        self.record.performance = Some(performance);
        self
    }

    pub fn actual_hours(mut self, hours: f64) -> Self {
        self.record.actual_hours = Some(hours);
        self
    }

    pub fn budgeted_hours(mut self, hours: f64) -> Self {
        self.record.budgeted_hours = hours;
        self
    }

    pub fn actual_volume(mut self, volume: f64) -> Self {
        self.record.actual_volume = Some(volume);
        self
    }

    /// 未上报实绩
    pub fn unreported(mut self) -> Self {
        self.record.actual_hours = None;
        self.record.actual_volume = None;
        self.record.performance = None;
        self
    }

    pub fn build(self) -> MetricRecord {
        self.record
    }
}

// ==========================================
// 标准组织层级
// ==========================================
// South: Dallas(Receiving, Picking), Austin(Receiving)
// West : Phoenix(Picking)
// ==========================================

pub const HIERARCHY_JSON: &str = r#"{
    "regions": [
        {"id": "r-south", "name": "South"},
        {"id": "r-west", "name": "West"}
    ],
    "sites": [
        {"id": "site-dal", "name": "Dallas", "regionId": "r-south"},
        {"id": "site-aus", "name": "Austin", "regionId": "r-south"},
        {"id": "site-phx", "name": "Phoenix", "regionId": "r-west"}
    ],
    "jobFunctions": [
        {"id": "jf-dal-rcv", "name": "Receiving", "siteId": "site-dal", "functionType": "receiving"},
        {"id": "jf-dal-pck", "name": "Picking", "siteId": "site-dal", "functionType": "picking"},
        {"id": "jf-aus-rcv", "name": "Receiving", "siteId": "site-aus", "functionType": "receiving"},
        {"id": "jf-phx-pck", "name": "Picking", "siteId": "site-phx", "functionType": "picking"}
    ],
    "tasks": [
        {"id": "t-unload", "name": "Unload", "jobFunctionType": "receiving"},
        {"id": "t-putaway", "name": "Putaway", "jobFunctionType": "receiving"},
        {"id": "t-pick", "name": "Pick", "jobFunctionType": "picking"},
        {"id": "t-pack", "name": "Pack", "jobFunctionType": "picking"}
    ]
}"#;

pub fn registry() -> Arc<InMemoryHierarchyRegistry> {
    Arc::new(InMemoryHierarchyRegistry::from_json_str(HIERARCHY_JSON).unwrap())
}

/// 标准数据集
///
/// 本期站点平均绩效: Phoenix 99.5, Dallas 97, Austin 90
/// 对比期站点平均绩效: Austin 102, Dallas 96.33, Phoenix 94
pub fn standard_records() -> Vec<MetricRecord> {
    vec![
        // 对比期 3/3 ~ 3/7
        MetricBuilder::new(3, "site-dal", "jf-dal-rcv", "t-unload").performance(90.0).build(),
        MetricBuilder::new(4, "site-dal", "jf-dal-rcv", "t-putaway").performance(99.0).build(),
        MetricBuilder::new(5, "site-dal", "jf-dal-pck", "t-pick").performance(100.0).build(),
        MetricBuilder::new(3, "site-aus", "jf-aus-rcv", "t-unload").performance(102.0).build(),
        MetricBuilder::new(6, "site-phx", "jf-phx-pck", "t-pick").performance(94.0).build(),
        // 本期 3/8 ~ 3/12
        MetricBuilder::new(8, "site-dal", "jf-dal-rcv", "t-unload").performance(98.0).build(),
        MetricBuilder::new(9, "site-dal", "jf-dal-rcv", "t-unload").performance(96.0).build(),
        MetricBuilder::new(8, "site-dal", "jf-dal-rcv", "t-putaway").performance(90.0).build(),
        MetricBuilder::new(10, "site-dal", "jf-dal-pck", "t-pick").performance(104.0).build(),
        MetricBuilder::new(8, "site-aus", "jf-aus-rcv", "t-unload").performance(88.0).build(),
        MetricBuilder::new(11, "site-aus", "jf-aus-rcv", "t-unload").performance(92.0).build(),
        MetricBuilder::new(12, "site-phx", "jf-phx-pck", "t-pick").performance(100.0).build(),
        MetricBuilder::new(12, "site-phx", "jf-phx-pck", "t-pack").performance(99.0).build(),
    ]
}

pub fn store(records: Vec<MetricRecord>) -> Arc<InMemoryMetricsStore> {
    Arc::new(InMemoryMetricsStore::new(records))
}

/// 浮点近似比较
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {} but got {}",
        expected,
        actual
    );
}
