// ==========================================
// 仓储绩效指标引擎 - 层级汇总表
// ==========================================
// 职责: 为层级表组件生成 站点 → 作业职能 → 任务 的嵌套汇总行
// 输入: 层级注册表 + 本期记录 + 对比期记录 + 起始层级（组件当前下钻层级）
// 输出: Vec<HierarchyRow>（每层按名称、id 升序）
// ==========================================
// 红线: 引用了注册表中不存在的站点/作业职能/任务的分组直接剔除
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::instrument;

use crate::domain::aggregate::AggregateResult;
use crate::domain::hierarchy::HierarchyNode;
use crate::domain::metric::MetricRecord;
use crate::domain::types::HierarchyLevel;
use crate::engine::aggregation::AggregationEngine;
use crate::repository::hierarchy_registry::HierarchyRegistry;

/// 层级表行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyRow {
    pub id: String,
    pub name: String,
    pub level: HierarchyLevel,
    #[serde(flatten)]
    pub aggregate: AggregateResult,
    pub children: Vec<HierarchyRow>,
}

// ==========================================
// HierarchyRollup - 层级汇总
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct HierarchyRollup {
    aggregation: AggregationEngine,
}

impl HierarchyRollup {
    pub fn new(aggregation: AggregationEngine) -> Self {
        Self { aggregation }
    }

    /// 从 `start` 层级开始生成嵌套汇总行
    ///
    /// Region 不在记录上, 按 Site 处理
    #[instrument(skip_all, fields(count = records.len(), start = %start))]
    pub fn build<H: HierarchyRegistry + ?Sized>(
        &self,
        registry: &H,
        records: &[MetricRecord],
        comparison: &[MetricRecord],
        start: HierarchyLevel,
    ) -> Vec<HierarchyRow> {
        let start = match start {
            HierarchyLevel::Region => HierarchyLevel::Site,
            level => level,
        };
        let current: Vec<&MetricRecord> = records.iter().collect();
        let previous: Vec<&MetricRecord> = comparison.iter().collect();
        self.build_level(registry, &current, &previous, start)
    }

    fn build_level<H: HierarchyRegistry + ?Sized>(
        &self,
        registry: &H,
        records: &[&MetricRecord],
        comparison: &[&MetricRecord],
        level: HierarchyLevel,
    ) -> Vec<HierarchyRow> {
        let groups = partition(records, level);
        let comparison_groups = partition(comparison, level);

        let mut rows: Vec<HierarchyRow> = groups
            .into_iter()
            .filter_map(|(id, group)| {
                let Some(node) = registry.node(level, id) else {
                    tracing::debug!(%level, id, "层级注册表中不存在,剔除该分组");
                    return None;
                };
                let previous = comparison_groups.get(id).map(|v| v.as_slice()).unwrap_or(&[]);
                Some(self.row(registry, node, &group, previous))
            })
            .collect();

        rows.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        rows
    }

    fn row<H: HierarchyRegistry + ?Sized>(
        &self,
        registry: &H,
        node: HierarchyNode,
        records: &[&MetricRecord],
        comparison: &[&MetricRecord],
    ) -> HierarchyRow {
        let children = match child_level(node.level) {
            Some(child) => self.build_level(registry, records, comparison, child),
            None => Vec::new(),
        };
        HierarchyRow {
            aggregate: self.aggregation.aggregate_with_comparison(records, comparison),
            id: node.id,
            name: node.name,
            level: node.level,
            children,
        }
    }
}

fn child_level(level: HierarchyLevel) -> Option<HierarchyLevel> {
    match level {
        HierarchyLevel::Region => Some(HierarchyLevel::Site),
        HierarchyLevel::Site => Some(HierarchyLevel::JobFunction),
        HierarchyLevel::JobFunction => Some(HierarchyLevel::Task),
        HierarchyLevel::Task => None,
    }
}

fn partition<'a>(
    records: &[&'a MetricRecord],
    level: HierarchyLevel,
) -> BTreeMap<&'a str, Vec<&'a MetricRecord>> {
    let mut groups: BTreeMap<&'a str, Vec<&'a MetricRecord>> = BTreeMap::new();
    for &record in records {
        if let Some(key) = record.key_for(level) {
            groups.entry(key).or_default().push(record);
        }
    }
    groups
}
