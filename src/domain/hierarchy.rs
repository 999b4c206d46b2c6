// ==========================================
// 仓储绩效指标引擎 - 组织层级实体
// ==========================================
// 层级: Region → Site → Job Function → Task
// 注: 任务按作业职能类型划分,同一任务类型可出现在多个作业职能下
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::HierarchyLevel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: String,
    pub name: String,
    pub region_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFunction {
    pub id: String,
    pub name: String,
    pub site_id: String,
    /// 作业职能类型（如 receiving / picking）,任务按此类型挂载
    pub function_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    pub job_function_type: String,
}

// ==========================================
// HierarchyNode - 统一的节点视图
// ==========================================
// 下钻与排名标签只关心 id + 名称 + 上级
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyNode {
    pub id: String,
    pub name: String,
    pub level: HierarchyLevel,
    #[serde(default)]
    pub parent_id: Option<String>,
}

impl HierarchyNode {
    /// 仅凭 id/名称构造（下钻点击时表现层只持有这两项）
    pub fn new(id: impl Into<String>, name: impl Into<String>, level: HierarchyLevel) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            level,
            parent_id: None,
        }
    }
}

impl From<&Region> for HierarchyNode {
    fn from(region: &Region) -> Self {
        HierarchyNode::new(&region.id, &region.name, HierarchyLevel::Region)
    }
}

impl From<&Site> for HierarchyNode {
    fn from(site: &Site) -> Self {
        HierarchyNode {
            id: site.id.clone(),
            name: site.name.clone(),
            level: HierarchyLevel::Site,
            parent_id: Some(site.region_id.clone()),
        }
    }
}

impl From<&JobFunction> for HierarchyNode {
    fn from(job_function: &JobFunction) -> Self {
        HierarchyNode {
            id: job_function.id.clone(),
            name: job_function.name.clone(),
            level: HierarchyLevel::JobFunction,
            parent_id: Some(job_function.site_id.clone()),
        }
    }
}

impl From<&Task> for HierarchyNode {
    fn from(task: &Task) -> Self {
        HierarchyNode::new(&task.id, &task.name, HierarchyLevel::Task)
    }
}
