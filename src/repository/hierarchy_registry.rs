// ==========================================
// 仓储绩效指标引擎 - 组织层级注册表
// ==========================================
// 职责: Region/Site/JobFunction/Task 的 id 查找与枚举
// 说明: 引擎只读,仅在单次计算内按 id 临时引用
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::hierarchy::{HierarchyNode, JobFunction, Region, Site, Task};
use crate::domain::types::HierarchyLevel;
use crate::repository::error::{RepositoryError, RepositoryResult};

/// 层级注册表接口
pub trait HierarchyRegistry {
    fn region(&self, id: &str) -> Option<&Region>;
    fn site(&self, id: &str) -> Option<&Site>;
    fn job_function(&self, id: &str) -> Option<&JobFunction>;
    fn task(&self, id: &str) -> Option<&Task>;

    /// 全部站点（按 id 升序）
    fn sites(&self) -> Vec<&Site>;

    /// 站点下的作业职能（按 id 升序）
    fn job_functions_by_site(&self, site_id: &str) -> Vec<&JobFunction>;

    /// 某作业职能类型下的任务（按 id 升序）
    fn tasks_by_job_function_type(&self, function_type: &str) -> Vec<&Task>;

    /// 统一节点视图; 未找到返回 None
    fn node(&self, level: HierarchyLevel, id: &str) -> Option<HierarchyNode> {
        match level {
            HierarchyLevel::Region => self.region(id).map(HierarchyNode::from),
            HierarchyLevel::Site => self.site(id).map(HierarchyNode::from),
            HierarchyLevel::JobFunction => self.job_function(id).map(HierarchyNode::from),
            HierarchyLevel::Task => self.task(id).map(HierarchyNode::from),
        }
    }
}

/// 注册表快照（JSON 载入格式）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchySnapshot {
    #[serde(default)]
    pub regions: Vec<Region>,
    #[serde(default)]
    pub sites: Vec<Site>,
    #[serde(default)]
    pub job_functions: Vec<JobFunction>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

// ==========================================
// InMemoryHierarchyRegistry - 内存注册表
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct InMemoryHierarchyRegistry {
    regions: BTreeMap<String, Region>,
    sites: BTreeMap<String, Site>,
    job_functions: BTreeMap<String, JobFunction>,
    tasks: BTreeMap<String, Task>,
}

fn insert_unique<T>(
    map: &mut BTreeMap<String, T>,
    entity: &str,
    id: &str,
    value: T,
) -> RepositoryResult<()> {
    if map.contains_key(id) {
        return Err(RepositoryError::DuplicateNode {
            entity: entity.to_string(),
            id: id.to_string(),
        });
    }
    map.insert(id.to_string(), value);
    Ok(())
}

impl InMemoryHierarchyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: HierarchySnapshot) -> RepositoryResult<Self> {
        let mut registry = Self::new();
        for region in snapshot.regions {
            registry.add_region(region)?;
        }
        for site in snapshot.sites {
            registry.add_site(site)?;
        }
        for job_function in snapshot.job_functions {
            registry.add_job_function(job_function)?;
        }
        for task in snapshot.tasks {
            registry.add_task(task)?;
        }
        Ok(registry)
    }

    pub fn from_json_str(raw: &str) -> RepositoryResult<Self> {
        let snapshot: HierarchySnapshot = serde_json::from_str(raw)?;
        Self::from_snapshot(snapshot)
    }

    pub fn add_region(&mut self, region: Region) -> RepositoryResult<()> {
        let id = region.id.clone();
        insert_unique(&mut self.regions, "Region", &id, region)
    }

    /// 添加站点（不校验 region 是否存在; 悬空引用在聚合时按缺失处理）
    pub fn add_site(&mut self, site: Site) -> RepositoryResult<()> {
        let id = site.id.clone();
        insert_unique(&mut self.sites, "Site", &id, site)
    }

    pub fn add_job_function(&mut self, job_function: JobFunction) -> RepositoryResult<()> {
        let id = job_function.id.clone();
        insert_unique(&mut self.job_functions, "JobFunction", &id, job_function)
    }

    pub fn add_task(&mut self, task: Task) -> RepositoryResult<()> {
        let id = task.id.clone();
        insert_unique(&mut self.tasks, "Task", &id, task)
    }
}

impl HierarchyRegistry for InMemoryHierarchyRegistry {
    fn region(&self, id: &str) -> Option<&Region> {
        self.regions.get(id)
    }

    fn site(&self, id: &str) -> Option<&Site> {
        self.sites.get(id)
    }

    fn job_function(&self, id: &str) -> Option<&JobFunction> {
        self.job_functions.get(id)
    }

    fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.get(id)
    }

    fn sites(&self) -> Vec<&Site> {
        self.sites.values().collect()
    }

    fn job_functions_by_site(&self, site_id: &str) -> Vec<&JobFunction> {
        self.job_functions
            .values()
            .filter(|jf| jf.site_id == site_id)
            .collect()
    }

    fn tasks_by_job_function_type(&self, function_type: &str) -> Vec<&Task> {
        self.tasks
            .values()
            .filter(|t| t.job_function_type == function_type)
            .collect()
    }
}
