// ==========================================
// 仓储绩效指标引擎 - 领域类型定义
// ==========================================
// 职责: 角色、层级、排名口径、偏差类型等枚举
// 红线: 角色决定可下钻深度,层级表统一查表,不做 if/else 链
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 查看角色 (Role)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// 高管（区域 VP）: 站点 → 作业职能 → 任务
    #[serde(alias = "vp")]
    Executive,
    /// 站点经理: 站点外部固定, 作业职能 → 任务
    SiteManager,
    /// 主管: 作业职能外部固定, 仅任务层, 不可下钻
    Supervisor,
}

impl Role {
    /// 角色可见的层级序列（按下钻深度排列）
    pub fn levels(&self) -> &'static [HierarchyLevel] {
        match self {
            Role::Executive => &[
                HierarchyLevel::Site,
                HierarchyLevel::JobFunction,
                HierarchyLevel::Task,
            ],
            Role::SiteManager => &[HierarchyLevel::JobFunction, HierarchyLevel::Task],
            Role::Supervisor => &[HierarchyLevel::Task],
        }
    }

    /// 最大下钻深度（终止层的下标）
    pub fn max_depth(&self) -> usize {
        self.levels().len() - 1
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Executive => write!(f, "executive"),
            Role::SiteManager => write!(f, "site-manager"),
            Role::Supervisor => write!(f, "supervisor"),
        }
    }
}

// ==========================================
// 组织层级 (Hierarchy Level)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HierarchyLevel {
    Region,
    Site,
    JobFunction,
    Task,
}

impl HierarchyLevel {
    /// 面包屑/标题上展示的层级名称
    pub fn label(&self) -> &'static str {
        match self {
            HierarchyLevel::Region => "Regions",
            HierarchyLevel::Site => "Sites",
            HierarchyLevel::JobFunction => "Job Functions",
            HierarchyLevel::Task => "Tasks",
        }
    }
}

impl fmt::Display for HierarchyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ==========================================
// 排名口径 (Ranking Criterion)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RankingCriterion {
    Performance,
    Efficiency,
    BudgetAdherence,
    Improvement,
    Consistency,
    Volume,
}

impl RankingCriterion {
    pub const ALL: [RankingCriterion; 6] = [
        RankingCriterion::Performance,
        RankingCriterion::Efficiency,
        RankingCriterion::BudgetAdherence,
        RankingCriterion::Improvement,
        RankingCriterion::Consistency,
        RankingCriterion::Volume,
    ];
}

impl fmt::Display for RankingCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankingCriterion::Performance => write!(f, "performance"),
            RankingCriterion::Efficiency => write!(f, "efficiency"),
            RankingCriterion::BudgetAdherence => write!(f, "budget adherence"),
            RankingCriterion::Improvement => write!(f, "improvement"),
            RankingCriterion::Consistency => write!(f, "consistency"),
            RankingCriterion::Volume => write!(f, "volume"),
        }
    }
}

// ==========================================
// 偏差类型 (Variance Kind)
// ==========================================
// 红线: 工时/产量偏差为负（低于预算）为好; 绩效偏差为正（高于目标）为好
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VarianceKind {
    Hours,
    Volume,
    Performance,
}

impl VarianceKind {
    /// 偏差值是否为有利方向
    pub fn is_favorable(&self, variance: f64) -> bool {
        match self {
            VarianceKind::Hours | VarianceKind::Volume => variance <= 0.0,
            VarianceKind::Performance => variance >= 0.0,
        }
    }
}

impl fmt::Display for VarianceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarianceKind::Hours => write!(f, "hours"),
            VarianceKind::Volume => write!(f, "volume"),
            VarianceKind::Performance => write!(f, "performance"),
        }
    }
}
