// ==========================================
// 仓储绩效指标引擎 - API 数据传输对象
// ==========================================
// 职责: 表现层提交的查询参数及各组件的输出结构
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::metric::DateRange;
use crate::domain::types::{RankingCriterion, Role};
use crate::engine::variance::VarianceMeasure;

/// 看板查询参数
///
/// 任一字段变化都应触发全量重算
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQuery {
    pub role: Role,
    pub range: DateRange,
    /// 外部固定的站点（站点经理）
    #[serde(default)]
    pub site_id: Option<String>,
    /// 外部固定的作业职能（主管）
    #[serde(default)]
    pub job_function_id: Option<String>,
    #[serde(default = "default_criterion")]
    pub criterion: RankingCriterion,
    /// 仅看低绩效记录
    #[serde(default)]
    pub underperforming_only: bool,
}

fn default_criterion() -> RankingCriterion {
    RankingCriterion::Performance
}

impl DashboardQuery {
    pub fn new(role: Role, range: DateRange) -> Self {
        Self {
            role,
            range,
            site_id: None,
            job_function_id: None,
            criterion: default_criterion(),
            underperforming_only: false,
        }
    }

    pub fn with_site(mut self, site_id: impl Into<String>) -> Self {
        self.site_id = Some(site_id.into());
        self
    }

    pub fn with_job_function(mut self, job_function_id: impl Into<String>) -> Self {
        self.job_function_id = Some(job_function_id.into());
        self
    }

    pub fn with_criterion(mut self, criterion: RankingCriterion) -> Self {
        self.criterion = criterion;
        self
    }

    pub fn underperforming(mut self, enabled: bool) -> Self {
        self.underperforming_only = enabled;
        self
    }

    /// 是否为查看者自身所属节点
    pub fn is_current(&self, id: &str) -> bool {
        self.site_id.as_deref() == Some(id) || self.job_function_id.as_deref() == Some(id)
    }
}

/// 饼图切片（任务分布）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionSlice {
    pub id: String,
    pub name: String,
    pub value: f64,
    /// 占截断前总量的百分比
    pub share_pct: f64,
}

/// 偏差图行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VarianceRow {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub measure: VarianceMeasure,
}
