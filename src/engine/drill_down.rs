// ==========================================
// 仓储绩效指标引擎 - 下钻控制器
// ==========================================
// 职责: 每个可视化组件独立持有一个下钻游标,记录已下钻到的层级与节点
// 层级表 (见 Role::levels):
//   executive    : Sites → Job Functions → Tasks
//   site-manager : Job Functions → Tasks（站点外部固定）
//   supervisor   : Tasks（作业职能外部固定,不可下钻）
// ==========================================
// 红线: 游标只经 drill_in / drill_back / jump_to 三种转换修改
// 红线: 非法转换为空操作,不报错
// 红线: 组件之间游标互不影响
// ==========================================

use crate::domain::types::{HierarchyLevel, Role};

#[cfg(test)]
mod tests;

/// 下钻游标
///
/// executive 角色下 job_function_id 有值必然 site_id 有值;
/// site-manager 角色只使用 job_function 字段
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrillDownCursor {
    pub site_id: Option<String>,
    pub site_name: Option<String>,
    pub job_function_id: Option<String>,
    pub job_function_name: Option<String>,
}

impl DrillDownCursor {
    pub fn is_empty(&self) -> bool {
        self.site_id.is_none() && self.job_function_id.is_none()
    }

    fn clear_site(&mut self) {
        self.site_id = None;
        self.site_name = None;
    }

    fn clear_job_function(&mut self) {
        self.job_function_id = None;
        self.job_function_name = None;
    }
}

/// 面包屑项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    /// 点击后跳转的深度
    pub depth: usize,
    pub level: HierarchyLevel,
    pub label: String,
}

// ==========================================
// DrillDownController - 下钻控制器
// ==========================================
#[derive(Debug, Clone)]
pub struct DrillDownController {
    role: Role,
    cursor: DrillDownCursor,
}

impl DrillDownController {
    /// 组件挂载时创建,游标为空
    pub fn new(role: Role) -> Self {
        Self {
            role,
            cursor: DrillDownCursor::default(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn cursor(&self) -> &DrillDownCursor {
        &self.cursor
    }

    // ==========================================
    // 派生状态
    // ==========================================

    /// 当前深度（0 为初始层）
    pub fn depth(&self) -> usize {
        match self.role {
            Role::Executive => match (&self.cursor.site_id, &self.cursor.job_function_id) {
                (Some(_), Some(_)) => 2,
                (Some(_), None) => 1,
                _ => 0,
            },
            Role::SiteManager => usize::from(self.cursor.job_function_id.is_some()),
            Role::Supervisor => 0,
        }
    }

    /// 当前分组层级
    pub fn current_level(&self) -> HierarchyLevel {
        let levels = self.role.levels();
        levels[self.depth().min(levels.len() - 1)]
    }

    /// 当前层级标签（"Sites" / "Job Functions" / "Tasks"）
    pub fn current_level_label(&self) -> &'static str {
        self.current_level().label()
    }

    /// 是否还能继续下钻
    pub fn can_drill_down(&self) -> bool {
        self.depth() < self.role.max_depth()
    }

    /// 面包屑: 初始层显示层级名称,其后显示已选节点名称
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        let levels = self.role.levels();
        let mut crumbs = vec![Breadcrumb {
            depth: 0,
            level: levels[0],
            label: levels[0].label().to_string(),
        }];

        let selected: Vec<&Option<String>> = match self.role {
            Role::Executive => vec![&self.cursor.site_name, &self.cursor.job_function_name],
            Role::SiteManager => vec![&self.cursor.job_function_name],
            Role::Supervisor => Vec::new(),
        };

        for (index, name) in selected.into_iter().enumerate().take(self.depth()) {
            crumbs.push(Breadcrumb {
                depth: index + 1,
                level: levels[index + 1],
                label: name.clone().unwrap_or_default(),
            });
        }
        crumbs
    }

    // ==========================================
    // 转换
    // ==========================================

    /// 下钻到所选节点
    ///
    /// 已在终止层或角色不可下钻时为空操作; 返回游标是否发生变化
    pub fn drill_in(&mut self, id: impl Into<String>, name: impl Into<String>) -> bool {
        if !self.can_drill_down() {
            tracing::debug!(role = %self.role, depth = self.depth(), "已在终止层级,忽略下钻");
            return false;
        }

        match self.role {
            Role::Executive if self.cursor.site_id.is_none() => {
                self.cursor.site_id = Some(id.into());
                self.cursor.site_name = Some(name.into());
            }
            Role::Executive | Role::SiteManager => {
                self.cursor.job_function_id = Some(id.into());
                self.cursor.job_function_name = Some(name.into());
            }
            Role::Supervisor => return false,
        }
        true
    }

    /// 返回上一层: 清除最深的已设字段; 已在初始层时为空操作
    pub fn drill_back(&mut self) -> bool {
        if self.cursor.job_function_id.is_some() {
            self.cursor.clear_job_function();
            true
        } else if self.cursor.site_id.is_some() {
            self.cursor.clear_site();
            true
        } else {
            false
        }
    }

    /// 面包屑跳转: 清除比目标深度更深的字段,保留更浅的
    pub fn jump_to(&mut self, depth: usize) {
        while self.depth() > depth {
            if !self.drill_back() {
                break;
            }
        }
    }
}
