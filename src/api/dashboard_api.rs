// ==========================================
// 仓储绩效指标引擎 - 看板 API
// ==========================================
// 职责: 编排 指标库 → 过滤 → 分组聚合 → 排名/分布/偏差/趋势/层级表
// 架构: API 层 → Engine 层（纯计算） + Repository 层（取数）
// ==========================================
// 红线: 倒置日期区间报 InvalidDateRange, 查询角色与游标角色不一致报 InvalidInput
// 红线: 其余数据问题一律降级为空结果
// 红线: 引用缺失的分组直接剔除,不报错
// 红线: 不做缓存, 每次调用全量重算
// ==========================================

use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::instrument;

use crate::api::dto::{DashboardQuery, DistributionSlice, VarianceRow};
use crate::api::error::{ApiError, ApiResult};
use crate::config::EngineConfig;
use crate::domain::aggregate::{AggregateResult, RankCandidate, RankingEntry};
use crate::domain::hierarchy::HierarchyNode;
use crate::domain::metric::{DateRange, MetricRecord};
use crate::domain::types::{HierarchyLevel, Role, VarianceKind};
use crate::engine::aggregation::AggregationEngine;
use crate::engine::comparison::ComparisonPeriodCalculator;
use crate::engine::drill_down::DrillDownController;
use crate::engine::filter::RecordFilter;
use crate::engine::ranking::RankingEngine;
use crate::engine::rollup::{HierarchyRollup, HierarchyRow};
use crate::engine::trend::{daily_series, TrendPoint};
use crate::engine::variance::VarianceCalculator;
use crate::repository::hierarchy_registry::HierarchyRegistry;
use crate::repository::metrics_store::MetricsStore;

/// 取数范围: 站点 / 作业职能约束
#[derive(Debug, Clone, Copy, Default)]
struct Scope<'a> {
    site_id: Option<&'a str>,
    job_function_id: Option<&'a str>,
}

impl<'a> Scope<'a> {
    /// 由角色、外部上下文与下钻游标共同决定
    fn resolve(query: &'a DashboardQuery, controller: &'a DrillDownController) -> Self {
        let cursor = controller.cursor();
        let cursor_site = cursor.site_id.as_deref();
        let cursor_job_function = cursor.job_function_id.as_deref();

        match query.role {
            Role::Executive => Self {
                site_id: cursor_site,
                job_function_id: cursor_job_function,
            },
            Role::SiteManager => Self {
                site_id: query.site_id.as_deref(),
                job_function_id: cursor_job_function,
            },
            Role::Supervisor => Self {
                site_id: query.site_id.as_deref(),
                job_function_id: query.job_function_id.as_deref(),
            },
        }
    }
}

/// 本期 + 对比期记录（已按范围与低绩效开关过滤）
#[derive(Debug, Default)]
struct RecordWindow {
    current: Vec<MetricRecord>,
    comparison: Vec<MetricRecord>,
}

// ==========================================
// DashboardApi - 看板 API
// ==========================================

/// 看板API
///
/// 职责：
/// 1. 按查询参数与下钻游标取数
/// 2. 调用各引擎生成组件所需的数据
///
/// 下钻游标由组件各自持有并传入, API 本身无状态
pub struct DashboardApi<S: ?Sized, H: ?Sized> {
    store: Arc<S>,
    registry: Arc<H>,
    config: EngineConfig,
    aggregation: AggregationEngine,
    ranking: RankingEngine,
    filter: RecordFilter,
    variance: VarianceCalculator,
    comparison: ComparisonPeriodCalculator,
    rollup: HierarchyRollup,
}

impl<S, H> DashboardApi<S, H>
where
    S: MetricsStore + ?Sized,
    H: HierarchyRegistry + ?Sized,
{
    /// 使用默认配置创建
    pub fn new(store: Arc<S>, registry: Arc<H>) -> Self {
        Self::build(store, registry, EngineConfig::default())
    }

    /// 使用自定义配置创建
    ///
    /// # 参数
    /// - store: 指标库
    /// - registry: 层级注册表
    /// - config: 引擎配置（创建前校验）
    pub fn with_config(store: Arc<S>, registry: Arc<H>, config: EngineConfig) -> ApiResult<Self> {
        config.validate()?;
        Ok(Self::build(store, registry, config))
    }

    fn build(store: Arc<S>, registry: Arc<H>, config: EngineConfig) -> Self {
        let aggregation = AggregationEngine::with_config(&config);
        Self {
            store,
            registry,
            ranking: RankingEngine::with_config(&config),
            filter: RecordFilter::with_config(&config),
            variance: VarianceCalculator::with_config(&config),
            comparison: ComparisonPeriodCalculator::new(),
            rollup: HierarchyRollup::new(aggregation.clone()),
            aggregation,
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ==========================================
    // 查询接口
    // ==========================================

    /// 数据可用日期边界
    pub fn available_range(&self) -> ApiResult<Option<DateRange>> {
        Ok(self.store.available_date_range()?)
    }

    /// 当前下钻层级的排名
    ///
    /// # 参数
    /// - query: 查询参数（口径取 query.criterion）
    /// - controller: 组件持有的下钻控制器
    ///
    /// # 返回
    /// - Ok(Vec<RankingEntry>): 按口径降序, 附名次变化与百分位
    /// - Err(ApiError::InvalidDateRange): 日期区间倒置
    /// - Err(ApiError::InvalidInput): 查询角色与控制器角色不一致
    #[instrument(skip_all, fields(role = %query.role, level = %controller.current_level()))]
    pub fn level_rankings(
        &self,
        query: &DashboardQuery,
        controller: &DrillDownController,
    ) -> ApiResult<Vec<RankingEntry>> {
        let window = self.load_scoped(query, controller)?;
        Ok(self.rank_level(query, controller.current_level(), &window))
    }

    /// 站点排行榜（不受下钻影响）
    ///
    /// is_current 标记查询上下文中的站点
    #[instrument(skip_all, fields(role = %query.role))]
    pub fn site_rankings(&self, query: &DashboardQuery) -> ApiResult<Vec<RankingEntry>> {
        let window = self.load(query, Scope::default())?;
        Ok(self.rank_level(query, HierarchyLevel::Site, &window))
    }

    /// 任务工时分布（饼图）
    ///
    /// # 返回
    /// - 取值 = 实际工时合计, 仅保留 > 0 的任务, 截断到 Top-N
    #[instrument(skip_all, fields(role = %query.role))]
    pub fn task_distribution(
        &self,
        query: &DashboardQuery,
        controller: &DrillDownController,
    ) -> ApiResult<Vec<DistributionSlice>> {
        let window = self.load_scoped(query, controller)?;
        let groups = self
            .aggregation
            .group_by_level(&window.current, HierarchyLevel::Task);

        let slices: Vec<(String, String, f64)> = groups
            .into_iter()
            .filter_map(|(id, records)| {
                let task = self.resolve_node(HierarchyLevel::Task, id)?;
                let value: f64 = records.iter().map(|r| r.actual_hours.unwrap_or(0.0)).sum();
                (value > 0.0).then(|| (task.id, task.name, value))
            })
            .collect();

        let total: f64 = slices.iter().map(|(_, _, value)| value).sum();
        let mut slices: Vec<DistributionSlice> = slices
            .into_iter()
            .map(|(id, name, value)| DistributionSlice {
                id,
                name,
                value,
                share_pct: value / total * 100.0,
            })
            .collect();

        // 同值按名称、id 升序, 与排名口径一致
        slices.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(self.filter.top_n(slices, |slice| slice.value))
    }

    /// 当前下钻范围内的日趋势
    pub fn trend(
        &self,
        query: &DashboardQuery,
        controller: &DrillDownController,
    ) -> ApiResult<Vec<TrendPoint>> {
        let window = self.load_scoped(query, controller)?;
        Ok(daily_series(window.current.as_slice()))
    }

    /// 当前下钻层级逐组偏差（按名称、id 升序）
    #[instrument(skip_all, fields(role = %query.role, kind = ?kind))]
    pub fn variance(
        &self,
        query: &DashboardQuery,
        controller: &DrillDownController,
        kind: VarianceKind,
    ) -> ApiResult<Vec<VarianceRow>> {
        let window = self.load_scoped(query, controller)?;
        let level = controller.current_level();

        let mut rows: Vec<VarianceRow> = self
            .aggregation
            .group_by_level(&window.current, level)
            .into_iter()
            .filter_map(|(id, records)| {
                let node = self.resolve_node(level, id)?;
                let measure = self.variance.measure(kind, records.as_slice())?;
                Some(VarianceRow {
                    id: node.id,
                    name: node.name,
                    measure,
                })
            })
            .collect();

        rows.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(rows)
    }

    /// 层级汇总表
    ///
    /// 从组件当前下钻层级开始逐层嵌套（executive 初始为 站点 → 作业职能 → 任务,
    /// supervisor 仅任务层）, 范围同其他组件
    #[instrument(skip_all, fields(role = %query.role, level = %controller.current_level()))]
    pub fn hierarchy_table(
        &self,
        query: &DashboardQuery,
        controller: &DrillDownController,
    ) -> ApiResult<Vec<HierarchyRow>> {
        let window = self.load_scoped(query, controller)?;
        Ok(self.rollup.build(
            self.registry.as_ref(),
            &window.current,
            &window.comparison,
            controller.current_level(),
        ))
    }

    /// 任务排名 Top-N
    pub fn top_tasks(
        &self,
        query: &DashboardQuery,
        controller: &DrillDownController,
    ) -> ApiResult<Vec<RankingEntry>> {
        let window = self.load_scoped(query, controller)?;
        let mut entries = self.rank_level(query, HierarchyLevel::Task, &window);
        entries.truncate(self.config.top_n_limit);
        Ok(entries)
    }

    // ==========================================
    // 取数
    // ==========================================

    /// 校验角色一致后按游标范围取数
    fn load_scoped(
        &self,
        query: &DashboardQuery,
        controller: &DrillDownController,
    ) -> ApiResult<RecordWindow> {
        if query.role != controller.role() {
            return Err(ApiError::InvalidInput(format!(
                "查询角色 {} 与下钻控制器角色 {} 不一致",
                query.role,
                controller.role()
            )));
        }
        self.load(query, Scope::resolve(query, controller))
    }

    /// 校验并截取日期区间, 读取本期与对比期记录
    ///
    /// 查询区间先截取到数据可用范围, 对比期由截取后的区间推导:
    /// 查询结束日超出数据时, 对比期与截取后区间等长, 短于按原始 [start, end] 推导的窗口
    fn load(&self, query: &DashboardQuery, scope: Scope<'_>) -> ApiResult<RecordWindow> {
        if !query.range.is_valid() {
            return Err(ApiError::InvalidDateRange {
                start: query.range.start.to_string(),
                end: query.range.end.to_string(),
            });
        }

        let bounds = match self.store.available_date_range() {
            Ok(Some(bounds)) => bounds,
            Ok(None) => return Ok(RecordWindow::default()),
            Err(e) => {
                tracing::warn!(error = %e, "可用日期范围读取失败,按空数据处理");
                return Ok(RecordWindow::default());
            }
        };

        let Some(range) = query.range.clamp_to(&bounds) else {
            tracing::debug!(range = ?query.range, bounds = ?bounds, "查询区间与数据无交集");
            return Ok(RecordWindow::default());
        };
        let comparison_range = self.comparison.comparison_range(&range);

        let current = self.fetch(&range, scope);
        let comparison = self.fetch(&comparison_range, scope);

        Ok(RecordWindow {
            current: self.filter.apply(current, query.underperforming_only),
            comparison: self.filter.apply(comparison, query.underperforming_only),
        })
    }

    fn fetch(&self, range: &DateRange, scope: Scope<'_>) -> Vec<MetricRecord> {
        let result = match scope.site_id {
            Some(site_id) => self.store.metrics_by_site_and_date_range(site_id, range),
            None => self.store.metrics_by_date_range(range),
        };

        let mut records = match result {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(error = %e, range = ?range, "指标数据读取失败,按空数据处理");
                Vec::new()
            }
        };

        if let Some(job_function_id) = scope.job_function_id {
            records.retain(|r| r.job_function_id == job_function_id);
        }
        records
    }

    // ==========================================
    // 排名候选构建
    // ==========================================

    fn rank_level(
        &self,
        query: &DashboardQuery,
        level: HierarchyLevel,
        window: &RecordWindow,
    ) -> Vec<RankingEntry> {
        let groups = self.aggregation.group_by_level(&window.current, level);
        let comparison_groups = self.aggregation.group_by_level(&window.comparison, level);

        let current = self.candidates(
            query,
            level,
            self.aggregation.aggregate_groups(&groups, &comparison_groups),
        );
        let previous = self.candidates(
            query,
            level,
            self.aggregation
                .aggregate_groups(&comparison_groups, &BTreeMap::new()),
        );

        self.ranking.rank(&current, query.criterion, &previous)
    }

    fn candidates(
        &self,
        query: &DashboardQuery,
        level: HierarchyLevel,
        aggregates: BTreeMap<&str, AggregateResult>,
    ) -> Vec<RankCandidate> {
        aggregates
            .into_iter()
            .filter_map(|(id, aggregate)| {
                let node = self.resolve_node(level, id)?;
                let subtitle = self.subtitle(level, id).unwrap_or_default();
                Some(
                    RankCandidate::new(node.id, node.name, aggregate)
                        .with_subtitle(subtitle)
                        .with_current(query.is_current(id)),
                )
            })
            .collect()
    }

    fn resolve_node(&self, level: HierarchyLevel, id: &str) -> Option<HierarchyNode> {
        let node = self.registry.node(level, id);
        if node.is_none() {
            tracing::debug!(%level, id, "层级注册表中不存在,剔除该分组");
        }
        node
    }

    /// 副标题: 站点 → 所属区域; 作业职能 → 所属站点; 任务 → 作业职能类型
    fn subtitle(&self, level: HierarchyLevel, id: &str) -> Option<String> {
        match level {
            HierarchyLevel::Region => None,
            HierarchyLevel::Site => {
                let site = self.registry.site(id)?;
                self.registry.region(&site.region_id).map(|r| r.name.clone())
            }
            HierarchyLevel::JobFunction => {
                let job_function = self.registry.job_function(id)?;
                self.registry.site(&job_function.site_id).map(|s| s.name.clone())
            }
            HierarchyLevel::Task => self.registry.task(id).map(|t| t.job_function_type.clone()),
        }
    }
}
