use super::{DrillDownController, DrillDownCursor};
use crate::domain::types::{HierarchyLevel, Role};

// ==========================================
// executive 角色
// ==========================================

#[test]
fn test_scenario_03_executive_drill_path() {
    let mut controller = DrillDownController::new(Role::Executive);
    assert_eq!(controller.current_level(), HierarchyLevel::Site);
    assert_eq!(controller.current_level_label(), "Sites");

    assert!(controller.drill_in("site-1", "Dallas"));
    assert_eq!(controller.cursor().site_id.as_deref(), Some("site-1"));
    assert_eq!(controller.cursor().site_name.as_deref(), Some("Dallas"));
    assert_eq!(controller.cursor().job_function_id, None);
    assert_eq!(controller.current_level(), HierarchyLevel::JobFunction);

    assert!(controller.drill_in("jf-2", "Receiving"));
    assert_eq!(controller.cursor().site_id.as_deref(), Some("site-1"));
    assert_eq!(controller.cursor().job_function_id.as_deref(), Some("jf-2"));
    assert_eq!(controller.cursor().job_function_name.as_deref(), Some("Receiving"));
    assert_eq!(controller.current_level(), HierarchyLevel::Task);
    assert!(!controller.can_drill_down());

    assert!(controller.drill_back());
    assert_eq!(controller.cursor().site_id.as_deref(), Some("site-1"));
    assert_eq!(controller.cursor().job_function_id, None);

    assert!(controller.drill_back());
    assert_eq!(controller.cursor(), &DrillDownCursor::default());
}

#[test]
fn test_drill_in_at_terminal_level_is_noop() {
    let mut controller = DrillDownController::new(Role::Executive);
    controller.drill_in("site-1", "Dallas");
    controller.drill_in("jf-2", "Receiving");
    let before = controller.cursor().clone();

    assert!(!controller.drill_in("task-9", "Unload"));
    assert_eq!(controller.cursor(), &before);
}

#[test]
fn test_drill_back_on_empty_cursor_is_noop() {
    let mut controller = DrillDownController::new(Role::Executive);
    assert!(!controller.drill_back());
    assert!(controller.cursor().is_empty());
}

#[test]
fn test_jump_to_clears_deeper_levels_only() {
    let mut controller = DrillDownController::new(Role::Executive);
    controller.drill_in("site-1", "Dallas");
    controller.drill_in("jf-2", "Receiving");

    controller.jump_to(1);
    assert_eq!(controller.depth(), 1);
    assert_eq!(controller.cursor().site_id.as_deref(), Some("site-1"));
    assert_eq!(controller.cursor().job_function_id, None);

    // 跳到更深层不生效
    controller.jump_to(2);
    assert_eq!(controller.depth(), 1);

    controller.jump_to(0);
    assert!(controller.cursor().is_empty());
}

#[test]
fn test_breadcrumbs_follow_cursor() {
    let mut controller = DrillDownController::new(Role::Executive);
    controller.drill_in("site-1", "Dallas");
    controller.drill_in("jf-2", "Receiving");

    let labels: Vec<String> = controller.breadcrumbs().into_iter().map(|c| c.label).collect();
    assert_eq!(labels, vec!["Sites", "Dallas", "Receiving"]);

    let crumbs = controller.breadcrumbs();
    assert_eq!(crumbs[1].depth, 1);
    assert_eq!(crumbs[2].level, HierarchyLevel::Task);
}

// ==========================================
// site-manager 角色
// ==========================================

#[test]
fn test_site_manager_drills_job_function_directly() {
    let mut controller = DrillDownController::new(Role::SiteManager);
    assert_eq!(controller.current_level(), HierarchyLevel::JobFunction);
    assert!(controller.can_drill_down());

    assert!(controller.drill_in("jf-2", "Receiving"));
    assert_eq!(controller.cursor().site_id, None);
    assert_eq!(controller.cursor().job_function_id.as_deref(), Some("jf-2"));
    assert_eq!(controller.current_level(), HierarchyLevel::Task);
    assert!(!controller.can_drill_down());

    assert!(!controller.drill_in("jf-3", "Picking"));
    assert_eq!(controller.cursor().job_function_id.as_deref(), Some("jf-2"));

    let labels: Vec<String> = controller.breadcrumbs().into_iter().map(|c| c.label).collect();
    assert_eq!(labels, vec!["Job Functions", "Receiving"]);

    assert!(controller.drill_back());
    assert!(controller.cursor().is_empty());
}

// ==========================================
// supervisor 角色
// ==========================================

#[test]
fn test_supervisor_never_drills() {
    let mut controller = DrillDownController::new(Role::Supervisor);
    assert!(!controller.can_drill_down());
    assert_eq!(controller.current_level(), HierarchyLevel::Task);

    for (id, name) in [("site-1", "Dallas"), ("jf-2", "Receiving"), ("t-1", "Unload")] {
        assert!(!controller.drill_in(id, name));
        assert!(!controller.can_drill_down());
        assert!(controller.cursor().is_empty());
    }
    assert_eq!(controller.breadcrumbs().len(), 1);
}

// ==========================================
// 通用性质
// ==========================================

#[test]
fn test_round_trip_returns_to_empty_for_every_role() {
    for role in [Role::Executive, Role::SiteManager, Role::Supervisor] {
        let mut controller = DrillDownController::new(role);
        let mut steps = 0;
        while controller.can_drill_down() {
            let id = format!("node-{}", steps);
            assert!(controller.drill_in(id.clone(), id));
            steps += 1;
        }
        assert_eq!(steps, role.max_depth());

        for _ in 0..steps {
            controller.drill_back();
        }
        assert_eq!(controller.cursor(), &DrillDownCursor::default(), "role {}", role);
    }
}

#[test]
fn test_controllers_are_independent() {
    let mut pie = DrillDownController::new(Role::Executive);
    let mut trend = DrillDownController::new(Role::Executive);

    pie.drill_in("site-1", "Dallas");
    trend.drill_in("site-2", "Austin");
    trend.drill_in("jf-7", "Shipping");

    assert_eq!(pie.cursor().site_id.as_deref(), Some("site-1"));
    assert_eq!(pie.depth(), 1);
    assert_eq!(trend.depth(), 2);

    pie.jump_to(0);
    assert!(pie.cursor().is_empty());
    assert_eq!(trend.cursor().site_id.as_deref(), Some("site-2"));
}
