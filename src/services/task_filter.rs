//! Filtering and ordering of the task list for display.
//!
//! `filter_tasks` is pure and total: it never mutates its input and every
//! combination of task fields and filter criteria is valid.

use std::cmp::Ordering;

use crate::domain::models::{FilterState, StatusFilter, Task};

/// Select the tasks matching `filters` and order them for display.
///
/// Order: incomplete before completed, then high > medium > low priority,
/// then earliest due date first with undated tasks last. The sort is
/// stable, so ties keep their list order.
pub fn filter_tasks(tasks: &[Task], filters: &FilterState) -> Vec<Task> {
    let query = filters.search.to_lowercase();
    let mut filtered: Vec<Task> = tasks
        .iter()
        .filter(|task| matches_filters(task, filters, &query))
        .cloned()
        .collect();
    filtered.sort_by(compare_tasks);
    filtered
}

/// Display ordering between two tasks.
pub fn compare_tasks(a: &Task, b: &Task) -> Ordering {
    a.completed
        .cmp(&b.completed)
        .then_with(|| a.priority.rank().cmp(&b.priority.rank()))
        .then_with(|| match (&a.due_date, &b.due_date) {
            (Some(a_due), Some(b_due)) => a_due.cmp(b_due),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}

/// Number of criteria that differ from their default.
pub fn active_filter_count(filters: &FilterState) -> usize {
    [
        !filters.search.is_empty(),
        filters.priority.priority().is_some(),
        filters.status != StatusFilter::All,
        filters.due_from().is_some(),
        filters.due_to().is_some(),
    ]
    .into_iter()
    .filter(|active| *active)
    .count()
}

/// Whether a single task passes every criterion. `query` is the already
/// lowercased search text.
fn matches_filters(task: &Task, filters: &FilterState, query: &str) -> bool {
    if !query.is_empty() {
        let in_title = task.title.to_lowercase().contains(query);
        let in_description = task
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(query));
        if !in_title && !in_description {
            return false;
        }
    }

    if let Some(priority) = filters.priority.priority() {
        if task.priority != priority {
            return false;
        }
    }

    match filters.status {
        StatusFilter::Active if task.completed => return false,
        StatusFilter::Completed if !task.completed => return false,
        _ => {}
    }

    if let Some(from) = filters.due_from() {
        match task.due_date.as_deref() {
            Some(due) if due >= from => {}
            _ => return false,
        }
    }

    if let Some(to) = filters.due_to() {
        match task.due_date.as_deref() {
            Some(due) if due <= to => {}
            _ => return false,
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{PriorityFilter, TaskPriority};
    use proptest::prelude::*;

    fn task(id: &str, priority: TaskPriority, due: Option<&str>, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {id}"),
            description: None,
            priority,
            due_date: due.map(str::to_string),
            completed,
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
            updated_at: "2024-01-01T00:00:00.000Z".to_string(),
        }
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_sort_order() {
        let tasks = vec![
            task("done-high", TaskPriority::High, Some("2024-01-01"), true),
            task("low", TaskPriority::Low, Some("2024-01-01"), false),
            task("high-undated", TaskPriority::High, None, false),
            task("high-late", TaskPriority::High, Some("2024-06-01"), false),
            task("high-early", TaskPriority::High, Some("2024-02-01"), false),
            task("medium", TaskPriority::Medium, None, false),
        ];

        let sorted = filter_tasks(&tasks, &FilterState::default());
        assert_eq!(
            ids(&sorted),
            ["high-early", "high-late", "high-undated", "medium", "low", "done-high"]
        );
    }

    #[test]
    fn test_undated_ties_keep_list_order() {
        let tasks = vec![
            task("first", TaskPriority::Medium, None, false),
            task("second", TaskPriority::Medium, None, false),
            task("third", TaskPriority::Medium, None, false),
        ];
        let sorted = filter_tasks(&tasks, &FilterState::default());
        assert_eq!(ids(&sorted), ["first", "second", "third"]);
    }

    #[test]
    fn test_search_matches_title_or_description() {
        let mut with_desc = task("desc", TaskPriority::Medium, None, false);
        with_desc.description = Some("Buy MILK and eggs".to_string());
        let mut in_title = task("title", TaskPriority::Medium, None, false);
        in_title.title = "Milkshake".to_string();
        let other = task("other", TaskPriority::Medium, None, false);

        let filters = FilterState::default().with_search("milk");
        let result = filter_tasks(&[with_desc, in_title, other], &filters);
        assert_eq!(ids(&result), ["desc", "title"]);
    }

    #[test]
    fn test_search_is_case_insensitive_on_query() {
        let mut t = task("a", TaskPriority::Medium, None, false);
        t.title = "review pull request".to_string();
        let filters = FilterState::default().with_search("PULL");
        assert_eq!(filter_tasks(&[t], &filters).len(), 1);
    }

    #[test]
    fn test_priority_and_status_filters() {
        let tasks = vec![
            task("h-open", TaskPriority::High, None, false),
            task("h-done", TaskPriority::High, None, true),
            task("l-open", TaskPriority::Low, None, false),
        ];

        let high = FilterState::default().with_priority(PriorityFilter::High);
        assert_eq!(ids(&filter_tasks(&tasks, &high)), ["h-open", "h-done"]);

        let active = FilterState::default().with_status(StatusFilter::Active);
        assert_eq!(ids(&filter_tasks(&tasks, &active)), ["h-open", "l-open"]);

        let done = FilterState::default().with_status(StatusFilter::Completed);
        assert_eq!(ids(&filter_tasks(&tasks, &done)), ["h-done"]);
    }

    #[test]
    fn test_due_range_is_inclusive() {
        let tasks = vec![
            task("before", TaskPriority::Medium, Some("2024-02-28"), false),
            task("at-from", TaskPriority::Medium, Some("2024-03-01"), false),
            task("inside", TaskPriority::Medium, Some("2024-03-15"), false),
            task("at-to", TaskPriority::Medium, Some("2024-03-31"), false),
            task("after", TaskPriority::Medium, Some("2024-04-01"), false),
            task("undated", TaskPriority::Medium, None, false),
        ];
        let filters = FilterState::default()
            .with_due_range(Some("2024-03-01".into()), Some("2024-03-31".into()));

        assert_eq!(
            ids(&filter_tasks(&tasks, &filters)),
            ["at-from", "inside", "at-to"]
        );
    }

    #[test]
    fn test_single_bound_excludes_undated() {
        let tasks = vec![
            task("dated", TaskPriority::Medium, Some("2024-03-01"), false),
            task("undated", TaskPriority::Medium, None, false),
        ];

        let from_only = FilterState::default().with_due_range(Some("2024-01-01".into()), None);
        assert_eq!(ids(&filter_tasks(&tasks, &from_only)), ["dated"]);

        let to_only = FilterState::default().with_due_range(None, Some("2024-12-31".into()));
        assert_eq!(ids(&filter_tasks(&tasks, &to_only)), ["dated"]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let tasks = vec![
            task("done", TaskPriority::Low, None, true),
            task("open", TaskPriority::High, None, false),
        ];
        let snapshot = tasks.clone();
        let _ = filter_tasks(&tasks, &FilterState::default());
        assert_eq!(tasks, snapshot);
    }

    #[test]
    fn test_active_filter_count() {
        let mut filters = FilterState::default();
        assert_eq!(active_filter_count(&filters), 0);

        filters.search = "x".into();
        assert_eq!(active_filter_count(&filters), 1);
        filters.priority = PriorityFilter::Low;
        assert_eq!(active_filter_count(&filters), 2);
        filters.status = StatusFilter::Completed;
        assert_eq!(active_filter_count(&filters), 3);
        filters.due_date_from = Some("2024-01-01".into());
        assert_eq!(active_filter_count(&filters), 4);
        filters.due_date_to = Some("2024-12-31".into());
        assert_eq!(active_filter_count(&filters), 5);
    }

    #[test]
    fn test_blank_due_bounds_do_not_filter() {
        let filters: FilterState = serde_json::from_str(
            r#"{"search":"","priority":"all","status":"all","dueDateFrom":"","dueDateTo":""}"#,
        )
        .unwrap();
        let tasks = vec![
            task("dated", TaskPriority::Medium, Some("2024-01-01"), false),
            task("undated", TaskPriority::Medium, None, false),
        ];

        assert_eq!(active_filter_count(&filters), 0);
        assert_eq!(ids(&filter_tasks(&tasks, &filters)), ["dated", "undated"]);

        let direct = FilterState {
            due_date_from: Some(String::new()),
            due_date_to: Some(String::new()),
            ..FilterState::default()
        };
        assert_eq!(active_filter_count(&direct), 0);
        assert_eq!(ids(&filter_tasks(&tasks, &direct)), ["dated", "undated"]);
    }

    fn arb_priority() -> impl Strategy<Value = TaskPriority> {
        prop_oneof![
            Just(TaskPriority::Low),
            Just(TaskPriority::Medium),
            Just(TaskPriority::High),
        ]
    }

    fn arb_due() -> impl Strategy<Value = Option<String>> {
        proptest::option::of((2023u32..2026, 1u32..13, 1u32..29).prop_map(|(y, m, d)| {
            format!("{y:04}-{m:02}-{d:02}")
        }))
    }

    fn arb_tasks() -> impl Strategy<Value = Vec<Task>> {
        proptest::collection::vec(
            (arb_priority(), arb_due(), any::<bool>(), "[a-z ]{0,12}"),
            0..40,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (priority, due, completed, title))| {
                    let mut t = task(&i.to_string(), priority, due.as_deref(), completed);
                    t.title = title;
                    t
                })
                .collect()
        })
    }

    fn arb_filters() -> impl Strategy<Value = FilterState> {
        (
            proptest::option::of("[a-z]{1,3}"),
            proptest::option::of(arb_priority()),
            prop_oneof![
                Just(StatusFilter::All),
                Just(StatusFilter::Active),
                Just(StatusFilter::Completed),
            ],
            arb_due(),
            arb_due(),
        )
            .prop_map(|(search, priority, status, from, to)| FilterState {
                search: search.unwrap_or_default(),
                priority: priority.map_or(PriorityFilter::All, PriorityFilter::from),
                status,
                due_date_from: from,
                due_date_to: to,
            })
    }

    proptest! {
        #[test]
        fn prop_default_filters_keep_every_task(tasks in arb_tasks()) {
            let result = filter_tasks(&tasks, &FilterState::default());
            let mut expected = tasks.clone();
            expected.sort_by(compare_tasks);
            prop_assert_eq!(result, expected);
        }

        #[test]
        fn prop_status_filters_partition(tasks in arb_tasks()) {
            let active = filter_tasks(&tasks, &FilterState::default().with_status(StatusFilter::Active));
            let done = filter_tasks(&tasks, &FilterState::default().with_status(StatusFilter::Completed));

            prop_assert_eq!(active.len() + done.len(), tasks.len());
            prop_assert!(active.iter().all(|a| done.iter().all(|d| d.id != a.id)));
        }

        #[test]
        fn prop_sort_is_idempotent(tasks in arb_tasks(), filters in arb_filters()) {
            let once = filter_tasks(&tasks, &filters);
            let twice = filter_tasks(&once, &FilterState::default());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_result_is_ordered(tasks in arb_tasks(), filters in arb_filters()) {
            let result = filter_tasks(&tasks, &filters);
            for pair in result.windows(2) {
                prop_assert_ne!(compare_tasks(&pair[0], &pair[1]), Ordering::Greater);
            }
        }

        #[test]
        fn prop_result_is_subset(tasks in arb_tasks(), filters in arb_filters()) {
            let result = filter_tasks(&tasks, &filters);
            prop_assert!(result.len() <= tasks.len());
            prop_assert!(result.iter().all(|r| tasks.contains(r)));
        }

        #[test]
        fn prop_filter_count_matches_fields(filters in arb_filters()) {
            let expected = usize::from(!filters.search.is_empty())
                + usize::from(filters.priority != PriorityFilter::All)
                + usize::from(filters.status != StatusFilter::All)
                + usize::from(filters.due_from().is_some())
                + usize::from(filters.due_to().is_some());
            prop_assert_eq!(active_filter_count(&filters), expected);
        }
    }
}
