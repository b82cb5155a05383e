use crate::status::StatusId;
use crate::task::Task;

/// Tasks belonging to `status_id`, in ascending column order. Pure; calling
/// it twice on the same input yields the same sequence.
pub fn tasks_for_status(tasks: &[Task], status_id: StatusId) -> Vec<Task> {
    let mut column: Vec<Task> = tasks
        .iter()
        .filter(|task| task.status_id == status_id)
        .cloned()
        .collect();
    column.sort_by_key(|task| task.order);
    column
}

/// Renumbers the tasks of one column to a contiguous zero-based run,
/// preserving their relative order. Tasks of other columns pass through
/// ahead of the renumbered run; only the column-relative order of each task
/// is meaningful afterwards.
pub fn reorder_tasks_in_status(tasks: Vec<Task>, status_id: StatusId) -> Vec<Task> {
    let (column, mut reordered): (Vec<Task>, Vec<Task>) = tasks
        .into_iter()
        .partition(|task| task.status_id == status_id);

    for (index, mut task) in column.into_iter().enumerate() {
        task.order = index as i32;
        reordered.push(task);
    }
    reordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn task_in(status_id: StatusId, title: &str, order: i32) -> Task {
        let mut task = Task::new(title.to_string(), String::new(), status_id).unwrap();
        task.order = order;
        task
    }

    #[test]
    fn test_tasks_for_status_sorted_ascending() {
        let status = Uuid::new_v4();
        let other = Uuid::new_v4();
        let tasks = vec![
            task_in(status, "c", 2),
            task_in(other, "x", 0),
            task_in(status, "a", 0),
            task_in(status, "b", 1),
        ];

        let column = tasks_for_status(&tasks, status);
        let titles: Vec<_> = column.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["a", "b", "c"]);
    }

    #[test]
    fn test_tasks_for_status_is_idempotent() {
        let status = Uuid::new_v4();
        let tasks = vec![task_in(status, "b", 1), task_in(status, "a", 0)];

        let first: Vec<_> = tasks_for_status(&tasks, status)
            .iter()
            .map(|t| t.id)
            .collect();
        let second: Vec<_> = tasks_for_status(&tasks, status)
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reorder_closes_gaps() {
        let status = Uuid::new_v4();
        let tasks = vec![
            task_in(status, "a", 0),
            task_in(status, "b", 3),
            task_in(status, "c", 7),
        ];

        let reordered = reorder_tasks_in_status(tasks, status);
        let pairs: Vec<_> = reordered
            .iter()
            .map(|t| (t.title.as_str(), t.order))
            .collect();
        assert_eq!(pairs, [("a", 0), ("b", 1), ("c", 2)]);
    }

    #[test]
    fn test_reorder_leaves_other_columns_alone() {
        let status = Uuid::new_v4();
        let other = Uuid::new_v4();
        let tasks = vec![task_in(other, "x", 5), task_in(status, "a", 2)];

        let reordered = reorder_tasks_in_status(tasks, status);
        let x = reordered.iter().find(|t| t.title == "x").unwrap();
        let a = reordered.iter().find(|t| t.title == "a").unwrap();
        assert_eq!(x.order, 5);
        assert_eq!(a.order, 0);
    }
}
