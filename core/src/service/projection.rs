use crate::model::filter::FilterMode;
use crate::model::task::Task;

/// Order-preserving subsequence of `tasks` selected by `mode`.
pub fn project(tasks: &[Task], mode: FilterMode) -> Vec<&Task> {
    tasks.iter().filter(|task| mode.matches(task)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::TaskId;
    use std::collections::HashSet;

    fn tasks(flags: &[bool]) -> Vec<Task> {
        flags
            .iter()
            .enumerate()
            .map(|(i, done)| {
                let mut task = Task::new(TaskId(i as u64 + 1), format!("task {}", i + 1));
                task.completed = *done;
                task
            })
            .collect()
    }

    fn ids(projected: &[&Task]) -> Vec<u64> {
        projected.iter().map(|t| t.id.0).collect()
    }

    #[test]
    fn filters_keep_insertion_order() {
        let all = tasks(&[true, false, true, false, false]);
        assert_eq!(ids(&project(&all, FilterMode::Completed)), vec![1, 3]);
        assert_eq!(ids(&project(&all, FilterMode::Pending)), vec![2, 4, 5]);
        assert_eq!(ids(&project(&all, FilterMode::All)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn unknown_mode_string_is_identity() {
        let all = tasks(&[true, false]);
        let projected = project(&all, FilterMode::parse_lenient("starred"));
        assert_eq!(ids(&projected), vec![1, 2]);
    }

    #[test]
    fn completed_and_pending_partition_the_collection() {
        let patterns: [&[bool]; 5] = [
            &[],
            &[true],
            &[false, false],
            &[true, false, true],
            &[false, true, true, false, true, false],
        ];
        for flags in patterns {
            let all = tasks(flags);
            let done: HashSet<u64> = ids(&project(&all, FilterMode::Completed)).into_iter().collect();
            let open: HashSet<u64> = ids(&project(&all, FilterMode::Pending)).into_iter().collect();
            let every: HashSet<u64> = all.iter().map(|t| t.id.0).collect();

            assert!(done.is_disjoint(&open));
            assert_eq!(&done | &open, every);
        }
    }

    #[test]
    fn empty_projection_is_just_empty() {
        let all = tasks(&[false, false]);
        assert!(project(&all, FilterMode::Completed).is_empty());
    }
}
