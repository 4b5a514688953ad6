use std::collections::HashMap;

use chirp_protocol::TaskProgress;

/// Progress indicators for background tasks, keyed by task id.
///
/// An indicator exists only once [`register`]ed; the page analog is "an
/// element for this task is present in the DOM". Reports for anything else
/// are dropped by [`apply`], which says whether it updated an indicator.
///
/// [`register`]: ProgressBoard::register
/// [`apply`]: ProgressBoard::apply
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressBoard {
    tasks: HashMap<String, u8>,
}

impl ProgressBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an indicator for `task_id` at 0%. Registering an existing
    /// task keeps its current progress.
    pub fn register(&mut self, task_id: &str) {
        self.tasks.entry(task_id.to_owned()).or_insert(0);
    }

    /// Applies a progress report. Returns `false` when the task has no
    /// registered indicator; the report is dropped, not queued.
    pub fn apply(&mut self, progress: &TaskProgress) -> bool {
        match self.tasks.get_mut(&progress.task_id) {
            Some(percent) => {
                *percent = progress.percent();
                true
            }
            None => false,
        }
    }

    /// Displayed percentage for a task, if registered.
    pub fn percent(&self, task_id: &str) -> Option<u8> {
        self.tasks.get(task_id).copied()
    }

    pub fn is_registered(&self, task_id: &str) -> bool {
        self.tasks.contains_key(task_id)
    }

    /// Registered task ids, sorted alphabetically.
    pub fn task_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.tasks.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}
