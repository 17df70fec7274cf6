//! Task list state for the task page.
//!
//! DESIGN
//! ======
//! `items` keeps the user's board order. Search, the pending/completed split
//! and drag-and-drop all work on views derived from it, so a drop inside a
//! filtered view moves the task relative to the visible neighbours only.
//! Every operation here is synchronous; the page pairs each one with the
//! matching remote call.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use crate::net::types::Task;

/// Which column of the board a task is shown in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskList {
    Pending,
    Completed,
}

impl TaskList {
    pub fn of(task: &Task) -> Self {
        if task.completed { Self::Completed } else { Self::Pending }
    }
}

/// Shared task-list state backed by REST calls.
#[derive(Clone, Debug, Default)]
pub struct TasksState {
    pub items: Vec<Task>,
    pub loading: bool,
    pub search: String,
    /// Copy of the task open in the form, if editing.
    pub editing: Option<Task>,
    pub error: Option<String>,
}

impl TasksState {
    /// Tasks whose title or description contains the search text, ignoring case.
    pub fn filtered(&self) -> Vec<Task> {
        let needle = self.search.to_lowercase();
        self.items
            .iter()
            .filter(|task| matches_search(task, &needle))
            .cloned()
            .collect()
    }

    pub fn pending(&self) -> Vec<Task> {
        self.list(TaskList::Pending)
    }

    pub fn completed(&self) -> Vec<Task> {
        self.list(TaskList::Completed)
    }

    /// Filtered tasks of one column, in board order.
    pub fn list(&self, list: TaskList) -> Vec<Task> {
        self.filtered().into_iter().filter(|t| TaskList::of(t) == list).collect()
    }

    /// Replace everything after a full reload.
    pub fn replace_all(&mut self, items: Vec<Task>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Newly created tasks go to the top of the board.
    pub fn prepend(&mut self, task: Task) {
        self.items.insert(0, task);
    }

    /// Swap in the server's copy of an edited task and close the form.
    pub fn apply_updated(&mut self, task: Task) {
        if let Some(slot) = self.items.iter_mut().find(|t| t.id == task.id) {
            *slot = task;
        }
        self.editing = None;
    }

    /// Update only the completion flag of `id`.
    pub fn apply_completed(&mut self, id: &str, completed: bool) {
        if let Some(slot) = self.items.iter_mut().find(|t| t.id == id) {
            slot.completed = completed;
        }
    }

    /// Take the completion flag from the server's copy after a save, which
    /// may differ from the local flip.
    pub fn confirm_completed(&mut self, saved: &Task) {
        self.apply_completed(&saved.id, saved.completed);
    }

    pub fn remove(&mut self, id: &str) {
        self.items.retain(|t| t.id != id);
        if self.editing.as_ref().is_some_and(|t| t.id == id) {
            self.editing = None;
        }
    }

    pub fn begin_edit(&mut self, task: &Task) {
        self.editing = Some(task.clone());
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Move a task within one column from view index `from` to `to`.
    /// Out-of-range indices are ignored.
    pub fn reorder(&mut self, list: TaskList, from: usize, to: usize) {
        let view = self.list(list);
        if from == to || from >= view.len() || to >= view.len() {
            return;
        }
        let moving = view[from].id.clone();
        let anchor = view[to].id.clone();
        let Some(src) = self.position(&moving) else {
            return;
        };
        let task = self.items.remove(src);
        let Some(anchor_pos) = self.position(&anchor) else {
            self.items.insert(src, task);
            return;
        };
        let dst = if from < to { anchor_pos + 1 } else { anchor_pos };
        self.items.insert(dst, task);
    }

    /// Drop a task from column `from` at view index `index` into the other
    /// column at view index `to`, flipping its completion flag locally.
    ///
    /// Returns the task as it is after the flip so the caller can persist
    /// `completed`; `None` when `index` is out of range.
    pub fn transfer(&mut self, from: TaskList, index: usize, to: usize) -> Option<Task> {
        let id = self.list(from).get(index)?.id.clone();
        let pos = self.position(&id)?;
        self.items[pos].completed = !self.items[pos].completed;
        let moved = self.items[pos].clone();

        let target = TaskList::of(&moved);
        let view = self.list(target);
        if let Some(current) = view.iter().position(|t| t.id == id) {
            let last = view.len() - 1;
            self.reorder(target, current, to.min(last));
        }
        Some(moved)
    }

    /// Apply a drag-and-drop from `source` to `target`, both as column and
    /// view index. A drop in the same column reorders; a drop in the other
    /// column transfers and returns the task whose completion must be saved.
    pub fn apply_drop(&mut self, source: (TaskList, usize), target: (TaskList, usize)) -> Option<Task> {
        let (from_list, from) = source;
        let (to_list, to) = target;
        if from_list == to_list {
            let last = self.list(to_list).len().checked_sub(1)?;
            self.reorder(to_list, from, to.min(last));
            None
        } else {
            self.transfer(from_list, from, to)
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|t| t.id == id)
    }
}

fn matches_search(task: &Task, needle: &str) -> bool {
    needle.is_empty()
        || task.title.to_lowercase().contains(needle)
        || task.description.to_lowercase().contains(needle)
}
