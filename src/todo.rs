use serde::{Deserialize, Serialize};
use std::fmt;

// Status is stored lowercase in the file and shown uppercase in listings
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Pending,
    Completed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Pending => write!(f, "PENDING"),
            Status::Completed => write!(f, "COMPLETED"),
        }
    }
}

// A single record in the store. Fields stay public, same as the file layout:
// one description, one status, nothing else.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Todo {
    pub description: String,
    pub status: Status,
}

impl Todo {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            status: Status::Pending,
        }
    }
}

/// Maps an operator-facing 1-based position onto a vector index.
///
/// Returns `None` for anything outside `[1, len]`, including `0` and negatives.
pub fn resolve_index(position: i64, len: usize) -> Option<usize> {
    if position < 1 {
        return None;
    }
    let idx = usize::try_from(position - 1).ok()?;
    (idx < len).then_some(idx)
}

/// Ordered todo collection. Position in the vector is the only identity a
/// todo has, so removing an entry renumbers everything after it.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct TodoList {
    items: Vec<Todo>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Todo> {
        self.items.iter()
    }

    pub fn get(&self, position: i64) -> Option<&Todo> {
        resolve_index(position, self.len()).map(|idx| &self.items[idx])
    }

    pub fn add(&mut self, description: impl Into<String>) -> &Todo {
        self.items.push(Todo::new(description));
        &self.items[self.items.len() - 1]
    }

    pub fn remove(&mut self, position: i64) -> Option<Todo> {
        let idx = resolve_index(position, self.len())?;
        Some(self.items.remove(idx))
    }

    pub fn complete(&mut self, position: i64) -> Option<&Todo> {
        let idx = resolve_index(position, self.len())?;
        let todo = &mut self.items[idx];
        todo.status = Status::Completed;
        Some(todo)
    }

    /// Listing lines, numbered from 1 in stored order.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.items
            .iter()
            .enumerate()
            .map(|(idx, todo)| format!("{} - {} - {}", idx + 1, todo.description, todo.status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(descriptions: &[&str]) -> TodoList {
        let mut list = TodoList::new();
        for d in descriptions {
            list.add(*d);
        }
        list
    }

    #[test]
    fn test_resolve_index_bounds() {
        assert_eq!(resolve_index(1, 3), Some(0));
        assert_eq!(resolve_index(3, 3), Some(2));
        assert_eq!(resolve_index(0, 3), None);
        assert_eq!(resolve_index(4, 3), None);
        assert_eq!(resolve_index(-2, 3), None);
        assert_eq!(resolve_index(1, 0), None);
    }

    #[test]
    fn test_adds_keep_order_and_start_pending() {
        let list = list_of(&["a", "b", "c"]);

        assert_eq!(list.len(), 3);
        let descriptions: Vec<_> = list.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, ["a", "b", "c"]);
        assert!(list.iter().all(|t| t.status == Status::Pending));
    }

    #[test]
    fn test_remove_shifts_later_entries_down() {
        let mut list = list_of(&["a", "b", "c"]);

        let removed = list.remove(2).unwrap();

        assert_eq!(removed.description, "b");
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(2).unwrap().description, "c");
    }

    #[test]
    fn test_out_of_range_leaves_list_unchanged() {
        let mut list = list_of(&["a", "b"]);
        let before = list.clone();

        assert!(list.remove(0).is_none());
        assert!(list.remove(3).is_none());
        assert!(list.complete(0).is_none());
        assert!(list.complete(3).is_none());
        assert_eq!(list, before);
    }

    #[test]
    fn test_complete_touches_only_target() {
        let mut list = list_of(&["a", "b", "c"]);

        list.complete(2);

        let statuses: Vec<_> = list.iter().map(|t| t.status).collect();
        assert_eq!(statuses, [Status::Pending, Status::Completed, Status::Pending]);
    }

    #[test]
    fn test_complete_is_idempotent() {
        let mut once = list_of(&["a", "b"]);
        once.complete(1);
        let mut twice = once.clone();
        twice.complete(1);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_lines_format() {
        let mut list = list_of(&["buy milk", "walk dog"]);
        list.complete(1);

        let lines: Vec<_> = list.lines().collect();
        assert_eq!(lines, ["1 - buy milk - COMPLETED", "2 - walk dog - PENDING"]);
    }

    #[test]
    fn test_file_shape() {
        let list = list_of(&["buy milk"]);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"[{"description":"buy milk","status":"pending"}]"#);

        let bad = r#"[{"description":"x","status":"done"}]"#;
        assert!(serde_json::from_str::<TodoList>(bad).is_err());
        let extra = r#"[{"description":"x","status":"pending","id":1}]"#;
        assert!(serde_json::from_str::<TodoList>(extra).is_err());
    }
}
