//! Global Application State Store
//!
//! A plain state struct with one pure transition per event, wrapped in a
//! Leptos reactive_stores `Store` for field-level reactivity. Rendering
//! reads subfields; orchestration applies transitions through `write()`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::ApiError;
use crate::models::Todo;

/// Whether the initial collection fetch has ever completed.
///
/// Kept separate from list length so an empty server response is not
/// mistaken for a list that was never loaded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    NotLoaded,
    Loaded,
}

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Cached view of the server's todo collection
    pub todos: Vec<Todo>,
    /// Ids with an unresolved toggle/delete request
    pub in_flight: Vec<u32>,
    /// Ids whose most recent request failed
    pub failed: Vec<u32>,
    /// Whether a full fetch has completed
    pub load_status: LoadStatus,
    /// Error from the most recent failed fetch, cleared by the next success
    pub load_error: Option<ApiError>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full fetch resolved: replace the cached list wholesale.
    pub fn load_succeeded(&mut self, fetched: Vec<Todo>) {
        self.todos = fetched;
        self.load_status = LoadStatus::Loaded;
        self.load_error = None;
    }

    /// Full fetch failed: stale data stays visible, status only advances
    /// once a load actually completes.
    pub fn load_failed(&mut self, error: ApiError) {
        self.load_error = Some(error);
    }

    /// Create resolved: append the record the server assigned an id to.
    pub fn create_succeeded(&mut self, created: Todo) {
        self.todos.push(created);
    }

    /// Start a toggle: flip the row optimistically and mark it in flight.
    /// Returns the value to send in the patch, or `None` when the id is
    /// unknown or already has an unresolved request.
    pub fn toggle_requested(&mut self, id: u32) -> Option<bool> {
        if self.in_flight.contains(&id) {
            return None;
        }
        let todo = self.todos.iter_mut().find(|t| t.id == id)?;
        todo.is_done = !todo.is_done;
        let sent = todo.is_done;
        self.failed.retain(|x| *x != id);
        self.in_flight.push(id);
        Some(sent)
    }

    /// Toggle resolved: the optimistic flip stands, only this id's marker
    /// is cleared.
    pub fn toggle_confirmed(&mut self, id: u32) {
        self.in_flight.retain(|x| *x != id);
    }

    /// Toggle failed: revert the optimistic flip, clear this id's marker,
    /// flag the row.
    pub fn toggle_failed(&mut self, id: u32) {
        if let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) {
            todo.is_done = !todo.is_done;
        }
        self.in_flight.retain(|x| *x != id);
        self.mark_failed(id);
    }

    /// Start a delete: mark the row in flight. Returns false when the id is
    /// unknown or already has an unresolved request.
    pub fn delete_requested(&mut self, id: u32) -> bool {
        if self.in_flight.contains(&id) || !self.todos.iter().any(|t| t.id == id) {
            return false;
        }
        self.failed.retain(|x| *x != id);
        self.in_flight.push(id);
        true
    }

    /// Delete resolved: drop the row and its marker.
    pub fn delete_confirmed(&mut self, id: u32) {
        self.todos.retain(|t| t.id != id);
        self.in_flight.retain(|x| *x != id);
    }

    /// Delete failed: the row stays, clear this id's marker, flag the row.
    pub fn delete_failed(&mut self, id: u32) {
        self.in_flight.retain(|x| *x != id);
        self.mark_failed(id);
    }

    pub fn is_in_flight(&self, id: u32) -> bool {
        self.in_flight.contains(&id)
    }

    pub fn has_failed(&self, id: u32) -> bool {
        self.failed.contains(&id)
    }

    fn mark_failed(&mut self, id: u32) {
        if !self.failed.contains(&id) {
            self.failed.push(id);
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, task: &str, is_done: bool) -> Todo {
        Todo {
            id,
            task: task.to_string(),
            is_done,
        }
    }

    fn loaded_state(todos: Vec<Todo>) -> AppState {
        let mut state = AppState::new();
        state.load_succeeded(todos);
        state
    }

    #[test]
    fn load_replaces_list_and_completes() {
        let mut state = loaded_state(vec![make_todo(9, "stale", true)]);
        state.load_succeeded(vec![make_todo(1, "a", false)]);

        assert_eq!(state.todos, vec![make_todo(1, "a", false)]);
        assert_eq!(state.load_status, LoadStatus::Loaded);
    }

    #[test]
    fn empty_load_is_distinct_from_not_loaded() {
        let mut state = AppState::new();
        assert_eq!(state.load_status, LoadStatus::NotLoaded);

        state.load_succeeded(Vec::new());
        assert!(state.todos.is_empty());
        assert_eq!(state.load_status, LoadStatus::Loaded);
    }

    #[test]
    fn failed_load_keeps_stale_data_and_status() {
        let mut state = AppState::new();
        state.load_failed(ApiError::Status(500));
        assert_eq!(state.load_status, LoadStatus::NotLoaded);

        state.load_succeeded(vec![make_todo(1, "a", false)]);
        state.load_failed(ApiError::Request("offline".into()));
        assert_eq!(state.todos.len(), 1);
        assert_eq!(state.load_status, LoadStatus::Loaded);
        assert!(state.load_error.is_some());
    }

    #[test]
    fn create_appends_server_record() {
        let mut state = loaded_state(Vec::new());
        state.create_succeeded(make_todo(5, "buy milk", false));

        assert_eq!(state.todos, vec![make_todo(5, "buy milk", false)]);
    }

    #[test]
    fn toggle_flips_optimistically_and_reports_sent_value() {
        let mut state = loaded_state(vec![make_todo(1, "a", false)]);

        assert_eq!(state.toggle_requested(1), Some(true));
        assert!(state.todos[0].is_done);
        assert!(state.is_in_flight(1));
    }

    #[test]
    fn toggle_refused_while_request_unresolved() {
        let mut state = loaded_state(vec![make_todo(1, "a", false)]);

        assert_eq!(state.toggle_requested(1), Some(true));
        assert_eq!(state.toggle_requested(1), None);
        assert_eq!(state.in_flight, vec![1]);
    }

    #[test]
    fn toggle_on_unknown_id_is_refused() {
        let mut state = loaded_state(Vec::new());
        assert_eq!(state.toggle_requested(42), None);
        assert!(state.in_flight.is_empty());
    }

    #[test]
    fn confirm_clears_only_the_completing_id() {
        let mut state = loaded_state(vec![make_todo(1, "a", false), make_todo(2, "b", false)]);
        state.toggle_requested(1);
        state.toggle_requested(2);

        state.toggle_confirmed(1);
        assert!(!state.is_in_flight(1));
        assert!(state.is_in_flight(2));
    }

    #[test]
    fn failed_toggle_reverts_and_flags_the_row() {
        let mut state = loaded_state(vec![make_todo(1, "a", false)]);
        state.toggle_requested(1);

        state.toggle_failed(1);
        assert!(!state.todos[0].is_done);
        assert!(!state.is_in_flight(1));
        assert!(state.has_failed(1));
    }

    #[test]
    fn next_attempt_clears_the_failure_flag() {
        let mut state = loaded_state(vec![make_todo(1, "a", false)]);
        state.toggle_requested(1);
        state.toggle_failed(1);

        state.toggle_requested(1);
        assert!(!state.has_failed(1));
    }

    #[test]
    fn delete_removes_exactly_the_requested_row() {
        let mut state = loaded_state(vec![
            make_todo(1, "a", false),
            make_todo(3, "b", true),
            make_todo(4, "c", false),
        ]);
        assert!(state.delete_requested(3));

        state.delete_confirmed(3);
        assert_eq!(
            state.todos,
            vec![make_todo(1, "a", false), make_todo(4, "c", false)]
        );
        assert!(!state.is_in_flight(3));
    }

    #[test]
    fn failed_delete_keeps_the_row_and_flags_it() {
        let mut state = loaded_state(vec![make_todo(3, "b", true)]);
        state.delete_requested(3);

        state.delete_failed(3);
        assert_eq!(state.todos.len(), 1);
        assert!(!state.is_in_flight(3));
        assert!(state.has_failed(3));
    }

    #[test]
    fn delete_refused_for_unknown_or_busy_rows() {
        let mut state = loaded_state(vec![make_todo(1, "a", false)]);
        assert!(!state.delete_requested(2));

        state.toggle_requested(1);
        assert!(!state.delete_requested(1));
    }

    #[test]
    fn overlapping_toggles_settle_independently() {
        let mut state = loaded_state(vec![make_todo(1, "a", false), make_todo(2, "b", true)]);
        state.toggle_requested(1);
        state.toggle_requested(2);

        // responses arrive in the opposite order of the requests
        state.toggle_confirmed(2);
        state.toggle_confirmed(1);

        assert!(state.todos[0].is_done);
        assert!(!state.todos[1].is_done);
        assert!(state.in_flight.is_empty());
    }

    #[test]
    fn refresh_during_in_flight_request_keeps_the_marker() {
        let mut state = loaded_state(vec![make_todo(1, "a", false)]);
        state.toggle_requested(1);

        state.load_succeeded(vec![make_todo(1, "a", true)]);
        assert!(state.is_in_flight(1));

        state.toggle_confirmed(1);
        assert!(state.in_flight.is_empty());
    }
}
