//! Global Application State
//!
//! Reactive state shared by the shell and every page, using Leptos signals.

use leptos::*;

/// How long a toast stays up before dismissing itself
pub const TOAST_DURATION_MS: u32 = 5000;

/// Look of a toast
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Error,
    Info,
}

/// One toast notification
#[derive(Clone, Debug, PartialEq)]
pub struct ToastItem {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

/// Toasts currently on screen, oldest first
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<ToastItem>,
}

impl ToastQueue {
    /// Add a toast and return its id
    pub fn push(&mut self, title: &str, description: &str, variant: ToastVariant) -> u64 {
        self.next_id += 1;
        self.items.push(ToastItem {
            id: self.next_id,
            title: title.to_string(),
            description: description.to_string(),
            variant,
        });
        self.next_id
    }

    /// Remove a toast; false if it was already gone
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[ToastItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Toast notifications
    pub toasts: RwSignal<ToastQueue>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Sidebar visibility on small screens
    pub sidebar_open: RwSignal<bool>,
    /// Display name for the header, once the profile is known
    pub user_name: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        toasts: create_rw_signal(ToastQueue::default()),
        loading: create_rw_signal(false),
        sidebar_open: create_rw_signal(false),
        user_name: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a toast (auto-dismisses after [`TOAST_DURATION_MS`])
    pub fn toast(&self, title: &str, description: &str, variant: ToastVariant) {
        let mut id = 0;
        self.toasts.update(|q| id = q.push(title, description, variant));

        let toasts = self.toasts;
        gloo_timers::callback::Timeout::new(TOAST_DURATION_MS, move || {
            toasts.update(|q| {
                q.dismiss(id);
            });
        })
        .forget();
    }

    /// Show a success message
    pub fn show_success(&self, message: &str) {
        self.toast("Success", message, ToastVariant::Success);
    }

    /// Show an error message
    pub fn show_error(&self, message: &str) {
        self.toast("Error", message, ToastVariant::Error);
    }

    /// Close a toast before its timer runs out
    pub fn dismiss_toast(&self, id: u64) {
        self.toasts.update(|q| {
            q.dismiss(id);
        });
    }

    /// Name shown in the header
    pub fn display_name(&self) -> String {
        self.user_name
            .get()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "Guest".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_ids_are_unique() {
        let mut queue = ToastQueue::default();
        let a = queue.push("Success", "Saved", ToastVariant::Success);
        let b = queue.push("Error", "Failed", ToastVariant::Error);
        assert_ne!(a, b);
        assert_eq!(queue.items().len(), 2);
        assert_eq!(queue.items()[0].title, "Success");
    }

    #[test]
    fn test_toast_dismiss() {
        let mut queue = ToastQueue::default();
        let a = queue.push("Success", "Saved", ToastVariant::Success);
        let b = queue.push("Error", "Failed", ToastVariant::Error);

        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].id, b);

        queue.dismiss(b);
        assert!(queue.is_empty());
    }
}
