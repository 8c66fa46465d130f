//! State Management
//!
//! Global application state and toast notifications.

pub mod global;

pub use global::{provide_global_state, GlobalState, ToastItem, ToastVariant};
