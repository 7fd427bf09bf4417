//! Application Context
//!
//! Shared signals provided via the Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Base address of the todo API - read
    pub api_url: ReadSignal<String>,
    /// Trigger to refetch the collection - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to refetch the collection - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        api_url: ReadSignal<String>,
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            api_url,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Trigger a refetch of the todo collection
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}
