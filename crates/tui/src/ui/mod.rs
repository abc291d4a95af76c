//! UI layer: components, layout, theme, and the event-loop runtime.

pub mod components;
pub mod layout;
pub mod main_view;
pub mod runtime;
pub mod theme;
