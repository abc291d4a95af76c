//! UI components for the Navdeck TUI.

pub(crate) mod component;
pub mod content;
pub mod hint_bar;
pub mod nav_list;
pub(crate) mod nav_rows;
pub mod sheet;
pub mod sidebar;

pub(crate) use component::Component;
pub use content::ContentComponent;
pub use hint_bar::HintBarComponent;
pub use sheet::SheetComponent;
pub use sidebar::SidebarComponent;
