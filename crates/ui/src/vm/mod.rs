mod carousel_vm;
mod nav_vm;
mod page_vm;
mod project_vm;

pub use carousel_vm::{CAROUSEL_ID, redirect_wheel};
pub use nav_vm::{NavEntryVm, map_nav_entries, navigate_to};
pub use page_vm::{footer_line, progress_style, reveal_class};
pub use project_vm::{ProjectCardVm, map_project_cards};
