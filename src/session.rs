mod sidebar;
mod view;
mod viewer;


pub use sidebar::SidebarState;
pub use view::{FrameCursor, ListLimit, ViewMode};
pub use viewer::ViewerSession;
