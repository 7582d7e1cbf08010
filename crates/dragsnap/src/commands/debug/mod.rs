pub mod list;
pub mod monitors;
pub mod move_window;
