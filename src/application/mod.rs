//! Application layer - Use cases and orchestration

pub mod authenticate;
pub mod diary_menu;

pub use authenticate::AuthService;
pub use diary_menu::DiaryMenu;
