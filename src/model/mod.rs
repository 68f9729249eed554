pub mod action;
pub mod player;
pub mod reply;
pub mod save;
pub mod scene;
pub mod session;
