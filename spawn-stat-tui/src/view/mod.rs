//! View 层：把 App 状态渲染到终端

mod components;
pub mod layout;
mod pages;
pub mod theme;

pub use layout::render;
