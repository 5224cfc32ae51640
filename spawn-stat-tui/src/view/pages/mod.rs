//! 页面视图：确认模式显示路线，编辑模式显示全部条目

pub mod editor;
pub mod route;

/// 列表下方详情区的行数
pub const DETAIL_HEIGHT: u16 = 2;
