pub mod dispatch;
pub mod logs;
pub mod schemas;
