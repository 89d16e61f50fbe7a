//! 命令行支持模块
//!
//! 报告的表格渲染

pub mod printer;
