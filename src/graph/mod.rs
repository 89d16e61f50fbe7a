//! 图核心模块
//!
//! 定义顶点、弧和图的核心数据结构

mod arc;
mod graph;
mod vertex;

pub use arc::Arc;
pub use graph::{Graph, GraphLimits};
pub use vertex::Vertex;
