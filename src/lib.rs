//! GraphShape - 有向图结构性质判定引擎
//!
//! 针对小规模显式有向图的布尔性质判定库，支持：
//! - 弱连通判定与"连通 ∧ 对称"的强连通替代判据
//! - 环路检测（经过至少三个不同顶点的闭合回路）
//! - 对称 / 非对称 / 反对称分类与自反性
//! - 自环检测与简单图判定
//!
//! 图在构造时完成全部校验并建立索引，之后不可变；
//! 所有判定都是同一只读快照上的纯函数，可以并发求值。

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod import;
pub mod report;
pub mod types;

// 重导出常用类型
pub use algorithm::{ConnectivityAnalyzer, CycleDetector, SymmetryClassifier};
pub use error::{Error, Result};
pub use graph::{Arc, Graph, GraphLimits, Vertex};
pub use report::ShapeReport;
pub use types::{ArcTag, Direction};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
