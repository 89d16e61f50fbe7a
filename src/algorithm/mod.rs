//! 判定算法模块
//!
//! 包含对称性分类、连通性分析与环路检测

mod connectivity;
mod cycle;
mod symmetry;

pub use connectivity::ConnectivityAnalyzer;
pub use cycle::CycleDetector;
pub use symmetry::SymmetryClassifier;
