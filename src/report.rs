//! 形状报告
//!
//! 对一张图一次性跑完全部判定，汇总为可序列化的结果

use crate::algorithm::{ConnectivityAnalyzer, CycleDetector, SymmetryClassifier};
use crate::graph::Graph;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 全部结构性质的汇总
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeReport {
    /// 顶点数量
    pub vertex_count: usize,
    /// 弧数量
    pub arc_count: usize,
    /// 是否存在自环
    pub has_sling: bool,
    /// 是否自反
    pub is_reflexive: bool,
    /// 是否对称
    pub is_symmetrical: bool,
    /// 是否非对称
    pub is_asymmetrical: bool,
    /// 是否反对称
    pub is_antisymmetrical: bool,
    /// 是否简单图
    pub is_simple: bool,
    /// 是否弱连通
    pub is_coherent: bool,
    /// 是否强连通（替代判据）
    pub is_strong_coherent: bool,
    /// 是否存在环路
    pub has_circle: bool,
}

impl ShapeReport {
    /// 评估一张图的全部结构性质
    ///
    /// 强连通替代判据直接由已算出的连通与对称结果组合而成
    pub fn analyze(graph: &Graph) -> Self {
        let classifier = SymmetryClassifier::new(graph);
        let connectivity = ConnectivityAnalyzer::new(graph);
        let detector = CycleDetector::new(graph);

        let has_sling = classifier.has_sling();
        let is_symmetrical = classifier.is_symmetrical();
        let is_coherent = connectivity.is_coherent();

        let report = Self {
            vertex_count: graph.vertex_count(),
            arc_count: graph.arc_count(),
            has_sling,
            is_reflexive: classifier.is_reflexive(),
            is_symmetrical,
            is_asymmetrical: classifier.is_asymmetrical(),
            is_antisymmetrical: classifier.is_antisymmetrical(),
            is_simple: !has_sling && is_symmetrical,
            is_coherent,
            is_strong_coherent: is_coherent && is_symmetrical,
            has_circle: detector.has_circle(),
        };
        debug!("形状分析完成: {:?}", report);
        report
    }
}
