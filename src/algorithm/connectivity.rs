//! 连通性分析
//!
//! 弱连通（忽略弧方向的可达性）判定，
//! 以及由 连通 ∧ 对称 推出的强连通替代判据

use super::symmetry::SymmetryClassifier;
use crate::graph::Graph;
use crate::types::Direction;

/// 连通性分析器
pub struct ConnectivityAnalyzer<'a> {
    graph: &'a Graph,
}

impl<'a> ConnectivityAnalyzer<'a> {
    /// 创建分析器
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// 是否弱连通：忽略弧方向时每个顶点都可达
    ///
    /// 空图与单顶点图视为连通；多个顶点而无弧的图必不连通。
    /// 其余情况从序号 0 开始做忽略方向的深度优先搜索，
    /// 每个顶点只标记一次；自环到达不了未访问的邻居，
    /// 不会推进搜索
    pub fn is_coherent(&self) -> bool {
        let n = self.graph.vertex_count();
        if n <= 1 {
            return true;
        }
        if self.graph.arc_count() == 0 {
            return false;
        }

        let mut visited = vec![false; n];
        let mut stack = vec![0u32];
        visited[0] = true;
        let mut reached = 1usize;

        while let Some(current) = stack.pop() {
            for neighbor in self.graph.neighbors(current, Direction::Both) {
                if !visited[neighbor as usize] {
                    visited[neighbor as usize] = true;
                    reached += 1;
                    stack.push(neighbor);
                }
            }
        }

        reached == n
    }

    /// 是否强连通（替代判据）：弱连通且对称
    ///
    /// 每条弧都有反向弧时，弱连通蕴含两两互达，
    /// 因此用该组合替代经典的强连通分量分析；
    /// 两者在某些图上结论不同，这里保持组合定义不变
    pub fn is_strong_coherent(&self) -> bool {
        self.is_coherent() && SymmetryClassifier::new(self.graph).is_symmetrical()
    }
}
