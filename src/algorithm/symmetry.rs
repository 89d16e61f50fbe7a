//! 对称性分类
//!
//! 自环检测、自反性，以及对称 / 非对称 / 反对称三种
//! 互斥但不穷尽的关系，外加"简单图"复合判定

use crate::graph::Graph;
use std::collections::HashSet;

/// 对称性分类器
///
/// 构造时把弧序列压缩成逻辑上的 (源, 目标) 序号对集合：
/// 端点相同的多重弧只保留存在性，之后每个判定都是一次线性扫描。
pub struct SymmetryClassifier<'a> {
    graph: &'a Graph,
    /// 逻辑弧对集合
    pairs: HashSet<(u32, u32)>,
}

impl<'a> SymmetryClassifier<'a> {
    /// 创建分类器
    pub fn new(graph: &'a Graph) -> Self {
        let pairs = graph.endpoint_indices().iter().copied().collect();
        Self { graph, pairs }
    }

    /// 是否存在自环（源与目标相同的弧）
    pub fn has_sling(&self) -> bool {
        self.pairs.iter().any(|&(src, dst)| src == dst)
    }

    /// 是否自反：所有顶点都带自环
    ///
    /// 空图自反；有顶点而无弧的图不自反
    pub fn is_reflexive(&self) -> bool {
        if self.graph.vertex_count() == 0 {
            return true;
        }
        if self.graph.arc_count() == 0 {
            return false;
        }
        (0..self.graph.vertex_count() as u32).all(|index| self.pairs.contains(&(index, index)))
    }

    /// 是否对称：每条弧的反向弧也存在
    ///
    /// 自环是自己的反向弧，天然满足；空弧集空泛地对称
    pub fn is_symmetrical(&self) -> bool {
        self.pairs
            .iter()
            .all(|&(src, dst)| self.pairs.contains(&(dst, src)))
    }

    /// 是否非对称：无自环，且任何弧的反向弧都不存在
    ///
    /// 对称、非对称与反对称互斥但不穷尽，一个图可能三者皆非
    pub fn is_asymmetrical(&self) -> bool {
        if self.has_sling() {
            return false;
        }
        self.pairs
            .iter()
            .all(|&(src, dst)| !self.pairs.contains(&(dst, src)))
    }

    /// 是否反对称：不存在互为反向的两条不同弧
    ///
    /// 与非对称的差别只在自环得到豁免
    pub fn is_antisymmetrical(&self) -> bool {
        self.pairs
            .iter()
            .all(|&(src, dst)| src == dst || !self.pairs.contains(&(dst, src)))
    }

    /// 是否简单图：无自环且对称
    ///
    /// 本系统的"简单"指双向且无自环，而非通常的"无环无重边"
    pub fn is_simple(&self) -> bool {
        !self.has_sling() && self.is_symmetrical()
    }
}
