//! 图数据结构
//!
//! 一次构造、构造后不可变的图快照，
//! 构造时完成全部校验并建立遍历索引

use super::arc::Arc;
use super::vertex::Vertex;
use crate::error::{Error, Result};
use crate::types::Direction;
use indexmap::IndexSet;
use smallvec::SmallVec;
use tracing::warn;

/// 每个顶点的邻接序号表
type Adjacency = Vec<SmallVec<[u32; 4]>>;

/// 图规模上限
///
/// 超限的输入在构造时立即失败，而不是在遍历中途耗尽内存
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphLimits {
    /// 顶点数量上限
    pub max_vertices: usize,
    /// 弧数量上限
    pub max_arcs: usize,
}

impl Default for GraphLimits {
    fn default() -> Self {
        Self {
            max_vertices: 100_000,
            max_arcs: 1_000_000,
        }
    }
}

/// 图：顶点序列与弧序列的不可变组合
///
/// 构造时建立顶点到序号的映射和两个方向的邻接表，
/// 遍历算法内部只传递序号，不再按标签做线性查找。
#[derive(Debug, Clone)]
pub struct Graph {
    /// 顶点集合（保持插入顺序，支持 O(1) 序号查找）
    vertices: IndexSet<Vertex>,
    /// 弧序列（按传入顺序保存，允许多重弧）
    arcs: Vec<Arc>,
    /// 每条弧的端点序号，与 arcs 一一对应
    endpoints: Vec<(u32, u32)>,
    /// 出边邻接表
    outgoing: Adjacency,
    /// 入边邻接表
    incoming: Adjacency,
}

impl Graph {
    /// 用默认规模上限构造图
    pub fn new(vertices: Vec<Vertex>, arcs: Vec<Arc>) -> Result<Self> {
        Self::with_limits(vertices, arcs, GraphLimits::default())
    }

    /// 用指定规模上限构造图
    ///
    /// 每条弧的两个端点都必须出现在顶点序列中，否则返回
    /// [`Error::MalformedGraph`]；顶点或弧超过上限返回
    /// [`Error::GraphTooLarge`]。重复的顶点按首次出现去重。
    pub fn with_limits(
        vertices: Vec<Vertex>,
        arcs: Vec<Arc>,
        limits: GraphLimits,
    ) -> Result<Self> {
        if vertices.len() > limits.max_vertices || arcs.len() > limits.max_arcs {
            return Err(Error::GraphTooLarge {
                vertices: vertices.len(),
                arcs: arcs.len(),
                max_vertices: limits.max_vertices,
                max_arcs: limits.max_arcs,
            });
        }

        let given = vertices.len();
        let vertex_set: IndexSet<Vertex> = vertices.into_iter().collect();
        if vertex_set.len() < given {
            warn!(
                "顶点序列含 {} 个重复项，已按首次出现去重",
                given - vertex_set.len()
            );
        }

        let mut endpoints = Vec::with_capacity(arcs.len());
        let mut outgoing: Adjacency = vec![SmallVec::new(); vertex_set.len()];
        let mut incoming: Adjacency = vec![SmallVec::new(); vertex_set.len()];

        for arc in &arcs {
            let src = Self::resolve(&vertex_set, arc, arc.src())?;
            let dst = Self::resolve(&vertex_set, arc, arc.dst())?;
            endpoints.push((src, dst));
            outgoing[src as usize].push(dst);
            incoming[dst as usize].push(src);
        }

        Ok(Self {
            vertices: vertex_set,
            arcs,
            endpoints,
            outgoing,
            incoming,
        })
    }

    fn resolve(set: &IndexSet<Vertex>, arc: &Arc, vertex: &Vertex) -> Result<u32> {
        match set.get_index_of(vertex) {
            Some(index) => Ok(index as u32),
            None => Err(Error::MalformedGraph {
                src: arc.src().to_string(),
                dst: arc.dst().to_string(),
                missing: vertex.to_string(),
            }),
        }
    }

    /// 顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 弧数量（多重弧按存储条数计）
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// 弧序列
    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    /// 顶点迭代器（按插入顺序）
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    /// 按序号取顶点
    pub fn vertex_at(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get_index(index)
    }

    /// 顶点的序号
    pub fn index_of(&self, vertex: &Vertex) -> Option<usize> {
        self.vertices.get_index_of(vertex)
    }

    /// 每条弧的端点序号，与 [`Graph::arcs`] 一一对应
    pub fn endpoint_indices(&self) -> &[(u32, u32)] {
        &self.endpoints
    }

    /// 顶点的出边邻接序号
    pub fn outgoing_of(&self, index: u32) -> &[u32] {
        &self.outgoing[index as usize]
    }

    /// 顶点的入边邻接序号
    pub fn incoming_of(&self, index: u32) -> &[u32] {
        &self.incoming[index as usize]
    }

    /// 指定方向的邻接序号迭代器
    pub fn neighbors(&self, index: u32, direction: Direction) -> impl Iterator<Item = u32> + '_ {
        let (out, inc): (&[u32], &[u32]) = match direction {
            Direction::Outgoing => (self.outgoing_of(index), &[]),
            Direction::Incoming => (&[], self.incoming_of(index)),
            Direction::Both => (self.outgoing_of(index), self.incoming_of(index)),
        };
        out.iter().chain(inc.iter()).copied()
    }

    /// 图总是有限的：顶点与弧都是显式枚举的序列
    pub fn is_finite(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construct_and_lookup() {
        let graph = Graph::new(
            vec![Vertex::new("a"), Vertex::new("b"), Vertex::new("c")],
            vec![Arc::untagged("a", "b"), Arc::untagged("b", "c")],
        )
        .unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.arc_count(), 2);
        assert_eq!(graph.index_of(&Vertex::new("b")), Some(1));
        assert_eq!(graph.vertex_at(2), Some(&Vertex::new("c")));
        assert_eq!(graph.endpoint_indices(), &[(0, 1), (1, 2)]);
        assert!(graph.is_finite());
    }

    #[test]
    fn test_malformed_arc_rejected() {
        let result = Graph::new(
            vec![Vertex::new("a")],
            vec![Arc::untagged("a", "ghost")],
        );

        assert!(matches!(
            result,
            Err(Error::MalformedGraph { ref missing, .. }) if missing == "ghost"
        ));
    }

    #[test]
    fn test_duplicate_vertices_deduped() {
        let graph = Graph::new(
            vec![Vertex::new("a"), Vertex::new("b"), Vertex::new("a")],
            vec![Arc::untagged("b", "a")],
        )
        .unwrap();

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.index_of(&Vertex::new("a")), Some(0));
        assert_eq!(graph.index_of(&Vertex::new("b")), Some(1));
    }

    #[test]
    fn test_graph_too_large() {
        let limits = GraphLimits {
            max_vertices: 2,
            max_arcs: 8,
        };
        let result = Graph::with_limits(
            vec![Vertex::new("a"), Vertex::new("b"), Vertex::new("c")],
            vec![],
            limits,
        );

        assert!(matches!(
            result,
            Err(Error::GraphTooLarge {
                vertices: 3,
                max_vertices: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_neighbors_by_direction() {
        let graph = Graph::new(
            vec![Vertex::new("a"), Vertex::new("b"), Vertex::new("c")],
            vec![Arc::untagged("a", "b"), Arc::untagged("c", "a")],
        )
        .unwrap();

        let outgoing: Vec<u32> = graph.neighbors(0, Direction::Outgoing).collect();
        let incoming: Vec<u32> = graph.neighbors(0, Direction::Incoming).collect();
        let both: Vec<u32> = graph.neighbors(0, Direction::Both).collect();

        assert_eq!(outgoing, vec![1]);
        assert_eq!(incoming, vec![2]);
        assert_eq!(both, vec![1, 2]);
    }

    #[test]
    fn test_multi_arcs_kept_in_storage() {
        let graph = Graph::new(
            vec![Vertex::new("a"), Vertex::new("b")],
            vec![
                Arc::new("a", "b", 0),
                Arc::new("a", "b", 1),
                Arc::untagged("a", "a"),
            ],
        )
        .unwrap();

        assert_eq!(graph.arc_count(), 3);
        assert_eq!(graph.outgoing_of(0), &[1, 1, 0]);
    }
}
