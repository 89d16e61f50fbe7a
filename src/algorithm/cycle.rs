//! 环路检测
//!
//! 回溯式深度优先搜索，判断是否存在
//! 经过至少三个不同顶点、回到起点的有向闭合回路

use crate::graph::Graph;
use std::collections::HashSet;

/// 深度优先搜索栈帧：当前顶点与下一个待尝试的出边游标
struct Frame {
    vertex: u32,
    cursor: usize,
}

/// 环路检测器
///
/// 环路指回到起点、途经至少三个不同顶点的有向闭合回路；
/// 互为反向的一对弧（u→v 与 v→u）只算两个顶点，不是环路，
/// 自环同样不算。
pub struct CycleDetector<'a> {
    graph: &'a Graph,
    /// 逻辑弧对集合，用于闭合弧测试
    pairs: HashSet<(u32, u32)>,
}

impl<'a> CycleDetector<'a> {
    /// 创建检测器
    pub fn new(graph: &'a Graph) -> Self {
        let pairs = graph.endpoint_indices().iter().copied().collect();
        Self { graph, pairs }
    }

    /// 是否存在环路
    ///
    /// 顶点或弧不足三个时直接判否。之后把每个顶点轮流作为候选起点：
    /// 图是有向的且不保证连通，环路可能挂在任何顶点上
    pub fn has_circle(&self) -> bool {
        if self.graph.vertex_count() <= 2 || self.graph.arc_count() <= 2 {
            return false;
        }
        (0..self.graph.vertex_count() as u32).any(|start| self.search_from(start))
    }

    /// 以 start 为锚点搜索一条闭合回路
    ///
    /// 只沿出边走，进入顶点时标记、分支用尽时回退标记，
    /// 让兄弟分支与后续起点可以复用顶点。
    /// 进入顶点 w 时，若路径上已标记至少三个顶点
    /// 且存在弧 (w, start)，即找到环路
    fn search_from(&self, start: u32) -> bool {
        let mut visited = vec![false; self.graph.vertex_count()];
        visited[start as usize] = true;
        let mut stack = vec![Frame {
            vertex: start,
            cursor: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let successors = self.graph.outgoing_of(frame.vertex);
            if frame.cursor >= successors.len() {
                // 分支用尽，回退标记
                visited[frame.vertex as usize] = false;
                stack.pop();
                continue;
            }

            let next = successors[frame.cursor];
            frame.cursor += 1;
            if visited[next as usize] {
                continue;
            }

            visited[next as usize] = true;
            // 含起点在内，路径上已有 stack.len() + 1 个顶点
            if stack.len() + 1 >= 3 && self.pairs.contains(&(next, start)) {
                return true;
            }
            stack.push(Frame {
                vertex: next,
                cursor: 0,
            });
        }

        false
    }
}
