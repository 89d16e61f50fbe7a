//! 弧定义

use super::vertex::Vertex;
use crate::types::ArcTag;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 弧：从源顶点指向目标顶点的有向连接
///
/// 标签只用来区分端点相同的多重弧，所有判定都按 (源, 目标) 看待弧。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Arc {
    /// 源顶点
    src: Vertex,
    /// 目标顶点
    dst: Vertex,
    /// 辅助标签
    tag: ArcTag,
}

impl Arc {
    /// 创建新弧
    pub fn new(src: impl Into<Vertex>, dst: impl Into<Vertex>, tag: ArcTag) -> Self {
        Self {
            src: src.into(),
            dst: dst.into(),
            tag,
        }
    }

    /// 创建无标签弧（标签取 0）
    pub fn untagged(src: impl Into<Vertex>, dst: impl Into<Vertex>) -> Self {
        Self::new(src, dst, 0)
    }

    /// 获取源顶点
    pub fn src(&self) -> &Vertex {
        &self.src
    }

    /// 获取目标顶点
    pub fn dst(&self) -> &Vertex {
        &self.dst
    }

    /// 获取标签
    pub fn tag(&self) -> ArcTag {
        self.tag
    }

    /// 是否为自环（源与目标相同）
    pub fn is_sling(&self) -> bool {
        self.src == self.dst
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} -> {}, {})", self.src, self.dst, self.tag)
    }
}
