//! 顶点定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点：不透明、可比较相等的标识符
///
/// 顶点按插入顺序存放在图里，序号 0 是默认的遍历起点；
/// 顺序只影响遍历的确定性，不影响判定语义。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Vertex(String);

impl Vertex {
    /// 创建新顶点
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// 获取标签
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Vertex {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for Vertex {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
