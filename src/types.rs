//! 通用类型定义

use serde::{Deserialize, Serialize};

/// 弧标签
///
/// 用于区分端点相同的多重弧，判定算法不读取它
pub type ArcTag = u64;

/// 遍历方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Outgoing,
    Incoming,
    Both,
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Both
    }
}
