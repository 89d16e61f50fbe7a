//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("畸形图: 弧 ({src} -> {dst}) 引用了未声明的顶点 {missing}")]
    MalformedGraph {
        src: String,
        dst: String,
        missing: String,
    },

    #[error("图规模超出上限: {vertices} 个顶点 / {arcs} 条弧, 上限 {max_vertices} / {max_arcs}")]
    GraphTooLarge {
        vertices: usize,
        arcs: usize,
        max_vertices: usize,
        max_arcs: usize,
    },

    #[error("导入错误: {0}")]
    ImportError(String),

    #[error("序列化错误: {0}")]
    SerializationError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}
