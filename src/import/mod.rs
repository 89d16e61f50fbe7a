//! 图文档导入模块
//!
//! 从 JSON 文档构造图，供命令行工具使用；
//! 引擎本身不持久化图

use crate::error::{Error, Result};
use crate::graph::{Arc, Graph, Vertex};
use crate::types::ArcTag;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// 图描述文档（JSON 格式）
#[derive(Debug, Serialize, Deserialize)]
pub struct GraphDocument {
    /// 顶点标签序列
    pub vertices: Vec<String>,
    /// 弧记录序列
    #[serde(default)]
    pub arcs: Vec<ArcRecord>,
}

/// 弧记录
#[derive(Debug, Serialize, Deserialize)]
pub struct ArcRecord {
    pub src: String,
    pub dst: String,
    #[serde(default)]
    pub tag: ArcTag,
}

impl GraphDocument {
    /// 转换为图（沿用默认规模上限）
    pub fn into_graph(self) -> Result<Graph> {
        let vertices = self.vertices.into_iter().map(Vertex::new).collect();
        let arcs = self
            .arcs
            .into_iter()
            .map(|record| Arc::new(record.src, record.dst, record.tag))
            .collect();
        Graph::new(vertices, arcs)
    }
}

/// 从 JSON 文件加载图
pub fn load_graph_json<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let content = fs::read_to_string(path)?;
    let document: GraphDocument = serde_json::from_str(&content)
        .map_err(|e| Error::ImportError(format!("JSON 解析错误: {}", e)))?;
    let graph = document.into_graph()?;
    info!(
        "已加载图: {} 个顶点, {} 条弧",
        graph.vertex_count(),
        graph.arc_count()
    );
    Ok(graph)
}
