//! GraphShape CLI 工具
//!
//! 读取图描述文档，输出结构性质报告

use anyhow::{Context, Result};
use clap::Parser;
use graphshape::cli::printer;
use graphshape::{import, Arc, Graph, ShapeReport, Vertex};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "graphshape-cli")]
#[command(about = "有向图结构性质判定工具")]
struct Args {
    /// 图描述文档路径（JSON）
    #[arg(short, long)]
    input: Option<String>,

    /// 以 JSON 输出报告
    #[arg(long)]
    json: bool,

    /// 运行内置演示图
    #[arg(long)]
    demo: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    if args.demo {
        for (name, graph) in demo_graphs()? {
            print_report(&name, &graph, args.json)?;
        }
        return Ok(());
    }

    let path = args
        .input
        .context("需要 --input <文档路径> 或 --demo")?;
    let graph = import::load_graph_json(&path)
        .with_context(|| format!("加载图文档失败: {}", path))?;
    print_report(&path, &graph, args.json)
}

fn print_report(name: &str, graph: &Graph, json: bool) -> Result<()> {
    let report = ShapeReport::analyze(graph);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", printer::render_report(name, &report));
    }
    Ok(())
}

/// 与参考用例一致的演示图
fn demo_graphs() -> Result<Vec<(String, Graph)>> {
    let triangle = Graph::new(
        vec![Vertex::new("a"), Vertex::new("b"), Vertex::new("c")],
        vec![
            Arc::untagged("a", "b"),
            Arc::untagged("b", "c"),
            Arc::untagged("c", "a"),
        ],
    )?;

    let bidirectional = Graph::new(
        vec![
            Vertex::new("a"),
            Vertex::new("b"),
            Vertex::new("c"),
            Vertex::new("d"),
        ],
        vec![
            Arc::untagged("a", "b"),
            Arc::untagged("b", "a"),
            Arc::untagged("a", "c"),
            Arc::untagged("c", "a"),
            Arc::untagged("b", "d"),
            Arc::untagged("d", "b"),
        ],
    )?;

    let loose = Graph::new(
        vec![
            Vertex::new("a"),
            Vertex::new("b"),
            Vertex::new("c"),
            Vertex::new("d"),
            Vertex::new("e"),
            Vertex::new("f"),
            Vertex::new("g"),
        ],
        vec![
            Arc::untagged("a", "a"),
            Arc::untagged("b", "a"),
            Arc::untagged("f", "a"),
            Arc::untagged("f", "e"),
            Arc::untagged("d", "e"),
            Arc::untagged("c", "d"),
            Arc::untagged("c", "b"),
        ],
    )?;

    Ok(vec![
        ("triangle".to_string(), triangle),
        ("bidirectional".to_string(), bidirectional),
        ("loose-complex".to_string(), loose),
    ])
}
