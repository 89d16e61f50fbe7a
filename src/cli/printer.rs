//! 结果打印器
//!
//! 把形状报告渲染成表格输出

use crate::report::ShapeReport;
use colored::Colorize;
use prettytable::{format, row, Table};

/// 布尔值渲染为带颜色的文本
fn render_bool(value: bool) -> String {
    if value {
        "true".green().to_string()
    } else {
        "false".red().to_string()
    }
}

/// 渲染形状报告表格
pub fn render_report(name: &str, report: &ShapeReport) -> String {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(row!["Property", "Value"]);
    table.add_row(row!["Vertex Count", report.vertex_count.to_string()]);
    table.add_row(row!["Arc Count", report.arc_count.to_string()]);
    table.add_row(row!["has_sling", render_bool(report.has_sling)]);
    table.add_row(row!["is_reflexive", render_bool(report.is_reflexive)]);
    table.add_row(row!["is_symmetrical", render_bool(report.is_symmetrical)]);
    table.add_row(row!["is_asymmetrical", render_bool(report.is_asymmetrical)]);
    table.add_row(row![
        "is_antisymmetrical",
        render_bool(report.is_antisymmetrical)
    ]);
    table.add_row(row!["is_simple", render_bool(report.is_simple)]);
    table.add_row(row!["is_coherent", render_bool(report.is_coherent)]);
    table.add_row(row![
        "is_strong_coherent",
        render_bool(report.is_strong_coherent)
    ]);
    table.add_row(row!["has_circle", render_bool(report.has_circle)]);

    format!("图 {} 的结构性质:\n{}", name, table)
}
