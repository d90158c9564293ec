//! 结果打印器
//!
//! 把图与算法结果渲染为表格或纯文本矩阵

use crate::algorithm::{EnergyPath, SpanningTree, Trail, Traversal};
use crate::graph::Graph;
use colored::Colorize;
use prettytable::{format, row, Cell, Row, Table};

/// 打印模式
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 纯文本矩阵（按最长标签对齐）
    Plain,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    /// 打印图的邻接矩阵
    pub fn matrix(&self, graph: &Graph) -> String {
        self.render_matrix(graph, &graph.adjacency_matrix())
    }

    /// 打印生成树的邻接矩阵（顶点顺序与原图一致）
    pub fn tree_matrix(&self, graph: &Graph, tree: &SpanningTree) -> String {
        let n = graph.vertex_count();
        let mut matrix = vec![vec![0; n]; n];
        for edge in tree.edges.iter().filter_map(|name| graph.edge(name)) {
            let (a, b) = edge.endpoints();
            matrix[a.index()][b.index()] += 1;
            if a != b {
                matrix[b.index()][a.index()] += 1;
            }
        }
        self.render_matrix(graph, &matrix)
    }

    fn render_matrix(&self, graph: &Graph, matrix: &[Vec<usize>]) -> String {
        match self.mode {
            PrintMode::Table => {
                let mut table = Table::new();
                table.set_format(*format::consts::FORMAT_BOX_CHARS);

                let mut header = vec![Cell::new("")];
                header.extend(graph.vertices().map(|v| Cell::new(v.label())));
                table.set_titles(Row::new(header));

                for (vertex, line) in graph.vertices().zip(matrix) {
                    let mut cells = vec![Cell::new(vertex.label())];
                    cells.extend(line.iter().map(|c| Cell::new(&c.to_string())));
                    table.add_row(Row::new(cells));
                }
                table.to_string()
            }
            PrintMode::Plain => {
                let width = graph.max_label_width();
                let mut out = format!("{:width$} ", "", width = width);
                let header: Vec<String> = graph
                    .vertices()
                    .map(|v| format!("{:>width$}", v.label(), width = width))
                    .collect();
                out.push_str(&header.join(" "));
                out.push('\n');
                for (vertex, line) in graph.vertices().zip(matrix) {
                    out.push_str(&format!("{:width$} ", vertex.label(), width = width));
                    let cells: Vec<String> = line
                        .iter()
                        .map(|c| format!("{:>width$}", c, width = width))
                        .collect();
                    out.push_str(&cells.join(" "));
                    out.push('\n');
                }
                out
            }
        }
    }

    /// 打印图的结构概况
    pub fn stats(&self, graph: &Graph) -> String {
        let connected = Traversal::new(graph).is_connected();
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", graph.vertex_count().to_string()]);
        table.add_row(row!["Edge Count", graph.edge_count().to_string()]);
        table.add_row(row!["Has Loop", graph.has_loop().to_string()]);
        table.add_row(row!["Has Parallel Edges", graph.has_parallel_edges().to_string()]);
        table.add_row(row!["Complete", graph.is_complete().to_string()]);
        table.add_row(row!["Connected", connected.to_string()]);
        table.to_string()
    }

    /// 打印各顶点的度与关联边
    pub fn degrees(&self, graph: &Graph) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Vertex", "Degree", "Incident Edges"]);
        for vertex in graph.vertices() {
            table.add_row(row![
                vertex.label(),
                graph.degree(vertex.label()).to_string(),
                graph.incident_edges(vertex.label()).join(", ")
            ]);
        }
        table.to_string()
    }

    /// 打印交替序列，边名高亮
    pub fn trail(&self, trail: &Trail) -> String {
        let mut out = String::new();
        let mut vertices = trail.vertices.iter();
        if let Some(first) = vertices.next() {
            out.push_str(&first.bold().to_string());
        }
        for (edge, vertex) in trail.edges.iter().zip(vertices) {
            out.push_str(&format!(" -{}- {}", edge.cyan(), vertex.bold()));
        }
        out
    }

    /// 打印能量受限路径
    pub fn energy_path(&self, path: &EnergyPath) -> String {
        format!(
            "{}\n{} 跳，剩余能量 {}\n",
            self.trail(&path.trail),
            path.trail.length,
            path.remaining_energy
        )
    }

    /// 打印生成树概况与矩阵
    pub fn spanning_tree(&self, graph: &Graph, tree: &SpanningTree) -> String {
        let mut out = self.tree_matrix(graph, tree);
        out.push_str(&format!(
            "树边: {}\n总权重: {}\n",
            tree.edges.join(", "),
            tree.total_weight
        ));
        if !tree.spanning {
            out.push_str(&format!("{}\n", "图不连通，结果仅为生成森林".yellow()));
        }
        out
    }

    /// "未找到" 提示
    pub fn not_found(&self, what: &str) -> String {
        format!("{}\n", format!("未找到{}", what).red())
    }
}
