//! 内置示例图
//!
//! 命令行工具通过 `--sample` 选择其中一张图进行演示

use crate::error::Result;
use crate::graph::Graph;
use clap::ValueEnum;

const PARAIBA: [&str; 7] = ["J", "C", "E", "P", "M", "T", "Z"];

const PARAIBA_EDGES: [(&str, &str, i64); 9] = [
    ("a1", "J-C", 1),
    ("a2", "C-E", 2),
    ("a3", "C-E", 3),
    ("a4", "C-P", 1),
    ("a5", "C-P", 2),
    ("a6", "C-M", 3),
    ("a7", "C-T", 2),
    ("a8", "M-T", 1),
    ("a9", "T-Z", 1),
];

const GRID: [&str; 11] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K"];

const GRID_EDGES: [(&str, &str); 17] = [
    ("1", "A-B"),
    ("2", "A-G"),
    ("3", "A-J"),
    ("4", "G-K"),
    ("5", "K-J"),
    ("6", "J-G"),
    ("7", "J-I"),
    ("8", "I-G"),
    ("9", "G-H"),
    ("10", "H-F"),
    ("11", "F-B"),
    ("12", "B-G"),
    ("13", "B-C"),
    ("14", "C-D"),
    ("15", "D-E"),
    ("16", "D-B"),
    ("17", "B-E"),
];

const ENERGY: [&str; 33] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
    "T", "U", "V", "X", "W", "Y", "Z", "a", "b", "c", "d", "e", "f", "g",
];

const ENERGY_EDGES: [&str; 46] = [
    "A-B", "A-C", "A-D", "B-C", "B-E", "C-F", "D-H", "D-L", "E-I", "E-F", "F-G", "F-J", "F-K",
    "G-K", "G-D", "H-G", "I-M", "J-N", "K-L", "K-O", "L-P", "M-Q", "N-R", "O-R", "O-Q", "O-S",
    "P-R", "P-T", "R-U", "R-S", "S-W", "S-T", "T-X", "U-Y", "U-Z", "V-R", "W-V", "W-a", "W-b",
    "X-b", "X-c", "Z-e", "c-f", "f-e", "e-d", "e-g",
];

/// 能量示例图的默认补给点
pub const ENERGY_RECHARGE_POINTS: [&str; 4] = ["I", "R", "X", "f"];

/// 示例图
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Sample {
    /// 帕拉伊巴州城市图（含平行边）
    Paraiba,
    /// 帕拉伊巴州城市图（无平行边）
    ParaibaSimple,
    /// 4 个顶点的完全图
    Complete,
    /// 8 个顶点的小型连通图
    Ze,
    /// 11 个顶点、17 条边的网格图
    Grid,
    /// 33 个顶点的能量路径演示图
    Energy,
    /// 带权帕拉伊巴州城市图
    Weighted,
}

impl Sample {
    /// 构造示例图
    pub fn build(self) -> Result<Graph> {
        match self {
            Sample::Paraiba => Graph::build(
                PARAIBA,
                PARAIBA_EDGES.iter().map(|&(n, e, _)| (n, e, None)),
            ),
            Sample::ParaibaSimple => Graph::build(
                PARAIBA,
                PARAIBA_EDGES
                    .iter()
                    .filter(|(n, _, _)| !matches!(*n, "a2" | "a5"))
                    .map(|&(n, e, _)| (n, e, None)),
            ),
            Sample::Complete => Graph::build(
                ["J", "C", "E", "P"],
                [
                    ("a1", "J-C", None),
                    ("a3", "J-E", None),
                    ("a4", "J-P", None),
                    ("a6", "C-E", None),
                    ("a7", "C-P", None),
                    ("a8", "E-P", None),
                ],
            ),
            Sample::Ze => Graph::build(
                ["A", "B", "C", "D", "E", "F", "H", "G"],
                [
                    ("a1", "A-E", None),
                    ("a2", "A-F", None),
                    ("a3", "F-H", None),
                    ("a4", "H-G", None),
                    ("a5", "G-F", None),
                    ("a6", "A-B", None),
                    ("a7", "B-C", None),
                    ("a8", "B-D", None),
                    ("a9", "G-C", None),
                ],
            ),
            Sample::Grid => Graph::build(GRID, GRID_EDGES.iter().map(|&(n, e)| (n, e, None))),
            Sample::Energy => Graph::build(
                ENERGY,
                ENERGY_EDGES
                    .iter()
                    .enumerate()
                    .map(|(i, e)| (format!("a{}", i), *e, None)),
            ),
            Sample::Weighted => Graph::build(
                PARAIBA,
                PARAIBA_EDGES.iter().map(|&(n, e, w)| (n, e, Some(w))),
            ),
        }
    }

    /// 该示例推荐的补给点
    pub fn recharge_points(self) -> &'static [&'static str] {
        match self {
            Sample::Energy => &ENERGY_RECHARGE_POINTS,
            _ => &[],
        }
    }
}
