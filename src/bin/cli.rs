//! multigraph 命令行工具
//!
//! 在内置示例图上运行结构查询与图算法

use anyhow::Context;
use clap::{Parser, Subcommand};
use multigraph::algorithm::{EnergyConfig, EnergyPathFinder, SpanningTreeBuilder, Traversal};
use multigraph::cli::{PrintMode, Printer, Sample};
use multigraph::graph::Graph;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "multigraph-cli")]
#[command(about = "无向多重图命令行工具")]
struct Args {
    /// 使用的示例图（缺省：prim 与 kruskal 用 weighted，其余用 paraiba）
    #[arg(short, long, value_enum)]
    sample: Option<Sample>,

    /// 以 JSON 输出结果
    #[arg(long, global = true)]
    json: bool,

    /// 输出调试日志
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 图的结构概况与各顶点的度
    Info,
    /// 邻接矩阵
    Matrix {
        /// 纯文本输出（按最长标签对齐）
        #[arg(long)]
        plain: bool,
    },
    /// 从指定顶点深度优先遍历
    Dfs { start: String },
    /// 查找任意环
    Cycle,
    /// 查找长度为 n 的简单路径
    Path { n: usize },
    /// 能量受限最短路径
    Energy {
        from: String,
        to: String,
        /// 初始能量，缺省取 `EnergyConfig::default()`
        #[arg(long)]
        energy: Option<u32>,
        /// 补给后的能量值，缺省取 `EnergyConfig::default()`
        #[arg(long)]
        recharge_level: Option<u32>,
        /// 补给点，可重复；缺省使用示例图自带的补给点
        #[arg(long)]
        recharge: Vec<String>,
    },
    /// Prim 最小生成树
    Prim {
        /// 起始顶点，缺省取度最小的顶点
        #[arg(long)]
        start: Option<String>,
    },
    /// Kruskal 最小生成树
    Kruskal,
}

impl Args {
    /// 实际使用的示例图
    fn sample(&self) -> Sample {
        match (self.sample, &self.command) {
            (Some(sample), _) => sample,
            (None, Command::Prim { .. } | Command::Kruskal) => Sample::Weighted,
            (None, _) => Sample::Paraiba,
        }
    }
}

/// 未给出的能量参数取默认配置
fn energy_config(energy: Option<u32>, recharge_level: Option<u32>) -> EnergyConfig {
    let defaults = EnergyConfig::default();
    EnergyConfig::new(energy.unwrap_or(defaults.initial_energy))
        .with_recharge_level(recharge_level.unwrap_or(defaults.recharge_level))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let sample = args.sample();
    let graph = sample
        .build()
        .with_context(|| format!("无法构造示例图 {:?}", sample))?;
    tracing::debug!(
        "示例图 {:?}: {} 个顶点, {} 条边",
        sample,
        graph.vertex_count(),
        graph.edge_count()
    );

    run(&graph, &args)
}

fn run(graph: &Graph, args: &Args) -> anyhow::Result<()> {
    let mut printer = Printer::default();

    match &args.command {
        Command::Info => {
            if args.json {
                let info = GraphInfo::collect(graph);
                return emit_json(&info);
            }
            print!("{}", printer.stats(graph));
            print!("{}", printer.degrees(graph));
        }

        Command::Matrix { plain } => {
            if args.json {
                return emit_json(&graph.adjacency_matrix());
            }
            if *plain {
                printer.set_mode(PrintMode::Plain);
            }
            print!("{}", printer.matrix(graph));
        }

        Command::Dfs { start } => {
            let trail = Traversal::new(graph).depth_first_walk(start)?;
            if args.json {
                return emit_json(&trail);
            }
            println!("{}", printer.trail(&trail));
        }

        Command::Cycle => {
            let cycle = Traversal::new(graph).find_cycle();
            if args.json {
                return emit_json(&cycle);
            }
            match cycle {
                Some(trail) => println!("{}", printer.trail(&trail)),
                None => print!("{}", printer.not_found("环")),
            }
        }

        Command::Path { n } => {
            let path = Traversal::new(graph).find_path_of_length(*n);
            if args.json {
                return emit_json(&path);
            }
            match path {
                Some(trail) => println!("{}", printer.trail(&trail)),
                None => print!("{}", printer.not_found(&format!("长度为 {} 的路径", n))),
            }
        }

        Command::Energy {
            from,
            to,
            energy,
            recharge_level,
            recharge,
        } => {
            let config = energy_config(*energy, *recharge_level);
            let points: Vec<&str> = if recharge.is_empty() {
                args.sample().recharge_points().to_vec()
            } else {
                recharge.iter().map(String::as_str).collect()
            };
            let finder = EnergyPathFinder::new(graph, config).with_recharge_points(points)?;
            let path = finder.shortest_path(from, to)?;
            if args.json {
                return emit_json(&path);
            }
            match path {
                Some(path) => print!("{}", printer.energy_path(&path)),
                None => print!("{}", printer.not_found("满足能量约束的路径")),
            }
        }

        Command::Prim { start } => {
            let tree = SpanningTreeBuilder::new(graph).prim(start.as_deref())?;
            if args.json {
                return emit_json(&tree);
            }
            print!("{}", printer.spanning_tree(graph, &tree));
        }

        Command::Kruskal => {
            let tree = SpanningTreeBuilder::new(graph).kruskal()?;
            if args.json {
                return emit_json(&tree);
            }
            print!("{}", printer.spanning_tree(graph, &tree));
        }
    }

    Ok(())
}

/// `info --json` 的输出
#[derive(Serialize)]
struct GraphInfo {
    vertices: Vec<String>,
    edges: Vec<EdgeInfo>,
    has_loop: bool,
    has_parallel_edges: bool,
    complete: bool,
    connected: bool,
    non_adjacent_pairs: Vec<String>,
}

#[derive(Serialize)]
struct EdgeInfo {
    name: String,
    encoding: String,
    weight: Option<i64>,
}

impl GraphInfo {
    fn collect(graph: &Graph) -> Self {
        Self {
            vertices: graph.vertices().map(|v| v.label().to_string()).collect(),
            edges: graph
                .edges()
                .map(|e| EdgeInfo {
                    name: e.name().to_string(),
                    encoding: e.encoding().to_string(),
                    weight: e.weight(),
                })
                .collect(),
            has_loop: graph.has_loop(),
            has_parallel_edges: graph.has_parallel_edges(),
            complete: graph.is_complete(),
            connected: Traversal::new(graph).is_connected(),
            non_adjacent_pairs: graph.non_adjacent_pairs(),
        }
    }
}

fn emit_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
