//! 命令行支持：示例图与结果打印

pub mod printer;
pub mod samples;

pub use printer::{PrintMode, Printer};
pub use samples::Sample;
