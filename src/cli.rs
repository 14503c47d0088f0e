use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// 目录文件相似度分类工具
#[derive(Parser)]
#[command(name = "dsc")]
#[command(about = "目录文件相似度分类工具", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 对比两个目录，按相同/相似/独有分类文件
    Compare {
        /// 第一个目录
        first_dir: PathBuf,
        /// 第二个目录
        second_dir: PathBuf,
        /// 相似度阈值 (百分比)
        #[arg(short, long)]
        threshold: f64,
        /// 输出报告文件路径 (TOML 格式)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// 显示已保存的分类报告
    Show {
        /// 报告文件路径
        report: PathBuf,
    },
}
