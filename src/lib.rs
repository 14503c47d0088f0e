//! # Dir Sim Tool
//!
//! 目录文件相似度分类工具库
//!
//! ## 功能
//!
//! - 对比两个目录，把文件分为完全相同、相似、各自独有四类
//! - 完全相同通过 SHA256 摘要判断，相似度使用字节频率统计
//! - 支持把分类结果保存为 TOML 报告并再次查看
//!
//! ## 使用示例
//!
//! ```no_run
//! use dir_sim_tool::classify::{compare_directories, show_report};
//! use std::path::Path;
//!
//! // 对比两个目录，相似度阈值 50%
//! compare_directories(
//!     Path::new("dir_one"),
//!     Path::new("dir_two"),
//!     50.0,
//!     None,
//! ).unwrap();
//!
//! // 查看之前保存的报告
//! show_report(Path::new("report.toml")).unwrap();
//! ```

pub mod classify;
pub mod cli;
pub mod utils;

// 重新导出常用类型
pub use classify::{Classification, Metadata, PartitionResult, Report};
pub use classify::{byte_similarity, classify_files, compare_directories, show_report};
pub use utils::{FileRecord, load_directory};
