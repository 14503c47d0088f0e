use anyhow::Result;
use std::fs;
use std::path::Path;

use super::engine::classify_files;
use super::partition::{Metadata, Report};
use super::report::print_report;
use crate::utils::load_directory;

/// 对比两个目录并打印分类结果
///
/// 指定 output 时，同时把分类结果写成 TOML 报告文件。
pub fn compare_directories(
    first_dir: &Path,
    second_dir: &Path,
    threshold: f64,
    output: Option<&Path>,
) -> Result<()> {
    println!("正在读取目录...");
    let files1 = load_directory(first_dir)?;
    let files2 = load_directory(second_dir)?;

    println!(
        "正在比较 {} 个文件和 {} 个文件...",
        files1.len(),
        files2.len()
    );
    let result = classify_files(&files1, &files2, threshold);

    print_report(&result, first_dir, second_dir);
    println!("\n{}", result.summary());

    if let Some(output) = output {
        let metadata = Metadata::new(
            first_dir.to_string_lossy(),
            second_dir.to_string_lossy(),
            threshold,
        );
        let report = Report::new(metadata, result);
        fs::write(output, toml::to_string_pretty(&report)?)?;
        println!("报告已写入: {}", output.display());
    }

    Ok(())
}
