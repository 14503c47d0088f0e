use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::partition::{PartitionResult, Report};

/// 打印四类划分结果
pub fn print_report(result: &PartitionResult, first_dir: &Path, second_dir: &Path) {
    println!("\n=== 完全相同的文件 ({}) ===", result.identical.len());
    for (file1, file2) in &result.identical {
        println!("{} - {}", file1, file2);
    }
    if result.identical.is_empty() {
        println!("有 0 个文件");
    }

    println!("\n=== 相似的文件 ({}) ===", result.similar_count());
    for (file1, matches) in &result.similar {
        for (file2, similarity) in matches {
            println!("{} - {} - {:.2}% 相似", file1, file2, similarity);
        }
    }
    if result.similar.is_empty() {
        println!("有 0 个文件");
    }

    println!(
        "\n=== 仅在 {} 中的文件 ({}) ===",
        first_dir.display(),
        result.only_in_first.len()
    );
    for path in &result.only_in_first {
        println!("{}", path);
    }
    if result.only_in_first.is_empty() {
        println!("有 0 个文件");
    }

    println!(
        "\n=== 仅在 {} 中的文件 ({}) ===",
        second_dir.display(),
        result.only_in_second.len()
    );
    for path in &result.only_in_second {
        println!("{}", path);
    }
    if result.only_in_second.is_empty() {
        println!("有 0 个文件");
    }
}

/// 读取并显示已保存的分类报告
pub fn show_report(report_path: &Path) -> Result<()> {
    let content = fs::read_to_string(report_path)
        .with_context(|| format!("无法读取报告: {:?}", report_path))?;
    let report: Report = toml::from_str(&content).with_context(|| "无法解析报告内容")?;

    println!("报告: {}\n", report_path.display());
    println!("=== 元数据 ===");
    println!("版本: {}", report.metadata.version);
    println!("创建时间: {}", report.metadata.created_at);
    println!("相似度阈值: {}%", report.metadata.threshold);

    print_report(
        &report.result,
        Path::new(&report.metadata.first_dir),
        Path::new(&report.metadata.second_dir),
    );
    println!("\n{}", report.result.summary());

    Ok(())
}
