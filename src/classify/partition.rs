use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 分类报告元数据
#[derive(Debug, Serialize, Deserialize)]
pub struct Metadata {
    pub version: String,
    pub created_at: String,
    pub first_dir: String,
    pub second_dir: String,
    pub threshold: f64,
}

impl Metadata {
    pub fn new(
        first_dir: impl Into<String>,
        second_dir: impl Into<String>,
        threshold: f64,
    ) -> Self {
        Self {
            version: "1.0".to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            first_dir: first_dir.into(),
            second_dir: second_dir.into(),
            threshold,
        }
    }
}

/// 两组文件的四类划分结果
///
/// 每个文件的路径恰好出现在一侧的匹配类（完全相同或相似的键）
/// 或独有列表中，两侧的归属互相独立。
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PartitionResult {
    pub identical: HashMap<String, String>,
    pub similar: HashMap<String, HashMap<String, f64>>,
    pub only_in_first: Vec<String>,
    pub only_in_second: Vec<String>,
}

impl PartitionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// 相似匹配的总对数
    pub fn similar_count(&self) -> usize {
        self.similar.values().map(HashMap::len).sum()
    }

    pub fn summary(&self) -> String {
        format!(
            "完全相同: {} 对, 相似: {} 对, 仅在第一个目录: {} 个, 仅在第二个目录: {} 个",
            self.identical.len(),
            self.similar_count(),
            self.only_in_first.len(),
            self.only_in_second.len()
        )
    }
}

/// 可序列化的完整分类报告
#[derive(Debug, Serialize, Deserialize)]
pub struct Report {
    pub metadata: Metadata,
    pub result: PartitionResult,
}

impl Report {
    pub fn new(metadata: Metadata, result: PartitionResult) -> Self {
        Self { metadata, result }
    }
}
