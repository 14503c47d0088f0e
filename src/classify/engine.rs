use std::collections::HashSet;

use super::partition::PartitionResult;
use super::similarity::byte_similarity;
use crate::utils::{FileRecord, HashResult, digest_bytes};

/// 单对文件的分类结果
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    Identical,
    Similar(f64),
}

/// 按摘要和相似度对一对文件内容分类
///
/// 摘要相同即视为完全相同，不再计算相似度；否则相似度达到
/// 阈值（含等于）时记为相似，低于阈值不产生分类。
pub fn classify_pair(
    digest1: &HashResult,
    digest2: &HashResult,
    contents1: &[u8],
    contents2: &[u8],
    threshold: f64,
) -> Option<Classification> {
    if digest1 == digest2 {
        return Some(Classification::Identical);
    }

    let similarity = byte_similarity(contents1, contents2);
    if similarity >= threshold {
        Some(Classification::Similar(similarity))
    } else {
        None
    }
}

/// 对两组文件做全量两两比较，得到四类划分
///
/// 同一个文件可以匹配对侧多个文件。相似匹配全部保留；
/// 完全相同的匹配按比较顺序覆盖记录，同一路径只保留最后一个。
pub fn classify_files(
    files1: &[FileRecord],
    files2: &[FileRecord],
    threshold: f64,
) -> PartitionResult {
    // 每个文件的摘要只计算一次，交叉比较中直接复用
    let digests1: Vec<HashResult> = files1.iter().map(|f| digest_bytes(&f.contents)).collect();
    let digests2: Vec<HashResult> = files2.iter().map(|f| digest_bytes(&f.contents)).collect();

    let mut result = PartitionResult::new();
    let mut matched1: HashSet<usize> = HashSet::new();
    let mut matched2: HashSet<usize> = HashSet::new();

    for (i, file1) in files1.iter().enumerate() {
        for (j, file2) in files2.iter().enumerate() {
            let classification = classify_pair(
                &digests1[i],
                &digests2[j],
                &file1.contents,
                &file2.contents,
                threshold,
            );

            match classification {
                Some(Classification::Identical) => {
                    result
                        .identical
                        .insert(file1.path.clone(), file2.path.clone());
                }
                Some(Classification::Similar(similarity)) => {
                    result
                        .similar
                        .entry(file1.path.clone())
                        .or_default()
                        .insert(file2.path.clone(), similarity);
                }
                None => continue,
            }

            matched1.insert(i);
            matched2.insert(j);
        }
    }

    for (i, file1) in files1.iter().enumerate() {
        if !matched1.contains(&i) {
            result.only_in_first.push(file1.path.clone());
        }
    }
    for (j, file2) in files2.iter().enumerate() {
        if !matched2.contains(&j) {
            result.only_in_second.push(file2.path.clone());
        }
    }

    result
}
