/// 统计每个字节值出现的次数，固定 256 个桶
fn byte_histogram(contents: &[u8]) -> [u64; 256] {
    let mut counts = [0u64; 256];
    for &b in contents {
        counts[b as usize] += 1;
    }
    counts
}

/// 计算两段字节内容的相似度百分比
///
/// 相似度只统计字节值多重集合的重叠，与字节顺序无关：
/// 对每个字节值取两边出现次数的较小值求和，再除以较长一段的长度。
/// 返回值范围为 [0, 100]，两段都为空时返回 0。
pub fn byte_similarity(contents1: &[u8], contents2: &[u8]) -> f64 {
    let max_len = contents1.len().max(contents2.len());
    if max_len == 0 {
        return 0.0;
    }

    let counts1 = byte_histogram(contents1);
    let counts2 = byte_histogram(contents2);

    let common_bytes: u64 = counts1
        .iter()
        .zip(counts2.iter())
        .map(|(&c1, &c2)| c1.min(c2))
        .sum();

    (common_bytes as f64 / max_len as f64) * 100.0
}
