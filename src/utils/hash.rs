use sha2::{Digest, Sha256};

/// 十六进制编码的 SHA256 摘要
pub type HashResult = String;

/// 计算内存中字节内容的 SHA256 摘要
pub fn digest_bytes(contents: &[u8]) -> HashResult {
    hex::encode(Sha256::digest(contents))
}
