use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// 一个文件的路径标识与完整字节内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: String,
    pub contents: Vec<u8>,
}

/// 递归读取目录下所有文件的路径和完整内容
///
/// 返回顺序与遍历顺序一致，目录本身会被跳过。
pub fn load_directory(dir: &Path) -> Result<Vec<FileRecord>> {
    let mut files = Vec::new();

    if !dir.exists() {
        return Ok(files);
    }

    for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let contents = fs::read(path).with_context(|| format!("无法读取文件: {:?}", path))?;

        files.push(FileRecord {
            path: path.to_string_lossy().to_string(),
            contents,
        });
    }

    Ok(files)
}
