//! 路径处理工具 (传统原则：常识性接口设计)

use crate::error::{PatchError, Result};
use std::path::{Path, PathBuf};

/// 构建产物相对仓库根目录的位置
pub const BOOTSTRAP_RELATIVE_PATH: [&str; 3] = ["build", "web", "flutter_bootstrap.js"];

/// 获取仓库根目录：调用方约定从仓库根目录运行
pub fn default_root() -> Result<PathBuf> {
    Ok(std::env::current_dir()?)
}

/// 拼接 flutter_bootstrap.js 的完整路径
pub fn bootstrap_path(root: &Path) -> PathBuf {
    BOOTSTRAP_RELATIVE_PATH
        .iter()
        .fold(root.to_path_buf(), |path, part| path.join(part))
}

/// 检查文件是否存在
pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}

/// 读取文件内容 (UTF-8)
pub fn read_file(path: &Path) -> Result<String> {
    if !file_exists(path) {
        return Err(PatchError::BootstrapNotFound(path.to_path_buf()));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// 覆盖写入文件 (UTF-8)，与读取时编码一致
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)?;
    Ok(())
}
