//! 错误处理模块 (修复原则：明确抛出异常)

use std::error::Error;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("未找到构建产物: {}", .0.display())]
    BootstrapNotFound(PathBuf),

    #[error("文件IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("匹配模式无效: {0}")]
    Pattern(#[from] regex::Error),
}

impl PatchError {
    /// 报告错误，支持详细/安静模式
    /// verbose = true: 详细错误链
    /// verbose = false: 单行关键信息
    pub fn report(&self, verbose: bool) {
        if verbose {
            eprintln!("❌ 错误: {}", self);

            if let Some(source) = self.source() {
                eprintln!("  └─ 原因: {}", source);
                let mut current = source.source();
                while let Some(next) = current {
                    eprintln!("     └─ {}", next);
                    current = next.source();
                }
            }

            if let PatchError::BootstrapNotFound(_) = self {
                eprintln!("{}", self.summary());
            }
        } else {
            eprintln!("{}", self.summary());
        }
    }

    /// 安静模式下输出的一行信息
    pub fn summary(&self) -> String {
        match self {
            PatchError::BootstrapNotFound(_) => {
                "flutter_bootstrap.js not found. Make sure you run \"flutter build web\" first."
                    .to_string()
            }
            PatchError::Io(err) => format!("文件错误: {}", err),
            PatchError::Pattern(err) => format!("错误: {}", err),
        }
    }

    /// 进程退出码
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// 简化 Result 类型别名
pub type Result<T> = std::result::Result<T, PatchError>;
