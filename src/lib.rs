//! bootstrap-patch - Flutter Web 构建后处理工具
//!
//! 移除 build/web/flutter_bootstrap.js 中的 serviceWorkerSettings

pub mod cli;
pub mod error;
pub mod logger;
pub mod paths;
pub mod patcher;

// 重新导出常用类型
pub use error::{PatchError, Result};
pub use patcher::{PatchOutcome, Patcher, patch_content};
