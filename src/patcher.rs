//! flutter_bootstrap.js 补丁器
//!
//! 从 `_flutter.loader.load({...})` 调用中移除 `serviceWorkerSettings`，
//! 替换为空配置对象，避免 Service Worker 导致的超时错误。
//!
//! 匹配基于正则文本扫描，不解析 JavaScript：
//! - `serviceWorkerSettings` 的值最多允许一层 `{}` 嵌套
//! - 同一对象中的其他键不能包含 `{}`
//!
//! 超出以上形状的文件视为未匹配，原样保留。

use crate::error::Result;
use crate::paths;
use regex::{NoExpand, Regex};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 匹配包含 serviceWorkerSettings 的 loader.load 调用 (跨行)
pub const LOAD_CALL_PATTERN: &str =
    r"(?s)_flutter\.loader\.load\(\s*\{[^}]*serviceWorkerSettings[^}]*\}[^}]*\}\);";

/// 替换后的 loader.load 调用
pub const DISABLED_LOAD_CALL: &str = "_flutter.loader.load({
  // Service worker disabled to prevent timeout errors
});";

/// 单次运行的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// 已替换并写回文件
    Patched,
    /// 未找到目标配置 (结构不同或已打过补丁)，文件未改动
    AlreadyPatched,
}

impl fmt::Display for PatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchOutcome::Patched => write!(
                f,
                "✓ Successfully patched flutter_bootstrap.js - service worker disabled"
            ),
            PatchOutcome::AlreadyPatched => {
                write!(f, "⚠ Service worker settings not found or already patched")
            }
        }
    }
}

/// 替换第一处匹配；未匹配时返回 None
pub fn patch_content(content: &str) -> Result<Option<String>> {
    let pattern = Regex::new(LOAD_CALL_PATTERN)?;

    let Some(found) = pattern.find(content) else {
        return Ok(None);
    };
    debug!(start = found.start(), end = found.end(), "匹配到 serviceWorkerSettings");

    Ok(Some(
        pattern.replace(content, NoExpand(DISABLED_LOAD_CALL)).into_owned(),
    ))
}

/// 补丁器，持有仓库根目录
#[derive(Debug, Clone)]
pub struct Patcher {
    root: PathBuf,
}

impl Patcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 以当前工作目录作为仓库根目录
    pub fn from_current_dir() -> Result<Self> {
        Ok(Self::new(paths::default_root()?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 目标文件路径
    pub fn target(&self) -> PathBuf {
        paths::bootstrap_path(&self.root)
    }

    /// 执行补丁 (幂等操作)
    pub fn run(&self) -> Result<PatchOutcome> {
        let target = self.target();
        debug!(path = %target.display(), "检查构建产物");

        let content = paths::read_file(&target)?;
        debug!(bytes = content.len(), "已读取文件");

        match patch_content(&content)? {
            Some(patched) => {
                paths::write_file(&target, &patched)?;
                debug!(bytes = patched.len(), "已写回文件");
                Ok(PatchOutcome::Patched)
            }
            None => Ok(PatchOutcome::AlreadyPatched),
        }
    }
}
