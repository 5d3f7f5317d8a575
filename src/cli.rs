//! CLI 参数定义
//!
//! 目标路径、匹配模式和替换内容都是固定的，不通过参数暴露

use clap::Parser;

/// patch-bootstrap - 禁用 Flutter Web 的 Service Worker
#[derive(Parser, Debug)]
#[command(
    name = "patch-bootstrap",
    version,
    about = "禁用 flutter_bootstrap.js 中的 Service Worker",
    long_about = "在 `flutter build web` 之后于仓库根目录运行，移除 build/web/flutter_bootstrap.js 中的 serviceWorkerSettings 配置，避免超时错误"
)]
pub struct Cli {
    /// 详细输出模式
    #[arg(short, long)]
    pub verbose: bool,
}

/// 运行配置
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub verbose: bool,
}

impl Cli {
    /// 初始化配置
    pub fn config(&self) -> Config {
        Config {
            verbose: self.verbose,
        }
    }
}
