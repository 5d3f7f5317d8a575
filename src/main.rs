//! patch-bootstrap 主程序入口
//!
//! 在 `flutter build web` 之后运行：
//! - 退出码 0：已打补丁，或无需处理
//! - 退出码 1：构建产物不存在 (或读写失败)

use bootstrap_patch::cli::Cli;
use bootstrap_patch::{Patcher, Result, logger};
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    let config = cli.config();

    logger::init_cli_logger(config.verbose);

    match run() {
        Ok(outcome) => println!("{}", outcome),
        Err(e) => {
            e.report(config.verbose);
            std::process::exit(e.exit_code());
        }
    }
}

fn run() -> Result<bootstrap_patch::PatchOutcome> {
    Patcher::from_current_dir()?.run()
}
