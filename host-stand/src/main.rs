use anyhow::Context;
use host_stand::cli::{HostStand, LineResult};
use host_stand::{SeatingManager, SeatingService, setup_environment};
use std::io::{self, BufRead, Write};

fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志)
    let config = setup_environment();

    tracing::info!(environment = %config.environment, "Host stand starting...");

    // 2. 按配置建立餐厅
    let manager = SeatingManager::from_config(&config).context("invalid restaurant configuration")?;
    let stand = HostStand::new(SeatingService::new(manager));

    // 3. 命令循环
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", stand.banner())?;

    loop {
        write!(stdout, "\n> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match stand.handle_line(&line) {
            LineResult::Output(text) if text.is_empty() => {}
            LineResult::Output(text) => writeln!(stdout, "{}", text)?,
            LineResult::Quit => break,
        }
    }

    tracing::info!("Host stand closed");
    Ok(())
}
