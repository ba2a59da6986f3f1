use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use env_logger::{Builder, Target};
use range_core::config::SystemConfig;

use crate::config_gen;

pub fn init(is_tui: bool) {
    let config_path = "config.toml";

    config_gen::ensure_config_exists(config_path);

    if let Err(e) = range_shared::config::init(config_path) {
        eprintln!("Config load warning: {}", e);
    }

    init_logger(is_tui);
}

struct TeeWriter<W1, W2>(W1, W2);

impl<W1: Write, W2: Write> Write for TeeWriter<W1, W2> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let n = self.0.write(buf)?;
        self.1.write_all(&buf[..n])?;
        Ok(n)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.0.flush()?;
        self.1.flush()?;
        Ok(())
    }
}

fn init_logger(is_tui: bool) {
    let sys_cfg: SystemConfig = range_shared::config::get("system");
    if let Err(e) = fs::create_dir_all(&sys_cfg.log_path) {
        eprintln!("Failed to create log dir: {}", e);
    }

    let log_file_path = Path::new(&sys_cfg.log_path).join("range.log");
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path);

    let mut builder = Builder::from_env(env_logger::Env::default().default_filter_or(&sys_cfg.log_level));
    match (log_file, is_tui) {
        (Ok(file), true) => {
            builder.target(Target::Pipe(Box::new(file)));
        }
        (Ok(file), false) => {
            builder.target(Target::Pipe(Box::new(TeeWriter(std::io::stdout(), file))));
        }
        // TUI 占着屏幕，没有日志文件就干脆不输出
        (Err(e), true) => {
            eprintln!("Failed to open log file {:?}: {}", log_file_path, e);
            builder.target(Target::Pipe(Box::new(std::io::sink())));
        }
        (Err(e), false) => {
            eprintln!("Failed to open log file {:?}: {}", log_file_path, e);
            builder.target(Target::Stdout);
        }
    }

    builder.init();
}
