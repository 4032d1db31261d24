//! 日志初始化

use tracing_appender::non_blocking::WorkerGuard;

use crate::config::AppConfig;

/// 初始化全局 tracing 订阅者
///
/// 开发环境输出带文件与行号的可读格式，其余环境输出 JSON。
/// 返回的 guard 需要保持到进程结束，否则缓冲中的日志会丢失。
pub fn init_tracing(config: &AppConfig) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let filter = tracing_subscriber::EnvFilter::try_new(&config.app.log_level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(config.is_development());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .event_format(format);

    if config.is_development() {
        builder.with_file(true).with_line_number(true).init();
    } else {
        builder.json().init();
    }

    guard
}
