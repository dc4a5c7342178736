//! 日志基础设施

use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use super::config::LoggingConfig;

pub struct Logger;

impl Logger {
    /// 初始化全局日志订阅器，控制台日志写到 stdout
    ///
    /// `RUST_LOG` 优先于配置文件中的级别。启用文件输出时返回的 guard
    /// 必须在进程存活期间持有，否则缓冲中的日志会丢失。
    pub fn init(config: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
        Self::init_with_writer(config, std::io::stdout)
    }

    /// 命令行工具使用：控制台日志写到 stderr，stdout 留给输出结果
    pub fn init_stderr(config: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
        Self::init_with_writer(config, std::io::stderr)
    }

    fn init_with_writer<W>(config: &LoggingConfig, console: W) -> anyhow::Result<Option<WorkerGuard>>
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let (subscriber, guard) = Self::build(config, console)?;
        subscriber.try_init()?;
        Ok(guard)
    }

    /// 按配置组装订阅器：环境过滤、控制台层与可选的按天滚动文件层
    pub fn build<W>(
        config: &LoggingConfig,
        console: W,
    ) -> anyhow::Result<(impl Subscriber + Send + Sync + 'static, Option<WorkerGuard>)>
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.level))?;

        let console_layer = config
            .console_output
            .then(|| fmt::layer().with_target(false).with_writer(console));

        let (file_layer, guard) = if config.file_output {
            let appender = tracing_appender::rolling::daily(&config.log_dir, &config.file_prefix);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        } else {
            (None, None)
        };

        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(console_layer)
            .with(file_layer);

        Ok((subscriber, guard))
    }
}
