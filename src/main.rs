use linkpress::config::AppConfig;
use linkpress::runtime::run_server;
use linkpress::system::logging::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // 配置加载失败直接退出，此时日志系统还没起来，用彩色输出到 stderr
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            std::process::exit(1);
        }
    };

    // Guard must be held until exit so buffered log lines are flushed
    let _guard = init_logging(&config.logging);

    run_server(config).await
}
