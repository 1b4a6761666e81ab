//! 平台日志初始化
//!
//! WASM 目标把 `tracing` 事件路由到浏览器控制台；
//! 原生目标（单元测试）不做任何初始化。

use std::sync::Once;

static INIT: Once = Once::new();

/// 初始化日志与 panic hook，可重复调用，只会生效一次。
pub fn init() {
    INIT.call_once(|| {
        #[cfg(target_arch = "wasm32")]
        {
            console_error_panic_hook::set_once();
            init_web_logging();
        }
    });
}

#[cfg(target_arch = "wasm32")]
fn init_web_logging() {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::prelude::*;
    use tracing_web::MakeWebConsoleWriter;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(MakeWebConsoleWriter::new())
        // WASM 环境没有 std::time
        .without_time();

    tracing_subscriber::registry()
        .with(LevelFilter::INFO)
        .with(fmt_layer)
        .init();
}
