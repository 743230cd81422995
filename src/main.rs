use anyhow::Result;
use env_logger::Env;

mod app;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    app::run()
}
