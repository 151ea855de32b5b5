use fii_dashboard::app::run;
use fii_dashboard::config::Config;
use fii_dashboard::error::Result;
use fii_dashboard::logging::init;

#[tokio::main]
async fn main() -> Result<()> {
    init();

    let config = Config::from_env()?;

    run(config).await
}
