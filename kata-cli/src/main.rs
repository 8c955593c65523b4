use kata_cli::report;
use kata_store::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kata_cli=info,kata_store=info,kata_domain=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load()?;
    let mut company = kata_cli::load(&config)?;
    tracing::info!("Reporting on {} for {}", company.name(), config.reports.city);

    company.deliver_orders_to(&config.reports.city);
    let pending = report::undelivered(&company).len();
    if pending > 0 {
        tracing::debug!("{} orders still awaiting delivery", pending);
    }

    println!("{}", report::render(&company, &config.reports)?);
    Ok(())
}
