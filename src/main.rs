use anyhow::Context;

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let deps = clientwire::compose().context("Failed to compose clients")?;

    tracing::info!(
        "✓ client1 ready, setup counts: {:?}",
        deps.client1.service().setup_counts()
    );
    tracing::info!(
        "✓ client2 ready, setup counts: {:?}",
        deps.client2.service().setup_counts()
    );

    Ok(())
}
