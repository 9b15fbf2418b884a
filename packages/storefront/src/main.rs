use storefront::config::{ConfigError, StorefrontConfig};

fn main() -> Result<(), ConfigError> {
    dioxus::logger::initialize_default();

    let config = StorefrontConfig::from_env().inspect_err(|err| tracing::error!("{err}"))?;
    tracing::info!(api = %config.api_base, "starting storefront");

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(storefront::App);

    Ok(())
}
