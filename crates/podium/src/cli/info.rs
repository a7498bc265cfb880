//! Configuration and health reporting.

use anyhow::Result;
use podium::Services;

/// Print the configured models, marking the default.
pub fn list_models(services: &Services) -> Result<()> {
    let config = services.config();
    let default = &config.generation.default_model;

    for key in config.model_keys() {
        let Some(entry) = config.model(key) else {
            continue;
        };
        let marker = if key == default.as_str() { "*" } else { " " };
        println!(
            "{} {:<16} {} ({}, {}) [{}]",
            marker, key, entry.name, entry.provider, entry.quality, entry.id
        );
    }
    Ok(())
}

/// Print where everything points and whether the services answer.
pub async fn show_status(services: &Services) -> Result<()> {
    let config = services.config();

    let key_present = std::env::var(&config.gateway.api_key_env)
        .is_ok_and(|value| !value.trim().is_empty());
    let key_state = if key_present { "set" } else { "missing" };

    println!(
        "Gateway:   {}{} ({})",
        config.gateway.url.trim_end_matches('/'),
        config.gateway.endpoint,
        config.gateway.auth
    );
    println!("API key:   {} ({})", key_state, config.gateway.api_key_env);
    println!("Model:     {}", config.generation.default_model);
    println!("Storage:   {}", config.storage_directory().display());

    match services.store().load().await {
        Some(outline) => println!("Outline:   {} slides", outline.len()),
        None => println!("Outline:   none"),
    }

    match services.renderer().status().await {
        Ok(status) if status.is_ok() => println!("Render:    {} (ok)", config.render.url),
        Ok(status) => println!("Render:    {} ({})", config.render.url, status.status),
        Err(e) => println!("Render:    {} (unavailable: {})", config.render.url, e.user_message()),
    }

    let analytics = if services.analytics().is_enabled() {
        "enabled"
    } else {
        "disabled"
    };
    println!("Analytics: {} ({})", config.analytics.url, analytics);
    Ok(())
}
