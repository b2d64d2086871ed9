//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use turbo_search::SearchConfig;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Get { key } => get_config(&key, ctx).await,
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Current Configuration");

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.warn("No config file found, showing defaults"),
    }

    let config = ctx.search_config();
    ctx.output.kv("default_page_size", &config.default_page_size.to_string());
    ctx.output.kv("log_message_limit", &config.log_message_limit.to_string());

    for (name, backend) in [("catalog", &config.catalog), ("search", &config.search)] {
        ctx.output.info("");
        ctx.output.info(&format!("[{}]", name));
        ctx.output.kv("endpoint", &backend.endpoint);
        ctx.output.kv("timeout_ms", &backend.timeout_ms.to_string());
        // Header values are usually credentials.
        for key in backend.headers.keys() {
            ctx.output.list_item(&format!("{}: ****", key));
        }
    }

    Ok(())
}

async fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(ctx.search_config(), key)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

async fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let Some(path) = &ctx.config_path else {
        bail!("No config file found. Run `turbo-search config init` to create one.");
    };
    let path = path.to_string_lossy();

    let mut config = CliConfig::load(&path)?;
    set_config_value(&mut config.service, key, value)?;
    config.save(&path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));
    ctx.output.info("Set the backend endpoints and headers before querying.");

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let config = ctx.search_config();
    let mut warnings: Vec<String> = Vec::new();

    if ctx.config_path.is_none() {
        warnings.push("no config file found, using defaults".to_string());
    }
    for (name, backend) in [("catalog", &config.catalog), ("search", &config.search)] {
        if backend.endpoint.contains("example.com") {
            warnings.push(format!("{}.endpoint is still the placeholder", name));
        }
        if backend.endpoint.starts_with("http://") {
            warnings.push(format!("{}.endpoint is not using https", name));
        }
    }

    if let Err(e) = config.validate() {
        for warning in &warnings {
            ctx.output.warn(&format!("Warning: {}", warning));
        }
        bail!("Invalid configuration: {}", e);
    }

    if warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }
    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

fn get_config_value(config: &SearchConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["default_page_size"] => Ok(config.default_page_size.to_string()),
        ["log_message_limit"] => Ok(config.log_message_limit.to_string()),
        ["catalog", "endpoint"] => Ok(config.catalog.endpoint.clone()),
        ["catalog", "timeout_ms"] => Ok(config.catalog.timeout_ms.to_string()),
        ["search", "endpoint"] => Ok(config.search.endpoint.clone()),
        ["search", "timeout_ms"] => Ok(config.search.timeout_ms.to_string()),
        _ => bail!("Unknown config key: {}", key),
    }
}

fn set_config_value(config: &mut SearchConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["default_page_size"] => config.default_page_size = value.parse()?,
        ["log_message_limit"] => config.log_message_limit = value.parse()?,
        ["catalog", "endpoint"] => config.catalog.endpoint = value.to_string(),
        ["catalog", "timeout_ms"] => config.catalog.timeout_ms = value.parse()?,
        ["search", "endpoint"] => config.search.endpoint = value.to_string(),
        ["search", "timeout_ms"] => config.search.timeout_ms = value.parse()?,
        ["catalog", "headers", name] => {
            config.catalog.headers.insert(name.to_string(), value.to_string());
        }
        ["search", "headers", name] => {
            config.search.headers.insert(name.to_string(), value.to_string());
        }
        _ => bail!("Unknown or read-only config key: {}", key),
    }

    config.validate()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set_values() {
        let mut config = SearchConfig::default();
        set_config_value(&mut config, "default_page_size", "36").unwrap();
        set_config_value(&mut config, "search.endpoint", "https://s.example.net/graphql").unwrap();
        set_config_value(&mut config, "search.headers.x-api-key", "secret").unwrap();

        assert_eq!(get_config_value(&config, "default_page_size").unwrap(), "36");
        assert_eq!(
            get_config_value(&config, "search.endpoint").unwrap(),
            "https://s.example.net/graphql"
        );
        assert_eq!(
            config.search.headers.get("x-api-key").map(String::as_str),
            Some("secret")
        );
    }

    #[test]
    fn test_set_rejects_invalid_values() {
        let mut config = SearchConfig::default();
        assert!(set_config_value(&mut config, "default_page_size", "0").is_err());
        assert!(set_config_value(&mut config, "catalog.endpoint", "catalog").is_err());
        assert!(set_config_value(&mut config, "unknown", "1").is_err());
        assert!(get_config_value(&config, "catalog.headers").is_err());
    }
}
