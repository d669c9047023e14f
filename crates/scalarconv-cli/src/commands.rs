//! Command implementations
//!
//! Each command renders its output into a `String`; `main` decides where it
//! goes.

use crate::output;
use anyhow::{Context, Result, anyhow};
use scalarconv::{ConverterRegistry, DynConverter};

/// Configuration for the parse command
pub struct ParseConfig {
    pub scalar_type: String,
    pub inputs: Vec<String>,
    pub json: bool,
}

/// Configuration for the check command
pub struct CheckConfig {
    pub scalar_type: String,
    pub inputs: Vec<String>,
}

/// Outcome of the check command
pub struct CheckReport {
    pub rendered: String,
    pub all_converted: bool,
}

fn resolve<'a>(registry: &'a ConverterRegistry, name: &str) -> Result<&'a dyn DynConverter> {
    registry
        .get_by_name(name)
        .ok_or_else(|| anyhow!("unsupported scalar type '{}' (run `scalarconv types` for the list)", name))
}

/// Parse every input and render its canonical form, stopping at the first failure
pub fn parse(registry: &ConverterRegistry, config: &ParseConfig) -> Result<String> {
    let converter = resolve(registry, &config.scalar_type)?;
    log::debug!("parsing {} input(s) as {}", config.inputs.len(), converter.target_type());

    let mut lines = Vec::with_capacity(config.inputs.len());
    for (index, input) in config.inputs.iter().enumerate() {
        let value = converter
            .parse_value(input)
            .with_context(|| format!("input #{} rejected", index + 1))?;
        let line = if config.json {
            serde_json::to_string(&value).context("failed to serialize value")?
        } else {
            converter
                .format_value(&value)
                .context("converter could not format its own value")?
        };
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

/// Report whether each input converts
pub fn check(registry: &ConverterRegistry, config: &CheckConfig) -> Result<CheckReport> {
    let converter = resolve(registry, &config.scalar_type)?;

    let mut all_converted = true;
    let mut lines = Vec::with_capacity(config.inputs.len());
    for input in &config.inputs {
        let converts = converter.converts(input);
        all_converted &= converts;
        lines.push(format!("{:?}\t{}", input, output::format_verdict(converts)));
    }
    Ok(CheckReport {
        rendered: lines.join("\n"),
        all_converted,
    })
}

/// List registered type identifiers
pub fn types(registry: &ConverterRegistry, json: bool) -> Result<String> {
    let names: Vec<&str> = registry.types().iter().map(|ty| ty.name()).collect();
    if json {
        serde_json::to_string(&names).context("failed to serialize type list")
    } else {
        Ok(names.join("\n"))
    }
}
