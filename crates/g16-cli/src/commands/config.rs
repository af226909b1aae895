// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::output;
use crate::settings::{settings_path, Settings};

const ALLOWED_KEYS: &[&str] = &["log_filter", "sequential"];

pub fn set(mut settings: Settings, key: &str, value: &str) -> Result<()> {
    if !ALLOWED_KEYS.contains(&key) {
        return Err(output::fail_with_hint(
            &format!("unknown config key: {key}"),
            &format!("allowed keys: {}", ALLOWED_KEYS.join(", ")),
        ));
    }

    match key {
        "log_filter" => {
            if let Err(e) = EnvFilter::try_new(value) {
                return Err(output::fail_with_hint(
                    &format!("invalid log filter `{value}`: {e}"),
                    "use tracing directives, e.g. `warn` or `g16_verifier=debug`",
                ));
            }
            settings.log_filter = Some(value.to_string());
        }
        "sequential" => {
            settings.sequential = value.parse().map_err(|_| {
                output::fail_with_hint(&format!("invalid value for sequential: {value}"), "use `true` or `false`")
            })?;
        }
        _ => unreachable!(),
    }
    let path = settings.save()?;

    if output::is_json() {
        output::json_output(serde_json::json!({ "key": key, "value": value }));
    } else {
        output::success(&format!("{key} updated"));
        output::label("settings", &path.display().to_string());
    }
    Ok(())
}

pub fn show(settings: &Settings) -> Result<()> {
    let path = settings_path()?;

    if output::is_json() {
        output::json_output(serde_json::json!({
            "path": path.display().to_string(),
            "log_filter": settings.log_filter,
            "sequential": settings.sequential,
        }));
    } else {
        output::label("settings", &path.display().to_string());
        output::label("log_filter", settings.log_filter.as_deref().unwrap_or("(default: warn)"));
        output::label("sequential", &settings.sequential.to_string());
    }
    Ok(())
}
