//! Action inputs from `INPUT_*` environment variables.

use std::collections::BTreeMap;

use tracing::warn;

use crate::domain::{AppError, InputFlags, InputKey, InputSet};

/// Read inputs from the process environment.
pub fn read_inputs_from_env() -> Result<InputSet, AppError> {
    read_inputs(|name| std::env::var(name).ok())
}

/// Read inputs through `lookup`, which maps a variable name to its value.
pub fn read_inputs<F>(lookup: F) -> Result<InputSet, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut values = BTreeMap::new();
    for key in InputKey::REQUIRED {
        if let Some(value) = lookup_input(key, &lookup) {
            values.insert(key, value);
        }
    }

    let mut flags = InputFlags::default();
    for key in InputKey::FLAGS {
        let enabled = lookup_input(key, &lookup).is_some_and(|raw| parse_flag(key, &raw));
        flags.set(key, enabled);
    }

    InputSet::from_values(values, flags)
}

/// First non-blank value among the key's variable spellings.
fn lookup_input<F>(key: InputKey, lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    key.env_names().iter().filter_map(|name| lookup(name.as_str())).find(|value| !value.trim().is_empty())
}

/// Only a literal `true` enables a flag.
fn parse_flag(key: InputKey, raw: &str) -> bool {
    if raw == "true" {
        return true;
    }
    if !raw.trim().is_empty() && raw != "false" {
        warn!(input = %key, value = raw, "ignoring non-literal boolean value; treating as false");
    }
    false
}
