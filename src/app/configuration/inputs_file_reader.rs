//! Action inputs from a YAML file, for reproducing a run outside CI.
//!
//! Keys are the kebab-case action input names; no defaults are filled in.
//! `sources`, `include-models` and `exclude-models` may be given as a string
//! or as a list of strings. An empty list counts as a missing input.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{AppError, InputFlags, InputKey, InputSet};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TextOrList {
    Text(String),
    List(Vec<String>),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct InputsFile {
    sources: Option<TextOrList>,
    include_models: Option<TextOrList>,
    exclude_models: Option<TextOrList>,
    commit_message: Option<String>,
    branch: Option<String>,
    file_patterns: Option<String>,
    committer_name: Option<String>,
    committer_email: Option<String>,
    author_name: Option<String>,
    author_email: Option<String>,
    repo_path: Option<String>,
    target_branch: Option<String>,
    config: Option<String>,
    #[serde(default)]
    skip_validation: bool,
    #[serde(default)]
    dry_run: bool,
    #[serde(default)]
    debug: bool,
}

/// Load and validate an inputs file.
pub fn load_inputs_file(path: &Path) -> Result<InputSet, AppError> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::InputsFile {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;
    parse_inputs(&content).map_err(|e| match e {
        AppError::Configuration(details) => {
            AppError::InputsFile { path: path.display().to_string(), details }
        }
        other => other,
    })
}

/// Parse inputs file content.
pub fn parse_inputs(content: &str) -> Result<InputSet, AppError> {
    let file: InputsFile =
        serde_yaml::from_str(content).map_err(|e| AppError::config_error(e.to_string()))?;

    let mut values = BTreeMap::new();
    if let Some(sources) = file.sources {
        values.insert(InputKey::Sources, sources_value(sources)?);
    }
    let model_fields =
        [(InputKey::IncludeModels, file.include_models), (InputKey::ExcludeModels, file.exclude_models)];
    for (key, field) in model_fields {
        if let Some(field) = field {
            values.insert(key, comma_joined(field));
        }
    }

    let text_fields = [
        (InputKey::CommitMessage, file.commit_message),
        (InputKey::Branch, file.branch),
        (InputKey::FilePatterns, file.file_patterns),
        (InputKey::CommitterName, file.committer_name),
        (InputKey::CommitterEmail, file.committer_email),
        (InputKey::AuthorName, file.author_name),
        (InputKey::AuthorEmail, file.author_email),
        (InputKey::RepoPath, file.repo_path),
        (InputKey::TargetBranch, file.target_branch),
        (InputKey::Config, file.config),
    ];
    for (key, field) in text_fields {
        if let Some(value) = field {
            values.insert(key, value);
        }
    }

    let flags = InputFlags {
        skip_validation: file.skip_validation,
        dry_run: file.dry_run,
        debug: file.debug,
    };
    InputSet::from_values(values, flags)
}

/// List entries cannot carry whitespace: normalization would split them.
fn sources_value(field: TextOrList) -> Result<String, AppError> {
    match field {
        TextOrList::Text(text) => Ok(text),
        TextOrList::List(entries) => {
            if let Some(entry) = entries.iter().find(|entry| entry.trim().contains(char::is_whitespace))
            {
                return Err(AppError::InvalidInput {
                    key: InputKey::Sources.name().to_string(),
                    reason: format!("entry '{}' contains whitespace", entry.trim()),
                });
            }
            Ok(entries.join("\n"))
        }
    }
}

fn comma_joined(field: TextOrList) -> String {
    match field {
        TextOrList::Text(text) => text,
        TextOrList::List(entries) => entries
            .iter()
            .map(|entry| entry.trim())
            .filter(|entry| !entry.is_empty())
            .collect::<Vec<_>>()
            .join(","),
    }
}
