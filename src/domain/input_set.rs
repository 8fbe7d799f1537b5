//! Action inputs consumed by the command builder.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::AppError;
use crate::domain::source_list::normalize_source_list;

/// Every input the action understands.
///
/// Declaration order is the order flags are emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InputKey {
    Sources,
    IncludeModels,
    ExcludeModels,
    CommitMessage,
    Branch,
    FilePatterns,
    CommitterName,
    CommitterEmail,
    AuthorName,
    AuthorEmail,
    RepoPath,
    TargetBranch,
    Config,
    SkipValidation,
    DryRun,
    Debug,
}

impl InputKey {
    /// String-valued inputs that must be present, in emission order.
    pub const REQUIRED: [InputKey; 13] = [
        InputKey::Sources,
        InputKey::IncludeModels,
        InputKey::ExcludeModels,
        InputKey::CommitMessage,
        InputKey::Branch,
        InputKey::FilePatterns,
        InputKey::CommitterName,
        InputKey::CommitterEmail,
        InputKey::AuthorName,
        InputKey::AuthorEmail,
        InputKey::RepoPath,
        InputKey::TargetBranch,
        InputKey::Config,
    ];

    /// Optional boolean inputs, in emission order.
    pub const FLAGS: [InputKey; 3] = [InputKey::SkipValidation, InputKey::DryRun, InputKey::Debug];

    /// Action input name, which is also the tool's long flag name.
    pub fn name(self) -> &'static str {
        match self {
            InputKey::Sources => "sources",
            InputKey::IncludeModels => "include-models",
            InputKey::ExcludeModels => "exclude-models",
            InputKey::CommitMessage => "commit-message",
            InputKey::Branch => "branch",
            InputKey::FilePatterns => "file-patterns",
            InputKey::CommitterName => "committer-name",
            InputKey::CommitterEmail => "committer-email",
            InputKey::AuthorName => "author-name",
            InputKey::AuthorEmail => "author-email",
            InputKey::RepoPath => "repo-path",
            InputKey::TargetBranch => "target-branch",
            InputKey::Config => "config",
            InputKey::SkipValidation => "skip-validation",
            InputKey::DryRun => "dry-run",
            InputKey::Debug => "debug",
        }
    }

    pub fn is_flag(self) -> bool {
        Self::FLAGS.contains(&self)
    }

    /// Long flag token, e.g. `--repo-path`.
    pub fn flag(self) -> String {
        format!("--{}", self.name())
    }

    /// Environment variable names the runner may use for this input.
    ///
    /// The underscore spelling comes first; the runner keeps hyphens verbatim
    /// for hyphenated input names, so that spelling is the fallback.
    pub fn env_names(self) -> Vec<String> {
        let upper = self.name().to_ascii_uppercase();
        let underscored = format!("INPUT_{}", upper.replace('-', "_"));
        let verbatim = format!("INPUT_{}", upper);
        if underscored == verbatim { vec![underscored] } else { vec![underscored, verbatim] }
    }
}

impl fmt::Display for InputKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Optional boolean inputs. All default to false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFlags {
    pub skip_validation: bool,
    pub dry_run: bool,
    pub debug: bool,
}

impl InputFlags {
    pub fn get(&self, key: InputKey) -> bool {
        match key {
            InputKey::SkipValidation => self.skip_validation,
            InputKey::DryRun => self.dry_run,
            InputKey::Debug => self.debug,
            _ => false,
        }
    }

    pub fn set(&mut self, key: InputKey, value: bool) {
        match key {
            InputKey::SkipValidation => self.skip_validation = value,
            InputKey::DryRun => self.dry_run = value,
            InputKey::Debug => self.debug = value,
            _ => {}
        }
    }
}

/// Fully populated, validated action inputs.
///
/// Only constructible through [`InputSet::from_values`], so every required key
/// is guaranteed to hold a non-blank value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSet {
    values: BTreeMap<InputKey, String>,
    flags: InputFlags,
}

impl InputSet {
    /// Validate raw values and build an `InputSet`.
    ///
    /// Fails with [`AppError::MissingInputs`] naming every required key that
    /// is absent or blank. A `sources` value with no entries counts as blank.
    pub fn from_values(
        values: BTreeMap<InputKey, String>,
        flags: InputFlags,
    ) -> Result<Self, AppError> {
        if let Some(key) = values.keys().find(|key| key.is_flag()) {
            return Err(AppError::InvalidInput {
                key: key.name().to_string(),
                reason: "boolean input must be passed as a flag".to_string(),
            });
        }

        let missing: Vec<String> = InputKey::REQUIRED
            .into_iter()
            .filter(|key| match values.get(key) {
                None => true,
                Some(value) if *key == InputKey::Sources => {
                    normalize_source_list(value).is_empty()
                }
                Some(value) => value.trim().is_empty(),
            })
            .map(|key| key.name().to_string())
            .collect();

        if !missing.is_empty() {
            return Err(AppError::MissingInputs(missing));
        }

        Ok(Self { values, flags })
    }

    /// Raw value of a required input.
    pub fn value(&self, key: InputKey) -> &str {
        self.values.get(&key).map(String::as_str).unwrap_or_default()
    }

    pub fn flags(&self) -> InputFlags {
        self.flags
    }

    pub fn flag(&self, key: InputKey) -> bool {
        self.flags.get(key)
    }
}
