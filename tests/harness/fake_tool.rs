//! Stand-in for the complyscribe executable.

use std::fs;
use std::path::{Path, PathBuf};

/// Shell script that records its arguments, one per line, then exits.
pub(crate) struct FakeTool {
    program: PathBuf,
    args_file: PathBuf,
}

impl FakeTool {
    pub(crate) fn install(dir: &Path, exit_code: i32) -> Self {
        let program = dir.join("fake-complyscribe");
        let args_file = dir.join("fake-complyscribe.args");
        let script = format!(
            "#!/bin/sh\nfor arg in \"$@\"; do printf '%s\\n' \"$arg\" >> '{}'; done\nexit {}\n",
            args_file.display(),
            exit_code
        );
        fs::write(&program, script).expect("Failed to write fake tool");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&program, fs::Permissions::from_mode(0o755))
                .expect("Failed to make fake tool executable");
        }

        Self { program, args_file }
    }

    pub(crate) fn program(&self) -> &Path {
        &self.program
    }

    pub(crate) fn was_invoked(&self) -> bool {
        self.args_file.exists()
    }

    /// Recorded arguments. Values containing newlines span several lines.
    pub(crate) fn recorded_args(&self) -> Vec<String> {
        fs::read_to_string(&self.args_file)
            .expect("Fake tool did not record arguments")
            .lines()
            .map(str::to_string)
            .collect()
    }
}
