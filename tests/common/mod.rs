// Shared test helpers for integration tests
#![allow(dead_code)]

use gauntlet_runner::core::config::StepSpec;
use gauntlet_runner::core::execution::RunContext;
use std::path::Path;
use std::time::Duration;

/// A step that runs the suite tool with the given arguments.
pub fn tool_step(name: &str, args: &[&str]) -> StepSpec {
    StepSpec {
        name: name.to_string(),
        args: args.iter().map(|s| s.to_string()).collect(),
        ..StepSpec::default()
    }
}

/// A step that runs a full custom command line.
pub fn command_step(name: &str, command: &str) -> StepSpec {
    StepSpec {
        name: name.to_string(),
        command: Some(command.to_string()),
        ..StepSpec::default()
    }
}

/// A run context driving `tool` inside `root`.
pub fn make_ctx(tool: &str, root: &Path) -> RunContext {
    RunContext {
        tool: tool.to_string(),
        project_root: root.to_path_buf(),
        default_timeout: Duration::from_secs(30),
        locale: "en".to_string(),
    }
}
