//! Test harness for dirjson integration tests

use std::fs;
use std::path::Path;
use std::process::Command;

use dirjson::TreeNode;

pub use dirjson::test_utils::TestDir;

pub struct RunOutput {
    pub stdout: String,
    pub stderr: String,
    pub code: Option<i32>,
}

pub fn run_dirjson(cwd: &Path, args: &[&str]) -> RunOutput {
    let binary = env!("CARGO_BIN_EXE_dirjson");
    let output = Command::new(binary)
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("Failed to run dirjson");

    RunOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        code: output.status.code(),
    }
}

/// Read and parse a structure document written by the binary.
pub fn read_structure(path: &Path) -> TreeNode {
    let text = fs::read_to_string(path).expect("Failed to read output file");
    serde_json::from_str(&text).expect("Output is not a valid structure document")
}
