use assert_cmd::Command;
use std::path::Path;

/// `diary` pointed at `data_dir`, with logging quiet and no inherited data dir
pub fn diary_cmd(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("diary").unwrap();
    cmd.env_remove("DIARY_HOME");
    cmd.env_remove("RUST_LOG");
    cmd.arg("--data-dir").arg(data_dir);
    cmd
}

/// Register `username` and leave the diary straight away
#[allow(dead_code)]
pub fn register(data_dir: &Path, username: &str, password: &str) {
    diary_cmd(data_dir)
        .write_stdin(format!("2\n{}\n{}\n9\n", username, password))
        .assert()
        .success();
}
