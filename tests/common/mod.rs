use assert_cmd::Command;
use tempfile::TempDir;

pub fn diaro_cmd() -> Command {
    let mut cmd = Command::cargo_bin("diaro").unwrap();
    cmd.env_remove("DIARO_ROOT");
    cmd.env_remove("DIARO_DATABASE");
    cmd.env_remove("DIARO_LOG");
    cmd
}

/// Initialize a diary with the default database in `temp`
#[allow(dead_code)]
pub fn init_diary(temp: &TempDir) {
    diaro_cmd().arg("init").arg(temp.path()).assert().success();
}

/// Initialize a file-only diary in `temp`
#[allow(dead_code)]
pub fn init_file_only_diary(temp: &TempDir) {
    diaro_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--no-database")
        .assert()
        .success();
}
