use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::error::Error;
use std::fs::{self, File};
use tempfile::{Builder, TempDir, tempdir};

// Helper function to get the path to the compiled binary
fn catapult_cmd() -> Command {
    let mut cmd = Command::cargo_bin("catapult").expect("Failed to find catapult binary");
    cmd.env_remove("CATAPULT_LOG_DIR").env_remove("CATAPULT_LOG_LEVEL");
    cmd
}

fn envy_cmd() -> Command {
    let mut cmd = Command::cargo_bin("envy").expect("Failed to find envy binary");
    cmd.env_remove("CATAPULT_LOG_DIR").env_remove("CATAPULT_LOG_LEVEL");
    cmd
}

fn log_files_in(dir: &std::path::Path, prefix: &str) -> Result<Vec<std::path::PathBuf>, Box<dyn Error>> {
    let mut logs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let name = path.file_name().unwrap_or_default().to_string_lossy().into_owned();
        if name.starts_with(prefix) && name.ends_with(".log") {
            logs.push(path);
        }
    }
    Ok(logs)
}

#[test]
fn test_stdin_to_stdout_round_trip() -> Result<(), Box<dyn Error>> {
    let work = tempdir()?;

    catapult_cmd()
        .current_dir(work.path())
        .write_stdin("hello")
        .assert()
        .success()
        .stdout("hello\nPROCESSED.");

    // No log file unless a level is requested.
    assert!(log_files_in(work.path(), "catapult_")?.is_empty());
    Ok(())
}

#[test]
fn test_console_logging_goes_to_stderr() -> Result<(), Box<dyn Error>> {
    let work = tempdir()?;

    catapult_cmd()
        .current_dir(work.path())
        .write_stdin("one\ntwo")
        .assert()
        .success()
        .stdout("one\ntwo\nPROCESSED.")
        .stderr(contains("Program catapult running..."))
        .stderr(contains("Processed 2 lines."))
        .stderr(contains("Complete."))
        .stderr(contains("Running main, with args:"));
    Ok(())
}

#[test]
fn test_files_for_input_and_output() -> Result<(), Box<dyn Error>> {
    let work = tempdir()?;
    let input = work.path().join("in.txt");
    let output = work.path().join("out.txt");
    fs::write(&input, "from a file")?;

    catapult_cmd()
        .current_dir(work.path())
        .arg("-i")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&output)?, "from a file\nPROCESSED.");
    Ok(())
}

#[test]
fn test_missing_input_fails() -> Result<(), Box<dyn Error>> {
    let work = tempdir()?;

    catapult_cmd()
        .current_dir(work.path())
        .arg("--input")
        .arg("surely/this/does/not/exist/input.txt")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Failed to open input file"));
    Ok(())
}

#[test]
fn test_unwritable_output_fails() -> Result<(), Box<dyn Error>> {
    let work = tempdir()?;

    catapult_cmd()
        .current_dir(work.path())
        .arg("-o")
        .arg(work.path().join("no_such_dir").join("out.txt"))
        .write_stdin("hello")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Failed to open output file"));
    Ok(())
}

#[test]
fn test_invalid_log_level_is_usage_error() -> Result<(), Box<dyn Error>> {
    let work = tempdir()?;

    catapult_cmd()
        .current_dir(work.path())
        .arg("--log_level")
        .arg("loud")
        .assert()
        .failure()
        .code(2)
        .stderr(contains("invalid value 'loud'"));
    Ok(())
}

#[test]
fn test_log_level_creates_timestamped_log_file() -> Result<(), Box<dyn Error>> {
    let work = tempdir()?;

    catapult_cmd()
        .current_dir(work.path())
        .arg("-l")
        .arg("DEBUG")
        .write_stdin("hello")
        .assert()
        .success()
        .stdout("hello\nPROCESSED.")
        .stderr(contains("Logging enabled at level DEBUG."));

    let logs = log_files_in(work.path(), "catapult_")?;
    assert_eq!(logs.len(), 1);

    let name = logs[0].file_name().unwrap_or_default().to_string_lossy().into_owned();
    // catapult_YYYYMMDDTHHMMSS.log
    assert_eq!(name.len(), "catapult_".len() + 15 + ".log".len());
    assert_eq!(&name["catapult_".len() + 8..="catapult_".len() + 8], "T");

    let contents = fs::read_to_string(&logs[0])?;
    assert!(contents.contains("DEBUG    Command: "));
    assert!(contents.contains("STATUS   Running main, with args:"));
    assert!(contents.contains("INFO     Complete."));
    Ok(())
}

#[test]
fn test_bare_log_flag_keeps_console_at_info() -> Result<(), Box<dyn Error>> {
    let work = tempdir()?;
    let logs_dir = work.path().join("logs");

    catapult_cmd()
        .current_dir(work.path())
        .arg("--log-dir")
        .arg(&logs_dir)
        .arg("-l")
        .write_stdin("hello")
        .assert()
        .success()
        .stderr(contains("Command: ").not())
        .stderr(contains("Complete."));

    let logs = log_files_in(&logs_dir, "catapult_")?;
    assert_eq!(logs.len(), 1);
    assert!(fs::read_to_string(&logs[0])?.contains("Command: "));
    Ok(())
}

#[test]
fn test_log_dir_from_environment() -> Result<(), Box<dyn Error>> {
    let work = tempdir()?;
    let logs_dir = work.path().join("env_logs");

    catapult_cmd()
        .current_dir(work.path())
        .env("CATAPULT_LOG_DIR", &logs_dir)
        .arg("-l")
        .arg("info")
        .write_stdin("hello")
        .assert()
        .success();

    assert_eq!(log_files_in(&logs_dir, "catapult_")?.len(), 1);
    Ok(())
}

#[test]
fn test_testing_flag_prints_arguments() -> Result<(), Box<dyn Error>> {
    let work = tempdir()?;

    catapult_cmd()
        .current_dir(work.path())
        .arg("-t")
        .arg("-g")
        .write_stdin("hello")
        .assert()
        .success()
        .stdout(contains("gflag: true"))
        .stdout(contains("hello\nPROCESSED."));
    Ok(())
}

// The default tempfile prefix starts with a dot, which discovery treats as hidden.
fn visible_tempdir() -> std::io::Result<TempDir> {
    Builder::new().prefix("catapult-test").tempdir()
}

#[test]
fn test_paths_list_discovered_files() -> Result<(), Box<dyn Error>> {
    let work = visible_tempdir()?;
    let root = work.path().canonicalize()?;
    fs::create_dir(root.join("sub"))?;
    File::create(root.join("a.txt"))?;
    File::create(root.join(".hidden"))?;
    File::create(root.join("sub").join("c.txt"))?;

    let flat = format!("{}\n", root.join("a.txt").display());
    catapult_cmd()
        .current_dir(&root)
        .arg(".")
        .assert()
        .success()
        .stdout(flat)
        .stderr(contains("Found 1 files."));

    let deep = format!(
        "{}\n{}\n",
        root.join("a.txt").display(),
        root.join("sub").join("c.txt").display()
    );
    catapult_cmd()
        .current_dir(&root)
        .arg("-r")
        .arg(".")
        .assert()
        .success()
        .stdout(deep)
        .stderr(contains("txt: 2"));
    Ok(())
}

#[test]
fn test_missing_path_lists_nothing() -> Result<(), Box<dyn Error>> {
    let work = tempdir()?;

    catapult_cmd()
        .current_dir(work.path())
        .arg("surely_this_does_not_exist_42")
        .assert()
        .success()
        .stdout("");
    Ok(())
}

#[test]
fn test_envy_labels_console_output() -> Result<(), Box<dyn Error>> {
    let work = tempdir()?;

    envy_cmd()
        .current_dir(work.path())
        .arg("-l")
        .write_stdin("hello")
        .assert()
        .success()
        .stdout("hello\nPROCESSED.")
        .stderr(contains("INFO    : Logging enabled at level INFO."))
        .stderr(contains("INFO    : Command: "))
        .stderr(contains("INFO    : CWD: "))
        .stderr(contains("INFO    : Complete."))
        .stderr(contains("STATUS  : Running main"))
        .stderr(contains("running...").not());

    let logs = log_files_in(work.path(), "envy_")?;
    assert_eq!(logs.len(), 1);
    let contents = fs::read_to_string(&logs[0])?;
    assert!(contents.contains("INFO     Command: "));
    assert!(!contents.contains("Program envy running..."));
    Ok(())
}

#[test]
fn test_envy_logs_startup_without_log_file() -> Result<(), Box<dyn Error>> {
    let work = tempdir()?;

    envy_cmd()
        .current_dir(work.path())
        .write_stdin("hello")
        .assert()
        .success()
        .stderr(contains("INFO    : Logging enabled at level INFO."))
        .stderr(contains("INFO    : Command: "));

    assert!(log_files_in(work.path(), "envy_")?.is_empty());
    Ok(())
}

#[test]
fn test_log_level_from_environment() -> Result<(), Box<dyn Error>> {
    let work = tempdir()?;

    catapult_cmd()
        .current_dir(work.path())
        .env("CATAPULT_LOG_LEVEL", "warning")
        .write_stdin("hello")
        .assert()
        .success()
        .stdout("hello\nPROCESSED.")
        .stderr(contains("Complete.").not())
        .stderr(contains("Program catapult running...").not());

    let logs = log_files_in(work.path(), "catapult_")?;
    assert_eq!(logs.len(), 1);
    assert!(!fs::read_to_string(&logs[0])?.contains("Complete."));
    Ok(())
}
