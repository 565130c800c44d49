use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

const DEMO: &str = "\
; household journal

2024/01/05 * Grocery Store
    Expenses:Food                              $50.00
    Assets:Checking

2024/01/10 Rent
    Expenses:Rent                            $1200.00  ; January
    Assets:Checking
";

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_journal"))
}

fn temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("{}_{}_{}", prefix, std::process::id(), nanos));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_journal(dir: &Path) -> PathBuf {
    let path = dir.join("demo.ledger");
    std::fs::write(&path, DEMO).expect("write journal");
    path
}

/// A command isolated from the caller's journal environment.
fn journal(dir: &Path) -> Command {
    let mut cmd = Command::new(bin());
    cmd.env_remove("LEDGER_FILE")
        .env_remove("LEDGER_CONFIG")
        .env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .stdin(Stdio::null());
    cmd
}

fn run_ok(cmd: &mut Command) -> Output {
    let output = cmd.output().expect("run journal");
    assert!(
        output.status.success(),
        "command failed: stdout={}, stderr={}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

fn list_json(dir: &Path, file: &Path) -> Vec<serde_json::Value> {
    let output = run_ok(journal(dir).arg("list").arg("--json").arg("-f").arg(file));
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("parse list json");
    value.as_array().expect("list output array").clone()
}

#[test]
fn test_cli_list_json_newest_first() {
    let dir = temp_dir("journal_cli_list");
    let file = write_journal(&dir);

    let listed = list_json(&dir, &file);
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["id"], 0);
    assert_eq!(listed[0]["payee"], "Rent");
    assert_eq!(listed[0]["postings"][0]["comment"], "January");
    assert_eq!(listed[1]["id"], 1);
    assert_eq!(listed[1]["payee"], "Grocery Store");
    assert_eq!(listed[1]["cleared"], true);
    assert_eq!(listed[1]["postings"][1]["amount"], "");
}

#[test]
fn test_cli_list_plain_and_limit() {
    let dir = temp_dir("journal_cli_plain");
    let file = write_journal(&dir);

    let output = run_ok(
        journal(&dir)
            .arg("list")
            .arg("--limit")
            .arg("1")
            .arg("--format")
            .arg("plain")
            .arg("--file")
            .arg(&file),
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0\t2024/01/10\t\tRent\t$1200.00"));
    assert!(!stdout.contains("Grocery Store"));
}

#[test]
fn test_cli_list_rejects_unknown_format() {
    let dir = temp_dir("journal_cli_format");
    let file = write_journal(&dir);

    let output = journal(&dir)
        .arg("list")
        .arg("--format")
        .arg("csv")
        .arg("-f")
        .arg(&file)
        .output()
        .expect("run list");
    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unsupported format"));
}

#[test]
fn test_cli_show_plain_and_quiet() {
    let dir = temp_dir("journal_cli_show");
    let file = write_journal(&dir);

    let output = run_ok(journal(&dir).arg("show").arg("1").arg("-f").arg(&file));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("id=1"));
    assert!(stdout.contains("payee=Grocery Store"));
    assert!(stdout.contains("status=cleared"));
    assert!(stdout.contains("posting=Expenses:Food\t$50.00\t"));

    let output = run_ok(
        journal(&dir)
            .arg("show")
            .arg("1")
            .arg("--quiet")
            .arg("-f")
            .arg(&file),
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("2024/01/05 * Grocery Store\n"));
}

#[test]
fn test_cli_show_missing_id_exits_not_found() {
    let dir = temp_dir("journal_cli_show_missing");
    let file = write_journal(&dir);

    let output = journal(&dir)
        .arg("show")
        .arg("7")
        .arg("-f")
        .arg(&file)
        .output()
        .expect("run show");
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Not found: transaction 7"));
    assert!(stderr.contains("journal list"));
}

#[test]
fn test_cli_add_edit_delete_flow() {
    let dir = temp_dir("journal_cli_flow");
    let file = write_journal(&dir);

    let output = run_ok(
        journal(&dir)
            .arg("add")
            .arg("--date")
            .arg("2024/01/15")
            .arg("--payee")
            .arg("Coffee Shop")
            .arg("--cleared")
            .arg("-p")
            .arg("Expenses:Coffee=$4.50;latte")
            .arg("-p")
            .arg("Assets:Cash")
            .arg("--json")
            .arg("-f")
            .arg(&file),
    );
    let added: serde_json::Value = serde_json::from_slice(&output.stdout).expect("add json");
    assert_eq!(added["id"], 0);
    assert_eq!(added["payee"], "Coffee Shop");

    let text = std::fs::read_to_string(&file).expect("read journal");
    assert!(text.starts_with(DEMO));
    assert!(text.ends_with("  ; latte\n  Assets:Cash\n"));
    assert!(text.contains("\n\n2024/01/15 * Coffee Shop\n"));
    let backup = std::fs::read_to_string(dir.join("demo.ledger.bak")).expect("read backup");
    assert_eq!(backup, DEMO);

    let listed = list_json(&dir, &file);
    assert_eq!(listed.len(), 3);
    assert_eq!(listed[0]["payee"], "Coffee Shop");
    assert_eq!(listed[2]["payee"], "Grocery Store");

    run_ok(
        journal(&dir)
            .arg("edit")
            .arg("1")
            .arg("--payee")
            .arg("Landlord")
            .arg("--cleared")
            .arg("-f")
            .arg(&file),
    );
    let listed = list_json(&dir, &file);
    assert_eq!(listed[1]["payee"], "Landlord");
    assert_eq!(listed[1]["cleared"], true);
    assert_eq!(listed[1]["date"], "2024/01/10");
    assert_eq!(listed[1]["postings"][0]["amount"], "$1200.00");
    assert_eq!(listed[0]["payee"], "Coffee Shop");

    let output = run_ok(
        journal(&dir)
            .arg("delete")
            .arg("2")
            .arg("--yes")
            .arg("--json")
            .arg("-f")
            .arg(&file),
    );
    let removed: serde_json::Value = serde_json::from_slice(&output.stdout).expect("delete json");
    assert_eq!(removed["payee"], "Grocery Store");

    let listed = list_json(&dir, &file);
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[1]["payee"], "Landlord");
    let text = std::fs::read_to_string(&file).expect("read journal");
    assert!(text.starts_with("; household journal\n"));
    assert!(!text.contains("Grocery"));
}

#[test]
fn test_cli_add_from_json_file() {
    let dir = temp_dir("journal_cli_json_input");
    let file = write_journal(&dir);
    let payload = dir.join("txn.json");
    std::fs::write(
        &payload,
        r#"{"date":"2024/02/01","payee":"Paycheck","isCleared":true,
            "postings":[{"account":"Assets:Checking","amount":"$2000.00"},
                        {"account":"Income:Salary"}]}"#,
    )
    .expect("write payload");

    run_ok(
        journal(&dir)
            .arg("add")
            .arg("--from-json")
            .arg(&payload)
            .arg("--quiet")
            .arg("-f")
            .arg(&file),
    );
    let listed = list_json(&dir, &file);
    assert_eq!(listed[0]["payee"], "Paycheck");
    assert_eq!(listed[0]["postings"][1]["account"], "Income:Salary");
}

#[test]
fn test_cli_add_invalid_input_leaves_file() {
    let dir = temp_dir("journal_cli_invalid");
    let file = write_journal(&dir);

    let output = journal(&dir)
        .arg("add")
        .arg("--date")
        .arg("01/15/2024")
        .arg("--payee")
        .arg("Coffee")
        .arg("-p")
        .arg("Expenses:Coffee=$4.50")
        .arg("-f")
        .arg(&file)
        .output()
        .expect("run add");
    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stderr).contains("YYYY/MM/DD"));

    let output = journal(&dir)
        .arg("add")
        .arg("--payee")
        .arg("No postings")
        .arg("-f")
        .arg(&file)
        .output()
        .expect("run add");
    assert_eq!(output.status.code(), Some(4));

    assert_eq!(std::fs::read_to_string(&file).expect("read journal"), DEMO);
    assert!(!dir.join("demo.ledger.bak").exists());
}

#[test]
fn test_cli_accounts_from_text() {
    let dir = temp_dir("journal_cli_accounts");
    let file = write_journal(&dir);

    let output = run_ok(
        journal(&dir)
            .arg("accounts")
            .arg("--from-text")
            .arg("--json")
            .arg("-f")
            .arg(&file),
    );
    let accounts: Vec<String> = serde_json::from_slice(&output.stdout).expect("accounts json");
    assert_eq!(
        accounts,
        vec!["Assets:Checking", "Expenses:Food", "Expenses:Rent"]
    );
}

#[test]
fn test_cli_missing_config_message() {
    let dir = temp_dir("journal_cli_missing_config");

    let output = journal(&dir).arg("list").output().expect("run list");
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    let expected_path = dir.join("config").join("journal").join("config.toml");
    assert!(stderr.contains("No journal file configured"));
    assert!(stderr.contains(&*expected_path.to_string_lossy()));
    assert!(stderr.contains("journal config init"));
}

#[test]
fn test_cli_missing_journal_message() {
    let dir = temp_dir("journal_cli_missing_journal");
    let missing = dir.join("nowhere.ledger");

    let output = journal(&dir)
        .arg("list")
        .arg("-f")
        .arg(&missing)
        .output()
        .expect("run list");
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No journal found at"));
    assert!(stderr.contains(&*missing.to_string_lossy()));
}

#[test]
fn test_cli_config_init_and_use() {
    let dir = temp_dir("journal_cli_config");
    let file = write_journal(&dir);

    run_ok(
        journal(&dir)
            .arg("config")
            .arg("init")
            .arg("--journal")
            .arg(&file),
    );
    let config_path = dir.join("config").join("journal").join("config.toml");
    let contents = std::fs::read_to_string(&config_path).expect("read config");
    assert!(contents.contains("[journal]"));
    assert!(contents.contains(&*file.to_string_lossy()));

    // The configured journal is used without --file.
    let output = run_ok(journal(&dir).arg("list").arg("--json"));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("list json");
    assert_eq!(value.as_array().map(Vec::len), Some(2));

    // A second init refuses to overwrite.
    let output = journal(&dir)
        .arg("config")
        .arg("init")
        .output()
        .expect("run config init");
    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--force"));

    run_ok(journal(&dir).arg("config").arg("init").arg("--force"));
    let contents = std::fs::read_to_string(&config_path).expect("read config");
    assert!(!contents.contains(&*file.to_string_lossy()));
}

#[test]
fn test_cli_config_path_uses_env_override() {
    let dir = temp_dir("journal_cli_config_env");
    let override_path = dir.join("custom.toml");

    let output = run_ok(
        journal(&dir)
            .arg("config")
            .arg("path")
            .env("LEDGER_CONFIG", &override_path),
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), override_path.to_string_lossy());
}

#[test]
fn test_cli_report_failure_exits_general() {
    let dir = temp_dir("journal_cli_report_fail");
    let file = write_journal(&dir);
    std::fs::create_dir_all(dir.join("config").join("journal")).expect("create config dir");
    std::fs::write(
        dir.join("config").join("journal").join("config.toml"),
        "[ledger]\ncommand = \"/nonexistent/ledger-binary\"\n",
    )
    .expect("write config");

    let output = journal(&dir)
        .arg("report")
        .arg("balance")
        .arg("-f")
        .arg(&file)
        .output()
        .expect("run report");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Report error"));
    assert!(stderr.contains("[ledger] command"));
}

#[cfg(unix)]
#[test]
fn test_cli_report_parses_tool_output() {
    use std::os::unix::fs::PermissionsExt;

    let dir = temp_dir("journal_cli_report");
    let file = write_journal(&dir);
    let script = dir.join("fake-ledger.sh");
    std::fs::write(
        &script,
        "#!/bin/sh\nprintf '             $50.00  Expenses\n             $50.00    Food\n'\n",
    )
    .expect("write script");
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
        .expect("chmod script");
    std::fs::create_dir_all(dir.join("config").join("journal")).expect("create config dir");
    std::fs::write(
        dir.join("config").join("journal").join("config.toml"),
        format!("[ledger]\ncommand = \"{}\"\n", script.to_string_lossy()),
    )
    .expect("write config");

    let output = run_ok(
        journal(&dir)
            .arg("report")
            .arg("balance")
            .arg("--json")
            .arg("-f")
            .arg(&file),
    );
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).expect("report json");
    let rows = rows.as_array().expect("rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["amount"], "$50.00");
    assert_eq!(rows[0]["account"], "Expenses");
    assert_eq!(rows[1]["account"], "Food");
    assert_eq!(rows[1]["level"], 6);
}

#[test]
fn test_cli_completions() {
    let dir = temp_dir("journal_cli_completions");
    let output = run_ok(journal(&dir).arg("completions").arg("bash"));
    assert!(String::from_utf8_lossy(&output.stdout).contains("journal"));
}

#[test]
fn test_cli_no_command_prints_quickstart() {
    let dir = temp_dir("journal_cli_quickstart");
    let output = run_ok(&mut journal(&dir));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Quickstart:"));
    assert!(stdout.contains("journal list"));
}
