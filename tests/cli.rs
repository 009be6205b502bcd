//! End-to-end CLI tests
//!
//! Each test runs the binary against an isolated data directory via the
//! GESTOR_DATA_DIR override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn gestor(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gestor").unwrap();
    cmd.env("GESTOR_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn init_creates_default_categories() {
    let dir = TempDir::new().unwrap();

    gestor(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete"));

    gestor(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Aluguel"))
        .stdout(predicate::str::contains("Simples Nacional"))
        .stdout(predicate::str::contains("Mensalidades"));
}

#[test]
fn contract_add_and_list() {
    let dir = TempDir::new().unwrap();

    gestor(&dir)
        .args([
            "contract", "add", "Acme Ltda", "--start", "15/06/2024", "--fee", "1200.00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered contract: Acme Ltda"));

    gestor(&dir)
        .args(["contract", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme Ltda"))
        .stdout(predicate::str::contains("R$1200.00"));
}

#[test]
fn contract_add_rejects_malformed_date() {
    let dir = TempDir::new().unwrap();

    gestor(&dir)
        .args([
            "contract", "add", "Acme Ltda", "--start", "2024-06-15", "--fee", "1200",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid start date"));
}

#[test]
fn duplicate_client_is_rejected() {
    let dir = TempDir::new().unwrap();

    gestor(&dir)
        .args([
            "contract", "add", "Acme Ltda", "--start", "01/01/2024", "--fee", "1200",
        ])
        .assert()
        .success();

    gestor(&dir)
        .args([
            "contract", "add", "acme ltda", "--start", "01/02/2024", "--fee", "900",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn terminate_and_boleto_report() {
    let dir = TempDir::new().unwrap();

    gestor(&dir)
        .args([
            "contract", "add", "Acme Ltda", "--start", "01/01/2024", "--fee", "1200",
        ])
        .assert()
        .success();

    gestor(&dir)
        .args(["contract", "terminate", "Acme Ltda", "--date", "10/03/2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bills through the termination month"));

    // Jan-Mar at R$3.50 each: total R$10.50
    gestor(&dir)
        .args(["report", "boletos", "--year", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Boleto Fees 2024"))
        .stdout(predicate::str::contains("R$10.50"));
}

#[test]
fn rateio_report_divides_shared_costs() {
    let dir = TempDir::new().unwrap();

    gestor(&dir).arg("init").assert().success();

    for client in ["Acme Ltda", "Beta SA"] {
        gestor(&dir)
            .args(["contract", "add", client, "--start", "01/01/2023", "--fee", "500"])
            .assert()
            .success();
    }

    // Aluguel is seeded as a shared category
    gestor(&dir)
        .args(["cost", "set", "Aluguel", "2024", "1", "1000.00"])
        .assert()
        .success();

    gestor(&dir)
        .args(["report", "rateio", "--year", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rateio 2024"))
        .stdout(predicate::str::contains("R$500.00")); // 1000 / 2 contracts
}

#[test]
fn annual_impostos_report_suppresses_after_termination() {
    let dir = TempDir::new().unwrap();

    gestor(&dir).arg("init").assert().success();

    gestor(&dir)
        .args(["contract", "add", "Acme Ltda", "--start", "01/01/2023", "--fee", "1000"])
        .assert()
        .success();
    gestor(&dir)
        .args(["contract", "terminate", "Acme Ltda", "--date", "15/04/2024"])
        .assert()
        .success();

    for month in ["3", "4", "5"] {
        gestor(&dir)
            .args(["cost", "set", "ISS", "2024", month, "50.00"])
            .assert()
            .success();
    }

    // March + April survive, May is suppressed: total R$100.00
    gestor(&dir)
        .args(["report", "annual", "impostos", "--year", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Impostos 2024"))
        .stdout(predicate::str::contains("R$100.00"));
}

#[test]
fn report_csv_export() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("boletos.csv");

    gestor(&dir)
        .args(["contract", "add", "Acme Ltda", "--start", "01/01/2024", "--fee", "1200"])
        .assert()
        .success();

    gestor(&dir)
        .args(["report", "boletos", "--year", "2024"])
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("exported to"));

    let csv = std::fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("Year,Month,Active Contracts,Fee,Total"));
    assert!(csv.contains("2024,TOTAL,,,42.00"));
}

#[test]
fn malformed_fee_is_rejected_cleanly() {
    let dir = TempDir::new().unwrap();

    // A currency symbol trailing the decimals must produce a validation
    // error, not a crash
    gestor(&dir)
        .args([
            "contract", "add", "Acme Ltda", "--start", "01/01/2024", "--fee", "1,5€",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid fee"));

    gestor(&dir)
        .args([
            "contract", "add", "Acme Ltda", "--start", "01/01/2024", "--fee", "10.999",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid fee"));
}

#[test]
fn cost_set_rejects_unknown_category() {
    let dir = TempDir::new().unwrap();

    gestor(&dir)
        .args(["cost", "set", "Nope", "2024", "1", "10.00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn config_shows_paths_and_settings() {
    let dir = TempDir::new().unwrap();

    gestor(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data directory"))
        .stdout(predicate::str::contains("R$3.50"));
}
