//! Integration tests for the tfstate2hcl CLI.
//!
//! Each test works in its own temp directory, so they can run in parallel.
//! `--skip-fmt` is passed everywhere so the tests do not depend on a
//! terraform binary being installed.

#![allow(deprecated)] // cargo_bin is deprecated but works fine for standard builds

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A small but representative state file: excluded fields, an empty list,
/// a scalar list, and a list of objects with a nested list of objects.
const KEY_VAULT_STATE: &str = r#"{
    "version": 4,
    "resources": [
        {
            "module": "module.key-vault",
            "type": "azurerm_key_vault",
            "name": "key-vault",
            "instances": [
                {
                    "attributes": {
                        "id": "/subscriptions/xxx/vaults/if-dev-secrets",
                        "vault_uri": "https://if-dev-secrets.vault.azure.net/",
                        "name": "if-dev-secrets",
                        "enabled_for_deployment": false,
                        "tags": [],
                        "sku_name": "standard",
                        "network_acls": [
                            {
                                "bypass": "AzureServices",
                                "default_action": "Deny",
                                "ip_rules": ["1.2.3.4/32"],
                                "virtual_network_subnet_ids": []
                            }
                        ],
                        "access_policy": [
                            {
                                "tenant_id": "tenant-a",
                                "key_permissions": ["Get", "List"],
                                "certificate_permissions": [{"scope": "all"}]
                            }
                        ]
                    }
                }
            ]
        }
    ]
}"#;

fn write_state(dir: &TempDir, name: &str, contents: &str) {
    fs::write(dir.path().join(name), contents).unwrap();
}

// ============================================================================
// Help and Version tests
// ============================================================================

#[test]
fn test_help_contains_disclaimer() {
    Command::cargo_bin("tfstate2hcl")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("DISCLAIMER"));
}

#[test]
fn test_help_shows_all_options() {
    Command::cargo_bin("tfstate2hcl")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-color"))
        .stdout(predicate::str::contains("--verbose"))
        .stdout(predicate::str::contains("--working-dir"))
        .stdout(predicate::str::contains("--output-dir"))
        .stdout(predicate::str::contains("--label-style"))
        .stdout(predicate::str::contains("--skip-fmt"));
}

#[test]
fn test_version() {
    Command::cargo_bin("tfstate2hcl")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_label_style_fails() {
    Command::cargo_bin("tfstate2hcl")
        .unwrap()
        .args(["--label-style", "invalid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid"));
}

#[test]
fn test_nonexistent_working_dir_fails() {
    Command::cargo_bin("tfstate2hcl")
        .unwrap()
        .args(["--working-dir", "/nonexistent/path", "--skip-fmt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

// ============================================================================
// End-to-end generation tests
// ============================================================================

#[test]
fn test_empty_working_dir_succeeds() {
    let temp_dir = TempDir::new().unwrap();

    Command::cargo_bin("tfstate2hcl")
        .unwrap()
        .args(["--working-dir", temp_dir.path().to_str().unwrap(), "--skip-fmt"])
        .assert()
        .success();

    // Nothing to generate: no output directory either
    assert!(!temp_dir.path().join("output").exists());
}

#[test]
fn test_generates_tf_file_from_state() {
    let temp_dir = TempDir::new().unwrap();
    write_state(&temp_dir, "terraform.tfstate", KEY_VAULT_STATE);

    Command::cargo_bin("tfstate2hcl")
        .unwrap()
        .args(["--working-dir", temp_dir.path().to_str().unwrap(), "--skip-fmt"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "resource \"azurerm_key_vault\" \"key-vault\" {",
        ));

    let generated = temp_dir.path().join("output").join("key-vault.tf");
    assert!(generated.exists());

    let contents = fs::read_to_string(&generated).unwrap();

    // Excluded and empty attributes never appear
    assert!(!contents.contains("id ="));
    assert!(!contents.contains("vault_uri"));
    assert!(!contents.contains("tags"));
    assert!(!contents.contains("virtual_network_subnet_ids"));

    // Scalars, scalar lists and nested blocks
    assert!(contents.contains("name = \"if-dev-secrets\""));
    assert!(contents.contains("enabled_for_deployment = false"));
    assert!(contents.contains("sku_name = \"standard\""));
    assert!(contents.contains("network_acls {"));
    assert!(contents.contains("ip_rules = [\"1.2.3.4/32\"]"));
    assert!(contents.contains("access_policy {"));
    assert!(contents.contains("certificate_permissions {"));
    assert!(contents.contains("scope = \"all\""));
}

#[test]
fn test_custom_output_dir() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("generated");
    write_state(&temp_dir, "terraform.tfstate", KEY_VAULT_STATE);

    Command::cargo_bin("tfstate2hcl")
        .unwrap()
        .args([
            "--working-dir",
            temp_dir.path().to_str().unwrap(),
            "--output-dir",
            output_dir.to_str().unwrap(),
            "--skip-fmt",
        ])
        .assert()
        .success();

    assert!(output_dir.join("key-vault.tf").exists());
}

#[test]
fn test_stale_tf_files_are_cleared() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("output");
    fs::create_dir_all(&output_dir).unwrap();
    fs::write(output_dir.join("stale.tf"), "old run").unwrap();
    write_state(&temp_dir, "terraform.tfstate", KEY_VAULT_STATE);

    Command::cargo_bin("tfstate2hcl")
        .unwrap()
        .args(["--working-dir", temp_dir.path().to_str().unwrap(), "--skip-fmt"])
        .assert()
        .success();

    assert!(!output_dir.join("stale.tf").exists());
    assert!(output_dir.join("key-vault.tf").exists());
}

#[test]
fn test_label_style_index() {
    let temp_dir = TempDir::new().unwrap();
    let state = r#"{
        "resources": [
            {
                "module": "module.secrets",
                "type": "azurerm_key_vault_secret",
                "name": "secret",
                "instances": [
                    {"index_key": "db-password", "attributes": {"name": "db-password"}}
                ]
            }
        ]
    }"#;
    write_state(&temp_dir, "terraform.tfstate", state);

    Command::cargo_bin("tfstate2hcl")
        .unwrap()
        .args([
            "--working-dir",
            temp_dir.path().to_str().unwrap(),
            "--label-style",
            "index",
            "--skip-fmt",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "resource \"azurerm_key_vault_secret\" \"db-password\" {",
        ));
}

#[test]
fn test_label_style_default_combines_name_and_index() {
    let temp_dir = TempDir::new().unwrap();
    let state = r#"{
        "resources": [
            {
                "module": "module.secrets",
                "type": "azurerm_key_vault_secret",
                "name": "secret",
                "instances": [
                    {"index_key": 0, "attributes": {"name": "first"}}
                ]
            }
        ]
    }"#;
    write_state(&temp_dir, "terraform.tfstate", state);

    Command::cargo_bin("tfstate2hcl")
        .unwrap()
        .args(["--working-dir", temp_dir.path().to_str().unwrap(), "--skip-fmt"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "resource \"azurerm_key_vault_secret\" \"secret_0\" {",
        ));
}

#[test]
fn test_malformed_state_aborts_run() {
    let temp_dir = TempDir::new().unwrap();
    write_state(&temp_dir, "terraform.tfstate", "{ not json");

    Command::cargo_bin("tfstate2hcl")
        .unwrap()
        .args(["--working-dir", temp_dir.path().to_str().unwrap(), "--skip-fmt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse state file"));
}

#[test]
fn test_multiple_state_files_each_produce_output() {
    let temp_dir = TempDir::new().unwrap();
    write_state(&temp_dir, "vault.tfstate", KEY_VAULT_STATE);

    let network_state = r#"{
        "resources": [
            {
                "module": "module.networking",
                "type": "azurerm_virtual_network",
                "name": "vnet",
                "instances": [
                    {"attributes": {"name": "vnet-dev", "address_space": ["10.0.0.0/16"]}}
                ]
            }
        ]
    }"#;
    write_state(&temp_dir, "network.tfstate", network_state);

    Command::cargo_bin("tfstate2hcl")
        .unwrap()
        .args(["--working-dir", temp_dir.path().to_str().unwrap(), "--skip-fmt"])
        .assert()
        .success();

    let output_dir = temp_dir.path().join("output");
    assert!(output_dir.join("key-vault.tf").exists());
    assert!(output_dir.join("networking.tf").exists());

    let network = fs::read_to_string(output_dir.join("networking.tf")).unwrap();
    assert!(network.contains("address_space = [\"10.0.0.0/16\"]"));
}
