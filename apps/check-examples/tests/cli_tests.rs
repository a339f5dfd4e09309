#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Smoke tests of the `check-examples` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const CRD: &str = r"
apiVersion: apiextensions.k8s.io/v1
kind: CustomResourceDefinition
metadata:
  name: accounts.cloud.redis.io
spec:
  group: cloud.redis.io
  names:
    kind: Account
  versions:
    - name: v1alpha1
      served: true
      schema:
        openAPIV3Schema:
          type: object
          properties:
            spec:
              type: object
";

fn run(crd_dir: &Path, examples_dir: &Path, json: bool) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_check-examples"));
    if json {
        cmd.arg("--json");
    }
    cmd.arg(crd_dir).arg(examples_dir).output().unwrap()
}

fn fixture(example: &str) -> (TempDir, TempDir) {
    let crds = TempDir::new().unwrap();
    fs::write(crds.path().join("cloud.redis.io_accounts.yaml"), CRD).unwrap();

    let examples = TempDir::new().unwrap();
    fs::create_dir_all(examples.path().join("cloud")).unwrap();
    fs::write(examples.path().join("cloud/account.yaml"), example).unwrap();
    (crds, examples)
}

#[test]
fn valid_examples_pass() {
    let (crds, examples) = fixture("apiVersion: cloud.redis.io/v1alpha1\nkind: Account\nspec: {}\n");
    let out = run(crds.path(), examples.path(), false);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stdout));
}

#[test]
fn invalid_example_fails_with_json_report() {
    let (crds, examples) = fixture("apiVersion: cloud.redis.io/v1alpha1\nkind: Account\n");
    let out = run(crds.path(), examples.path(), true);
    assert!(!out.status.success());

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["crd_versions"], 1);
    assert_eq!(report["files_checked"], 1);
    assert_eq!(report["ok"], false);
    assert_eq!(report["errors"][0]["message"], "Missing required 'spec' field");
    assert_eq!(report["errors"][0]["document"], 0);
}

#[test]
fn missing_directory_fails() {
    let crds = TempDir::new().unwrap();
    let out = run(crds.path(), &crds.path().join("nope"), false);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("does not exist"));
}
