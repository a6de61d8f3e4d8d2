#![allow(missing_docs)]
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn cipher_cli() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cipher-cli"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_caesar_encrypt_and_decrypt() {
    cipher_cli()
        .arg("caesar").arg("encrypt")
        .arg("--shift").arg("3")
        .arg("HELLO WORLD")
        .assert()
        .success()
        .stdout(predicate::str::contains("Encryption Result:"))
        .stdout(predicate::str::contains("Output: KHOORZRUOG"));

    cipher_cli()
        .arg("caesar").arg("decrypt")
        .arg("--shift").arg("3")
        .arg("KHOORZRUOG")
        .assert()
        .success()
        .stdout(predicate::str::contains("Output: HELLOWORLD"));
}

#[test]
fn test_caesar_accepts_negative_shift() {
    cipher_cli()
        .arg("caesar").arg("encrypt")
        .arg("--shift").arg("-1")
        .arg("ABC")
        .assert()
        .success()
        .stdout(predicate::str::contains("Output: ZAB"));
}

#[test]
fn test_vigenere_with_grouped_output() {
    cipher_cli()
        .arg("--group").arg("5")
        .arg("vigenere").arg("encrypt")
        .arg("--key").arg("LEMON")
        .arg("ATTACK AT DAWN")
        .assert()
        .success()
        .stdout(predicate::str::contains("Output: LXFOPVEFRNHR"))
        .stdout(predicate::str::contains("Formatted: LXFOP VEFRN HR"));
}

#[test]
fn test_vigenere_rejects_non_alphabetic_key() {
    cipher_cli()
        .arg("vigenere").arg("encrypt")
        .arg("--key").arg("abc123")
        .arg("ATTACK AT DAWN")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Key must contain only alphabetic characters"));
}

#[test]
fn test_blank_key_and_text_are_rejected() {
    cipher_cli()
        .arg("vigenere").arg("encrypt")
        .arg("--key").arg("   ")
        .arg("ATTACK")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Key cannot be empty"));

    cipher_cli()
        .arg("caesar").arg("encrypt")
        .arg("--shift").arg("3")
        .arg("  ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Text cannot be empty"));
}

#[test]
fn test_playfair_encrypt_shows_prepared_text_and_matrix() {
    cipher_cli()
        .arg("playfair").arg("encrypt")
        .arg("--key").arg("PLAYFAIREXAMPLE")
        .arg("--show-matrix")
        .arg("HIDETHEGOLDINTHETREESTUMP")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 P L A Y F"))
        .stdout(predicate::str::contains("Prepared: HIDETHEGOLDINTHETREXESTUMP"))
        .stdout(predicate::str::contains("Output: BMODZBXDNABEKUDMUIXMMOUVIF"));
}

#[test]
fn test_playfair_encrypt_separates_every_repeat() {
    cipher_cli()
        .arg("playfair").arg("encrypt")
        .arg("--key").arg("PLAYFAIREXAMPLE")
        .arg("balloon")
        .assert()
        .success()
        .stdout(predicate::str::contains("Prepared: BALXLOXONX"))
        .stdout(predicate::str::contains("Output: DPYRANEQQR"));
}

#[test]
fn test_playfair_decrypt_with_and_without_filler() {
    cipher_cli()
        .arg("playfair").arg("decrypt")
        .arg("--key").arg("PLAYFAIREXAMPLE")
        .arg("BMODZBXDNABEKUDMUIXMMOUVIF")
        .assert()
        .success()
        .stdout(predicate::str::contains("Output: HIDETHEGOLDINTHETREXESTUMP"));

    cipher_cli()
        .arg("playfair").arg("decrypt")
        .arg("--key").arg("PLAYFAIREXAMPLE")
        .arg("--strip-filler")
        .arg("BMODZBXDNABEKUDMUIXMMOUVIF")
        .assert()
        .success()
        .stdout(predicate::str::contains("Output: HIDETHEGOLDINTHETREESTUMP"));
}

#[test]
fn test_matrix_command() {
    cipher_cli()
        .arg("matrix")
        .arg("--key").arg("PLAYFAIREXAMPLE")
        .assert()
        .success()
        .stdout(predicate::str::contains("Playfair Key Matrix:"))
        .stdout(predicate::str::contains("  0 1 2 3 4"))
        .stdout(predicate::str::contains("4 T U V W Z"));
}

#[test]
fn test_json_output() {
    let output = cipher_cli()
        .arg("--json")
        .arg("--group").arg("5")
        .arg("playfair").arg("encrypt")
        .arg("--key").arg("PLAYFAIREXAMPLE")
        .arg("HIDETHEGOLDINTHETREESTUMP")
        .output()
        .expect("Failed to run cipher-cli");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");
    assert_eq!(json["cipher"], "playfair");
    assert_eq!(json["operation"], "encrypt");
    assert_eq!(json["output"], "BMODZBXDNABEKUDMUIXMMOUVIF");
    assert_eq!(json["prepared"], "HIDETHEGOLDINTHETREXESTUMP");
    assert_eq!(json["formatted"], "BMODZ BXDNA BEKUD MUIXM MOUVI F");
}

#[test]
fn test_text_from_input_file() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let input_path = temp_dir.path().join("message.txt");
    fs::write(&input_path, "Attack at dawn!\n").expect("Failed to write input file");

    cipher_cli()
        .arg("vigenere").arg("encrypt")
        .arg("--key").arg("lemon")
        .arg("--input").arg(&input_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Output: LXFOPVEFRNHR"));
}

#[test]
fn test_text_from_stdin() {
    assert_cmd::Command::new(env!("CARGO_BIN_EXE_cipher-cli"))
        .arg("caesar").arg("decrypt")
        .arg("--shift").arg("29")
        .write_stdin("khoor zruog\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Output: HELLOWORLD"));
}

#[test]
fn test_missing_input_file_fails() {
    cipher_cli()
        .arg("caesar").arg("encrypt")
        .arg("--shift").arg("1")
        .arg("--input").arg("/no/such/file.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input"));
}
