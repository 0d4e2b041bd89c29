use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_demo_prints_every_generator() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("randkit-demo")?;
    cmd.assert()
        .success()
        .stdout(predicate::str::is_match(
            r"Secure token \(hex, 16 bytes\): [0-9a-f]{32}\n",
        )?)
        .stdout(predicate::str::is_match(
            r"UUID v4: [0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}\n",
        )?)
        .stdout(predicate::str::is_match(r"Random hex color: #[0-9A-F]{6}\n")?)
        .stdout(predicate::str::contains("Original array: [1,2,3,4,5,6,7,8,9,10]"))
        .stdout(predicate::str::contains("Shuffled array: ["))
        .stdout(predicate::str::contains("Random phrase: "))
        .stdout(predicate::str::contains("Done."));
    Ok(())
}
