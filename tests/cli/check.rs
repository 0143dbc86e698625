use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_check_writes_nothing() -> Result<()> {
    let test = CliTest::with_languages(&[
        (
            "En",
            r#"<resources><string name="hello">Hello</string><string-array name="days"><item>Mon</item></string-array></resources>"#,
        ),
        (
            "Fr",
            r#"<resources><string name="hello">Bonjour</string></resources>"#,
        ),
    ])?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 2 languages - 2 members, no schema conflicts

    ----- stderr -----
    ");
    assert!(!test.root().join("gen").exists());
    Ok(())
}

#[test]
fn test_check_verbose_lists_entries() -> Result<()> {
    let test = CliTest::with_languages(&[(
        "En",
        r#"<resources><string name="hello">Hello</string><string name="none"/></resources>"#,
    )])?;

    let mut cmd = test.check_command();
    cmd.arg("--verbose");

    let _guard = test.settings().bind_to_scope();
    assert_cmd_snapshot!(cmd, @r#"
    success: true
    exit_code: 0
    ----- stdout -----
      En: 2 strings, 0 arrays
    ✓ Checked 1 language - 2 members, no schema conflicts

    ----- stderr -----
    parse En [PROJECT]/res/values-En/strings.xml
     .hello = "Hello",
     .none = 0,
    "#);
    Ok(())
}

#[test]
fn test_check_reports_conflict() -> Result<()> {
    let test = CliTest::with_languages(&[
        (
            "En",
            r#"<resources><string name="ok">OK</string></resources>"#,
        ),
        (
            "Fr",
            r#"<resources><string-array name="ok"><item>D'accord</item></string-array></resources>"#,
        ),
    ])?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: schema conflict for member 'ok': declared as scalar, but language 'Fr' declares it as array of 1 item
    ");
    Ok(())
}
