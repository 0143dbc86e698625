use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.init_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .strtabrc.json

    ----- stderr -----
    ");

    let content = test.read_file(".strtabrc.json")?;
    let json: serde_json::Value = serde_json::from_str(&content)?;
    assert_eq!(json["languages"]["En"], "res/values/strings.xml");
    assert_eq!(json["structTypeName"], "gui_strings_t");
    Ok(())
}

#[test]
fn test_init_refuses_existing_config() -> Result<()> {
    let test = CliTest::with_file(".strtabrc.json", "{}")?;

    assert_cmd_snapshot!(test.init_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: .strtabrc.json already exists
    ");
    assert_eq!(test.read_file(".strtabrc.json")?, "{}");
    Ok(())
}

#[test]
fn test_init_then_generate() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "res/values/strings.xml",
        r#"<resources><string name="ok">OK</string></resources>"#,
    )?;
    test.write_file(
        "res/values-fr/strings.xml",
        r#"<resources><string name="ok">D'accord</string></resources>"#,
    )?;

    assert!(test.init_command().status()?.success());

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
      wrote strings.h
      wrote strings_En.c
      wrote strings_Fr.c
    ✓ Generated 3 files for 2 languages (1 member)

    ----- stderr -----
    ");
    assert!(test.read_file("strings_Fr.c")?.contains(".ok = \"D'accord\","));
    Ok(())
}
