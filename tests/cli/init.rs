use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("init"))?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "\u{2713} Created .i18nsyncrc.json\n");

    let content = test.read_file(".i18nsyncrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    for field in [
        "includes",
        "ignores",
        "locales",
        "primaryLocale",
        "dictionaryFileName",
    ] {
        assert!(parsed.get(field).is_some(), "Config should have '{}'", field);
    }
    assert!(content.contains("\n  \""), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nsyncrc.json", "{}")?;

    let output = run(test.command().arg("init"))?;

    assert_eq!(output.code, Some(2));
    assert_eq!(output.stderr, "Error: .i18nsyncrc.json already exists\n");
    assert_eq!(test.read_file(".i18nsyncrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    run(test.command().arg("init"))?;
    test.write_file("src/app.tsx", "const a = <I18N>Hello</I18N>;\n")?;

    let output = run(test.sync_command().arg("--apply"))?;

    assert!(
        output.code == Some(0),
        "Sync should work with initialized config. stderr: {}",
        output.stderr
    );
    assert_eq!(
        test.read_file("src/i18n.ts")?,
        "export default {\n  en: {\n    Hello: 'Hello',\n  },\n};\n"
    );

    Ok(())
}
