use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const DICTIONARY: &str = "export default {\n  en: {\n    Bye: 'Bye',\n    Hello: 'Hello',\n  },\n  fr: {\n    // @i18n-out-of-sync\n    Hello: 'Bonjour',\n  },\n};\n";

fn setup() -> Result<CliTest> {
    let test = CliTest::with_file("src/i18n.ts", DICTIONARY)?;
    test.write_file(
        "src/app.tsx",
        "const a = <I18N>Hello</I18N>;\nconst b = <I18N>Bye</I18N>;\n",
    )?;
    Ok(test)
}

#[test]
fn test_import_writes_translations_and_clears_marker() -> Result<()> {
    let test = setup()?;
    test.write_file(
        "fr.json",
        r#"{ "src/i18n.ts": { "fr": { "Hello": "Salut", "Bye": "Au revoir", "Unknown": "Inconnu" } } }"#,
    )?;

    let output = run(test.import_command("fr.json").arg("--apply"))?;

    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert!(output.stdout.contains("warning: \"Unknown\"  import-skipped"));
    assert!(output.stdout.contains("Wrote 1 dictionary file(s)."));
    assert_eq!(
        test.read_file("src/i18n.ts")?,
        "export default {\n  en: {\n    Bye: 'Bye',\n    Hello: 'Hello',\n  },\n  fr: {\n    Bye: 'Au revoir',\n    Hello: 'Salut',\n  },\n};\n"
    );

    Ok(())
}

#[test]
fn test_import_dry_run_previews() -> Result<()> {
    let test = setup()?;
    test.write_file("fr.json", r#"{ "src/i18n.ts": { "fr": { "Bye": "Au revoir" } } }"#)?;

    let output = run(&mut test.import_command("fr.json"))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("update ./src/i18n.ts (1 added)"));
    assert!(output.stdout.contains("Would write 1 dictionary file(s)."));
    assert_eq!(test.read_file("src/i18n.ts")?, DICTIONARY);

    Ok(())
}

#[test]
fn test_import_into_primary_locale_is_rejected() -> Result<()> {
    let test = setup()?;
    test.write_file("en.json", r#"{ "src/i18n.ts": { "en": { "Hello": "Howdy" } } }"#)?;

    let output = run(test.import_command("en.json").arg("--apply"))?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("'en' is the primary locale"));
    assert_eq!(test.read_file("src/i18n.ts")?, DICTIONARY);

    Ok(())
}

#[test]
fn test_import_missing_dictionary() -> Result<()> {
    let test = setup()?;
    test.write_file("fr.json", r#"{ "lib/i18n.ts": { "fr": { "Hello": "Salut" } } }"#)?;

    let output = run(&mut test.import_command("fr.json"))?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("cannot read dictionary"));

    Ok(())
}

#[test]
fn test_import_unreadable_file_is_an_error() -> Result<()> {
    let test = setup()?;

    let output = run(&mut test.import_command("missing.json"))?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Failed to read import file"));

    Ok(())
}
