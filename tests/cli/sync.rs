use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_sync_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        "export const App = () => <I18N>Hello</I18N>;\n",
    )?;

    let output = run(&mut test.sync_command())?;

    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert!(output.stdout.contains("create ./src/i18n.ts (1 added)"));
    assert!(output.stdout.contains("Would write 1 dictionary file(s)."));
    assert!(output.stdout.contains("Run with --apply to write these files."));
    assert!(!test.root().join("src/i18n.ts").exists());

    Ok(())
}

#[test]
fn test_sync_apply_creates_dictionary() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        r#"
export const App = ({ count }) => (
  <div>
    <I18N>Hello</I18N>
    {I18N.text({ zero: 'No files', one: 'One file', other: '{count} files' }, 'files', { count })}
  </div>
);
"#,
    )?;

    let output = run(test.sync_command().arg("--apply"))?;

    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert!(output.stdout.contains("Wrote 1 dictionary file(s)."));
    assert_snapshot!(test.read_file("src/i18n.ts")?, @r"
    export default {
      en: {
        files: {
          zero: 'No files',
          one: 'One file',
          other: '{count} files',
        },
        Hello: 'Hello',
      },
      fr: {},
    };
    ");

    Ok(())
}

#[test]
fn test_sync_is_idempotent() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", "const a = <I18N>Hello</I18N>;\n")?;

    run(test.sync_command().arg("--apply"))?;
    let first = test.read_file("src/i18n.ts")?;
    let output = run(test.sync_command().arg("--apply"))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Dictionaries are up to date."));
    assert_eq!(test.read_file("src/i18n.ts")?, first);

    Ok(())
}

#[test]
fn test_sync_marks_changed_translation_out_of_sync() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        "const a = <I18N id=\"Hello\">Hello there</I18N>;\n",
    )?;
    test.write_file(
        "src/i18n.ts",
        "export default {\n  en: {\n    Hello: 'Hello',\n  },\n  fr: {\n    Hello: 'Bonjour',\n  },\n};\n",
    )?;

    let output = run(test.sync_command().arg("--apply"))?;

    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert_snapshot!(test.read_file("src/i18n.ts")?, @r"
    export default {
      en: {
        Hello: 'Hello there',
      },
      fr: {
        // @i18n-out-of-sync
        Hello: 'Bonjour',
      },
    };
    ");

    Ok(())
}

#[test]
fn test_sync_carries_renamed_translation() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        "const a = <I18N id=\"welcome\">Hi</I18N>;\n",
    )?;
    test.write_file(
        "src/i18n.ts",
        "export default {\n  en: {\n    greeting: 'Hi',\n  },\n  fr: {\n    greeting: 'Salut',\n  },\n};\n",
    )?;

    let output = run(&mut test.sync_command())?;
    assert!(output.stdout.contains("update ./src/i18n.ts (1 renamed)"));

    run(test.sync_command().arg("--apply"))?;
    assert_eq!(
        test.read_file("src/i18n.ts")?,
        "export default {\n  en: {\n    welcome: 'Hi',\n  },\n  fr: {\n    welcome: 'Salut',\n  },\n};\n"
    );

    Ok(())
}

#[test]
fn test_sync_one_dictionary_per_directory() -> Result<()> {
    let test = CliTest::with_file("src/a.tsx", "const a = <I18N>Alpha</I18N>;\n")?;
    test.write_file("src/b.tsx", "const b = I18N.text('Beta');\n")?;
    test.write_file("src/nested/c.tsx", "const c = <I18N>Gamma</I18N>;\n")?;

    let output = run(test.sync_command().arg("--apply"))?;

    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert!(output.stdout.contains("Wrote 2 dictionary file(s)."));
    let root = test.read_file("src/i18n.ts")?;
    assert!(root.contains("Alpha: 'Alpha'"));
    assert!(root.contains("Beta: 'Beta'"));
    assert!(!root.contains("Gamma"));
    assert!(test.read_file("src/nested/i18n.ts")?.contains("Gamma: 'Gamma'"));

    Ok(())
}

#[test]
fn test_sync_authoring_error_blocks_writes() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", "const a = <I18N>Hello</I18N>;\n")?;
    test.write_file(
        "src/other/bad.tsx",
        "export const Bad = ({ name }) => <I18N>{name}</I18N>;\n",
    )?;

    let output = run(test.sync_command().arg("--apply"))?;

    assert_eq!(output.code, Some(1));
    assert!(
        output
            .stdout
            .contains("error: \"<I18N> child must be static text\"  authoring")
    );
    assert!(output.stdout.contains("--> ./src/other/bad.tsx:1:40"));
    assert!(output.stdout.contains("Not writing 1 dictionary file(s)"));
    assert!(!test.root().join("src/i18n.ts").exists());

    Ok(())
}

#[test]
fn test_sync_reports_duplicate_ids() -> Result<()> {
    let test = CliTest::with_file("src/a.tsx", "const a = I18N.text('A', 'badId');\n")?;
    test.write_file("src/b/b.tsx", "const b = I18N.text('B', 'badId');\n")?;

    let output = run(&mut test.sync_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("error: \"badId\"  duplicate-id"));
    assert!(
        output
            .stdout
            .contains("= note: defined in: ./src/a.tsx, ./src/b/b.tsx")
    );

    Ok(())
}

#[test]
fn test_sync_corrupted_dictionary_is_untouched() -> Result<()> {
    let corrupted = "export default {\n  en: {},\n  fr: 'oops',\n};\n";
    let test = CliTest::with_file("src/app.tsx", "const a = <I18N>Hello</I18N>;\n")?;
    test.write_file("src/i18n.ts", corrupted)?;

    let output = run(test.sync_command().arg("--apply"))?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("dictionary"));
    assert!(output.stdout.contains("expected an object"));
    assert_eq!(test.read_file("src/i18n.ts")?, corrupted);

    Ok(())
}

#[test]
fn test_sync_unreadable_dictionary_is_untouched() -> Result<()> {
    let latin1: &[u8] = b"export default {\n  en: { Hello: 'Hello' },\n  fr: { Hello: 'All\xF4' },\n};\n";
    let test = CliTest::with_file("src/app.tsx", "const a = <I18N>Hello</I18N>;\n")?;
    std::fs::write(test.root().join("src/i18n.ts"), latin1)?;

    let output = run(test.sync_command().arg("--apply"))?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("cannot read dictionary"));
    assert!(output.stdout.contains("--> ./src/i18n.ts"));
    assert_eq!(std::fs::read(test.root().join("src/i18n.ts"))?, latin1);

    Ok(())
}
