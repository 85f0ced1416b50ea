use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_check_clean_project() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", "const a = <I18N>Hello</I18N>;\n")?;
    test.write_file(
        "src/i18n.ts",
        "export default {\n  en: {\n    Hello: 'Hello',\n  },\n  fr: {\n    Hello: 'Bonjour',\n  },\n};\n",
    )?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(0), "stdout: {}", output.stdout);
    assert_eq!(
        output.stdout,
        "\u{2713} Checked 1 source file, 1 dictionary - no issues found\n"
    );

    Ok(())
}

#[test]
fn test_check_reports_missing_dictionary() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", "const a = <I18N>Hello</I18N>;\n")?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(
        output
            .stdout
            .contains("error: \"dictionary does not exist\"  stale-dictionary")
    );
    assert!(output.stdout.contains("= note: 1 added"));
    assert!(output.stdout.contains("= hint: run `i18n-sync sync --apply`"));
    assert!(!test.root().join("src/i18n.ts").exists());

    Ok(())
}

#[test]
fn test_check_reports_dangling_reference() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", "const a = <I18N id=\"my_id\">Hi</I18N>;\n")?;
    test.write_file(
        "src/page.tsx",
        "const b = I18N.textById('missing.id');\nconst c = <I18N.Ref id=\"my.id\" />;\n",
    )?;
    test.write_file(
        "src/i18n.ts",
        "export default {\n  en: {\n    my_id: 'Hi',\n  },\n  fr: {\n    my_id: 'Salut',\n  },\n};\n",
    )?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("error: \"missing_id\"  dangling-reference"));
    assert!(output.stdout.contains("--> ./src/page.tsx"));
    assert!(output.stdout.contains("1 problems (1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_check_translation_warnings_do_not_fail() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        "const a = <I18N>Hello</I18N>;\nconst b = <I18N>Bye</I18N>;\n",
    )?;
    test.write_file(
        "src/i18n.ts",
        "export default {\n  en: {\n    Bye: 'Bye',\n    Hello: 'Hello',\n  },\n  fr: {\n    // @i18n-out-of-sync\n    Hello: 'Bonjour',\n  },\n};\n",
    )?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(0), "stdout: {}", output.stdout);
    assert!(output.stdout.contains("warning: \"Bye\"  missing-translation"));
    assert!(output.stdout.contains("= note: missing in: fr"));
    assert!(output.stdout.contains("warning: \"Hello\"  out-of-sync"));
    assert!(output.stdout.contains("2 problems (0 errors, 2 warnings)"));

    Ok(())
}

#[test]
fn test_check_locales_flag_overrides_config() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", "const a = <I18N>Hello</I18N>;\n")?;
    test.write_file(
        "src/i18n.ts",
        "export default {\n  en: {\n    Hello: 'Hello',\n  },\n  fr: {\n    Hello: 'Bonjour',\n  },\n};\n",
    )?;

    let output = run(test.check_command().args(["--locales", "en,fr,de"]))?;

    // `de` is absent from the file, so the merge would add an empty block.
    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("dictionary is out of date"));
    assert!(output.stdout.contains("missing in: de"));

    Ok(())
}

#[test]
fn test_check_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nsyncrc.json", r#"{ "locales": ["fr"], "primaryLocale": "en" }"#)?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("primary locale \"en\" is not listed"));

    Ok(())
}
