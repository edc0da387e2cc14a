use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_end_to_end_rename() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("css/site.css", ".alpha{color:red}.beta{color:blue}")?;
    test.write_file("index.html", r#"<div class="alpha beta gamma">hi</div>"#)?;

    let output = test
        .run_command()
        .args(["--html", "index.html", "--css", "css/site.css"])
        .output()?;
    assert!(output.status.success());

    // alpha and beta are the same length; ties break lexicographically.
    assert_eq!(
        test.read_file("css/site.css")?,
        ".c1{color:red}.c2{color:blue}"
    );
    // gamma was never defined in CSS, so it passes through unchanged.
    assert_eq!(
        test.read_file("index.html")?,
        r#"<div class="c1 c2 gamma">hi</div>"#
    );

    Ok(())
}

#[test]
fn test_css_and_html_share_one_mapping() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "css/site.css",
        ".navigation{display:flex}\n.nav{color:#333}\n",
    )?;
    test.write_file(
        "index.html",
        "<nav class=\"navigation\"><a class=\"nav\">x</a></nav>",
    )?;

    let output = test
        .run_command()
        .args(["--html", "index.html", "--css", "css/site.css"])
        .output()?;
    assert!(output.status.success());

    // Longer identifiers are assigned first.
    assert_eq!(
        test.read_file("css/site.css")?,
        ".c1{display:flex}\n.c2{color:#333}\n"
    );
    assert_eq!(
        test.read_file("index.html")?,
        "<nav class=\"c1\"><a class=\"c2\">x</a></nav>"
    );

    Ok(())
}

#[test]
fn test_commented_out_rules_are_not_definitions() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "css/site.css",
        "/* .ghost{display:none} */\n.live{color:red}\n",
    )?;
    test.write_file("index.html", r#"<p class="ghost live"></p>"#)?;

    let output = test
        .run_command()
        .args(["--html", "index.html", "--css", "css/site.css"])
        .output()?;
    assert!(output.status.success());

    // The comment survives rewriting byte for byte; only .live is renamed.
    assert_eq!(
        test.read_file("css/site.css")?,
        "/* .ghost{display:none} */\n.c1{color:red}\n"
    );
    assert_eq!(test.read_file("index.html")?, r#"<p class="c1 live"></p>"#);

    Ok(())
}

#[test]
fn test_class_attribute_whitespace_is_normalized() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("css/site.css", ".a{}")?;
    test.write_file("index.html", r#"<p class="  a   b  "></p>"#)?;

    let output = test
        .run_command()
        .args(["--html", "index.html", "--css", "css/site.css"])
        .output()?;
    assert!(output.status.success());

    assert_eq!(test.read_file("index.html")?, r#"<p class="c1 b"></p>"#);

    Ok(())
}

#[test]
fn test_missing_css_file_is_skipped() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("css/present.css", ".here{}")?;
    test.write_file("index.html", r#"<div class="here">x</div>"#)?;

    let output = test
        .run_command()
        .args([
            "--html",
            "index.html",
            "--css",
            "css/present.css",
            "--css",
            "css/absent.css",
        ])
        .output()?;

    // The run completes but signals the skipped input.
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("css/absent.css"));

    // The files that do exist are still processed.
    assert_eq!(test.read_file("css/present.css")?, ".c1{}");
    assert_eq!(test.read_file("index.html")?, r#"<div class="c1">x</div>"#);

    Ok(())
}

#[test]
fn test_missing_html_does_not_abort_css_rewrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("css/site.css", ".only{}")?;

    let output = test
        .run_command()
        .args(["--html", "gone.html", "--css", "css/site.css"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(test.read_file("css/site.css")?, ".c1{}");

    Ok(())
}

#[test]
fn test_empty_css_is_a_no_op() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("css/site.css", "body{margin:0}")?;
    test.write_file("index.html", r#"<div class="anything">x</div>"#)?;

    let output = test
        .run_command()
        .args(["--html", "index.html", "--css", "css/site.css"])
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Found 0 unique defined classes."));
    assert_eq!(test.read_file("css/site.css")?, "body{margin:0}");
    assert_eq!(
        test.read_file("index.html")?,
        r#"<div class="anything">x</div>"#
    );

    Ok(())
}

#[test]
fn test_css_glob_pattern_covers_multiple_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("css/one.css", ".first{}")?;
    test.write_file("css/two.css", ".second{}")?;
    test.write_file(
        "index.html",
        r#"<div class="first second"><span class='second'></span></div>"#,
    )?;

    let output = test
        .run_command()
        .args(["--html", "index.html", "--css", "css/*.css"])
        .output()?;
    assert!(output.status.success());

    assert_eq!(test.read_file("css/one.css")?, ".c2{}");
    assert_eq!(test.read_file("css/two.css")?, ".c1{}");
    assert_eq!(
        test.read_file("index.html")?,
        r#"<div class="c2 c1"><span class='c1'></span></div>"#
    );

    Ok(())
}

#[test]
fn test_config_file_drives_run() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".classminrc.json",
        r#"{"html": "home.html", "css": ["styles/*.css"]}"#,
    )?;
    test.write_file("styles/main.css", ".hero{}")?;
    test.write_file("home.html", r#"<section class="hero"></section>"#)?;

    let output = test.run_command().output()?;
    assert!(output.status.success());

    assert_eq!(test.read_file("styles/main.css")?, ".c1{}");
    assert_eq!(
        test.read_file("home.html")?,
        r#"<section class="c1"></section>"#
    );

    Ok(())
}

#[test]
fn test_write_map_dumps_json() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("css/site.css", ".wide-banner{}.x{}")?;
    test.write_file("index.html", r#"<div class="wide-banner x"></div>"#)?;

    let output = test
        .run_command()
        .args([
            "--html",
            "index.html",
            "--css",
            "css/site.css",
            "--write-map",
            "map.json",
        ])
        .output()?;
    assert!(output.status.success());

    let map: serde_json::Value = serde_json::from_str(&test.read_file("map.json")?)?;
    assert_eq!(map["wide-banner"], "c1");
    assert_eq!(map["x"], "c2");

    Ok(())
}

#[test]
fn test_third_party_classes_survive() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("css/site.css", ".icon-wrap{}")?;
    test.write_file(
        "index.html",
        r#"<i class="icon-wrap fa-solid fa-star"></i>"#,
    )?;

    let output = test
        .run_command()
        .args(["--html", "index.html", "--css", "css/site.css"])
        .output()?;
    assert!(output.status.success());

    assert_eq!(
        test.read_file("index.html")?,
        r#"<i class="c1 fa-solid fa-star"></i>"#
    );

    Ok(())
}

#[test]
fn test_run_twice_is_stable_on_undefined_tokens() -> Result<()> {
    // After the first run the original identifiers are gone from the CSS,
    // so a second run renames the already-short tokens and nothing else.
    let test = CliTest::new()?;
    test.write_file("css/site.css", ".menu{}")?;
    test.write_file("index.html", r#"<ul class="menu external"></ul>"#)?;

    let args = ["--html", "index.html", "--css", "css/site.css"];
    assert!(test.run_command().args(args).output()?.status.success());
    assert!(test.run_command().args(args).output()?.status.success());

    assert_eq!(test.read_file("css/site.css")?, ".c1{}");
    assert_eq!(
        test.read_file("index.html")?,
        r#"<ul class="c1 external"></ul>"#
    );

    Ok(())
}

#[test]
fn test_help_without_command() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("run"));
    assert!(stdout.contains("plan"));
    assert!(stdout.contains("init"));

    Ok(())
}
