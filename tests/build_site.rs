//! End-to-end tests that drive the compiled binary.
//!
//! Each test runs in its own temp directory with its own `site.toml`, so
//! nothing here depends on the working directory of the test runner.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

// ===========================================================================
// Setup helpers
// ===========================================================================

fn run(root: &Path, args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_structura-site");
    let config = root.join("site.toml");
    let output = root.join("dist");
    let out = Command::new(bin)
        .args([
            "--config",
            config.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .args(args)
        .env_remove("STRUCTURA_VIDEO_URL")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run structura-site");
    assert!(
        out.status.success(),
        "structura-site {args:?} failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    out
}

fn read(root: &Path, path: &str) -> String {
    fs::read_to_string(root.join("dist").join(path))
        .unwrap_or_else(|e| panic!("cannot read dist/{path}: {e}"))
}

// ===========================================================================
// build
// ===========================================================================

#[test]
fn build_writes_every_route() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["build"]);

    for path in [
        "index.html",
        "demo/index.html",
        "about/index.html",
        "architecture/index.html",
        "style.css",
    ] {
        assert!(tmp.path().join("dist").join(path).exists(), "{path} missing");
    }

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("/demo → demo/index.html"));
    assert!(stdout.contains("Generated 4 pages"));
}

#[test]
fn build_without_video_url_shows_placeholder() {
    let tmp = TempDir::new().unwrap();
    run(tmp.path(), &["build"]);

    let demo = read(tmp.path(), "demo/index.html");
    assert!(demo.contains("Demo Video Coming Soon"));
    assert!(!demo.contains("<iframe"));
}

#[test]
fn build_with_video_url_flag_embeds_player() {
    let tmp = TempDir::new().unwrap();
    run(
        tmp.path(),
        &["build", "--video-url", "https://example.com/embed/abc"],
    );

    let demo = read(tmp.path(), "demo/index.html");
    assert!(demo.contains("<iframe"));
    assert!(demo.contains(r#"src="https://example.com/embed/abc""#));
    assert!(!demo.contains("Coming Soon"));
}

#[test]
fn video_url_from_config_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("site.toml"),
        "[media]\nvideo_url = \"https://example.com/embed/xyz\"\n",
    )
    .unwrap();
    run(tmp.path(), &["build"]);

    let demo = read(tmp.path(), "demo/index.html");
    assert!(demo.contains("https://example.com/embed/xyz"));
}

#[test]
fn blank_flag_overrides_configured_url() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("site.toml"),
        "[media]\nvideo_url = \"https://example.com/embed/xyz\"\n",
    )
    .unwrap();
    run(tmp.path(), &["build", "--video-url", "   "]);

    let demo = read(tmp.path(), "demo/index.html");
    assert!(demo.contains("Demo Video Coming Soon"));
}

#[test]
fn theme_override_reaches_stylesheet() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("site.toml"), "[theme]\nprimary = \"#22C55E\"\n").unwrap();
    run(tmp.path(), &["build"]);

    let css = read(tmp.path(), "style.css");
    assert!(css.contains("--color-primary: #22C55E;"));
    assert!(css.contains("--color-background: #07090C;"));
}

#[test]
fn unknown_config_key_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("site.toml"), "[media]\nvideo = \"x\"\n").unwrap();
    let status = Command::new(env!("CARGO_BIN_EXE_structura-site"))
        .args([
            "--config",
            tmp.path().join("site.toml").to_str().unwrap(),
            "check",
        ])
        .output()
        .unwrap();
    assert!(!status.status.success());
}

// ===========================================================================
// check / compose / gen-config
// ===========================================================================

#[test]
fn check_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["check"]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("005 pipeline (9 step units)"));
    assert!(stdout.contains("Site is valid"));
    assert!(!tmp.path().join("dist").exists());
}

#[test]
fn compose_prints_route_as_json() {
    let tmp = TempDir::new().unwrap();
    let out = run(
        tmp.path(),
        &["compose", "--route", "/demo", "--video-url", "https://example.com/v"],
    );
    let page: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(page["route"], "/demo");
    assert_eq!(page["sections"][1]["content"]["mode"], "embedded");
    assert_eq!(page["sections"][1]["content"]["locator"], "https://example.com/v");
}

#[test]
fn compose_prints_all_pages_in_order() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["compose"]);
    let pages: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let routes: Vec<&str> = pages
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["route"].as_str().unwrap())
        .collect();
    assert_eq!(routes, vec!["/", "/demo", "/about", "/architecture"]);
}

#[test]
fn gen_config_output_is_loadable() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["gen-config"]);
    let text = String::from_utf8(out.stdout).unwrap();
    let value: toml::Value = toml::from_str(&text).unwrap();
    assert!(value.get("theme").is_some());

    // Feeding the stock file back in must build.
    fs::write(tmp.path().join("site.toml"), text).unwrap();
    run(tmp.path(), &["check"]);
}
