//! End-to-end tests for the `folio-page` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/content")
}

fn run(source: &Path, output: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_folio-page"))
        .arg("--source")
        .arg(source)
        .arg("--output")
        .arg(output)
        .args(args)
        .output()
        .expect("failed to run folio-page")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

#[test]
fn build_writes_index() {
    let tmp = TempDir::new().unwrap();
    let dist = tmp.path().join("dist");
    let out = run(&fixtures(), &dist, &["build"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let html = fs::read_to_string(dist.join("index.html")).unwrap();
    assert!(html.contains("jdoe.dev"));
    assert!(html.contains("Hi, I&#39;m Jane") || html.contains("Hi, I'm Jane"));
    assert!(html.contains("id=\"about-me\""));
    assert!(html.contains("© 2024 jdoe.dev. All rights reserved."));
    assert!(!html.contains("Not Ready"));

    let text = stdout(&out);
    assert!(text.contains("001 About Me → #about-me"));
    assert!(text.contains("==> Build complete"));
}

#[test]
fn build_without_content_dir_uses_sample() {
    let tmp = TempDir::new().unwrap();
    let dist = tmp.path().join("dist");
    let out = run(&tmp.path().join("content"), &dist, &["build"]);
    assert!(out.status.success());

    let html = fs::read_to_string(dist.join("index.html")).unwrap();
    for title in ["About", "Projects", "Contact"] {
        assert!(html.contains(&format!(">{title}</a>")), "missing nav entry {title}");
    }
}

#[test]
fn check_reports_sections() {
    let tmp = TempDir::new().unwrap();
    let out = run(&fixtures(), tmp.path(), &["check"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("Source: 020-Open-Source.md"));
    assert!(text.contains("==> Content is valid"));
    assert!(!tmp.path().join("index.html").exists());
}

#[test]
fn check_fails_on_invalid_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), "brnad = \"typo\"\n").unwrap();
    let out = run(tmp.path(), &tmp.path().join("dist"), &["check"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("unknown field"));
}

#[test]
fn render_replays_actions_to_json() {
    let tmp = TempDir::new().unwrap();
    let out = run(
        tmp.path(),
        tmp.path(),
        &["render", "--action", "toggle", "--action", "select:2", "--json"],
    );
    assert!(out.status.success());
    let state: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(state["active_index"], 2);
    assert_eq!(state["menu_open"], false);
}

#[test]
fn render_open_menu_mounts_overlay() {
    let tmp = TempDir::new().unwrap();
    let out = run(
        tmp.path(),
        tmp.path(),
        &["render", "-a", "select:projects", "-a", "toggle"],
    );
    assert!(out.status.success());
    let html = stdout(&out);
    assert!(html.contains("data-active=\"1\""));
    assert!(html.contains("data-menu-open=\"true\""));
    assert!(html.contains("<div class=\"mobile-menu anim-menu\" id=\"mobile-menu\">"));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Active: 002 Projects"));
}

#[test]
fn render_rejects_out_of_range_selection() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), tmp.path(), &["render", "-a", "select:7"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("out of range"));
}

#[test]
fn gen_config_prints_stock_file() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), tmp.path(), &["gen-config"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("[hero]"));
    assert!(text.contains("[[sections]]"));
    let _: toml::Value = toml::from_str(&text).expect("stock config must be valid TOML");
}
