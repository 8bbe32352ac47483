use std::process::{Command, Output};

/// Run git in the package root; `None` when git is missing or fails.
fn git(args: &[&str]) -> Option<Output> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
}

fn main() {
    // HEAD moves on commit and checkout; refs/ on tagging
    for path in [".git/HEAD", ".git/refs/"] {
        println!("cargo:rerun-if-changed={path}");
    }

    let hash = git(&["rev-parse", "--short", "HEAD"])
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_owned())
        .unwrap_or_default();
    let on_release_tag = git(&["describe", "--exact-match", "--tags", "HEAD"]).is_some();

    // Read by `version_string` in main.rs
    println!("cargo:rustc-env=GIT_HASH={hash}");
    println!("cargo:rustc-env=ON_RELEASE_TAG={on_release_tag}");
}
