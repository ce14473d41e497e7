use std::process::Command;

fn main() {
    // Prefer the git tag for --version output; fall back to the crate version.
    let described = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .map(|out| String::from_utf8_lossy(&out.stdout).trim().to_string());

    let version = match described {
        Some(tag) => tag.trim_start_matches('v').to_string(),
        None => env!("CARGO_PKG_VERSION").to_string(),
    };

    println!("cargo:rustc-env=GIT_VERSION={version}");
}
