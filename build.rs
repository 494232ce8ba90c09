//! Build script that embeds the plugin version at compile time.
use std::process::Command;

fn main() {
    // Prefer DRONE_PYPI_VERSION if set (e.g. by the release pipeline),
    // otherwise fall back to git describe for local builds.
    if let Ok(version) = std::env::var("DRONE_PYPI_VERSION") {
        println!("cargo:rustc-env=DRONE_PYPI_VERSION={version}");
    } else if let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        && output.status.success()
    {
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        println!("cargo:rustc-env=DRONE_PYPI_VERSION={version}");
    }

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
    println!("cargo:rerun-if-env-changed=DRONE_PYPI_VERSION");
}
