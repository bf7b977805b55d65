use std::path::Path;
use std::process::Command;

const WEB_CRATE: &str = "../gallery_web";
const BUNDLE_DIR: &str = "cdn";

// Bundles gallery_web into cdn/ with trunk. Opt in with
// GALLERY_BUILD_FRONTEND=1; otherwise cdn/ is served as it is.
fn main() {
    println!("cargo:rerun-if-env-changed=GALLERY_BUILD_FRONTEND");

    if std::env::var_os("GALLERY_BUILD_FRONTEND").is_none() {
        return;
    }

    println!("cargo:rerun-if-changed={}/src", WEB_CRATE);
    println!("cargo:rerun-if-changed={}/styles", WEB_CRATE);
    println!("cargo:rerun-if-changed={}/index.html", WEB_CRATE);

    let dist = Path::new(env!("CARGO_MANIFEST_DIR")).join(BUNDLE_DIR);

    // trunk writes straight into cdn/, nothing to copy afterwards
    let status = Command::new("trunk")
        .args(["build", "--release", "--dist"])
        .arg(&dist)
        .current_dir(WEB_CRATE)
        .status()
        .unwrap_or_else(|err| panic!("could not start trunk: {}", err));

    assert!(status.success(), "trunk exited with {}", status);
}
