use chrono::Datelike;

fn main() {
    let now = chrono::Utc::now();

    // Copyright year shown in the page footer
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    println!("cargo:rerun-if-changed=build.rs");
}
