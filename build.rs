// pyo3 extension modules resolve libpython symbols at import time on macOS.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let python = std::env::var_os("CARGO_FEATURE_PYTHON").is_some();
    let macos = std::env::var("CARGO_CFG_TARGET_OS").is_ok_and(|os| os == "macos");
    if python && macos {
        for arg in ["-undefined", "dynamic_lookup"] {
            println!("cargo:rustc-cdylib-link-arg={}", arg);
        }
    }
}
