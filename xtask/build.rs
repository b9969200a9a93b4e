fn main() {
    // Cargo only exposes TARGET to build scripts; forward it so the binary
    // can default --target to the triple it was built for.
    let target = std::env::var("TARGET").unwrap_or_default();
    println!("cargo:rustc-env=XTASK_TARGET={target}");
}
