//! Build script for spioled-firmware
//!
//! embassy-stm32 generates memory.x for the selected chip; this only adds
//! the cortex-m-rt and defmt linker scripts.

fn main() {
    setup_linker();
}

/// Linker arguments for the firmware binary
fn setup_linker() {
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=build.rs");
}
