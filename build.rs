use std::env;

fn main() {
    // The linker script is only meaningful for the bare-metal targets. Host
    // builds (unit tests) link normally.
    if env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("none") {
        let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();

        println!("cargo:rustc-link-arg=-T{manifest_dir}/src/bsp/fvp/link.ld");
        println!("cargo:rerun-if-changed=src/bsp/fvp/link.ld");
    }
}
