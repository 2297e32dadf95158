use std::env;
use std::path::PathBuf;

/// Directory to copy the generated header into, e.g. `include` for packaging.
const HEADER_DIR_ENV: &str = "TODO_FFI_HEADER_DIR";

fn main() {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-env-changed={HEADER_DIR_ENV}");

    let (Ok(crate_dir), Ok(out_dir)) = (env::var("CARGO_MANIFEST_DIR"), env::var("OUT_DIR")) else {
        println!("cargo:warning=cbindgen skipped: cargo build environment not set");
        return;
    };

    let bindings = match cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("TODO_FFI_H")
        .with_cpp_compat(true)
        .generate()
    {
        Ok(bindings) => bindings,
        Err(e) => {
            println!("cargo:warning=cbindgen failed: {e}");
            return;
        }
    };

    bindings.write_to_file(PathBuf::from(out_dir).join("todo_ffi.h"));

    if let Ok(dir) = env::var(HEADER_DIR_ENV) {
        let dir = PathBuf::from(crate_dir).join(dir);
        if let Err(e) = std::fs::create_dir_all(&dir) {
            println!("cargo:warning=cannot create {}: {e}", dir.display());
            return;
        }
        bindings.write_to_file(dir.join("todo_ffi.h"));
    }
}
