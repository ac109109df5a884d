use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=src");

    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let out = PathBuf::from(env::var("OUT_DIR").unwrap()).join("zoo.h");

    match cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("ZOO_FFI_H")
        .generate()
    {
        Ok(bindings) => {
            bindings.write_to_file(&out);
        }
        Err(err) => println!("cargo:warning=skipping zoo.h generation: {err}"),
    }
}
