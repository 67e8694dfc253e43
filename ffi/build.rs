use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=src");

    let (Ok(crate_dir), Ok(out_dir)) = (std::env::var("CARGO_MANIFEST_DIR"), std::env::var("OUT_DIR")) else {
        println!("cargo:warning=C header not generated: CARGO_MANIFEST_DIR or OUT_DIR unset");
        return;
    };
    let header = PathBuf::from(out_dir).join("countries_ffi.h");

    let bindings = cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("COUNTRIES_FFI_H")
        .generate();

    match bindings {
        Ok(bindings) => {
            if bindings.write_to_file(&header) {
                println!("cargo:warning=C header updated at {}", header.display());
            }
        }
        Err(err) => println!("cargo:warning=C header not generated: {err}"),
    }
}
