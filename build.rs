use cbindgen::Config;
use std::env;
fn main() {
  let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap();

  cbindgen::Builder::new()
    .with_crate(crate_dir)
    .with_language(cbindgen::Language::C)
    .with_cpp_compat(true)
    .with_include_guard("SOFTU128_H")
    .with_config(Config::from_file("cbindgen.toml").unwrap())
    .generate()
    .expect("Unable to generate bindings")
    .write_to_file("include/softu128.h");
}
