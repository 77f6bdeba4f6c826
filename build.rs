//! Build script for simdarg
//!
//! Generates the SIMD value types and the encoder's dispatch table from the
//! type catalog.
//!
//! # Outputs
//!
//! Written to `OUT_DIR` and pulled in with `include!`:
//!
//! - `simd_types.rs`: one `simd_vector!`/`simd_matrix!` invocation per catalog entry
//! - `simd_encoder.rs`: `SimdValue`, its conversions and the `dispatch` function
//!
//! The generator modules are compiled here straight from `src/`, so the
//! library and the build script always agree on the catalog.

#[allow(dead_code)]
#[path = "src/dtype/mod.rs"]
mod dtype;

#[allow(dead_code)]
#[path = "src/catalog.rs"]
mod catalog;

#[allow(dead_code)]
#[path = "src/codegen.rs"]
mod codegen;

use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/dtype/mod.rs");
    println!("cargo:rerun-if-changed=src/catalog.rs");
    println!("cargo:rerun-if-changed=src/codegen.rs");

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));

    for (name, source) in codegen::generate() {
        let path = out_dir.join(name);
        fs::write(&path, source)
            .unwrap_or_else(|e| panic!("failed to write {}: {}", path.display(), e));
    }
}
