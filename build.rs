//! Build script compiling the C reference variants.
//!
//! Every `src/**/*.c` file goes into one static library. When no usable
//! compiler is found the crate still builds and the `c-*` variants are
//! simply not registered.

use std::env;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(c_implementation_active)");
    println!("cargo:rerun-if-changed=build.rs");

    let compiler = cc::Build::new().get_compiler();
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    let compiler_name = if compiler.is_like_clang() {
        // Vanilla Clang shares Rust's LLVM backend, which makes the
        // comparison uninteresting; only Apple's toolchain is accepted.
        if target_os == "macos" {
            Some("Apple Clang")
        } else {
            println!("cargo:warning=Vanilla Clang detected. C variants disabled (requires GCC, MSVC, or Apple Clang).");
            None
        }
    } else if compiler.is_like_gnu() {
        Some("GCC")
    } else if compiler.is_like_msvc() {
        Some("MSVC")
    } else {
        println!("cargo:warning=No compatible C compiler found. C variants disabled.");
        None
    };

    let Some(compiler_name) = compiler_name else {
        return;
    };

    let c_files: Vec<_> = match glob::glob("src/**/*.c") {
        Ok(paths) => paths.filter_map(|entry| entry.ok()).collect(),
        Err(e) => {
            println!("cargo:warning=Invalid glob pattern ({}). C variants disabled.", e);
            return;
        }
    };
    if c_files.is_empty() {
        return;
    }

    let mut build = cc::Build::new();
    for file in &c_files {
        println!("cargo:rerun-if-changed={}", file.display());
        build.file(file);
    }

    let rustflags = env::var("RUSTFLAGS").unwrap_or_default();
    let encoded_rustflags = env::var("CARGO_ENCODED_RUSTFLAGS").unwrap_or_default();
    let is_rust_native =
        rustflags.contains("target-cpu=native") || encoded_rustflags.contains("target-cpu=native");

    build.opt_level(3);
    if is_rust_native {
        // Match the Rust baseline so the comparison stays fair
        build.flag_if_supported("-march=native");
    }
    if compiler_name == "MSVC" {
        build.flag_if_supported("/std:c11");
    } else {
        build.flag_if_supported("-std=c99");
    }

    build.compile("sequence_algo_c");

    println!("cargo:rustc-cfg=c_implementation_active");
    println!("cargo:rustc-env=C_COMPILER_NAME={}", compiler_name);
}
