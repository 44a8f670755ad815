//! FFI bindings for the C implementation.

#[cfg(c_implementation_active)]
mod ffi {
    use libc::size_t;

    extern "C" {
        pub fn build_prefix_sum_c_original(data: *const i64, len: size_t, out: *mut i64);
    }
}

/// C implementation wrapper
#[cfg(c_implementation_active)]
pub fn build_prefix_sum_c_original(data: &[i64]) -> Vec<i64> {
    let mut prefix = vec![0i64; data.len() + 1];
    unsafe {
        ffi::build_prefix_sum_c_original(data.as_ptr(), data.len(), prefix.as_mut_ptr());
    }
    prefix
}

#[cfg(c_implementation_active)]
pub const C_IMPL_AVAILABLE: bool = true;

#[cfg(not(c_implementation_active))]
pub const C_IMPL_AVAILABLE: bool = false;

#[cfg(not(c_implementation_active))]
pub fn build_prefix_sum_c_original(_data: &[i64]) -> Vec<i64> {
    panic!("C implementation not compiled (requires GCC, MSVC or Apple Clang)")
}
