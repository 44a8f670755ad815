//! FFI bindings for the C implementation.

#[cfg(c_implementation_active)]
mod ffi {
    use libc::size_t;

    extern "C" {
        pub fn binary_search_c_original(data: *const i64, len: size_t, target: i64) -> i64;
    }
}

/// C implementation wrapper; the C side reports absence as `-1`
#[cfg(c_implementation_active)]
pub fn binary_search_c_original(data: &[i64], target: i64) -> Option<usize> {
    let idx = unsafe { ffi::binary_search_c_original(data.as_ptr(), data.len(), target) };
    usize::try_from(idx).ok()
}

#[cfg(c_implementation_active)]
pub const C_IMPL_AVAILABLE: bool = true;

#[cfg(not(c_implementation_active))]
pub const C_IMPL_AVAILABLE: bool = false;

#[cfg(not(c_implementation_active))]
pub fn binary_search_c_original(_data: &[i64], _target: i64) -> Option<usize> {
    panic!("C implementation not compiled (requires GCC, MSVC or Apple Clang)")
}
