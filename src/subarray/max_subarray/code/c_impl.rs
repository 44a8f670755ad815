//! FFI bindings for the C implementation.

use crate::error::Result;

#[cfg(c_implementation_active)]
mod ffi {
    use libc::size_t;

    extern "C" {
        pub fn max_subarray_sum_c_original(data: *const i64, len: size_t) -> i64;
    }
}

/// C implementation wrapper; empty input is rejected before crossing FFI
#[cfg(c_implementation_active)]
pub fn max_subarray_sum_c_original(data: &[i64]) -> Result<i64> {
    if data.is_empty() {
        return Err(crate::error::AlgoError::EmptyInput);
    }
    Ok(unsafe { ffi::max_subarray_sum_c_original(data.as_ptr(), data.len()) })
}

#[cfg(c_implementation_active)]
pub const C_IMPL_AVAILABLE: bool = true;

#[cfg(not(c_implementation_active))]
pub const C_IMPL_AVAILABLE: bool = false;

#[cfg(not(c_implementation_active))]
pub fn max_subarray_sum_c_original(_data: &[i64]) -> Result<i64> {
    panic!("C implementation not compiled (requires GCC, MSVC or Apple Clang)")
}
