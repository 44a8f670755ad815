//! Architecture cycle counters backing the `cpu_cycles` measurement mode.

/// Read the current cycle counter.
///
/// x86/x86_64 use RDTSC fenced by LFENCE on both sides. aarch64 reads
/// CNTVCT_EL0, a fixed-frequency virtual timer that is readable from
/// userspace, so values there are ticks rather than core cycles.
#[inline(always)]
pub fn read_cycles() -> u64 {
    #[cfg(target_arch = "x86_64")]
    {
        use core::arch::x86_64::{_mm_lfence, _rdtsc};
        unsafe {
            _mm_lfence();
            let cycles = _rdtsc();
            _mm_lfence();
            cycles
        }
    }

    #[cfg(target_arch = "x86")]
    {
        use core::arch::x86::{_mm_lfence, _rdtsc};
        unsafe {
            _mm_lfence();
            let cycles = _rdtsc();
            _mm_lfence();
            cycles
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        let ticks: u64;
        unsafe {
            core::arch::asm!("mrs {}, cntvct_el0", out(reg) ticks);
        }
        ticks
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64")))]
    {
        compile_error!("cpu_cycles feature requires x86, x86_64, or aarch64 architecture; build with --features use_time");
    }
}
