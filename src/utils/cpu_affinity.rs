//! Thread pinning for stable measurements.
//!
//! On Linux the calling thread is pinned with `sched_setaffinity` and the
//! previous mask is restored when the guard drops. Other platforms get a
//! guard that does nothing.

#[cfg(target_os = "linux")]
mod platform {
    /// Affinity mask saved before pinning
    pub struct SavedMask(libc::cpu_set_t);

    pub fn current_cpu() -> Option<usize> {
        let cpu = unsafe { libc::sched_getcpu() };
        (cpu >= 0).then_some(cpu as usize)
    }

    pub fn online_cpus() -> usize {
        let n = unsafe { libc::sysconf(libc::_SC_NPROCESSORS_ONLN) };
        if n > 0 {
            n as usize
        } else {
            1
        }
    }

    pub fn save() -> Option<SavedMask> {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            let rc = libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut set);
            (rc == 0).then_some(SavedMask(set))
        }
    }

    pub fn pin(core: usize) -> bool {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core, &mut set);
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }

    pub fn restore(saved: &SavedMask) {
        unsafe {
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &saved.0);
        }
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub struct SavedMask;

    pub fn current_cpu() -> Option<usize> {
        None
    }

    pub fn online_cpus() -> usize {
        1
    }

    pub fn save() -> Option<SavedMask> {
        None
    }

    pub fn pin(_core: usize) -> bool {
        false
    }

    pub fn restore(_saved: &SavedMask) {}
}

/// Number of online CPUs (1 when unknown)
pub fn online_cpus() -> usize {
    platform::online_cpus()
}

/// Pins the current thread to the core it is running on until dropped.
pub struct CpuPinGuard {
    saved: Option<platform::SavedMask>,
    core: Option<usize>,
}

impl CpuPinGuard {
    pub fn new() -> Self {
        let saved = platform::save();
        let core = match (&saved, platform::current_cpu()) {
            (Some(_), Some(cpu)) if platform::pin(cpu) => Some(cpu),
            _ => None,
        };
        Self { saved, core }
    }

    /// Core the thread is pinned to, if pinning succeeded
    pub fn core(&self) -> Option<usize> {
        self.core
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if let (Some(saved), Some(_)) = (&self.saved, self.core) {
            platform::restore(saved);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_keeps_thread_on_pinned_core() {
        let guard = CpuPinGuard::new();
        if let Some(core) = guard.core() {
            assert_eq!(platform::current_cpu(), Some(core));
        }
    }

    #[test]
    fn test_nested_guards_restore() {
        let outer = CpuPinGuard::new();
        {
            let _inner = CpuPinGuard::new();
        }
        drop(outer);
        assert!(online_cpus() >= 1);
    }
}
