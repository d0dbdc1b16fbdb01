//! Execution backends for the array kernels.
//!
//! Every kernel in this crate is written once against `ndarray::Zip`.
//! The backend only decides how a zip is driven:
//!
//! - [`ExecutionBackend::Serial`]: `Zip::for_each` on the calling thread
//! - [`ExecutionBackend::Parallel`]: `Zip::par_for_each` on the rayon pool
//!   (requires the `parallel` feature)
//!
//! The backend is a plain value carried by [`KernelConfig`](crate::KernelConfig),
//! there is no process-wide selection.

use std::fmt;

/// How elementwise kernels are executed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExecutionBackend {
    /// Single-threaded execution.
    #[default]
    Serial,
    /// Data-parallel execution on the rayon thread pool.
    #[cfg(feature = "parallel")]
    Parallel,
}

impl ExecutionBackend {
    /// All backends compiled into this build.
    pub fn available() -> &'static [ExecutionBackend] {
        #[cfg(feature = "parallel")]
        {
            &[ExecutionBackend::Serial, ExecutionBackend::Parallel]
        }
        #[cfg(not(feature = "parallel"))]
        {
            &[ExecutionBackend::Serial]
        }
    }

    /// Number of worker threads this backend will use.
    pub fn num_threads(&self) -> usize {
        match self {
            ExecutionBackend::Serial => 1,
            #[cfg(feature = "parallel")]
            ExecutionBackend::Parallel => rayon::current_num_threads(),
        }
    }

    /// Human-readable name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            ExecutionBackend::Serial => "serial",
            #[cfg(feature = "parallel")]
            ExecutionBackend::Parallel => "parallel",
        }
    }
}

impl fmt::Display for ExecutionBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Drive an `ndarray::Zip` with the selected backend.
///
/// The closure must not mutate captured state, so that the same body is
/// valid for both `for_each` and `par_for_each`.
macro_rules! zip_for_each {
    ($backend:expr, $zip:expr, $body:expr) => {
        match $backend {
            $crate::backend::ExecutionBackend::Serial => $zip.for_each($body),
            #[cfg(feature = "parallel")]
            $crate::backend::ExecutionBackend::Parallel => $zip.par_for_each($body),
        }
    };
}

pub(crate) use zip_for_each;

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, Zip};

    #[test]
    fn test_default_is_serial() {
        assert_eq!(ExecutionBackend::default(), ExecutionBackend::Serial);
        assert_eq!(ExecutionBackend::Serial.num_threads(), 1);
    }

    #[test]
    fn test_available_contains_serial() {
        assert!(ExecutionBackend::available().contains(&ExecutionBackend::Serial));
    }

    #[test]
    fn test_zip_for_each_all_backends() {
        for &backend in ExecutionBackend::available() {
            let a = Array2::from_shape_fn((4, 5), |(j, i)| (j * 5 + i) as f64);
            let mut b = Array2::<f64>::zeros((4, 5));
            zip_for_each!(backend, Zip::from(&mut b).and(&a), |b, &a| {
                *b = 2.0 * a;
            });
            assert_eq!(b[[3, 4]], 38.0, "backend {}", backend);
        }
    }
}
