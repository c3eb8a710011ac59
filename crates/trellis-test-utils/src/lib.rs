//! Test utilities for the Trellis layout engine.
//!
//! The main component is `RecordingHost` (requires the `mock` feature): a
//! [`SurfaceHost`](trellis_ui::surface::SurfaceHost) that behaves exactly like
//! the headless host while recording every call, so tests can assert on how
//! much work a layout operation caused.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use trellis_core::geometry::Size;
//! use trellis_test_utils::RecordingHost;
//! use trellis_ui::area::AreaTree;
//!
//! let mut tree = AreaTree::new(RecordingHost::new(Size::new(400.0, 300.0)));
//! let root = tree.create_area(None, None);
//! tree.on_resize(root, None).unwrap();
//!
//! assert_eq!(tree.host().count_creates(), 2);
//! # }
//! ```
//!
//! Mock hosts use `Mutex` for interior mutability so that `&self` measurement
//! calls can be recorded too.

#[cfg(feature = "mock")]
pub mod recording_host;

#[cfg(feature = "mock")]
pub use recording_host::*;

/// Shared counter for listeners and observers registered in tests.
pub mod call_log {
    use std::sync::Arc;

    use parking_lot::Mutex;

    /// Cloneable log of values pushed from callbacks.
    #[derive(Debug)]
    pub struct CallLog<T> {
        entries: Arc<Mutex<Vec<T>>>,
    }

    impl<T> Clone for CallLog<T> {
        fn clone(&self) -> Self {
            Self {
                entries: Arc::clone(&self.entries),
            }
        }
    }

    impl<T> Default for CallLog<T> {
        fn default() -> Self {
            Self {
                entries: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    impl<T: Clone> CallLog<T> {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn push(&self, value: T) {
            self.entries.lock().push(value);
        }

        pub fn len(&self) -> usize {
            self.entries.lock().len()
        }

        pub fn is_empty(&self) -> bool {
            self.entries.lock().is_empty()
        }

        pub fn entries(&self) -> Vec<T> {
            self.entries.lock().clone()
        }

        pub fn clear(&self) {
            self.entries.lock().clear();
        }
    }
}

pub use call_log::CallLog;
