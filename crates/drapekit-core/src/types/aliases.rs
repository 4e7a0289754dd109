//! Type aliases for shared state.
//!
//! The gesture engine itself is single-threaded. Hosts that receive pointer
//! events from one UI thread share it through [`Shared`]; hosts that dispatch
//! from several input threads wrap it in [`ThreadSafe`] so every registry and
//! gesture mutation happens under one lock.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use drapekit_core::types::*;
//!
//! let canvas: ThreadSafe<Canvas> = thread_safe(Canvas::new());
//! canvas.lock().pointer_up(PointerId(1));
//! ```

use parking_lot::Mutex;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
pub type Shared<T> = Rc<RefCell<T>>;

/// A thread-safe, mutex-protected wrapper for cross-thread sharing.
///
/// Uses `parking_lot::Mutex` for better performance than `std::sync::Mutex`.
pub type ThreadSafe<T> = Arc<Mutex<T>>;

/// Wraps `value` for single-threaded sharing.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Wraps `value` for cross-thread sharing.
pub fn thread_safe<T>(value: T) -> ThreadSafe<T> {
    Arc::new(Mutex::new(value))
}
