//! Type system utilities and aliases.
//!
//! - [`aliases`]: `Rc<RefCell<T>>` and `Arc<Mutex<T>>` wrappers.

pub mod aliases;

pub use aliases::*;
