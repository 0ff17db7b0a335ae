//! Button input conditioning
//!
//! Raw samples arrive once per tick with polarity already applied
//! (`true` = pressed). The debouncer turns them into stable edges and the
//! double-tap detector watches the boot key's press edges.

pub mod debounce;
pub mod double_tap;

pub use debounce::{Debouncer, Edge, DEBOUNCE_MS};
pub use double_tap::{DoubleTap, DOUBLE_TAP_MS};
