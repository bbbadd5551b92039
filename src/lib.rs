pub use turret_core::*;
