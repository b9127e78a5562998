//! Optional tracing integration.
//!
//! With the `tracing-integration` feature these are `tracing`'s own macros.
//! Without it they expand to nothing, so call sites cost nothing and the
//! crate builds without `tracing`.
//!
//! ```ignore
//! use crate::tracing_compat::debug;
//!
//! debug!(shape = %shape, elements = count, "joining container");
//! ```

#[cfg(feature = "tracing-integration")]
pub use tracing::{debug, error, info, trace, warn};

#[cfg(not(feature = "tracing-integration"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __shapejoin_tracing_noop {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing-integration"))]
pub use crate::__shapejoin_tracing_noop as debug;
#[cfg(not(feature = "tracing-integration"))]
pub use crate::__shapejoin_tracing_noop as error;
#[cfg(not(feature = "tracing-integration"))]
pub use crate::__shapejoin_tracing_noop as info;
#[cfg(not(feature = "tracing-integration"))]
pub use crate::__shapejoin_tracing_noop as trace;
#[cfg(not(feature = "tracing-integration"))]
pub use crate::__shapejoin_tracing_noop as warn;
