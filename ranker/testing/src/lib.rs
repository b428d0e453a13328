mod mock;
mod tracing;

pub use {mock::*, tracing::*};
