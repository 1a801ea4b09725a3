//! Runtime values for the Vela evaluator.
//!
//! This crate is the single representation of every value the evaluator
//! produces, and the operations the evaluator and host boundary build on:
//!
//! - [`Value`] and its constructors, probes and narrowing accessors
//! - [`Kind`]: the runtime tag derived from a value's `Type`
//! - [`Value::refine`]: resolving still-generic value types in place
//! - [`Value::copy`]: duplication for a second owner
//! - [`Value::project`] / [`Value::decode`]: conversion to and from
//!   [`PlainData`] at the host boundary
//! - [`Value::equals`] and canonical map-key encoding
//! - [`Closure`]: the capability behind function values
//!
//! Type descriptors come from `vela_types`.

mod closure;
mod copy;
mod decode;
mod equality;
mod errors;
mod kind;
mod map_key;
mod plain;
mod project;
mod refine;
mod value;

use std::sync::Once;

pub use closure::{BoundMethod, Closure, NativeFn, NativeFunction};
pub use errors::{DecodeError, MapKeyError};
pub use kind::Kind;
pub use map_key::{decode_key, encode_key, try_decode_key};
pub use plain::PlainData;
pub use value::{Payload, Value, VariantFlags};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber for the runtime.
///
/// Does nothing unless `RUST_LOG` is set (e.g. `RUST_LOG=vela_value=debug`
/// to see type refinements). Safe to call more than once; a subscriber the
/// host already installed is left in place.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
