//! Fill a config struct from command-line flags, environment variables and
//! declared defaults.
//!
//! Declare the struct once with [`bindable!`], hand it to [`init`], and every
//! field ends up with a value from the first source that has one.
//!
//! ```ignore
//! clapbind::bindable! {
//!     #[derive(Debug, Default)]
//!     pub struct Server {
//!         pub host: String [default = "localhost"],
//!         pub port: u16 [default = "8080", help = "Port to listen on."],
//!         pub timeout: std::time::Duration [default = "30s"],
//!         pub database: Database,
//!     }
//! }
//!
//! let mut server = Server::default();
//! clapbind::init(&mut server, "")?;
//! ```
//!
//! # Precedence
//!
//! ```text
//! Declared default      [default = "..."]
//!        ↑ overridden by
//! Environment var       PREFIX_PATH_FIELD  or  [env = "..."]
//!        ↑ overridden by
//! Command-line flag     --path-field  or  [flag = "..."]
//! ```
//!
//! A field no source covers keeps the value it had before the bind. Fields
//! marked `required` fail the bind in that case, unless the kept value is
//! already non-zero.
//!
//! # Derived names
//!
//! Nested structs extend a prefix path. For a field `pool_size` inside a
//! `database` section the flag is `--database-pool_size` and the env var is
//! `DATABASE_POOL_SIZE`, or `MYAPP_DATABASE_POOL_SIZE` with
//! [`Binder::env_prefix`] set to `MYAPP`. Explicit `flag` and `env` options
//! are used verbatim and are never prefixed.
//!
//! # Supported field types
//!
//! | Type                         | Accepted text                         |
//! |------------------------------|---------------------------------------|
//! | `String`                     | anything                              |
//! | `bool`                       | `1 t T TRUE true True 0 f F FALSE false False` |
//! | `i8`..`i64`, `isize`         | decimal integers                      |
//! | `u8`..`u64`, `usize`         | decimal unsigned integers             |
//! | `f64`                        | decimal floats                        |
//! | `std::time::Duration`        | `30s`, `1m 30s`, `250ms`, ...         |
//! | `Option<T>` of a struct      | walked when `Some`, skipped when `None` |
//!
//! `f32` fields are rejected with [`BindError::UnsupportedType`].
//!
//! # Sources and testing
//!
//! [`init`] reads the process arguments and environment. [`Binder`] replaces
//! either with fixed values, sets an env prefix and reports where each value
//! came from:
//!
//! ```ignore
//! let report = Binder::new()
//!     .env_prefix("MYAPP")
//!     .args(["--port", "9000"])
//!     .vars([("MYAPP_HOST", "0.0.0.0")])
//!     .bind(&mut server, "")?;
//! println!("{report}");
//! ```

pub mod error;

mod builder;
mod flags;
mod macros;
mod naming;
mod report;
mod scalar;
mod schema;
mod setter;
mod walk;

#[cfg(test)]
mod fixtures;

pub use builder::Binder;
pub use error::BindError;
pub use flags::{Flag, FlagSet};
pub use naming::{env_name, flag_name, join_strings, nested_prefix};
pub use report::{Entry, Report, Source};
pub use scalar::{Kind, Scalar, parse_bool};
pub use schema::{Bind, Field, Meta, Shape, Tags};
pub use setter::{BoolPolicy, set_value};

/// Bind `config` from the process arguments and environment.
///
/// `prefix` is the initial prefix path for derived names; pass `""` for
/// none. Parse errors and `--help` come back as [`BindError::Flags`]; call
/// `exit()` on the inner clap error to print them the usual way.
pub fn init<T: Bind + ?Sized>(config: &mut T, prefix: &str) -> Result<(), BindError> {
    Binder::new().bind(config, prefix).map(|_| ())
}
