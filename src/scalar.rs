//! Scalar kinds and the per-kind parse and flag rules.
//!
//! Every leaf type a config struct may hold implements [`Scalar`]. The
//! [`Kind`] it reports selects how the value is parsed from a string and how
//! its command-line flag is shaped.

use std::fmt;
use std::time::Duration;

use clap::{Arg, ArgAction};
use serde::Serialize;

use crate::error::BindError;
use crate::schema::{Bind, Shape};

/// The category of a scalar field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Duration,
    Int,
    Uint,
    Float,
    String,
    Bool,
    /// Recognized but not bindable.
    Float32,
}

impl Kind {
    /// Whether values of this kind can be bound at all.
    pub fn is_supported(self) -> bool {
        !matches!(self, Kind::Float32)
    }

    /// Placeholder shown in `--help` for the flag's value.
    fn value_name(self) -> &'static str {
        match self {
            Kind::Duration => "DURATION",
            Kind::Int => "INT",
            Kind::Uint => "UINT",
            Kind::Float | Kind::Float32 => "FLOAT",
            Kind::String => "STRING",
            Kind::Bool => "BOOL",
        }
    }

    /// Shape a clap argument for this kind.
    ///
    /// Values are kept as raw strings so parsing goes through
    /// [`Scalar::assign`] for every source alike.
    pub(crate) fn configure(self, arg: Arg) -> Arg {
        let arg = arg.action(ArgAction::Set).value_name(self.value_name());
        match self {
            Kind::Bool => arg
                .num_args(0..=1)
                .require_equals(true)
                .default_missing_value("true"),
            _ => arg.num_args(1).allow_hyphen_values(true),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Duration => "duration",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Bool => "bool",
            Kind::Float32 => "float32",
        };
        f.write_str(name)
    }
}

/// A leaf value that can be parsed from a string and stored in place.
pub trait Scalar {
    fn kind(&self) -> Kind;

    /// Rust name of the stored type, used in error messages.
    fn type_name(&self) -> &'static str;

    /// Parse `raw` and store it. On error the stored value is untouched.
    fn assign(&mut self, raw: &str) -> Result<(), BindError>;

    /// Reset to the type's zero value.
    fn reset(&mut self);

    fn is_zero(&self) -> bool;

    /// String form of the current value, as a flag default or in reports.
    fn render(&self) -> String;
}

macro_rules! from_str_scalar {
    ($($ty:ty => $kind:expr),* $(,)?) => {
        $(
            impl Scalar for $ty {
                fn kind(&self) -> Kind {
                    $kind
                }

                fn type_name(&self) -> &'static str {
                    stringify!($ty)
                }

                fn assign(&mut self, raw: &str) -> Result<(), BindError> {
                    *self = raw
                        .parse::<$ty>()
                        .map_err(|_| BindError::cannot_use(raw, stringify!($ty)))?;
                    Ok(())
                }

                fn reset(&mut self) {
                    *self = <$ty>::default();
                }

                fn is_zero(&self) -> bool {
                    *self == <$ty>::default()
                }

                fn render(&self) -> String {
                    self.to_string()
                }
            }

            impl Bind for $ty {
                fn shape(&mut self) -> Shape<'_> {
                    Shape::Scalar(self)
                }
            }
        )*
    };
}

from_str_scalar! {
    i8 => Kind::Int,
    i16 => Kind::Int,
    i32 => Kind::Int,
    i64 => Kind::Int,
    isize => Kind::Int,
    u8 => Kind::Uint,
    u16 => Kind::Uint,
    u32 => Kind::Uint,
    u64 => Kind::Uint,
    usize => Kind::Uint,
    f64 => Kind::Float,
    String => Kind::String,
}

impl Scalar for Duration {
    fn kind(&self) -> Kind {
        Kind::Duration
    }

    fn type_name(&self) -> &'static str {
        "Duration"
    }

    fn assign(&mut self, raw: &str) -> Result<(), BindError> {
        *self = humantime::parse_duration(raw)
            .map_err(|_| BindError::cannot_use(raw, "Duration"))?;
        Ok(())
    }

    fn reset(&mut self) {
        *self = Duration::ZERO;
    }

    fn is_zero(&self) -> bool {
        *self == Duration::ZERO
    }

    fn render(&self) -> String {
        humantime::format_duration(*self).to_string()
    }
}

impl Bind for Duration {
    fn shape(&mut self) -> Shape<'_> {
        Shape::Scalar(self)
    }
}

/// Parse the boolean spellings accepted on the command line and in env vars.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

impl Scalar for bool {
    fn kind(&self) -> Kind {
        Kind::Bool
    }

    fn type_name(&self) -> &'static str {
        "bool"
    }

    fn assign(&mut self, raw: &str) -> Result<(), BindError> {
        *self = parse_bool(raw).ok_or_else(|| BindError::cannot_use(raw, "bool"))?;
        Ok(())
    }

    fn reset(&mut self) {
        *self = false;
    }

    fn is_zero(&self) -> bool {
        !*self
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl Bind for bool {
    fn shape(&mut self) -> Shape<'_> {
        Shape::Scalar(self)
    }
}

impl Scalar for f32 {
    fn kind(&self) -> Kind {
        Kind::Float32
    }

    fn type_name(&self) -> &'static str {
        "f32"
    }

    fn assign(&mut self, _raw: &str) -> Result<(), BindError> {
        Err(BindError::UnsupportedType("f32"))
    }

    fn reset(&mut self) {
        *self = 0.0;
    }

    fn is_zero(&self) -> bool {
        *self == 0.0
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl Bind for f32 {
    fn shape(&mut self) -> Shape<'_> {
        Shape::Scalar(self)
    }
}
