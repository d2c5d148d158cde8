//! Runtime description of a bindable struct.
//!
//! A config struct exposes its fields through [`Bind::shape`]: a list of
//! [`Field`]s, each carrying the declared name, the per-field options and a
//! mutable view of the storage. Nested structs show up as fields whose target
//! is itself a [`Shape::Struct`], so the walker never needs to know concrete
//! types.
//!
//! Most structs get their impl from [`bindable!`](crate::bindable). Writing one
//! by hand looks like this:
//!
//! ```ignore
//! impl Bind for Server {
//!     fn shape(&mut self) -> Shape<'_> {
//!         Shape::Struct(vec![
//!             Field::new("port", &mut self.port).default_value("8080"),
//!             Field::new("token", &mut self.token).required(),
//!             Field::new("database", &mut self.database),
//!         ])
//!     }
//! }
//! ```

use crate::scalar::Scalar;

/// A value the walker can bind.
///
/// Implemented by every supported scalar type and by config structs.
pub trait Bind {
    fn shape(&mut self) -> Shape<'_>;
}

impl<T: Bind> Bind for Option<T> {
    fn shape(&mut self) -> Shape<'_> {
        match self {
            Some(inner) => inner.shape(),
            None => Shape::Empty,
        }
    }
}

/// What a bindable value looks like from the outside.
pub enum Shape<'a> {
    /// A struct, fields in declaration order.
    Struct(Vec<Field<'a>>),
    /// A single leaf value.
    Scalar(&'a mut dyn Scalar),
    /// Nothing to bind (an absent optional section).
    Empty,
}

/// Per-field options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags {
    /// Literal used when neither a flag nor an env var supplies a value.
    pub default: Option<String>,
    /// The field must end up with a value.
    pub required: bool,
    /// Flag name used verbatim instead of the derived one.
    pub flag: Option<String>,
    /// Env var name used verbatim instead of the derived one.
    pub env: Option<String>,
    /// Help text shown for the flag.
    pub help: Option<String>,
}

/// Static part of a field: its declared name, settability and options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meta {
    pub name: &'static str,
    pub settable: bool,
    pub tags: Tags,
}

impl Meta {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            settable: true,
            tags: Tags::default(),
        }
    }
}

/// A field descriptor together with its storage.
pub struct Field<'a> {
    pub meta: Meta,
    pub target: Shape<'a>,
}

impl<'a> Field<'a> {
    pub fn new<T: Bind + ?Sized>(name: &'static str, value: &'a mut T) -> Self {
        Self {
            meta: Meta::new(name),
            target: value.shape(),
        }
    }

    /// Mark whether the field may be written from outside its module.
    /// Binding a non-settable field fails.
    pub fn settable(mut self, settable: bool) -> Self {
        self.meta.settable = settable;
        self
    }

    pub fn default_value(mut self, literal: impl Into<String>) -> Self {
        self.meta.tags.default = Some(literal.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.meta.tags.required = true;
        self
    }

    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.meta.tags.flag = Some(name.into());
        self
    }

    pub fn env(mut self, name: impl Into<String>) -> Self {
        self.meta.tags.env = Some(name.into());
        self
    }

    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.meta.tags.help = Some(text.into());
        self
    }
}
