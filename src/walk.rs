//! Depth-first walk over a struct's fields.
//!
//! For every scalar the walker derives names, stores the env or default value
//! and registers the flag. Nested structs extend the prefix path. The first
//! error stops the walk.

use tracing::trace;

use crate::error::BindError;
use crate::flags::{Flag, FlagSet};
use crate::naming::{env_name, flag_name, nested_prefix};
use crate::report::Source;
use crate::scalar::Scalar;
use crate::schema::{Field, Meta, Shape};
use crate::setter;

/// Where the walker looks up env vars.
pub(crate) trait EnvLookup {
    /// Value of `key`, or `None` when unset or empty.
    fn lookup(&self, key: &str) -> Option<String>;
}

pub(crate) struct Walker<'a, 'e> {
    env: &'e dyn EnvLookup,
    env_prefix: &'e str,
    flags: FlagSet<'a>,
}

impl<'a, 'e> Walker<'a, 'e> {
    pub(crate) fn new(env: &'e dyn EnvLookup, env_prefix: &'e str, flags: FlagSet<'a>) -> Self {
        Self {
            env,
            env_prefix,
            flags,
        }
    }

    pub(crate) fn into_flags(self) -> FlagSet<'a> {
        self.flags
    }

    pub(crate) fn walk(&mut self, fields: Vec<Field<'a>>, prefix: &str) -> Result<(), BindError> {
        for Field { meta, target } in fields {
            let key = flag_name(&meta, prefix);
            if !meta.settable {
                return Err(BindError::CannotSet(key));
            }

            match target {
                Shape::Struct(nested) => {
                    self.walk(nested, &nested_prefix(prefix, meta.name))?;
                }
                Shape::Scalar(slot) => {
                    let env = env_name(&meta, prefix, self.env_prefix);
                    self.bind_scalar(meta, key, env, slot)?;
                }
                Shape::Empty => {
                    trace!(field = %key, "skipping empty field");
                }
            }
        }
        Ok(())
    }

    fn bind_scalar(
        &mut self,
        meta: Meta,
        key: String,
        env: String,
        slot: &'a mut dyn Scalar,
    ) -> Result<(), BindError> {
        if !slot.kind().is_supported() {
            return Err(BindError::UnsupportedType(slot.type_name()));
        }

        let resolved = match self.env.lookup(&env) {
            Some(value) => Some((value, Source::Env)),
            None => meta.tags.default.map(|value| (value, Source::Default)),
        };

        let flag = Flag {
            key,
            env,
            required: meta.tags.required,
            help: meta.tags.help,
        };

        match resolved {
            Some((raw, source)) => setter::set_value(slot, &mut self.flags, flag, &raw, source),
            None => self.flags.register(flag, slot, Source::Unset),
        }
    }
}
