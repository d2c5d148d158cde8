//! The flag set: one clap argument per bound field, parsed once.
//!
//! Registration hands the field's storage to the set. After the walk the set
//! is consumed by [`FlagSet::parse`], which writes command-line values back
//! into the same storage, enforces required fields and produces the
//! [`Report`].

use clap::parser::ValueSource;
use clap::{Arg, ArgAction, Command};
use tracing::{debug, trace};

use crate::error::BindError;
use crate::report::{Entry, Report, Source};
use crate::scalar::Scalar;
use crate::setter::{self, BoolPolicy};

/// Id of the hidden positional collecting everything after the flags.
const REMAINING: &str = "__remaining";
/// Flag keys clap claims for itself.
const RESERVED: &[&str] = &["help", REMAINING];

/// Identity of one field's flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    pub key: String,
    pub env: String,
    pub required: bool,
    pub help: Option<String>,
}

impl Flag {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            env: String::new(),
            required: false,
            help: None,
        }
    }
}

struct Bound<'a> {
    flag: Flag,
    source: Source,
    slot: &'a mut dyn Scalar,
}

/// Registered flags and the storage they write to.
pub struct FlagSet<'a> {
    program: String,
    bools: BoolPolicy,
    args: Vec<Arg>,
    bound: Vec<Bound<'a>>,
}

impl<'a> FlagSet<'a> {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            bools: BoolPolicy::default(),
            args: Vec::new(),
            bound: Vec::new(),
        }
    }

    pub fn bool_policy(mut self, policy: BoolPolicy) -> Self {
        self.bools = policy;
        self
    }

    pub(crate) fn bools(&self) -> BoolPolicy {
        self.bools
    }

    pub fn contains(&self, key: &str) -> bool {
        self.bound.iter().any(|b| b.flag.key == key)
    }

    pub fn len(&self) -> usize {
        self.bound.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }

    /// Register `slot` under `flag.key`.
    ///
    /// `source` records where the slot's current value came from; anything
    /// other than [`Source::Unset`] is shown as the flag's default in help.
    pub fn register(
        &mut self,
        flag: Flag,
        slot: &'a mut dyn Scalar,
        source: Source,
    ) -> Result<(), BindError> {
        if flag.key.is_empty() || flag.key.starts_with('-') {
            return Err(BindError::InvalidFlagName(flag.key));
        }
        if RESERVED.contains(&flag.key.as_str()) || self.contains(&flag.key) {
            return Err(BindError::DuplicateFlag(flag.key));
        }

        let mut arg = slot
            .kind()
            .configure(Arg::new(flag.key.clone()).long(flag.key.clone()));
        if source != Source::Unset {
            arg = arg.default_value(slot.render());
        }
        let help = match (&flag.help, flag.env.is_empty()) {
            (Some(help), true) => Some(help.clone()),
            (Some(help), false) => Some(format!("{help} [env: {}]", flag.env)),
            (None, false) => Some(format!("[env: {}]", flag.env)),
            (None, true) => None,
        };
        if let Some(help) = help {
            arg = arg.help(help);
        }

        trace!(flag = %flag.key, kind = %slot.kind(), "registered flag");
        self.args.push(arg);
        self.bound.push(Bound { flag, source, slot });
        Ok(())
    }

    fn command(&self) -> Command {
        Command::new(self.program.clone())
            .no_binary_name(true)
            .args_override_self(true)
            .args(self.args.iter().cloned())
            .arg(
                Arg::new(REMAINING)
                    .action(ArgAction::Set)
                    .num_args(1..)
                    .trailing_var_arg(true)
                    .hide(true),
            )
    }

    /// Render `--help` for the registered flags.
    pub fn usage(&self) -> String {
        let mut command = self.command();
        command.render_help().to_string()
    }

    /// Parse `args` (without the program name) and finish the bind.
    ///
    /// Values given on the command line replace whatever env or default
    /// stored earlier. Required fields are checked afterwards, in
    /// registration order.
    pub fn parse<I, S>(self, args: I) -> Result<Report, BindError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let matches = self.command().try_get_matches_from(args)?;

        let bools = self.bools;
        let mut entries = Vec::with_capacity(self.bound.len());
        for Bound {
            flag,
            mut source,
            slot,
        } in self.bound
        {
            if matches.value_source(&flag.key) == Some(ValueSource::CommandLine)
                && let Some(raw) = matches.get_one::<String>(&flag.key)
            {
                setter::assign(&mut *slot, raw, bools)?;
                source = Source::Flag;
            }

            if flag.required && source == Source::Unset && slot.is_zero() {
                return Err(BindError::MissingRequired(flag.key));
            }

            debug!(flag = %flag.key, env = %flag.env, source = %source, "bound field");
            entries.push(Entry {
                kind: slot.kind(),
                value: slot.render(),
                flag: flag.key,
                env: flag.env,
                source,
            });
        }

        let remaining = matches
            .get_many::<String>(REMAINING)
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        Ok(Report { entries, remaining })
    }
}
