use std::collections::HashMap;
use std::env::VarError;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::BindError;
use crate::flags::FlagSet;
use crate::report::Report;
use crate::schema::{Bind, Shape};
use crate::setter::BoolPolicy;
use crate::walk::{EnvLookup, Walker};

const FALLBACK_PROGRAM_NAME: &str = "app";

/// Context for one or more binds: where arguments and env vars come from and
/// how names are derived.
///
/// Nothing is read from the process until [`bind()`](Self::bind) runs, and
/// only for the sources that were not replaced here.
#[derive(Debug, Clone)]
pub struct Binder {
    env_prefix: String,
    args: Option<Vec<String>>,
    vars: Option<HashMap<String, String>>,
    env_enabled: bool,
    bools: BoolPolicy,
    program_name: Option<String>,
}

impl Default for Binder {
    fn default() -> Self {
        Self::new()
    }
}

impl Binder {
    pub fn new() -> Self {
        Self {
            env_prefix: String::new(),
            args: None,
            vars: None,
            env_enabled: true,
            bools: BoolPolicy::default(),
            program_name: None,
        }
    }

    /// Prefix prepended to every derived env var name (default: none).
    ///
    /// With prefix `MYAPP`, field `port` nested under `server` reads
    /// `MYAPP_SERVER_PORT`. Explicit `env` names are not prefixed.
    pub fn env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = prefix.to_string();
        self
    }

    /// Replace the process arguments. `args` excludes the program name.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the process environment with synthetic variables.
    pub fn vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.vars = Some(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Disable environment variable lookup entirely.
    pub fn no_env(mut self) -> Self {
        self.env_enabled = false;
        self
    }

    /// How unparsable booleans are handled (default: [`BoolPolicy::Lenient`]).
    pub fn bool_policy(mut self, policy: BoolPolicy) -> Self {
        self.bools = policy;
        self
    }

    /// Program name shown in usage and parse errors
    /// (default: file name of the running executable).
    pub fn program_name(mut self, name: &str) -> Self {
        self.program_name = Some(name.to_string());
        self
    }

    fn effective_args(&self) -> Vec<String> {
        match &self.args {
            Some(args) => args.clone(),
            None => std::env::args().skip(1).collect(),
        }
    }

    fn effective_program_name(&self) -> String {
        if let Some(name) = &self.program_name {
            return name.clone();
        }
        std::env::args()
            .next()
            .and_then(|arg0| {
                Path::new(&arg0)
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| FALLBACK_PROGRAM_NAME.to_string())
    }

    /// Walk `config`, storing env and default values and registering flags.
    fn walk<'a, T: Bind + ?Sized>(
        &self,
        config: &'a mut T,
        prefix: &str,
    ) -> Result<FlagSet<'a>, BindError> {
        let Shape::Struct(fields) = config.shape() else {
            return Err(BindError::InvalidReceiver);
        };
        let flags = FlagSet::new(self.effective_program_name()).bool_policy(self.bools);
        let mut walker = Walker::new(self, &self.env_prefix, flags);
        walker.walk(fields, prefix)?;
        Ok(walker.into_flags())
    }

    /// Bind every field of `config`, then parse the arguments once.
    ///
    /// Per field, the first source that has a value wins: command-line flag,
    /// env var, `default` option. Fields with no source keep their current
    /// value. `prefix` is the initial prefix path for derived names.
    pub fn bind<T: Bind + ?Sized>(
        &self,
        config: &mut T,
        prefix: &str,
    ) -> Result<Report, BindError> {
        let flags = self.walk(config, prefix)?;
        let report = flags.parse(self.effective_args())?;
        debug!(
            fields = report.entries.len(),
            remaining = report.remaining.len(),
            "config bound"
        );
        Ok(report)
    }

    /// Render the `--help` text for `config`'s flags.
    ///
    /// Env and default values are stored into `config` along the way, so the
    /// text shows them as flag defaults.
    pub fn usage<T: Bind + ?Sized>(
        &self,
        config: &mut T,
        prefix: &str,
    ) -> Result<String, BindError> {
        Ok(self.walk(config, prefix)?.usage())
    }
}

impl EnvLookup for Binder {
    fn lookup(&self, key: &str) -> Option<String> {
        if !self.env_enabled {
            return None;
        }
        let value = match &self.vars {
            Some(vars) => vars.get(key).cloned(),
            None => match std::env::var(key) {
                Ok(value) => Some(value),
                Err(VarError::NotPresent) => None,
                Err(VarError::NotUnicode(raw)) => {
                    warn!(var = key, value = ?raw, "env var is not valid unicode, ignoring");
                    None
                }
            },
        };
        value.filter(|v| !v.is_empty())
    }
}
