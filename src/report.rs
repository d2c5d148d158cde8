//! Where each bound value came from.

use std::fmt;

use serde::Serialize;

use crate::scalar::Kind;

/// The source that supplied a field's final value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Flag,
    Env,
    Default,
    /// No source applied; the field kept its initial value.
    Unset,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Source::Flag => "flag",
            Source::Env => "env",
            Source::Default => "default",
            Source::Unset => "unset",
        };
        f.write_str(name)
    }
}

/// One bound scalar field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub flag: String,
    pub env: String,
    pub kind: Kind,
    pub source: Source,
    pub value: String,
}

/// Result of a successful bind.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    /// Bound fields in declaration order.
    pub entries: Vec<Entry>,
    /// Positional arguments left after the flags.
    pub remaining: Vec<String>,
}

impl Report {
    pub fn get(&self, flag: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.flag == flag)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{} = {} ({})", entry.flag, entry.value, entry.source)?;
        }
        Ok(())
    }
}
