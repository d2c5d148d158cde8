//! Flag and env var names derived from field names and the nesting prefix.
//!
//! The prefix path is kept space-separated while walking; each target joins
//! the segments with its own separator:
//!
//! | Prefix  | Field  | Env prefix | Flag      | Env var        |
//! |---------|--------|------------|-----------|----------------|
//! | ``      | `port` | ``         | `port`    | `PORT`         |
//! | `Db`    | `Test` | `TEST`     | `db-test` | `TEST_DB_TEST` |
//! | `a b`   | `url`  | `APP`      | `a-b-url` | `APP_A_B_URL`  |
//!
//! Explicit `flag` / `env` options win and are used as given.

use crate::schema::Meta;

const PATH_SEPARATOR: &str = " ";
const FLAG_SEPARATOR: &str = "-";
const ENV_SEPARATOR: &str = "_";

/// Join the non-empty `parts` with `separator`.
pub fn join_strings(separator: &str, parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(separator)
}

/// Extend a prefix path by one segment.
pub fn nested_prefix(base: &str, next: &str) -> String {
    if base.is_empty() {
        next.to_string()
    } else {
        format!("{base}{PATH_SEPARATOR}{next}")
    }
}

fn segments<'p>(prefix: &'p str, name: &'p str) -> Vec<&'p str> {
    let mut parts: Vec<&str> = prefix.split(PATH_SEPARATOR).collect();
    parts.push(name);
    parts
}

pub fn flag_name(meta: &Meta, prefix: &str) -> String {
    if let Some(flag) = &meta.tags.flag {
        return flag.clone();
    }
    join_strings(FLAG_SEPARATOR, &segments(prefix, meta.name)).to_lowercase()
}

pub fn env_name(meta: &Meta, prefix: &str, env_prefix: &str) -> String {
    if let Some(env) = &meta.tags.env {
        return env.clone();
    }
    let mut parts = vec![env_prefix];
    parts.extend(segments(prefix, meta.name));
    join_strings(ENV_SEPARATOR, &parts).to_uppercase()
}
