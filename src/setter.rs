//! Store a source string into a field and bind the field to its flag.

use tracing::warn;

use crate::error::BindError;
use crate::flags::{Flag, FlagSet};
use crate::report::Source;
use crate::scalar::{Kind, Scalar};

/// What to do when a boolean source string does not parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoolPolicy {
    /// Store `false`, log a warning and carry on.
    #[default]
    Lenient,
    /// Fail with [`BindError::CannotUse`] like every other kind.
    Strict,
}

/// Parse `raw` into `field` under the given boolean policy.
pub(crate) fn assign(
    field: &mut dyn Scalar,
    raw: &str,
    bools: BoolPolicy,
) -> Result<(), BindError> {
    match field.assign(raw) {
        Err(BindError::CannotUse { value, .. })
            if field.kind() == Kind::Bool && bools == BoolPolicy::Lenient =>
        {
            warn!(value = %value, "unparsable boolean, using false");
            field.reset();
            Ok(())
        }
        other => other,
    }
}

/// Parse `raw` into `field`, then register `field` on `flags` under
/// `flag.key` so a command-line value can replace it later.
///
/// `source` says where `raw` came from. On error nothing is registered and the
/// field keeps its previous value.
pub fn set_value<'a>(
    field: &'a mut dyn Scalar,
    flags: &mut FlagSet<'a>,
    flag: Flag,
    raw: &str,
    source: Source,
) -> Result<(), BindError> {
    let kind = field.kind();
    if !kind.is_supported() {
        return Err(BindError::UnsupportedType(field.type_name()));
    }
    assign(&mut *field, raw, flags.bools())?;
    flags.register(flag, field, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::ScalarFields;
    use std::time::Duration;

    fn set<'a>(
        field: &'a mut dyn Scalar,
        flags: &mut FlagSet<'a>,
        raw: &str,
    ) -> Result<(), BindError> {
        set_value(field, flags, Flag::new("flag-test"), raw, Source::Default)
    }

    fn set_one(field: &mut dyn Scalar, raw: &str) -> Result<(), BindError> {
        let mut flags = FlagSet::new("config");
        set(field, &mut flags, raw)
    }

    #[test]
    fn duration_value() {
        let mut s = ScalarFields::default();
        set_one(&mut s.d, "3h").unwrap();
        assert_eq!(s.d, Duration::from_nanos(10_800_000_000_000));
    }

    #[test]
    fn int_values() {
        let mut s = ScalarFields::default();
        set_one(&mut s.i, "123").unwrap();
        set_one(&mut s.i64, "234").unwrap();
        assert_eq!(s.i, 123);
        assert_eq!(s.i64, 234);
    }

    #[test]
    fn uint_values() {
        let mut s = ScalarFields::default();
        set_one(&mut s.u, "345").unwrap();
        set_one(&mut s.u64, "456").unwrap();
        assert_eq!(s.u, 345);
        assert_eq!(s.u64, 456);
    }

    #[test]
    fn float64_value() {
        let mut s = ScalarFields::default();
        set_one(&mut s.f64, "567.89").unwrap();
        assert_eq!(s.f64, 567.89);
    }

    #[test]
    fn bool_value() {
        let mut s = ScalarFields::default();
        set_one(&mut s.b, "true").unwrap();
        assert!(s.b);
    }

    #[test]
    fn string_value() {
        let mut s = ScalarFields::default();
        set_one(&mut s.s, "test string").unwrap();
        assert_eq!(s.s, "test string");
    }

    #[test]
    fn unsupported_float32_value() {
        let mut s = ScalarFields::default();
        for raw in ["3.14159", "", "wrong"] {
            let err = set_one(&mut s.f32, raw).unwrap_err();
            assert!(matches!(err, BindError::UnsupportedType("f32")));
            assert_eq!(s.f32, 0.0);
        }
    }

    #[test]
    fn wrong_duration_keeps_previous_value() {
        let mut s = ScalarFields::default();
        set_one(&mut s.d, "3h").unwrap();
        let err = set_one(&mut s.d, "wrong").unwrap_err();
        assert!(matches!(
            err,
            BindError::CannotUse { ref value, type_name: "Duration" } if value == "wrong"
        ));
        assert_eq!(s.d, Duration::from_secs(3 * 3600));
    }

    fn assert_cannot_use<T>(type_name: &str)
    where
        T: Scalar + Default + PartialEq + std::fmt::Debug,
    {
        let mut field = T::default();
        let err = set_one(&mut field, "wrong").unwrap_err();
        assert!(
            matches!(err, BindError::CannotUse { ref value, type_name: t } if value == "wrong" && t == type_name),
            "{err}"
        );
        assert_eq!(field, T::default());
    }

    fn assert_parses<T>(raw: &str, expected: T)
    where
        T: Scalar + Default + PartialEq + std::fmt::Debug,
    {
        let mut field = T::default();
        set_one(&mut field, raw).unwrap();
        assert_eq!(field, expected, "{raw}");
    }

    #[test]
    fn every_integer_width_parses() {
        assert_parses::<i8>("-128", i8::MIN);
        assert_parses::<i16>("-1234", -1234);
        assert_parses::<isize>("-42", -42);
        assert_parses::<u8>("255", u8::MAX);
        assert_parses::<u16>("65535", u16::MAX);
        assert_parses::<usize>("42", 42);
        assert_parses::<i64>("9223372036854775807", i64::MAX);
        assert_parses::<u64>("18446744073709551615", u64::MAX);
    }

    #[test]
    fn narrow_widths_reject_out_of_range() {
        assert_cannot_use::<i8>("i8");
        assert_cannot_use::<i16>("i16");
        assert_cannot_use::<isize>("isize");
        assert_cannot_use::<u16>("u16");
        assert_cannot_use::<usize>("usize");
        let mut v: i8 = 0;
        assert!(set_one(&mut v, "128").is_err());
        let mut v: u16 = 0;
        assert!(set_one(&mut v, "65536").is_err());
    }

    #[test]
    fn wrong_numeric_values_leave_zero() {
        assert_cannot_use::<i32>("i32");
        assert_cannot_use::<i64>("i64");
        assert_cannot_use::<u32>("u32");
        assert_cannot_use::<u64>("u64");
        assert_cannot_use::<f64>("f64");
    }

    #[test]
    fn wrong_bool_is_false_when_lenient() {
        let mut s = ScalarFields {
            b: true,
            ..Default::default()
        };
        set_one(&mut s.b, "wrong").unwrap();
        assert!(!s.b);
    }

    #[test]
    fn wrong_bool_fails_when_strict() {
        let mut b = false;
        let mut flags = FlagSet::new("config").bool_policy(BoolPolicy::Strict);
        let err = set(&mut b, &mut flags, "wrong").unwrap_err();
        assert!(matches!(
            err,
            BindError::CannotUse { ref value, type_name: "bool" } if value == "wrong"
        ));
    }

    #[test]
    fn registers_flag_bound_to_field() {
        let mut port: u16 = 0;
        {
            let mut flags = FlagSet::new("config");
            set_value(&mut port, &mut flags, Flag::new("port"), "8080", Source::Default)
                .unwrap();
            assert!(flags.contains("port"));
            flags.parse(["--port", "9090"]).unwrap();
        }
        assert_eq!(port, 9090);
    }

    #[test]
    fn failed_set_registers_nothing() {
        let mut port: u16 = 0;
        let mut flags = FlagSet::new("config");
        let result = set_value(&mut port, &mut flags, Flag::new("port"), "x", Source::Env);
        assert!(result.is_err());
        assert!(flags.is_empty());
    }
}
