/// Declare a config struct and implement [`Bind`](crate::Bind) for it.
///
/// Fields take their options in brackets after the type:
///
/// ```ignore
/// clapbind::bindable! {
///     #[derive(Debug, Default)]
///     pub struct Server {
///         /// Listen port.
///         pub port: u16 [default = "8080", help = "Port to listen on."],
///         pub token: String [required, env = "API_TOKEN"],
///         pub database: Database,
///     }
/// }
/// ```
///
/// | Option              | Effect                                        |
/// |---------------------|-----------------------------------------------|
/// | `default = "..."`   | literal used when no flag or env var is given |
/// | `required`          | bind fails if no source supplies a value      |
/// | `flag = "..."`      | flag name, used verbatim                      |
/// | `env = "..."`       | env var name, used verbatim                   |
/// | `help = "..."`      | help text for the flag                        |
///
/// Fields declared without a visibility qualifier are not settable and make
/// the bind fail with [`BindError::CannotSet`](crate::BindError::CannotSet).
/// Nested structs need no option: any field whose type implements `Bind` as
/// a struct is walked with its name appended to the prefix.
#[macro_export]
macro_rules! bindable {
    (
        $(#[$struct_attr:meta])*
        $struct_vis:vis struct $name:ident {
            $(
                $(#[$field_attr:meta])*
                $field_vis:vis $field:ident : $ty:ty
                $([ $($opt:ident $(= $value:literal)?),* $(,)? ])?
            ),* $(,)?
        }
    ) => {
        $(#[$struct_attr])*
        $struct_vis struct $name {
            $(
                $(#[$field_attr])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::Bind for $name {
            fn shape(&mut self) -> $crate::Shape<'_> {
                $crate::Shape::Struct(::std::vec![
                    $(
                        {
                            let binding = $crate::Field::new(stringify!($field), &mut self.$field)
                                .settable(!stringify!($field_vis).is_empty());
                            $($(
                                let binding = $crate::__bind_option!(binding, $opt $(= $value)?);
                            )*)?
                            binding
                        }
                    ),*
                ])
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __bind_option {
    ($binding:ident, default = $value:literal) => {
        $binding.default_value($value)
    };
    ($binding:ident, required) => {
        $binding.required()
    };
    ($binding:ident, flag = $value:literal) => {
        $binding.flag($value)
    };
    ($binding:ident, env = $value:literal) => {
        $binding.env($value)
    };
    ($binding:ident, help = $value:literal) => {
        $binding.help($value)
    };
}

#[cfg(test)]
mod tests {
    use crate::schema::{Bind, Shape, Tags};

    crate::bindable! {
        #[derive(Debug, Default)]
        struct Options {
            /// Documented field.
            pub port: u16 [default = "8080", help = "Port to listen on."],
            pub(crate) token: String [required, env = "API_TOKEN", flag = "api-token"],
            hidden: bool,
            pub plain: i64,
        }
    }

    fn metas(options: &mut Options) -> Vec<(&'static str, bool, Tags)> {
        let Shape::Struct(fields) = options.shape() else {
            unreachable!("Options is a struct");
        };
        fields
            .into_iter()
            .map(|f| (f.meta.name, f.meta.settable, f.meta.tags))
            .collect()
    }

    #[test]
    fn options_become_tags() {
        let mut options = Options::default();
        let metas = metas(&mut options);
        assert_eq!(metas.len(), 4);

        let (name, settable, tags) = &metas[0];
        assert_eq!(*name, "port");
        assert!(*settable);
        assert_eq!(tags.default.as_deref(), Some("8080"));
        assert_eq!(tags.help.as_deref(), Some("Port to listen on."));

        let (name, settable, tags) = &metas[1];
        assert_eq!(*name, "token");
        assert!(*settable);
        assert!(tags.required);
        assert_eq!(tags.env.as_deref(), Some("API_TOKEN"));
        assert_eq!(tags.flag.as_deref(), Some("api-token"));
    }

    #[test]
    fn missing_visibility_is_not_settable() {
        let mut options = Options::default();
        let metas = metas(&mut options);
        assert_eq!(metas[2].0, "hidden");
        assert!(!metas[2].1);
        assert_eq!(metas[3].2, Tags::default());
        assert!(metas[3].1);
    }

    #[test]
    fn struct_is_usable_as_declared() {
        let options = Options {
            port: 1,
            token: "t".into(),
            hidden: true,
            plain: -1,
        };
        assert!(options.hidden);
        assert_eq!(options.plain, -1);
    }
}
