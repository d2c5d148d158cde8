#[cfg(test)]
pub mod test {
    use std::time::Duration;

    crate::bindable! {
        #[derive(Debug, Default, PartialEq)]
        pub struct Server {
            /// The application host.
            pub host: String [default = "localhost"],

            /// The port number.
            pub port: u16 [default = "8080", help = "Port to listen on."],

            /// Enable debug mode.
            pub debug: bool,

            /// Database settings.
            pub database: Database,
        }
    }

    crate::bindable! {
        #[derive(Debug, Default, PartialEq)]
        pub struct Database {
            /// Connection string URL.
            pub url: String [env = "DATABASE_URL"],

            /// Connection pool size.
            pub pool_size: usize [default = "5"],

            /// Query timeout.
            pub timeout: Duration [default = "30s"],
        }
    }

    /// One field per scalar kind, for exercising the value setter.
    #[derive(Debug, Default)]
    pub struct ScalarFields {
        pub d: Duration,
        pub i: i32,
        pub i64: i64,
        pub u: u32,
        pub u64: u64,
        pub s: String,
        pub b: bool,
        pub f32: f32,
        pub f64: f64,
    }
}
