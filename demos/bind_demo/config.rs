//! Configuration structs for the bind demo application.
//!
//! The root [`DemoConfig`] nests [`ServerConfig`] and [`DisplayConfig`], so
//! every field shows up under a prefix path.
//!
//! # Name mapping
//!
//! With the env prefix `BIND_DEMO`:
//!
//! | Flag                        | Env var                            |
//! |-----------------------------|------------------------------------|
//! | `--name`                    | `BIND_DEMO_NAME`                   |
//! | `--verbose`                 | `BIND_DEMO_VERBOSE`                |
//! | `--server-host`             | `BIND_DEMO_SERVER_HOST`            |
//! | `--server-port`             | `BIND_DEMO_SERVER_PORT`            |
//! | `--server-max-connections`  | `BIND_DEMO_SERVER_MAX_CONNECTIONS` |
//! | `--server-timeout`          | `BIND_DEMO_SERVER_TIMEOUT`         |
//! | `--color`                   | `DEMO_COLOR`                       |
//! | `--display-format`          | `BIND_DEMO_DISPLAY_FORMAT`         |

use std::time::Duration;

clapbind::bindable! {
    /// Root configuration for the demo application.
    #[derive(Debug, Default)]
    pub struct DemoConfig {
        /// Application name shown in the echo banner.
        pub name: String [default = "bind-demo", help = "Name shown in the banner."],

        /// Enable verbose output.
        pub verbose: bool [help = "Print the value sources as well."],

        pub server: ServerConfig,

        pub display: DisplayConfig,
    }
}

clapbind::bindable! {
    /// Server connection settings.
    #[derive(Debug, Default)]
    pub struct ServerConfig {
        pub host: String [default = "localhost", help = "Address to bind."],

        pub port: u16 [default = "8080", help = "Port to listen on."],

        pub max_connections: u32 [
            default = "100",
            flag = "server-max-connections",
            help = "Connection limit."
        ],

        pub timeout: Duration [default = "30s", help = "Idle timeout, e.g. 90s or 2m."],
    }
}

clapbind::bindable! {
    /// Output display preferences.
    #[derive(Debug, Default)]
    pub struct DisplayConfig {
        /// One of red, green, yellow, blue, magenta, cyan.
        pub color: String [default = "yellow", flag = "color", env = "DEMO_COLOR"],

        /// `table` or `plain`.
        pub format: String [default = "table"],
    }
}
