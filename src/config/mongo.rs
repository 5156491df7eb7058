// Start of file: /src/config/mongo.rs

// * MongoDB connection configuration resolved from the environment,
// * and the three connection-string strategies built from it.

use std::{collections::HashMap, env::VarError, fmt};
// * anyhow for convenient error handling
use anyhow::{bail, Result};
use tracing::{debug, warn};

// ! Environment variables consumed by the resolver
pub const MONGO_USER: &str = "MONGO_USER";
pub const MONGO_PASSWORD: &str = "MONGO_PASSWORD";
pub const MONGO_HOST: &str = "MONGO_HOST";
pub const MONGO_PORT: &str = "MONGO_PORT";
pub const MONGO_SSL_PATH: &str = "MONGO_SSL_PATH";
pub const MONGO_LOCAL: &str = "MONGO_LOCAL";
pub const MONGO_NO_TLS: &str = "MONGO_NO_TLS";

const MONGO_VARS: [&str; 7] = [
    MONGO_USER,
    MONGO_PASSWORD,
    MONGO_HOST,
    MONGO_PORT,
    MONGO_SSL_PATH,
    MONGO_LOCAL,
    MONGO_NO_TLS,
];

// Characters that change the meaning of a URI when interpolated unescaped
const RESERVED_URI_CHARS: [char; 4] = [':', '/', '@', '?'];

/// Which connection-string strategy a configuration resolves to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionMode {
    /// Non-clustered instance addressed by host and port.
    Local,
    /// Cluster with basic auth only.
    PlainRemote,
    /// Cluster with basic auth and a TLS CA file.
    #[default]
    TlsRemote,
}

impl ConnectionMode {
    /// Local mode wins over no-TLS mode; TLS is the default.
    pub fn from_flags(local: bool, no_tls: bool) -> Self {
        match (local, no_tls) {
            (true, _) => Self::Local,
            (false, true) => Self::PlainRemote,
            (false, false) => Self::TlsRemote,
        }
    }
}

/// Fields and mode of a MongoDB connection.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MongoConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: String,
    pub tls_ca_file: String,
    pub mode: ConnectionMode,
}

// * The password never shows up in logs
impl fmt::Debug for MongoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MongoConfig")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("tls_ca_file", &self.tls_ca_file)
            .field("mode", &self.mode)
            .finish()
    }
}

impl MongoConfig {
    /// Reads the `MONGO_*` variables from the process environment.
    ///
    /// Missing variables become empty strings. The only failure is a
    /// variable that is set but not valid Unicode.
    pub fn from_env() -> Result<Self> {
        let mut vars: HashMap<String, String> = HashMap::with_capacity(MONGO_VARS.len());

        for key in MONGO_VARS {
            match std::env::var(key) {
                Ok(value) => {
                    vars.insert(key.to_string(), value);
                }
                Err(VarError::NotPresent) => {}
                Err(VarError::NotUnicode(_)) => bail!("Environment variable {key} is not valid Unicode"),
            }
        }

        let config: MongoConfig = Self::from_vars(&vars);
        debug!("Loaded MongoDB configuration: {:?}", config);
        Ok(config)
    }

    /// Maps an explicit set of variables into a configuration.
    pub fn from_vars(vars: &HashMap<String, String>) -> Self {
        let get_var = |key: &str| vars.get(key).cloned().unwrap_or_default();
        let get_flag = |key: &str| parse_flag(vars.get(key).map(String::as_str));

        Self {
            user: get_var(MONGO_USER),
            password: get_var(MONGO_PASSWORD),
            host: get_var(MONGO_HOST),
            port: get_var(MONGO_PORT),
            tls_ca_file: get_var(MONGO_SSL_PATH),
            mode: ConnectionMode::from_flags(get_flag(MONGO_LOCAL), get_flag(MONGO_NO_TLS)),
        }
    }

    /// Builds the connection string for the configured mode.
    ///
    /// Fields are interpolated verbatim. A warning is logged when one of
    /// them holds a reserved URI character, since the driver will most
    /// likely reject or misread the result.
    pub fn connection_string(&self) -> String {
        self.warn_on_reserved_chars();

        match self.mode {
            ConnectionMode::Local => local_connection_string(self),
            ConnectionMode::PlainRemote => srv_connection_string(self),
            ConnectionMode::TlsRemote => tls_connection_string(self),
        }
    }

    fn warn_on_reserved_chars(&self) {
        let mut fields: Vec<(&str, &str)> = vec![
            ("user", self.user.as_str()),
            ("password", self.password.as_str()),
            ("host", self.host.as_str()),
        ];
        // tlsCAFile is a query value, slashes are expected there
        if self.mode == ConnectionMode::Local {
            fields.push(("port", self.port.as_str()));
        }

        for (name, value) in fields {
            if value.contains(&RESERVED_URI_CHARS[..]) {
                warn!("MongoDB {name} contains a reserved URI character and is not escaped");
            }
        }
    }
}

/// Flags are only set by the literal string `"true"`.
pub fn parse_flag(value: Option<&str>) -> bool {
    value == Some("true")
}

/// Local (non-cluster) instance.
pub fn local_connection_string(cfg: &MongoConfig) -> String {
    format!("mongodb://{}:{}@{}:{}", cfg.user, cfg.password, cfg.host, cfg.port)
}

/// Cluster with basic auth only (no TLS).
pub fn srv_connection_string(cfg: &MongoConfig) -> String {
    format!("mongodb+srv://{}:{}@{}", cfg.user, cfg.password, cfg.host)
}

/// Cluster with basic auth and a TLS certificate.
pub fn tls_connection_string(cfg: &MongoConfig) -> String {
    format!(
        "mongodb+srv://{}:{}@{}/?tls=true&tlsCAFile={}",
        cfg.user, cfg.password, cfg.host, cfg.tls_ca_file
    )
}


// End of file: /src/config/mongo.rs
