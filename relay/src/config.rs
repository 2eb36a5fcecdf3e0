use serde::Serialize;
use std::{env, fmt};

/// Naming scheme for the three credential variables a function reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// `TOKEN_AIRTABLE`, `BASE_ID_AIRTABLE`, `TABLE_ID_AIRTABLE`
    Airtable,
    /// `TOKEN`, `BASE_ID`, `TABLE_ID`
    Proxy,
}

impl Profile {
    /// Token, base and table variable names, in that order.
    pub fn vars(self) -> [&'static str; 3] {
        match self {
            Profile::Airtable => ["TOKEN_AIRTABLE", "BASE_ID_AIRTABLE", "TABLE_ID_AIRTABLE"],
            Profile::Proxy => ["TOKEN", "BASE_ID", "TABLE_ID"],
        }
    }
}

#[derive(Clone, Default)]
pub struct Config {
    pub token: Option<String>,
    pub base_id: Option<String>,
    pub table_id: Option<String>,
}

impl Config {
    pub fn from_env(profile: Profile) -> Self {
        Self::from_lookup(profile, |name| env::var(name).ok())
    }

    pub fn from_lookup<F>(
        profile: Profile,
        lookup: F,
    ) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let [token, base_id, table_id] = profile.vars();
        let read = |name: &str| lookup(name).filter(|value| !value.is_empty());
        Config {
            token: read(token),
            base_id: read(base_id),
            table_id: read(table_id),
        }
    }

    pub fn credentials(&self) -> Result<Credentials, Missing> {
        match (&self.token, &self.base_id, &self.table_id) {
            (Some(token), Some(base_id), Some(table_id)) => Ok(Credentials {
                token: token.clone(),
                base_id: base_id.clone(),
                table_id: table_id.clone(),
            }),
            _ => Err(Missing {
                token: self.token.is_some(),
                base: self.base_id.is_some(),
                table: self.table_id.is_some(),
            }),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("base_id", &self.base_id)
            .field("table_id", &self.table_id)
            .finish()
    }
}

/// A complete credential triple.
#[derive(Clone)]
pub struct Credentials {
    pub token: String,
    pub base_id: String,
    pub table_id: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("base_id", &self.base_id)
            .field("table_id", &self.table_id)
            .finish()
    }
}

/// Which credential values were present when a profile turned out incomplete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Missing {
    pub token: bool,
    pub base: bool,
    pub table: bool,
}
