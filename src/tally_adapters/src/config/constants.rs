pub mod env {
    pub const ENV_PREFIX: &str = "TALLY";
    pub const ENV_SEPARATOR: &str = "__";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
}

/// Optional settings file, looked up relative to the working directory.
pub const CONFIG_FILE: &str = "config/tally";

pub const INVOICES_LISTING_PATH: &str = "/dashboard/invoices";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub const MAX_DB_CONNECTIONS: u32 = 5;
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
