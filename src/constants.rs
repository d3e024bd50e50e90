//! Central constants for the opskit utilities

/// Defaults for the `gh` wrapper
pub mod github {
    /// Executable invoked for every repository operation
    pub const GH_BIN: &str = "gh";

    /// Environment variable overriding the executable path
    pub const GH_BIN_ENV: &str = "GHX_GH_BIN";

    /// Upper bound on repositories fetched by `gh repo list`
    pub const REPO_LIST_LIMIT: usize = 1000;

    /// JSON projection requested from `gh repo list`
    pub const REPO_JSON_FIELDS: &str = "name,visibility,url,updatedAt,createdAt,pushedAt";

    /// JSON projection requested from `gh secret list`
    pub const SECRET_JSON_FIELDS: &str = "name,updatedAt";

    /// JSON projection requested from `gh variable list`
    pub const VARIABLE_JSON_FIELDS: &str = "name,value,updatedAt";

    /// Month length used by the "updated within / before" filters
    pub const DAYS_PER_MONTH: i64 = 30;
}

/// Defaults for the compose scaffolder
pub mod scaffold {
    /// Directory under the home directory holding every scaffolded app
    pub const NAMESPACE_DIR: &str = "dockerApp";

    pub const COMPOSE_FILE: &str = "compose.yaml";

    pub const ENV_FILE: &str = ".env";
}

/// Defaults for the Cloudflare DNS wrapper
pub mod dns {
    pub const TOKEN_ENV: &str = "CLOUDFLARE_API_TOKEN";

    pub const ZONE_ENV: &str = "CLOUDFLARE_ZONE_ID";

    /// TTL of 1 means "automatic" to Cloudflare
    pub const DEFAULT_TTL: u32 = 1;

    pub const DEFAULT_PROXIED: bool = false;
}
