pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

// stamped by the release build, if at all
pub const COMMIT: Option<&str> = option_env!("WOA_COMMIT");
pub const BUILD_DATE: Option<&str> = option_env!("WOA_BUILD_DATE");

pub fn version() -> String {
    format!(
        "{} {}\n  commit: {}\n  built:  {}",
        PKG_NAME,
        PKG_VERSION,
        COMMIT.unwrap_or("none"),
        BUILD_DATE.unwrap_or("unknown")
    )
}
