//! Versioned path prefixes for REST modules.

/// Returns a formatter producing `/v{version}/{module}` for `module`.
///
/// ```rust
/// let users = structenum::versionable_prefix("users");
/// assert_eq!(users(1), "/v1/users");
/// ```
pub fn versionable_prefix(module: impl Into<String>) -> impl Fn(u32) -> String {
    let module = module.into();
    move |version| format!("/v{version}/{module}")
}
