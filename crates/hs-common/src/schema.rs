//! Schema versioning for serialized payloads and artifacts.

/// Version stamped into JSON reports and persisted artifacts.
///
/// Bump the major component when a payload or artifact changes shape
/// incompatibly; loaders reject artifacts from a different major version.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Major component of [`SCHEMA_VERSION`].
pub fn schema_major() -> &'static str {
    SCHEMA_VERSION.split('.').next().unwrap_or(SCHEMA_VERSION)
}

/// Whether an artifact's schema version is compatible with this build.
pub fn is_compatible(version: &str) -> bool {
    version.split('.').next() == Some(schema_major())
}
