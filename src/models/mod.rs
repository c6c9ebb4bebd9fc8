/// # Greeting Response
///
/// Static greeting message paired with the wall-clock time the request was
/// handled. Response shape for `GET /`.
pub mod greeting;

/// # Service Info Response
///
/// Service name, version and runtime environment metadata reported by
/// `GET /api/info`.
pub mod info;
