use serde::Serialize;

/// Body returned by the session probe.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatus {
    pub authenticated: bool,
}
