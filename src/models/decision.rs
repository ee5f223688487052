use serde::{Deserialize, Serialize};

/// Outcome of one decision cycle.
///
/// `duration_seconds` is zero exactly when `should_irrigate` is false; the
/// constructors are the only way the engine builds one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub should_irrigate: bool,
    pub duration_seconds: u32,
}

impl Decision {
    pub fn skip() -> Self {
        Self {
            should_irrigate: false,
            duration_seconds: 0,
        }
    }

    pub fn irrigate(duration_seconds: u32) -> Self {
        Self {
            should_irrigate: true,
            duration_seconds,
        }
    }

    pub fn as_str(&self) -> &'static str {
        if self.should_irrigate {
            "IRRIGATE"
        } else {
            "SKIP"
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} for {} seconds", self.as_str(), self.duration_seconds)
    }
}
