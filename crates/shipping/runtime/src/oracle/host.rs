//! Host progression and session state.

use shipping_core::{CommerceOracle, SessionOracle};

/// Runtime implementation of CommerceOracle holding the current licence level
pub struct CommerceOracleImpl {
    level: u32,
}

impl CommerceOracleImpl {
    pub fn new(level: u32) -> Self {
        Self { level }
    }
}

impl CommerceOracle for CommerceOracleImpl {
    fn commerce_level(&self) -> u32 {
        self.level
    }
}

/// Runtime implementation of SessionOracle
pub struct SessionOracleImpl {
    authoritative: bool,
}

impl SessionOracleImpl {
    /// Session where this process owns the world.
    pub fn host() -> Self {
        Self {
            authoritative: true,
        }
    }

    /// Session joined as a non-authoritative participant.
    pub fn client() -> Self {
        Self {
            authoritative: false,
        }
    }
}

impl SessionOracle for SessionOracleImpl {
    fn is_authoritative_host(&self) -> bool {
        self.authoritative
    }
}
