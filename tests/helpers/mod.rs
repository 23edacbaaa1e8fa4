// ==========================================
// Integration test helpers
// ==========================================

// each test binary uses a different slice of the helpers
#![allow(dead_code)]

pub mod fixtures;
