//! Policy declaration loader (strict parsing).

pub mod schema;

use std::fs;

use nullguard_core::error::{NullGuardError, Result};

pub use schema::{MemberDecl, PolicyConfig, TypeDecl};

pub fn load_from_file(path: &str) -> Result<PolicyConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| NullGuardError::Internal(format!("read declarations failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<PolicyConfig> {
    let cfg: PolicyConfig = serde_yaml::from_str(s)
        .map_err(|e| NullGuardError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
