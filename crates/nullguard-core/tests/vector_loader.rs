//! JSON scenario loader shared by resolver tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use serde::Deserialize;

use nullguard_core::policy::{CallTarget, Policy, TargetKind, TypeRef};

#[derive(Debug, Deserialize)]
pub struct TestVector {
    pub description: String,
    pub policy: Policy,
    pub target: TargetData,
    pub args: Vec<serde_json::Value>,
    #[serde(default)]
    pub expect_error: Option<ExpectError>,
}

#[derive(Debug, Deserialize)]
pub struct ExpectError {
    pub code: String,
    pub position: usize,
    pub message_prefix: String,
}

#[derive(Debug, Deserialize)]
pub struct TargetData {
    #[serde(rename = "type")]
    pub declaring: String,
    pub kind: TargetKind,
    #[serde(default)]
    pub name: String,
    pub params: Vec<String>,
}

impl TargetData {
    pub fn build(&self) -> CallTarget {
        let params = self.params.iter().map(|p| TypeRef::new(p.as_str())).collect();
        match self.kind {
            TargetKind::Constructor => CallTarget::constructor(self.declaring.as_str(), params),
            TargetKind::Method => {
                CallTarget::method(self.declaring.as_str(), self.name.as_str(), params)
            }
        }
    }
}

pub fn load(name: &str) -> TestVector {
    let s = std::fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}
