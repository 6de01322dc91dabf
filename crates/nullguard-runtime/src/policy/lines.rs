//! Line numbers for diagnostic frames, taken from the declarations.

use std::collections::HashMap;

use nullguard_core::policy::{CallTarget, TypeRef};
use nullguard_core::resolve::{Frame, LineSuffix};

use crate::config::PolicyConfig;

/// Suffix source backed by `file`/`line` fields of the declarations.
/// Anything undeclared renders with the placeholder line.
#[derive(Debug, Default)]
pub struct DeclaredLines {
    files: HashMap<TypeRef, String>,
    lines: HashMap<CallTarget, u32>,
}

impl DeclaredLines {
    pub fn from_config(cfg: &PolicyConfig) -> Self {
        let mut out = Self::default();
        for decl in &cfg.types {
            if let Some(file) = &decl.file {
                out.files.insert(decl.type_ref(), file.clone());
            }
            for (target, m) in decl.members() {
                if let Some(line) = m.line {
                    out.lines.insert(target, line);
                }
            }
        }
        out
    }
}

impl LineSuffix for DeclaredLines {
    fn line_suffix(&self, target: &CallTarget) -> String {
        Frame::new(target)
            .file(self.files.get(target.declaring()).map(String::as_str))
            .line(self.lines.get(target).copied())
            .to_string()
    }
}
