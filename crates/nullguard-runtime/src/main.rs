//! nullguard CLI
//!
//! Checks one call against a declaration file:
//! `nullguard <policy.yaml> <Type> <member> [Param=value|Param=null ...]`
//! Use `new` as the member to check a constructor. Prints `continue` or the
//! failure message; exits non-zero on failure.

use std::process::ExitCode;

use serde_json::Value;
use tracing_subscriber::{fmt, EnvFilter};

use nullguard_core::error::{NullGuardError, Result};
use nullguard_core::policy::{CallTarget, TypeRef};
use nullguard_runtime::{config, Runtime};

const USAGE: &str = "usage: nullguard <policy.yaml> <Type> <member|new> [Param=value|Param=null ...]";

fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => {
            println!("continue");
            ExitCode::SUCCESS
        }
        Err(e) if e.is_absence() => {
            println!("{e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{} {e}", e.code().as_str());
            ExitCode::from(2)
        }
    }
}

fn run(args: &[String]) -> Result<()> {
    let [path, ty, member, rest @ ..] = args else {
        return Err(NullGuardError::BadConfig(USAGE.into()));
    };

    let cfg = config::load_from_file(path)?;
    let runtime = Runtime::new(&cfg)?;

    let (params, values) = parse_params(rest)?;
    let target = if member == "new" {
        CallTarget::constructor(ty.as_str(), params)
    } else {
        CallTarget::method(ty.as_str(), member.as_str(), params)
    };

    tracing::debug!(call = %target, "checking");
    runtime.guard().check(&target, &values)
}

fn parse_params(raw: &[String]) -> Result<(Vec<TypeRef>, Vec<Value>)> {
    let mut params = Vec::with_capacity(raw.len());
    let mut values = Vec::with_capacity(raw.len());
    for s in raw {
        let (ty, v) = s.split_once('=').ok_or_else(|| {
            NullGuardError::BadConfig(format!("invalid argument: {s} (expected Type=value)"))
        })?;
        params.push(TypeRef::new(ty));
        values.push(if v == "null" {
            Value::Null
        } else {
            Value::String(v.to_string())
        });
    }
    Ok((params, values))
}
