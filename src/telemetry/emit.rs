use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use std::io::{self, Write};

#[derive(Serialize)]
pub struct Meta {
    pub generated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u128>,
}

impl Meta {
    pub fn now() -> Self {
        Self { generated_at: Utc::now(), duration_ms: None }
    }
}

fn envelope<T: Serialize>(op: &str, apply: bool, payload: &T, meta: &Meta) -> serde_json::Value {
    if apply {
        json!({ "op": op, "apply": true, "result": payload, "meta": meta })
    } else {
        json!({ "op": op, "apply": false, "plan": payload, "meta": meta })
    }
}

pub fn print_plan<T: Serialize>(op: &str, plan: &T, meta: Meta) -> Result<()> {
    write_line(&envelope(op, false, plan, &meta))
}

pub fn print_result<T: Serialize>(op: &str, result: &T, meta: Meta) -> Result<()> {
    write_line(&envelope(op, true, result, &meta))
}

fn write_line(env: &serde_json::Value) -> Result<()> {
    let mut out = io::stdout();
    serde_json::to_writer(&mut out, env)?;
    writeln!(&mut out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plan_envelope_carries_op_and_payload() {
        let env = envelope("download", false, &json!({"splits": 3}), &Meta::now());
        let s = serde_json::to_string(&env).unwrap();
        assert!(s.contains("\"op\":\"download\""));
        assert!(s.contains("\"apply\":false"));
        assert!(s.contains("\"plan\""));
        assert!(s.contains("\"generated_at\""));
    }

    #[test]
    fn result_envelope_uses_result_key() {
        let env = envelope("process", true, &json!({"records": 7}), &Meta::now());
        let s = serde_json::to_string(&env).unwrap();
        assert!(s.contains("\"apply\":true"));
        assert!(s.contains("\"result\""));
        assert!(!s.contains("\"plan\""));
    }
}
