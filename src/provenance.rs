use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Software {
    pub name: String,
    pub version: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Os {
    pub system: String,
    pub machine: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Environment {
    pub os: Os,
}

/// One row of a tree sequence's provenance table, following the tskit
/// provenance schema.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProvenanceRecord {
    pub schema_version: String,
    pub software: Software,
    pub parameters: serde_json::Value,
    pub environment: Environment,
}

impl ProvenanceRecord {
    pub fn new(software_name: &str, parameters: serde_json::Value) -> Self {
        Self {
            schema_version: "1.0.0".to_string(),
            software: Software {
                name: software_name.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            parameters,
            environment: Environment {
                os: Os {
                    system: std::env::consts::OS.to_string(),
                    machine: std::env::consts::ARCH.to_string(),
                },
            },
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Record of a command-line invocation.
pub fn command_line_record(command: &str, args: &[String]) -> ProvenanceRecord {
    ProvenanceRecord::new(
        "stdgrimmsim",
        serde_json::json!({ "command": command, "args": args }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_record_has_schema_fields() {
        let args = vec!["-q".to_string(), "ZweBerg".to_string(), "pop_0:2".to_string()];
        let rec = command_line_record("stdgrimmsim", &args);
        let v: serde_json::Value = serde_json::from_str(&rec.to_json().unwrap()).unwrap();
        assert_eq!(v["schema_version"], "1.0.0");
        assert_eq!(v["software"]["name"], "stdgrimmsim");
        assert_eq!(v["software"]["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(v["parameters"]["command"], "stdgrimmsim");
        assert_eq!(v["parameters"]["args"][1], "ZweBerg");
        assert_eq!(v["environment"]["os"]["system"], std::env::consts::OS);
        assert!(v["environment"].get("libraries").is_none());
    }
}
