//! JSON Schema validation for scene configs.
//!
//! AI output is untrusted: before a generated scene is returned to a client
//! it is checked against the embedded scene schema (JSON Schema Draft 7).
//! Rule-based scenes go through the same check in tests to keep the schema
//! and the builders in sync.
//!
//! The schema is embedded at compile time from `schemas/scene-config.json`.

use serde_json::Value;

/// Validate a JSON object against a JSON schema.
///
/// # Returns
/// * `Ok(())` if valid
/// * `Err(Vec<String>)` with every violation if invalid
pub fn validate(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    let validator = jsonschema::draft7::new(schema)
        .map_err(|e| vec![format!("Invalid schema: {}", e)])?;

    let errors: Vec<String> = validator.iter_errors(data).map(|e| e.to_string()).collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Even simpler: just true/false.
pub fn is_valid(schema: &Value, data: &Value) -> bool {
    jsonschema::draft7::is_valid(schema, data)
}

/// Validate a candidate scene config against the embedded schema.
pub fn validate_scene(data: &Value) -> Result<(), Vec<String>> {
    validate(&scene_schema(), data)
}

/// Quick check against the embedded scene schema.
pub fn is_valid_scene(data: &Value) -> bool {
    is_valid(&scene_schema(), data)
}

/// The embedded scene schema, parsed.
pub fn scene_schema() -> Value {
    serde_json::from_str(include_str!("../../schemas/scene-config.json"))
        .expect("Invalid embedded schema")
}
