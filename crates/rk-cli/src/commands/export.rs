use std::path::Path;

pub fn run(file: &Path, output: Option<&Path>) -> Result<(), String> {
    let world = super::load_file(file)?;

    let content = serde_json::to_string_pretty(&world)
        .map_err(|e| format!("JSON serialization error: {e}"))?;

    super::write_output(&content, output)
}
