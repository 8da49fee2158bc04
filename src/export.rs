use crate::core::SessionSummary;
use std::path::Path;

pub fn get_json_data(summary: &SessionSummary) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(summary)
}

pub fn export_summary(path: &Path, summary: &SessionSummary) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, get_json_data(summary)?)?;
    Ok(())
}
