//! Output formatting - plaintext and JSON.

use serde_json::json;

use crate::extract::RecordDef;

/// Renders records as plain text.
pub fn render_plain(records: &[RecordDef]) -> String {
    if records.is_empty() {
        return "No enum records found.\n".to_string();
    }

    let mut out = format!("ENUM RECORDS ({}):\n", records.len());
    for r in records {
        let location = if r.module_path.is_empty() {
            format!("{}:{}", r.file, r.line)
        } else {
            format!("{}:{} ({})", r.file, r.line, r.module_path)
        };
        let value_type = r.value_type.as_deref().unwrap_or("?");
        out.push_str(&format!("- {}<{}> at {}\n", r.type_name, value_type, location));
        for m in &r.members {
            let derived = m.derived.as_deref().unwrap_or("(zero)");
            out.push_str(&format!("    {} = {}\n", m.field, derived));
        }
        for p in &r.problems {
            out.push_str(&format!("    ! {}\n", p));
        }
    }
    out
}

/// Renders records as a JSON document.
pub fn render_json(records: &[RecordDef], casing: &str) -> serde_json::Result<String> {
    let invalid = records.iter().filter(|r| !r.is_valid()).count();
    serde_json::to_string_pretty(&json!({
        "casing": casing,
        "record_count": records.len(),
        "invalid_count": invalid,
        "records": records,
    }))
}
