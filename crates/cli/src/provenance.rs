use serde_json::{json, Value};

/// Metadata block for reports: code revision and library version.
pub fn block() -> Value {
    json!({
        "code_rev": current_git_rev(),
        "version": shoelace::VERSION,
    })
}

/// Revision stamped at build time through `GIT_COMMIT`; "unknown" when unset.
pub fn current_git_rev() -> &'static str {
    match option_env!("GIT_COMMIT") {
        Some(rev) if !rev.is_empty() => rev,
        _ => "unknown",
    }
}
