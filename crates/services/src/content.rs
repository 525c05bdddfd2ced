use std::path::Path;

use roadmap_core::model::Roadmap;

use crate::error::ContentError;

/// Read roadmap content from a JSON file, or the built-in roadmap when no
/// path is given.
///
/// # Errors
///
/// Returns `ContentError` if the file cannot be read or is not a valid roadmap.
pub fn load_roadmap(path: Option<&Path>) -> Result<Roadmap, ContentError> {
    let Some(path) = path else {
        return Ok(Roadmap::builtin());
    };

    let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let roadmap = Roadmap::from_json(&raw)?;
    tracing::info!(
        path = %path.display(),
        phases = roadmap.phases.len(),
        "loaded roadmap content"
    );
    Ok(roadmap)
}
