use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::{
    composition::model::OverlayConfig,
    document::html::{DOCUMENT_FILE_NAME, render_document},
    foundation::error::OverlayResult,
    output::{
        assets::{StagedAs, resolve_logo, stage_logo},
        fingerprint::{Fingerprint, fingerprint_document},
    },
    timeline::compiler::compile,
};

/// Where a generation run put its files.
#[derive(Clone, Debug)]
pub struct GeneratedOverlay {
    /// Canonical absolute output directory.
    pub output_dir: PathBuf,
    /// Written `overlay.html`.
    pub document_path: PathBuf,
    /// Staged `assets/logo.png`.
    pub logo_path: PathBuf,
    /// Whether the logo was copied or converted.
    pub logo_staged_as: StagedAs,
    /// Fingerprint of the document bytes.
    pub fingerprint: Fingerprint,
}

/// Build the overlay document and stage the logo under `output_dir`.
///
/// Nothing is written when the config is invalid or the logo is missing. Re-running with the
/// same inputs overwrites the previous output with identical bytes.
#[tracing::instrument(skip(config), fields(logo = %logo_path.display(), out = %output_dir.display()))]
pub fn generate(
    config: &OverlayConfig,
    logo_path: &Path,
    output_dir: &Path,
) -> OverlayResult<GeneratedOverlay> {
    config.validate()?;
    let offsets = compile(&config.timeline)?;
    let doc = render_document(&config.style, &offsets);

    resolve_logo(logo_path)?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir '{}'", output_dir.display()))?;
    let output_dir = output_dir
        .canonicalize()
        .with_context(|| format!("canonicalize '{}'", output_dir.display()))?;

    let (logo_dst, staged_as) = stage_logo(logo_path, &output_dir)?;

    let document_path = output_dir.join(DOCUMENT_FILE_NAME);
    write_atomic(&document_path, doc.as_bytes())?;

    let fingerprint = fingerprint_document(&doc);
    tracing::info!(
        document = %document_path.display(),
        %fingerprint,
        bytes = doc.len(),
        "overlay generated"
    );

    Ok(GeneratedOverlay {
        output_dir,
        document_path,
        logo_path: logo_dst,
        logo_staged_as: staged_as,
        fingerprint,
    })
}

fn write_atomic(path: &Path, bytes: &[u8]) -> OverlayResult<()> {
    let tmp = path.with_extension("html.tmp");
    fs::write(&tmp, bytes).with_context(|| format!("write '{}'", tmp.display()))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(anyhow::Error::new(e)
            .context(format!("move '{}' into place", path.display()))
            .into());
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/output/generate.rs"]
mod tests;
