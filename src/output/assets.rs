use std::{
    fs,
    io::Cursor,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::{
    document::html::LOGO_REL_PATH,
    foundation::error::{OverlayError, OverlayResult},
};

/// How the logo ended up in the output tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StagedAs {
    /// PNG source (or an unrecognized format) copied byte for byte.
    Copied,
    /// Decoded and re-encoded so the document's fixed `.png` reference holds.
    Transcoded,
}

/// Resolve `src` to an absolute path and make sure it is a readable file.
pub fn resolve_logo(src: &Path) -> OverlayResult<PathBuf> {
    let abs = std::path::absolute(src).unwrap_or_else(|_| src.to_path_buf());
    if !abs.is_file() {
        return Err(OverlayError::asset_not_found(abs));
    }
    Ok(abs)
}

/// Place the logo at `<output_dir>/assets/logo.png`, replacing any previous one.
#[tracing::instrument(skip_all, fields(src = %src.display()))]
pub fn stage_logo(src: &Path, output_dir: &Path) -> OverlayResult<(PathBuf, StagedAs)> {
    let src = resolve_logo(src)?;
    let dst = output_dir.join(LOGO_REL_PATH);
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create assets dir '{}'", parent.display()))?;
    }

    let bytes = fs::read(&src).with_context(|| format!("read logo '{}'", src.display()))?;
    let staged = match image::guess_format(&bytes) {
        Ok(image::ImageFormat::Png) => {
            fs::write(&dst, &bytes).with_context(|| format!("write '{}'", dst.display()))?;
            StagedAs::Copied
        }
        Ok(format) => {
            let png = transcode_to_png(&bytes)?;
            tracing::debug!(?format, "transcoded logo to png");
            fs::write(&dst, png).with_context(|| format!("write '{}'", dst.display()))?;
            StagedAs::Transcoded
        }
        Err(_) => {
            tracing::warn!("unrecognized logo format, copying as-is");
            fs::write(&dst, &bytes).with_context(|| format!("write '{}'", dst.display()))?;
            StagedAs::Copied
        }
    };
    Ok((dst, staged))
}

fn transcode_to_png(bytes: &[u8]) -> OverlayResult<Vec<u8>> {
    let img = image::load_from_memory(bytes).context("decode logo image")?;
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode logo as png")?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/output/assets.rs"]
mod tests;
