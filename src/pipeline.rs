use std::{
    fmt,
    path::{Path, PathBuf},
};

use crate::{
    foundation::{core::IconSize, error::IconResult},
    layout::IconLayout,
    output::write_png,
    render::{cpu::render_base, resample::downscale},
};

/// Where a generation run writes its files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateSettings {
    /// Output directory. Must already exist.
    pub out_dir: PathBuf,
}

impl Default for GenerateSettings {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
        }
    }
}

impl GenerateSettings {
    /// Destination of the icon of `size`.
    pub fn path_for(&self, size: IconSize) -> PathBuf {
        self.out_dir.join(size.file_name())
    }
}

/// Milestones reported while a run makes progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Progress {
    /// One icon file is fully written.
    Wrote {
        /// Size of the icon just written.
        size: IconSize,
        /// Where it was written.
        path: PathBuf,
    },
    /// Every icon file is written.
    Finished,
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Progress::Wrote { size, .. } => write!(f, "✓ {} created", size.file_name()),
            Progress::Finished => f.write_str("✅ icons created successfully"),
        }
    }
}

/// Paths of the files written by [`generate_icons`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedIcons {
    /// The 512px icon.
    pub base: PathBuf,
    /// The 192px icon.
    pub touch: PathBuf,
}

/// Draw the note icon, write it at 512px, then write its 192px downscale.
///
/// `on_progress` fires after each file is written and once more at the end.
/// Any failure stops the run immediately; a 512px file written before the
/// failure is left in place.
#[tracing::instrument(skip_all, fields(out_dir = %settings.out_dir.display()))]
pub fn generate_icons(
    settings: &GenerateSettings,
    mut on_progress: impl FnMut(&Progress),
) -> IconResult<GeneratedIcons> {
    let base = render_base(&IconLayout::NOTE)?;
    let base_path = write_icon(settings, IconSize::Base, &base, &mut on_progress)?;

    let touch = downscale(&base, IconSize::Touch)?;
    let touch_path = write_icon(settings, IconSize::Touch, &touch, &mut on_progress)?;

    on_progress(&Progress::Finished);
    Ok(GeneratedIcons {
        base: base_path,
        touch: touch_path,
    })
}

fn write_icon(
    settings: &GenerateSettings,
    size: IconSize,
    img: &image::RgbImage,
    on_progress: &mut impl FnMut(&Progress),
) -> IconResult<PathBuf> {
    let path = settings.path_for(size);
    write_png(img, &path)?;
    on_progress(&Progress::Wrote {
        size,
        path: path.clone(),
    });
    Ok(path)
}

/// Convenience wrapper writing into `out_dir` without progress reporting.
pub fn generate_icons_in(out_dir: impl AsRef<Path>) -> IconResult<GeneratedIcons> {
    let settings = GenerateSettings {
        out_dir: out_dir.as_ref().to_path_buf(),
    };
    generate_icons(&settings, |_| {})
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
