//! Program assembly.
//!
//! Concatenates the four rendered segments in their fixed order and writes
//! the result. The destination is written through a temporary file in the
//! same directory and renamed into place, so an interrupted run never
//! leaves a truncated program behind.

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use crate::render::Segment;

/// Permissions of the written program on Unix
#[cfg(unix)]
const PROGRAM_MODE: u32 = 0o644;

/// The terminal artifact of one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedProgram {
    segments: [Segment; 4],
}

/// Concatenate segments in order: imports, protocols, orchestration, entry.
///
/// No validation happens here; every segment was rendered from a validated
/// configuration.
pub fn assemble(
    imports: Segment,
    protocols: Segment,
    orchestration: Segment,
    entry: Segment,
) -> GeneratedProgram {
    GeneratedProgram {
        segments: [imports, protocols, orchestration, entry],
    }
}

impl GeneratedProgram {
    /// Segments in output order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Stream every segment, in order, into `writer`
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> std::io::Result<()> {
        for segment in &self.segments {
            debug!("Writing {} segment ({} lines)", segment.kind().as_str(), segment.lines().len());
            segment.write_to(writer)?;
        }
        Ok(())
    }

    /// The full program text
    pub fn render(&self) -> String {
        self.segments.iter().map(Segment::render).collect()
    }

    /// Write the program to `path`, replacing any existing file
    pub fn persist(&self, path: &Path) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(dir)
            .wrap_err_with(|| format!("Failed to create a temporary file in '{}'", dir.display()))?;

        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            self.write_to(&mut writer)
                .wrap_err_with(|| format!("Failed to write program for '{}'", path.display()))?;
            writer
                .flush()
                .wrap_err_with(|| format!("Failed to flush program for '{}'", path.display()))?;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = temp.as_file().metadata()?.permissions();
            perms.set_mode(PROGRAM_MODE);
            temp.as_file().set_permissions(perms)?;
        }

        temp.persist(path)
            .wrap_err_with(|| format!("Failed to move program into '{}'", path.display()))?;

        info!("Wrote generated program to {:?}", path);
        Ok(())
    }
}
