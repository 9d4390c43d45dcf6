//! Rasterizes one vector asset with resvg.
use resvg::{tiny_skia, usvg};
use std::fs;

use crate::{
    error::{EmojikitError, Result},
    raster::planner::ConversionJob,
};

/// Render one job's source SVG to a PNG at the target pixel width, aspect
/// ratio preserved. Overwrites any existing destination file.
pub fn rasterize(job: &ConversionJob) -> Result<()> {
    let data = fs::read(&job.source)?;

    let options = usvg::Options::default();
    let tree = usvg::Tree::from_data(&data, &options)
        .map_err(|err| render_error(job, err.to_string()))?;

    let size = tree.size();
    let scale = job.target_width as f32 / size.width();
    let height = (size.height() * scale).ceil() as u32;

    let Some(mut pixmap) = tiny_skia::Pixmap::new(job.target_width, height)
    else {
        return Err(render_error(job, "could not allocate pixmap".into()));
    };

    let transform = usvg::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap
        .save_png(&job.destination)
        .map_err(|err| render_error(job, err.to_string()))?;

    Ok(())
}

fn render_error(job: &ConversionJob, message: String) -> EmojikitError {
    EmojikitError::RenderError {
        path: job.source.display().to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="36" height="36" viewBox="0 0 36 36"><circle cx="18" cy="18" r="16" fill="#ffcc4d"/></svg>"##;

    fn job(tmp: &TempDir, target_width: u32) -> ConversionJob {
        let source = tmp.path().join("grinning.svg");
        fs::write(&source, SVG).unwrap();

        ConversionJob {
            source,
            destination: tmp.path().join("grinning.png"),
            target_width,
        }
    }

    // PNG layout: 8 byte signature, then the IHDR chunk with big-endian
    // width at offset 16 and height at offset 20
    fn png_dimensions(bytes: &[u8]) -> (u32, u32) {
        let width = u32::from_be_bytes(bytes[16..20].try_into().unwrap());
        let height = u32::from_be_bytes(bytes[20..24].try_into().unwrap());
        (width, height)
    }

    #[test]
    fn renders_a_png_at_the_target_width() {
        let tmp = TempDir::new().unwrap();
        let job = job(&tmp, 64);

        rasterize(&job).unwrap();

        let bytes = fs::read(&job.destination).unwrap();
        assert_eq!(&bytes[..4], &[0x89, 0x50, 0x4e, 0x47]);
        assert_eq!(png_dimensions(&bytes), (64, 64));
    }

    #[test]
    fn overwrites_an_existing_destination() {
        let tmp = TempDir::new().unwrap();
        let job = job(&tmp, 32);

        fs::write(&job.destination, "stale contents").unwrap();

        rasterize(&job).unwrap();

        let bytes = fs::read(&job.destination).unwrap();
        assert_eq!(&bytes[..4], &[0x89, 0x50, 0x4e, 0x47]);
    }

    #[test]
    fn fails_on_an_invalid_source() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("broken.svg");
        fs::write(&source, "not an svg").unwrap();

        let result = rasterize(&ConversionJob {
            source,
            destination: tmp.path().join("broken.png"),
            target_width: 64,
        });

        assert!(matches!(
            result,
            Err(EmojikitError::RenderError { .. })
        ));
    }
}
