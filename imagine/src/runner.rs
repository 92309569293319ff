use std::io::Write;

use color_eyre::Result;
use engine::{GenerationRequest, ImageModel};
use log::warn;

use crate::output;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_GENERATION_FAILED: u8 = 1;

/// Sends `request` to `model` once and reports the outcome.
///
/// The url list goes to `out` on success. Any generation failure is written to
/// `err` as a single line and turned into [`EXIT_GENERATION_FAILED`]. Only I/O
/// failures on the two writers are returned as errors.
pub async fn run(
    model: &dyn ImageModel,
    request: &GenerationRequest,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<u8> {
    match model.generate(request).await {
        Ok(urls) => {
            writeln!(out, "{}", output::url_list(&urls)?)?;
            out.flush()?;
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            warn!("Generation failed: {e:?}");
            writeln!(err, "Error generating image: {e}")?;
            err.flush()?;
            Ok(EXIT_GENERATION_FAILED)
        }
    }
}
