/// Capability to extract pixel dimensions from an encoded image.
///
/// Container assembly has no opinion on the image encoding beyond needing
/// a width and height, so decoding stays behind this seam and the builder
/// can be tested with a fake probe returning canned dimensions.
pub trait SizeProbe {
    /// Return `(width, height)` in pixels for the encoded image in `data`,
    /// or a human-readable reason why it could not be decoded.
    fn probe(&self, data: &[u8]) -> Result<(u32, u32), String>;
}
