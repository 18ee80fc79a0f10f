use crate::directory::{self, DirEntry, ENTRY_SIZE, HEADER_SIZE, MAX_DIMENSION};
use crate::error::IcoError;
use crate::probe::SizeProbe;

/// Largest image count a 16-bit directory header can announce.
const MAX_IMAGES: usize = u16::MAX as usize;

/// Assemble encoded images into a single ICO container.
///
/// # Arguments
/// * `images` - Encoded image buffers, in the order they should appear
/// * `probe` - Dimension extractor for the image encoding in use
///
/// # Returns
/// The complete ICO file contents on success. Any failure aborts the
/// whole build; no partial container is ever produced.
pub fn build<T, P>(images: &[T], probe: &P) -> Result<Vec<u8>, IcoError>
where
    T: AsRef<[u8]>,
    P: SizeProbe + ?Sized,
{
    if images.is_empty() {
        return Err(IcoError::EmptyInput);
    }
    if images.len() > MAX_IMAGES {
        return Err(IcoError::TooManyImages {
            count: images.len(),
        });
    }

    // Probe phase: every image is probed and validated before a single
    // output byte exists, so a corrupt input can never leave behind a
    // partial container. The first image's payload starts right after
    // the header and directory.
    let mut entries = Vec::with_capacity(images.len());
    let mut offset = (HEADER_SIZE + ENTRY_SIZE * images.len()) as u64;

    for (index, image) in images.iter().enumerate() {
        let data = image.as_ref();

        let (width, height) = probe
            .probe(data)
            .map_err(|reason| IcoError::DecodeFailed { index, reason })?;

        if !(1..=MAX_DIMENSION).contains(&width) || !(1..=MAX_DIMENSION).contains(&height) {
            return Err(IcoError::UnsupportedDimension {
                index,
                width,
                height,
            });
        }

        // Both the entry's byte length and every later offset must fit
        // in the format's 32-bit fields.
        let byte_len = data.len() as u64;
        if byte_len > u32::MAX as u64 - offset {
            return Err(IcoError::PayloadTooLarge { index });
        }

        entries.push(DirEntry {
            width,
            height,
            byte_len: byte_len as u32,
            offset: offset as u32,
        });
        offset += byte_len;
    }

    // Assembly phase: header, then each entry, then the payloads, all in
    // input order. `offset` has accumulated into the final file size.
    let mut out = Vec::with_capacity(offset as usize);
    directory::write_header(&mut out, images.len() as u16);
    for entry in &entries {
        entry.write_to(&mut out);
    }
    for image in images {
        out.extend_from_slice(image.as_ref());
    }

    Ok(out)
}
