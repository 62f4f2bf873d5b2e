//! Compressed-buffer byte layout.
//!
//! The serialized form is a hard contract with the decoder and must hold
//! byte for byte. All integers are little-endian at their natural width.
//!
//! ```text
//! Offset  Size        Field
//! ──────  ────        ─────
//! 0       2           alphabet_size (u16)
//! 2       2           table_log (u16)
//! 4       4           chunk_count_plus_one (u32): completed chunks + 1,
//!                     counting the final partial word
//! 8       4·size      normalized frequency table (u32 each)
//! ·       0..6        u16(0) padding to the next 8-byte boundary
//! ·       4·size      centroid table (f32 each)
//! ·       0..6        u16(0) padding to the next 8-byte boundary
//! ·       8·chunks    completed bit-sink chunks (u64 each, completion order)
//! ·       8           final partial chunk (u64, flushed)
//! ·       1           valid bits in the final partial chunk (u8)
//! ```

use seere_core::Result;

use crate::bitstream::BitSink;
use crate::quant::FseQuant;
use crate::writer::LayoutWriter;

const ALIGN: usize = 8;

/// Serialize the full compression result into a buffer bounded by
/// `capacity` bytes (the destination tensor's original byte size).
///
/// Fails with [`BufferTooSmall`](seere_core::Error::BufferTooSmall) the
/// moment any field would overflow the budget; nothing truncated is ever
/// returned.
pub fn serialize_to_buffer(
    quant: &FseQuant,
    table_log: u8,
    sink: &BitSink,
    capacity: usize,
) -> Result<Vec<u8>> {
    let mut w = LayoutWriter::with_capacity(capacity);

    w.write_u16(quant.alphabet_size() as u16)?;
    w.write_u16(u16::from(table_log))?;
    w.write_u32(sink.chunks().len() as u32 + 1)?;

    for &freq in quant.frequency() {
        w.write_u32(freq)?;
    }
    w.pad_to(ALIGN)?;

    for &centroid in quant.centroids() {
        w.write_f32(centroid)?;
    }
    w.pad_to(ALIGN)?;

    for &chunk in sink.chunks() {
        w.write_u64(chunk)?;
    }
    w.write_u64(sink.current_chunk())?;
    w.write_u8(sink.current_bit_count())?;

    Ok(w.into_bytes())
}
