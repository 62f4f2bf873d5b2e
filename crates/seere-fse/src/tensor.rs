//! Weight-tensor container integration.

use serde::{Deserialize, Serialize};
use seere_core::{CompressionRatio, Error, Result};
use tracing::debug;

use crate::bitstream::BitSink;
use crate::encoder;
use crate::layout;
use crate::normalize::normalize_frequencies;
use crate::quant::FseQuant;
use crate::table::EncodeTable;
use crate::MAX_BUFFER_SIZE;

/// Storage kind tag for a tensor's backing buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageKind {
    /// Raw element bytes as produced by the model.
    Raw,
    /// FSE-compressed buffer in the layout of
    /// [`serialize_to_buffer`](crate::serialize_to_buffer).
    Fse,
}

/// A named tensor and its backing buffer.
///
/// The shape is retained across compression, so the original logical byte
/// size stays derivable for round-trip validation after the buffer is
/// replaced.
#[derive(Debug, Clone)]
pub struct WeightTensor {
    name: String,
    shape: Vec<usize>,
    kind: StorageKind,
    data: Vec<u8>,
}

impl WeightTensor {
    /// Wrap a raw tensor buffer.
    pub fn new(name: impl Into<String>, shape: Vec<usize>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            shape,
            kind: StorageKind::Raw,
            data,
        }
    }

    /// Tensor name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tensor shape, unchanged by compression.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Current storage kind.
    #[inline]
    pub fn kind(&self) -> StorageKind {
        self.kind
    }

    /// The backing buffer.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Current byte size of the backing buffer.
    #[inline]
    pub fn byte_size(&self) -> usize {
        self.data.len()
    }

    fn install_compressed(&mut self, buffer: Vec<u8>) {
        self.data = buffer;
        self.kind = StorageKind::Fse;
    }
}

/// Statistics reported after one tensor compression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressionStats {
    /// Byte size of the original buffer.
    pub original_size: usize,
    /// Byte size of the installed compressed buffer.
    pub compressed_size: usize,
    /// Alphabet size of the coded stream.
    pub alphabet_size: usize,
    /// Coding table exponent that was chosen.
    pub table_log: u8,
    /// Achieved ratio (original / compressed).
    pub ratio: f64,
}

/// Compress a tensor's storage from the quantizer's descriptor.
///
/// Runs the whole pipeline for one tensor: normalize the counts, build
/// the coding tables, drive the state machine over the symbol stream, and
/// serialize into a buffer bounded by the tensor's current byte size.
///
/// The replacement is atomic. On success the tensor carries the
/// right-sized compressed buffer tagged [`StorageKind::Fse`]; on any
/// failure it keeps its original buffer and kind, and the caller decides
/// whether to skip this tensor or abort the conversion.
pub fn compress(tensor: &mut WeightTensor, mut quant: FseQuant) -> Result<CompressionStats> {
    let capacity = tensor.byte_size();
    if capacity == 0 || capacity > MAX_BUFFER_SIZE {
        return Err(Error::invalid_input(format!(
            "destination capacity {capacity} out of range"
        )));
    }

    let table_log = normalize_frequencies(quant.frequency_mut())?;
    let table = EncodeTable::build(quant.frequency(), table_log)?;

    let mut sink = BitSink::with_capacity(16 * quant.symbols().len() as u64);
    encoder::encode(&table, quant.symbols(), &mut sink)?;

    let buffer = layout::serialize_to_buffer(&quant, table_log, &sink, capacity)?;

    let ratio = CompressionRatio::new(capacity, buffer.len());
    if !ratio.is_effective() {
        return Err(Error::Ineffective {
            original: capacity,
            compressed: buffer.len(),
        });
    }

    let stats = CompressionStats {
        original_size: capacity,
        compressed_size: buffer.len(),
        alphabet_size: quant.alphabet_size(),
        table_log,
        ratio: ratio.ratio(),
    };
    debug!(
        tensor = tensor.name(),
        original = stats.original_size,
        compressed = stats.compressed_size,
        ratio = stats.ratio,
        "fse compressed"
    );
    tensor.install_compressed(buffer);
    Ok(stats)
}
