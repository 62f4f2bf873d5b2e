//! Finite State Entropy compression for quantized model tensors.
//!
//! A quantizer reduces a weight tensor to a small alphabet of symbol
//! indices plus one reconstruction value (centroid) per symbol. This crate
//! entropy-codes that symbol stream with FSE, a tabled variant of
//! Asymmetric Numeral Systems, and packs the result into a single
//! self-describing buffer that replaces the tensor's raw storage.
//!
//! ## Pipeline
//!
//! ```text
//!  Quantizer ──symbols / counts / centroids──▶ FseQuant
//!                                                 │
//!                       normalize ──▶ EncodeTable build
//!                                                 │
//!                        encode (state machine) ──▶ BitSink
//!                                                 │
//!                            serialize ──▶ WeightTensor (StorageKind::Fse)
//! ```
//!
//! Each compression call owns all of its scratch tables; independent
//! tensors can be compressed from separate threads with no shared state.
//! The tensor is replaced atomically: any failure leaves the original
//! buffer in place.
//!
//! ## Example
//!
//! ```
//! use seere_fse::{compress, FseQuant, StorageKind, WeightTensor};
//!
//! let symbols: Vec<u16> = (0..4096).map(|i| (i % 7) as u16).collect();
//! let centroids: Vec<f32> = (0..7).map(|c| c as f32 * 0.125 - 0.4).collect();
//! let quant = FseQuant::from_symbols(symbols, centroids)?;
//!
//! let raw = vec![0u8; 4096 * 4];
//! let mut tensor = WeightTensor::new("layers.0.ffn.weight", vec![64, 64], raw);
//! let stats = compress(&mut tensor, quant)?;
//!
//! assert_eq!(tensor.kind(), StorageKind::Fse);
//! assert!(stats.compressed_size < stats.original_size);
//! # Ok::<(), seere_core::Error>(())
//! ```

mod bitstream;
mod encoder;
mod layout;
mod normalize;
mod quant;
mod table;
mod tensor;
mod writer;

pub use bitstream::{BitSink, CHUNK_BITS};
pub use encoder::encode;
pub use layout::serialize_to_buffer;
pub use normalize::normalize_frequencies;
pub use quant::FseQuant;
pub use seere_core::{Error, Result};
pub use table::{EncodeTable, SymbolTransition};
pub use tensor::{compress, CompressionStats, StorageKind, WeightTensor};
pub use writer::LayoutWriter;

/// Widest permitted coding table exponent; a `u16` state ranging over
/// `[table_size, 2 * table_size)` caps this at 15.
pub const MAX_TABLE_LOG: u8 = 15;

/// Largest alphabet a coding table can hold. Beyond the table size itself,
/// no all-nonzero frequency assignment exists.
pub const MAX_SYMBOLS: usize = 1 << MAX_TABLE_LOG;

/// Upper bound on a destination tensor buffer (2 GiB).
pub const MAX_BUFFER_SIZE: usize = 2 * 1024 * 1024 * 1024;

/// Spread step and table-log headroom constant shared by the normalizer
/// and the table builder.
pub(crate) const TABLE_EXTEND: usize = 3;
