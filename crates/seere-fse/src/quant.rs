//! Per-tensor quantization descriptor.

use seere_core::{Error, Result};

use crate::MAX_SYMBOLS;

/// The quantizer's hand-off for one tensor: occurrence counts, centroid
/// (reconstruction) values, and the quantized symbol stream.
///
/// A descriptor is allocated fresh for each compression call and fully
/// consumed by it. The frequency table starts as raw counts and is
/// overwritten in place by
/// [`normalize_frequencies`](crate::normalize_frequencies); the centroids
/// pass through untouched and surface only in the serialized buffer.
#[derive(Debug, Clone)]
pub struct FseQuant {
    frequency: Vec<u32>,
    centroids: Vec<f32>,
    symbols: Vec<u16>,
}

impl FseQuant {
    /// Build a descriptor from the quantizer's outputs.
    ///
    /// The alphabet size is `frequency.len()`; `centroids` must match it
    /// and every symbol must index into it.
    pub fn new(frequency: Vec<u32>, centroids: Vec<f32>, symbols: Vec<u16>) -> Result<Self> {
        let size = frequency.len();
        if size == 0 {
            return Err(Error::empty_input("alphabet"));
        }
        if size > MAX_SYMBOLS {
            return Err(Error::AlphabetTooLarge {
                size,
                max: MAX_SYMBOLS,
            });
        }
        if centroids.len() != size {
            return Err(Error::invalid_input(format!(
                "{} centroids for an alphabet of {size}",
                centroids.len()
            )));
        }
        if symbols.is_empty() {
            return Err(Error::empty_input("symbol stream"));
        }
        if let Some(&bad) = symbols.iter().find(|&&s| usize::from(s) >= size) {
            return Err(Error::invalid_input(format!(
                "symbol {bad} outside alphabet of {size}"
            )));
        }
        Ok(Self {
            frequency,
            centroids,
            symbols,
        })
    }

    /// Build a descriptor by counting the symbol stream directly, for
    /// quantizers that do not hand over a histogram. The alphabet size is
    /// `centroids.len()`.
    pub fn from_symbols(symbols: Vec<u16>, centroids: Vec<f32>) -> Result<Self> {
        let size = centroids.len();
        let mut frequency = vec![0u32; size];
        for &sym in &symbols {
            let slot = frequency.get_mut(usize::from(sym)).ok_or_else(|| {
                Error::invalid_input(format!("symbol {sym} outside alphabet of {size}"))
            })?;
            *slot += 1;
        }
        Self::new(frequency, centroids, symbols)
    }

    /// Number of distinct symbols.
    #[inline]
    pub fn alphabet_size(&self) -> usize {
        self.frequency.len()
    }

    /// Per-symbol occurrence counts (normalized in place during
    /// compression).
    #[inline]
    pub fn frequency(&self) -> &[u32] {
        &self.frequency
    }

    #[inline]
    pub(crate) fn frequency_mut(&mut self) -> &mut [u32] {
        &mut self.frequency
    }

    /// Per-symbol reconstruction values.
    #[inline]
    pub fn centroids(&self) -> &[f32] {
        &self.centroids
    }

    /// The quantized symbol stream, one entry per tensor element.
    #[inline]
    pub fn symbols(&self) -> &[u16] {
        &self.symbols
    }
}
