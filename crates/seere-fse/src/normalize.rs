//! Frequency normalization to a power-of-two total.

use seere_core::{Error, Result};

use crate::{MAX_SYMBOLS, MAX_TABLE_LOG, TABLE_EXTEND};

const UP_ROUND_OFFSET: f32 = 0.5;

/// Normalize raw occurrence counts in place so they sum to `2^table_log`,
/// returning the chosen `table_log`.
///
/// The table log sits `TABLE_EXTEND` above the alphabet's bit index,
/// capped at [`MAX_TABLE_LOG`]: a larger table tracks the Shannon bound
/// more closely at a linear cost in build time and header size.
///
/// Every entry of the result is at least 1, so each symbol of the alphabet
/// stays encodable even when its raw share rounds to zero.
pub fn normalize_frequencies(frequency: &mut [u32]) -> Result<u8> {
    let size = frequency.len();
    if size == 0 {
        return Err(Error::empty_input("frequency table"));
    }
    if size > MAX_SYMBOLS {
        return Err(Error::AlphabetTooLarge {
            size,
            max: MAX_SYMBOLS,
        });
    }
    let table_log = MAX_TABLE_LOG.min((size.ilog2() as usize + TABLE_EXTEND) as u8);
    let new_table_size = 1u32 << table_log;

    let curr_table_size: u64 = frequency.iter().map(|&f| u64::from(f)).sum();
    if curr_table_size == 0 {
        return Err(Error::empty_input("no symbol occurrences"));
    }

    let ratio = new_table_size as f32 / curr_table_size as f32;
    let mut updated_table_size: u64 = 0;
    for f in frequency.iter_mut() {
        *f = ((UP_ROUND_OFFSET + ratio * *f as f32).floor() as u32).max(1);
        updated_table_size += u64::from(*f);
    }

    // Independent per-symbol rounding rarely lands on the power of two.
    // Walk the excess off the currently largest entry one step at a time,
    // or hand the whole deficit to it in one step.
    while updated_table_size > u64::from(new_table_size) {
        let max_ix = max_index(frequency)
            .filter(|&ix| frequency[ix] >= 2)
            .ok_or_else(|| Error::table_corrupted("no adjustable maximum during shrink"))?;
        frequency[max_ix] -= 1;
        updated_table_size -= 1;
    }
    if updated_table_size < u64::from(new_table_size) {
        let max_ix = max_index(frequency)
            .ok_or_else(|| Error::table_corrupted("no maximum frequency during grow"))?;
        frequency[max_ix] += new_table_size - updated_table_size as u32;
    }

    Ok(table_log)
}

/// First index holding the largest value, scanned in ascending order.
fn max_index(arr: &[u32]) -> Option<usize> {
    let mut max = 0u32;
    let mut index = None;
    for (i, &v) in arr.iter().enumerate() {
        if v > max || index.is_none() {
            max = v;
            index = Some(i);
        }
    }
    index
}
