//! FSE encoder state machine.

use seere_core::{Error, Result};

use crate::bitstream::BitSink;
use crate::table::EncodeTable;

/// Advance the coder by one symbol, pushing the state bits it sheds.
///
/// The shed bit count is `n` or `n + 1` depending on which side of the
/// symbol's threshold the state sits, which keeps the emitted rate at the
/// symbol's information content.
#[inline]
fn encode_symbol(table: &EncodeTable, state: u16, sym: u16, sink: &mut BitSink) -> u16 {
    let rule = table.transition(sym);
    let bits_out = ((u32::from(state) + rule.delta_nb_bits) >> 16) as u8;
    sink.push(state, bits_out);
    let index = i32::from(state >> bits_out) + i32::from(rule.delta_state);
    table.next_state(index as usize)
}

/// Encode a symbol sequence, leaving the packed bitstream in `sink`.
///
/// The first symbol is processed twice: once to seed the state away from
/// its raw initial value, with the sink discarded afterwards, and again as
/// part of the real pass over the full sequence. The decoder's expected
/// bit layout depends on this exact replay.
///
/// After the sequence, the final state (minus the table size) is pushed
/// with exactly `table_log` bits and the sink's trailing partial chunk is
/// flushed.
pub fn encode(table: &EncodeTable, symbols: &[u16], sink: &mut BitSink) -> Result<()> {
    let first = *symbols
        .first()
        .ok_or_else(|| Error::empty_input("symbol stream"))?;
    let table_size = table.table_size() as u16;

    let mut state = encode_symbol(table, table_size, first, sink);
    sink.empty();

    for &sym in symbols {
        state = encode_symbol(table, state, sym, sink);
    }

    sink.push(state - table_size, table.table_log());
    sink.flush();
    Ok(())
}
