//! Edit script derivation from a match set.

use super::{MatchBlock, Opcode};

/// Turn an ordered, sentinel-terminated match set into a gapless edit script.
///
/// The gap before each block becomes a replace, delete or insert depending on
/// which side it spans; the block itself becomes an equal op.
pub fn opcodes(blocks: &[MatchBlock]) -> Vec<Opcode> {
    let (mut i, mut j) = (0, 0);
    let mut ops = Vec::with_capacity(blocks.len() * 2);

    for block in blocks {
        let gap_a = block.a_start > i;
        let gap_b = block.b_start > j;
        match (gap_a, gap_b) {
            (true, true) => ops.push(Opcode::replace(i, block.a_start, j, block.b_start)),
            (true, false) => ops.push(Opcode::delete(i, block.a_start, j, j)),
            (false, true) => ops.push(Opcode::insert(i, i, j, block.b_start)),
            (false, false) => {}
        }
        if !block.is_empty() {
            ops.push(Opcode::equal(
                block.a_start,
                block.a_end(),
                block.b_start,
                block.b_end(),
            ));
        }
        i = block.a_end();
        j = block.b_end();
    }

    ops
}
