//! Decoding of the tower and barracks status bitmasks.
//!
//! Each side's status is a fixed-width bit field, one bit per structure, a
//! cleared bit meaning the structure was destroyed.

pub const TOWER_BITS: u32 = 11;
pub const BARRACKS_BITS: u32 = 6;

/// Number of destroyed structures in a `width`-bit status mask. Bits above the
/// field width are ignored.
pub fn destroyed_count(mask: u32, width: u32) -> u32 {
    let field = (1u32 << width) - 1;
    width - (mask & field).count_ones()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructureLosses {
    pub radiant: u32,
    pub dire: u32,
}

impl StructureLosses {
    pub fn towers(radiant_mask: u32, dire_mask: u32) -> Self {
        Self::decode(radiant_mask, dire_mask, TOWER_BITS)
    }

    pub fn barracks(radiant_mask: u32, dire_mask: u32) -> Self {
        Self::decode(radiant_mask, dire_mask, BARRACKS_BITS)
    }

    fn decode(radiant_mask: u32, dire_mask: u32, width: u32) -> Self {
        Self {
            radiant: destroyed_count(radiant_mask, width),
            dire: destroyed_count(dire_mask, width),
        }
    }

    pub fn total(&self) -> u32 {
        self.radiant + self.dire
    }

    pub fn diff(&self) -> u32 {
        self.radiant.abs_diff(self.dire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_cleared_towers_are_all_destroyed() {
        assert_eq!(destroyed_count(0b000_0000_0000, TOWER_BITS), 11);
        assert_eq!(destroyed_count(0b111_1111_1111, TOWER_BITS), 0);
    }

    #[test]
    fn leading_zero_bits_count_as_destroyed() {
        // 0b00000000110: only two standing towers
        assert_eq!(destroyed_count(6, TOWER_BITS), 9);
        assert_eq!(destroyed_count(0b11_0011, BARRACKS_BITS), 2);
    }

    #[test]
    fn bits_outside_the_field_are_ignored() {
        assert_eq!(destroyed_count(0b1_0000_0011, BARRACKS_BITS), 4);
    }

    #[test]
    fn diff_is_symmetric() {
        let a = StructureLosses::towers(1974, 0);
        let b = StructureLosses::towers(0, 1974);

        assert_eq!(a.total(), b.total());
        assert_eq!(a.diff(), b.diff());
        assert_eq!(a.diff(), 11 - 3);
    }
}
