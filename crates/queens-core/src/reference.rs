//! Known placement counts per board size (OEIS A000170).

/// Number of placements for board sizes `0..=27`, indexed by `n`.
pub const KNOWN_SOLUTION_COUNTS: [u64; 28] = [
    1,
    1,
    0,
    0,
    2,
    10,
    4,
    40,
    92,
    352,
    724,
    2_680,
    14_200,
    73_712,
    365_596,
    2_279_184,
    14_772_512,
    95_815_104,
    666_090_624,
    4_968_057_848,
    39_029_188_884,
    314_666_222_712,
    2_691_008_701_644,
    24_233_937_684_440,
    227_514_171_973_736,
    2_207_893_435_808_352,
    22_317_699_616_364_044,
    234_907_967_154_122_528,
];

/// The known number of placements for `n`, if it is in the table.
pub fn known_solution_count(n: usize) -> Option<u64> {
    KNOWN_SOLUTION_COUNTS.get(n).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_solution_count() {
        assert_eq!(known_solution_count(0), Some(1));
        assert_eq!(known_solution_count(3), Some(0));
        assert_eq!(known_solution_count(8), Some(92));
        assert_eq!(known_solution_count(27), Some(234_907_967_154_122_528));
        assert_eq!(known_solution_count(28), None);
    }
}
