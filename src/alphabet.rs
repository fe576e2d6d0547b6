/// Approximate English letter frequencies (percent), used to draw random grids.
pub const LETTER_FREQUENCIES: &[(char, f32)] = &[
    ('e', 12.70), ('t', 9.05), ('a', 8.16), ('o', 7.50), ('i', 6.96),
    ('n', 6.74), ('s', 6.32), ('h', 6.09), ('r', 5.98), ('d', 4.25),
    ('l', 4.02), ('c', 2.78), ('u', 2.75), ('m', 2.40), ('w', 2.36),
    ('f', 2.22), ('g', 2.01), ('y', 1.97), ('p', 1.93), ('b', 1.49),
    ('v', 0.98), ('k', 0.77), ('j', 0.15), ('x', 0.15), ('q', 0.10),
    ('z', 0.07),
];

/// Canonical form used for every trie key and grid cell.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
}
