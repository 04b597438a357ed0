/// Calculate the number of tiles within `radius` steps of a tile (inclusive).
/// Radius 0 means 1 tile, 1 is 7 tiles, 2 is 19, etc.
pub fn hex_count(radius: u32) -> usize {
    // We'll always have 3r^2+3r+1 tiles (a reduction of a geometric sum).
    // f(0) = 1, and we add 6r tiles for every step after that, so:
    // 1, (+6) 7, (+12) 19, (+18) 37, ...
    let r = radius as usize;
    3 * r * r + 3 * r + 1
}

/// Calculate the number of tiles exactly `radius` steps from a tile. The ring
/// of radius 0 is just the tile itself.
pub fn ring_len(radius: u32) -> usize {
    match radius {
        0 => 1,
        r => 6 * r as usize,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_count() {
        assert_eq!(hex_count(0), 1);
        assert_eq!(hex_count(1), 7);
        assert_eq!(hex_count(2), 19);
        assert_eq!(hex_count(3), 37);
    }

    #[test]
    fn test_ring_len() {
        assert_eq!(ring_len(0), 1);
        assert_eq!(ring_len(1), 6);
        assert_eq!(ring_len(4), 24);
        // Rings stack up into a filled range
        assert_eq!((0..=5).map(ring_len).sum::<usize>(), hex_count(5));
    }
}
