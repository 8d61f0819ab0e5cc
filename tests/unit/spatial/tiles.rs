//! Tests for tile construction, rotation, reflection and tilesets

#[cfg(test)]
mod tests {
    use wavetile::spatial::edge::ReflexiveStringEdge;
    use wavetile::spatial::square::{EAST, NORTH, SOUTH, WEST};
    use wavetile::spatial::tiles::{Tile, Tileset};

    type PlainTile = Tile<(), ReflexiveStringEdge>;

    fn tile(name: &str, patterns: [&str; 4]) -> PlainTile {
        Tile::new(name, (), ReflexiveStringEdge::from_patterns(&patterns), 1.0).unwrap()
    }

    fn patterns(tile: &PlainTile) -> Vec<&str> {
        tile.edges().iter().map(ReflexiveStringEdge::pattern).collect()
    }

    // Tests construction validates edges and weight and names the base rotation
    #[test]
    fn test_new_validation() {
        let base = tile("corner", ["aab", "abc", "ccd", "dda"]);
        assert_eq!(base.name(), "corner-0");
        assert_eq!(base.sides(), 4);
        assert!((base.weight() - 1.0).abs() < f64::EPSILON);

        assert!(PlainTile::new("none", (), Vec::new(), 1.0).is_err());
        let edges = ReflexiveStringEdge::from_patterns(&["a"; 4]);
        assert!(PlainTile::new("zero", (), edges.clone(), 0.0).is_err());
        assert!(PlainTile::new("nan", (), edges, f64::NAN).is_err());
    }

    // Tests a quarter turn moves each edge one side clockwise
    // Verified by rotating the edge list left instead of right
    #[test]
    fn test_rotate_moves_edges_clockwise() {
        let base = tile("corner", ["aab", "abc", "ccd", "dda"]);
        let turned = base.rotate(1, 4).unwrap();

        assert_eq!(patterns(&turned), vec!["dda", "aab", "abc", "ccd"]);
        assert_eq!(turned.name(), "corner-1");
        assert_eq!(turned.rotate(3, 4).unwrap().name(), "corner-0");
    }

    // Tests rotating by the side count restores the edges
    #[test]
    fn test_rotation_closure() {
        let base = tile("corner", ["aab", "abc", "ccd", "dda"]);
        let mut current = base.clone();
        for _ in 0..4 {
            current = current.rotate(1, 4).unwrap();
        }
        assert_eq!(patterns(&current), patterns(&base));
        assert_eq!(current.name(), base.name());
    }

    // Tests rotation rejects a side count other than the tile's own
    #[test]
    fn test_rotate_side_mismatch() {
        let base = tile("corner", ["aab", "abc", "ccd", "dda"]);
        assert!(base.rotate(1, 6).is_err());
    }

    // Tests reflection across the north axis swaps east and west and reverses every edge
    // Verified by skipping the per-edge reversal
    #[test]
    fn test_mirror_across_north() {
        let base = tile("corner", ["aab", "abc", "ccd", "dda"]);
        let mirrored = base.mirror_across(NORTH).unwrap();

        assert_eq!(patterns(&mirrored), vec!["baa", "add", "dcc", "cba"]);
        assert_eq!(mirrored.name(), "corner-m0");
    }

    // Tests reflection across the east axis swaps north and south
    #[test]
    fn test_mirror_across_east() {
        let base = tile("corner", ["aab", "abc", "ccd", "dda"]);
        let mirrored = base.mirror_across(EAST).unwrap();

        assert_eq!(patterns(&mirrored), vec!["dcc", "cba", "baa", "add"]);
    }

    // Tests mirroring twice about the same axis restores the tile and its name
    #[test]
    fn test_mirror_involution() {
        let base = tile("corner", ["aab", "abc", "ccd", "dda"]).rotate(2, 4).unwrap();
        for axis in [NORTH, EAST, SOUTH, WEST] {
            let twice = base.mirror_across(axis).unwrap().mirror_across(axis).unwrap();
            assert_eq!(patterns(&twice), patterns(&base));
            assert_eq!(twice.name(), "corner-2");
        }
        assert!(base.mirror_across(4).is_err());
    }

    // Tests mirrored tiles keep their marker through rotation
    #[test]
    fn test_mirrored_rotation_name() {
        let base = tile("hill", ["aaa", "abc", "ccb", "aaa"]);
        let name = base.mirror_across(NORTH).unwrap().rotate(3, 4).unwrap();
        assert_eq!(name.name(), "hill-m3");
    }

    // Tests compatibility is preserved when both tiles rotate together
    #[test]
    fn test_matches_under_rotation() {
        let left = tile("left", ["aaa", "abc", "aaa", "aaa"]);
        let right = tile("right", ["aaa", "aaa", "aaa", "cba"]);
        assert!(left.matches(EAST, &right, WEST));
        assert!(!left.matches(EAST, &right, EAST));
        assert!(!left.matches(7, &right, WEST));

        let up = left.rotate(3, 4).unwrap();
        let down = right.rotate(3, 4).unwrap();
        assert!(up.matches(NORTH, &down, SOUTH));
    }

    // Tests tileset construction, lookup and the full domain
    #[test]
    fn test_tileset() {
        let base = tile("pipe", ["aba", "aaa", "aba", "aaa"]);
        let turned = base.rotate(1, 4).unwrap();
        let tiles = Tileset::new(vec![base, turned]).unwrap();

        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles.sides(), 4);
        assert_eq!(tiles.position("pipe-1"), Some(1));
        assert!(tiles.tile(2).is_err());
        assert_eq!(tiles.full_domain().to_vec(), vec![0, 1]);
        assert_eq!(
            tiles.iter().map(|(id, t)| (id, t.name())).collect::<Vec<_>>(),
            vec![(0, "pipe-0"), (1, "pipe-1")]
        );
    }

    // Tests tilesets reject empty input and mixed side counts
    #[test]
    fn test_tileset_validation() {
        assert!(Tileset::<(), ReflexiveStringEdge>::new(Vec::new()).is_err());

        let square = tile("square", ["a", "a", "a", "a"]);
        let triangle = PlainTile::new(
            "triangle",
            (),
            ReflexiveStringEdge::from_patterns(&["a", "a", "a"]),
            1.0,
        )
        .unwrap();
        assert!(Tileset::new(vec![square, triangle]).is_err());
    }
}
