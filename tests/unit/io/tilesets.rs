//! Tests for the built-in tilesets

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use wavetile::io::configuration::DEFAULT_TILE_PIXELS;
    use wavetile::io::tilesets::{TilesetName, tile_from_patterns};
    use wavetile::spatial::edge::Edge;

    // Tests each tileset expands its base tiles by rotation and reflection
    // Verified by dropping the rotations of the T junction
    #[test]
    fn test_tileset_sizes() {
        let expected = [
            (TilesetName::Basic, 7),
            (TilesetName::Circuit, 24),
            (TilesetName::Landscape, 18),
        ];
        for (name, count) in expected {
            let tiles = name.load(DEFAULT_TILE_PIXELS).unwrap();
            assert_eq!(tiles.len(), count, "{name}");
            assert_eq!(tiles.sides(), 4);
        }
    }

    // Tests derived tiles carry distinct lineage names
    #[test]
    fn test_tile_names_unique() {
        for name in [TilesetName::Basic, TilesetName::Circuit, TilesetName::Landscape] {
            let tiles = name.load(4).unwrap();
            let names: HashSet<&str> = tiles.iter().map(|(_, t)| t.name()).collect();
            assert_eq!(names.len(), tiles.len(), "{name}");
        }
    }

    // Tests the basic set lists rotations after their base tile
    #[test]
    fn test_basic_order_and_weights() {
        let tiles = TilesetName::Basic.load(4).unwrap();
        let names: Vec<&str> = tiles.iter().map(|(_, t)| t.name()).collect();
        assert_eq!(
            names,
            vec![
                "blank-0",
                "up-t-0",
                "up-t-1",
                "up-t-2",
                "up-t-3",
                "left-right-0",
                "left-right-1"
            ]
        );
        let blank = tiles.tile(0).unwrap();
        assert!((blank.weight() - 20.0).abs() < f64::EPSILON);
    }

    // Tests mirrored landscape tiles sit next to their originals
    #[test]
    fn test_landscape_mirrors() {
        let tiles = TilesetName::Landscape.load(4).unwrap();
        let left = tiles.position("hill-left-top-0").unwrap();
        let right = tiles.position("hill-left-top-m0").unwrap();
        assert_eq!(right, left + 1);
    }

    // Tests every tile of a set can sit next to at least one tile on every side
    #[test]
    fn test_every_edge_has_a_partner() {
        for name in [TilesetName::Basic, TilesetName::Circuit, TilesetName::Landscape] {
            let tiles = name.load(4).unwrap();
            for (_, tile) in tiles.iter() {
                for edge in tile.edges() {
                    let partnered = tiles
                        .iter()
                        .any(|(_, other)| other.edges().iter().any(|o| edge.compatible(o)));
                    assert!(partnered, "{name}: {} has an orphan edge", tile.name());
                }
            }
        }
    }

    // Tests swatches are painted at the requested size
    #[test]
    fn test_tile_from_patterns() {
        let tile = tile_from_patterns("pipe", ["aba", "aaa", "aba", "aaa"], 2.0, 9).unwrap();
        assert_eq!(tile.name(), "pipe-0");
        assert_eq!(tile.image().materialize().unwrap().dimensions(), (9, 9));
        assert!(tile_from_patterns("bad", ["a", "a", "a", "a"], 0.0, 9).is_err());
    }
}
