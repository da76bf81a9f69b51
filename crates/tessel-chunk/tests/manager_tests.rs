use tessel_chunk::{CHUNK_SIZE, ChunkError, ChunkManager, Walkability, WalkabilityGrid};
use tessel_geom::Point;
use tessel_world::{ChunkCoord, ChunkDef, Doodad, TilePoint, World};

fn flat(gx: i32, gy: i32) -> ChunkDef {
    ChunkDef::flat(gx, gy, CHUNK_SIZE, 0.0)
}

#[test]
fn chunk_size_is_shared_constant() {
    assert_eq!(ChunkManager::chunk_size(), 16);
}

#[test]
fn no_doodads_all_walkable() {
    let m = ChunkManager::new(flat(0, 0)).unwrap();
    let grid = m.navmap();
    assert_eq!(grid.size(), 16);
    assert_eq!(grid.rows().count(), 16);
    assert!(grid.rows().all(|r| r.len() == 16));
    assert!(grid.rows().flatten().all(|c| *c == Walkability::Walkable));
    assert_eq!(grid.blocked_count(), 0);
}

#[test]
fn single_blocking_doodad_marks_only_its_cell() {
    let def = flat(0, 0).with_doodads(vec![Doodad::blocking(3, 4)]);
    let m = ChunkManager::new(def).unwrap();
    let rows: Vec<&[Walkability]> = m.navmap().rows().collect();
    for (y, row) in rows.iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            let expect = if (x, y) == (3, 4) {
                Walkability::NotWalkable
            } else {
                Walkability::Walkable
            };
            assert_eq!(*cell, expect, "cell [{y}][{x}]");
        }
    }
    assert_eq!(rows[4][3], Walkability::NotWalkable);
    assert_eq!(m.is_walkable_local(3, 4), Some(false));
    assert_eq!(m.is_walkable_local(4, 3), Some(true));
}

#[test]
fn walkable_doodads_leave_grid_clear() {
    let def = flat(0, 0).with_doodads(vec![Doodad::new(1, 1, true), Doodad::new(15, 15, true)]);
    let m = ChunkManager::new(def).unwrap();
    assert_eq!(m.navmap().blocked_count(), 0);
}

#[test]
fn out_of_bounds_doodad_is_rejected() {
    for (x, y) in [(16, 0), (0, 16), (-1, 3), (3, -1)] {
        let def = flat(2, -1).with_doodads(vec![Doodad::blocking(0, 0), Doodad::blocking(x, y)]);
        assert_eq!(
            ChunkManager::new(def).unwrap_err(),
            ChunkError::DoodadOutOfBounds {
                coord: ChunkCoord::new(2, -1),
                index: 1,
                x,
                y,
                size: 16,
            }
        );
    }
}

#[test]
fn mismatched_size_is_rejected() {
    let def = ChunkDef::flat(0, 0, 8, 0.0);
    assert!(matches!(
        ChunkManager::new(def),
        Err(ChunkError::SizeMismatch {
            expected: 16,
            found: 8,
            ..
        })
    ));
}

#[test]
fn world_offset_follows_centered_chunks() {
    assert_eq!(ChunkManager::new(flat(0, 0)).unwrap().world_offset(), Point::new(-8, -8));
    assert_eq!(ChunkManager::new(flat(1, 0)).unwrap().world_offset(), Point::new(8, -8));
    assert_eq!(ChunkManager::new(flat(-1, 2)).unwrap().world_offset(), Point::new(-24, 24));
}

#[test]
fn chunks_beyond_the_tile_range_are_rejected() {
    for (gx, gy) in [(200_000_000, 0), (134_217_728, 0), (0, -134_217_728), (i32::MIN, i32::MAX)] {
        assert_eq!(
            ChunkManager::new(flat(gx, gy)).unwrap_err(),
            ChunkError::GridOutOfRange(ChunkCoord::new(gx, gy))
        );
    }
}

#[test]
fn edge_chunks_cover_the_extreme_tiles() {
    let east = ChunkManager::new(flat(134_217_727, 0)).unwrap();
    assert_eq!(east.world_offset(), Point::new(i32::MAX - 23, -8));
    assert!(east.contains_point(Point::new(i32::MAX - 8, 7)));
    assert!(!east.contains_point(Point::new(i32::MAX - 7, 0)));
    assert_eq!(east.is_walkable_tile(TilePoint::new(i32::MAX - 8, 0)), Some(true));
    assert_eq!(east.is_walkable_tile(TilePoint::new(i32::MAX, 0)), None);

    let west = ChunkManager::new(flat(-134_217_727, 0).with_doodads(vec![Doodad::blocking(0, 8)]))
        .unwrap();
    assert_eq!(west.world_offset(), Point::new(i32::MIN + 8, -8));
    assert_eq!(west.is_walkable_tile(TilePoint::new(i32::MIN + 8, 0)), Some(false));
    assert_eq!(west.is_walkable_tile(TilePoint::new(i32::MIN, 0)), None);
}

#[test]
fn contains_point_uses_half_open_bounds() {
    let m = ChunkManager::new(flat(0, 0)).unwrap();
    assert!(m.contains_point(Point::new(-8, -8)));
    assert!(m.contains_point(Point::new(0, 0)));
    assert!(m.contains_point(Point::new(7, 7)));
    assert!(!m.contains_point(Point::new(8, 0)));
    assert!(!m.contains_point(Point::new(-9, 0)));
    let b = m.bounds();
    assert_eq!((b.x(), b.y(), b.width(), b.height()), (-8, -8, 16, 16));
}

#[test]
fn containment_agrees_with_tile_chunk_addressing() {
    let managers: Vec<ChunkManager> = [(-1, -1), (0, -1), (-1, 0), (0, 0), (1, 0)]
        .into_iter()
        .map(|(gx, gy)| ChunkManager::new(flat(gx, gy)).unwrap())
        .collect();
    for ty in -24..8 {
        for tx in -24..24 {
            let owner = TilePoint::new(tx, ty).chunk_coord(CHUNK_SIZE);
            let owners: Vec<ChunkCoord> = managers
                .iter()
                .filter(|m| m.contains_point(Point::new(tx, ty)))
                .map(|m| m.coord())
                .collect();
            if managers.iter().any(|m| m.coord() == owner) {
                assert_eq!(owners, vec![owner], "tile ({tx}, {ty})");
            } else {
                assert!(owners.is_empty(), "tile ({tx}, {ty})");
            }
        }
    }
}

#[test]
fn tile_walkability_matches_chunk_local_lookup() {
    let def = flat(1, 0).with_doodads(vec![Doodad::blocking(3, 4)]);
    let mut world = World::new(CHUNK_SIZE).unwrap();
    world.insert(def.clone()).unwrap();
    let m = ChunkManager::new(def).unwrap();

    let blocked = TilePoint::new(8 + 3, -8 + 4);
    let cp = blocked.to_chunk(&world).unwrap();
    assert_eq!((cp.x, cp.y), (3, 4));
    assert_eq!(m.is_walkable_tile(blocked), Some(false));
    assert_eq!(m.is_walkable_tile(TilePoint::new(8, -8)), Some(true));
    assert_eq!(m.is_walkable_tile(TilePoint::new(0, 0)), None);
}

#[test]
fn doodad_edits_mark_dirty_until_rebuild() {
    let mut m = ChunkManager::new(flat(0, 0)).unwrap();
    assert!(!m.is_dirty());

    m.add_doodad(Doodad::blocking(5, 6));
    assert!(m.is_dirty());
    assert_eq!(m.is_walkable_local(5, 6), Some(true));
    m.rebuild().unwrap();
    assert!(!m.is_dirty());
    assert_eq!(m.is_walkable_local(5, 6), Some(false));

    assert_eq!(m.remove_doodads_at(1, 1), 0);
    assert!(!m.is_dirty());
    assert_eq!(m.remove_doodads_at(5, 6), 1);
    assert!(m.is_dirty());
    m.rebuild().unwrap();
    assert_eq!(m.navmap().blocked_count(), 0);
}

#[test]
fn failed_rebuild_keeps_previous_grid() {
    let mut m = ChunkManager::new(flat(0, 0).with_doodads(vec![Doodad::blocking(0, 0)])).unwrap();
    m.add_doodad(Doodad::blocking(99, 0));
    assert!(matches!(m.rebuild(), Err(ChunkError::DoodadOutOfBounds { index: 1, .. })));
    assert!(m.is_dirty());
    assert_eq!(m.navmap().blocked_count(), 1);
    assert_eq!(m.is_walkable_local(0, 0), Some(false));
}

#[test]
fn grid_out_of_range_access() {
    let mut grid = WalkabilityGrid::new(4);
    assert_eq!(grid.get(4, 0), None);
    assert_eq!(grid.get(-1, 0), None);
    assert!(!grid.set(0, 4, Walkability::NotWalkable));
    assert!(grid.set(3, 3, Walkability::NotWalkable));
    assert_eq!(grid.to_string(), "....\n....\n....\n...#\n");
}
