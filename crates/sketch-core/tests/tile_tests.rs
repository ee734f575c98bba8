use sketch_core::config::{PyramidConfig, RidgeConfig, TileConfig};
use sketch_core::tiles::{
    fold_sculpture, ridge_sculpture, Fold, FoldSet, PyramidField, Side, TileGrid, RIDGE_TRIANGLES,
    TRIANGLES_PER_CELL,
};
use sketch_core::{Animated, Frame, RngSource, SketchError};

#[test]
fn test_triangle_count_matches_grid() {
    for (cols, rows) in [(1, 1), (5, 5), (7, 3)] {
        for folds in [FoldSet::PerFace, FoldSet::TileLayouts] {
            let config = TileConfig { cols, rows, folds, ..TileConfig::default() };
            let mesh = fold_sculpture(&config, &mut RngSource::seeded(42)).expect("valid config");
            assert_eq!(
                mesh.triangle_count(),
                cols * rows * TRIANGLES_PER_CELL,
                "{}x{} grid with {:?}",
                cols,
                rows,
                folds
            );
        }
    }
}

#[test]
fn test_same_seed_same_sculpture() {
    let config = TileConfig::default();
    let a = fold_sculpture(&config, &mut RngSource::seeded(123)).expect("valid config");
    let b = fold_sculpture(&config, &mut RngSource::seeded(123)).expect("valid config");
    assert_eq!(a, b);
}

#[test]
fn test_sculptures_share_topology() {
    // Any two sculptures from the same grid can be morphed into each other
    let config = TileConfig { folds: FoldSet::AnyFold, ..TileConfig::default() };
    let a = fold_sculpture(&config, &mut RngSource::seeded(1)).expect("valid config");
    let b = fold_sculpture(&config, &mut RngSource::seeded(2)).expect("valid config");
    assert_eq!(a.vertex_count(), b.vertex_count());
}

#[test]
fn test_elevation_is_the_only_height() {
    let config = TileConfig { elevation: 0.4, ..TileConfig::default() };
    let mesh = fold_sculpture(&config, &mut RngSource::seeded(8)).expect("valid config");
    assert!(mesh.positions().iter().all(|p| p.z == 0.0 || p.z == 0.4));
    assert!(mesh.positions().iter().any(|p| p.z == 0.4));
}

#[test]
fn test_flat_normals_point_up_for_flat_grid() {
    let config = TileConfig {
        elevation: 0.0,
        folds: FoldSet::Single(Fold::Center),
        ..TileConfig::default()
    };
    let mesh = fold_sculpture(&config, &mut RngSource::seeded(0)).expect("valid config");
    for n in mesh.flat_normals() {
        assert!((n.z.abs() - 1.0).abs() < 1e-5, "flat grid normal {:?}", n);
    }
}

#[test]
fn test_parsed_fold_set_builds() {
    let folds: FoldSet = "edge-a".parse().expect("known fold");
    assert_eq!(folds, FoldSet::Single(Fold::Edge(Side::First)));
    let config = TileConfig { folds, ..TileConfig::default() };
    assert!(fold_sculpture(&config, &mut RngSource::seeded(0)).is_ok());
}

#[test]
fn test_zero_grid_is_rejected() {
    let config = TileConfig { cols: 0, ..TileConfig::default() };
    assert_eq!(
        fold_sculpture(&config, &mut RngSource::seeded(0)).err(),
        Some(SketchError::ZeroCount("grid columns"))
    );
    assert!(TileGrid::new(0.0, 10.0, 5, 5).is_err());
}

#[test]
fn test_ridge_sculpture_counts() {
    let config = RidgeConfig { segments: 4, ..RidgeConfig::default() };
    let mesh = ridge_sculpture(&config, &mut RngSource::seeded(4)).expect("valid config");
    assert_eq!(mesh.triangle_count(), 4 * 4 * RIDGE_TRIANGLES);
}

#[test]
fn test_pyramid_field_animates_apexes_only() {
    let config = PyramidConfig { min_count: 2, max_count: 4, ..PyramidConfig::default() };
    let mut field = PyramidField::new(&config).expect("valid config");
    let before = field.positions().to_vec();
    field.update(&Frame::looping(1.0, 4.0, 0.016));
    let after = field.positions();
    assert_eq!(before.len(), after.len());
    for (b, a) in before.iter().zip(after) {
        assert_eq!(b.y, a.y, "heights never change");
        if b.y == 0.0 {
            assert_eq!(b, a, "base vertices stay put");
        }
    }
}
