//! Piece tests - masks, rotation and cell enumeration

use blockfall::core::pieces::{mask_offsets, rotate_mask_cw, rotations, shape_mask, spawn_x};
use blockfall::core::{ConfigError, Piece, SimpleRng};
use blockfall::types::{Rotation, ShapeKind, SPAWN_Y};

#[test]
fn test_all_masks_have_four_cells() {
    for kind in ShapeKind::ALL {
        for (i, &mask) in rotations(kind).iter().enumerate() {
            assert_eq!(mask.count_ones(), 4, "{:?} rotation {}", kind, i);
        }
    }
}

#[test]
fn test_four_rotations_return_to_start() {
    for kind in ShapeKind::ALL {
        let base = shape_mask(kind, Rotation::North);
        let turned = (0..4).fold(base, |m, _| rotate_mask_cw(m));
        assert_eq!(turned, base, "{:?}", kind);
    }
}

#[test]
fn test_table_matches_rotation_function() {
    for kind in ShapeKind::ALL {
        let masks = rotations(kind);
        for i in 0..4 {
            assert_eq!(rotate_mask_cw(masks[i]), masks[(i + 1) % 4], "{:?}", kind);
        }
    }
}

#[test]
fn test_o_is_rotation_invariant() {
    let masks = rotations(ShapeKind::O);
    assert!(masks.iter().all(|&m| m == masks[0]));
}

#[test]
fn test_i_alternates_horizontal_and_vertical() {
    let north: Vec<_> = mask_offsets(shape_mask(ShapeKind::I, Rotation::North)).collect();
    assert_eq!(north, vec![(0, 1), (1, 1), (2, 1), (3, 1)]);

    let east: Vec<_> = mask_offsets(shape_mask(ShapeKind::I, Rotation::East)).collect();
    assert_eq!(east, vec![(2, 0), (2, 1), (2, 2), (2, 3)]);
}

#[test]
fn test_spawn_position() {
    assert_eq!(spawn_x(12), 4);
    assert_eq!(spawn_x(10), 3);

    let piece = Piece::spawn(ShapeKind::L, 12);
    assert_eq!(piece.x(), 4);
    assert_eq!(piece.y(), SPAWN_Y);
    assert_eq!(piece.rotation(), Rotation::North);
}

#[test]
fn test_cells_are_absolute() {
    let piece = Piece::new(ShapeKind::S, Rotation::North, 3, 7);
    assert_eq!(piece.cells().as_slice(), &[(4, 8), (5, 8), (3, 9), (4, 9)]);
}

#[test]
fn test_cells_with_transform() {
    let piece = Piece::new(ShapeKind::T, Rotation::North, 0, 0);
    let moved = piece.cells_with(2, 1, 1);
    // T East offsets shifted by (2, 1)
    assert_eq!(moved.as_slice(), &[(3, 1), (3, 2), (4, 2), (3, 3)]);
    // The piece itself is unchanged
    assert_eq!(piece.rotation(), Rotation::North);
}

#[test]
fn test_from_name() {
    let piece = Piece::from_name("z", 1, 2).unwrap();
    assert_eq!(piece.kind(), ShapeKind::Z);
    assert_eq!(
        Piece::from_name("q", 0, 0),
        Err(ConfigError::UnknownShape("q".to_string()))
    );
}

#[test]
fn test_random_pieces_are_seeded() {
    let mut a = SimpleRng::new(99);
    let mut b = SimpleRng::new(99);
    for _ in 0..50 {
        assert_eq!(Piece::random(&mut a, 12), Piece::random(&mut b, 12));
    }
}

#[test]
fn test_random_covers_every_shape() {
    let mut rng = SimpleRng::new(2024);
    let mut seen = [false; 7];
    for _ in 0..500 {
        seen[Piece::random(&mut rng, 12).kind().index()] = true;
    }
    assert!(seen.iter().all(|&s| s));
}
