use conway_grid::{Grid, GridError};

const SEED: u64 = 42;

fn alive_cells(life: &Grid) -> Vec<(usize, usize)> {
    life.snapshot().alive_cells().collect()
}

/// Live cells in the 3x3 block around `(row, col)`, excluding the center.
fn ring(row: usize, col: usize) -> Vec<(usize, usize)> {
    let mut cells = vec![];
    for r in row - 1..=row + 1 {
        for c in col - 1..=col + 1 {
            if (r, c) != (row, col) {
                cells.push((r, c));
            }
        }
    }
    cells
}

#[test]
fn test_block_is_still_life() {
    for n in [4, 6, 11] {
        let block = [(1, 1), (1, 2), (2, 1), (2, 2)];
        let mut life = Grid::with_alive(n, block).unwrap();
        let start = life.clone();
        for _ in 0..10 {
            life.step();
            assert_eq!(life, start, "block changed on a {n}x{n} grid:\n{life}");
        }
    }
}

#[test]
fn test_blinker_has_period_two() {
    for n in [5, 8] {
        let c = n / 2;
        let horizontal = vec![(c, c - 1), (c, c), (c, c + 1)];
        let vertical = vec![(c - 1, c), (c, c), (c + 1, c)];
        let mut life = Grid::with_alive(n, horizontal.clone()).unwrap();

        life.step();
        assert_eq!(alive_cells(&life), vertical);
        life.step();
        assert_eq!(alive_cells(&life), horizontal);
    }
}

#[test]
fn test_lonely_cell_dies() {
    for n in [1, 2, 3, 10] {
        let mut life = Grid::with_alive(n, [(n / 2, n / 2)]).unwrap();
        life.step();
        assert_eq!(life.population(), 0);
    }
}

#[test]
fn test_crowded_cell_dies() {
    let mut cells = ring(2, 2);
    cells.push((2, 2));
    let mut life = Grid::with_alive(5, cells).unwrap();
    assert_eq!(life.neighbor_count(2, 2), Ok(8));
    life.step();
    assert_eq!(life.is_alive(2, 2), Ok(false));
}

#[test]
fn test_birth_needs_exactly_three() {
    let around = ring(2, 2);
    for k in 0..=8 {
        let mut life = Grid::with_alive(5, around[..k].iter().copied()).unwrap();
        assert_eq!(life.neighbor_count(2, 2), Ok(k as u8));
        life.step();
        assert_eq!(life.is_alive(2, 2), Ok(k == 3), "{k} neighbors");
    }
}

#[test]
fn test_survival_needs_two_or_three() {
    let around = ring(2, 2);
    for k in 0..=8 {
        let mut cells = around[..k].to_vec();
        cells.push((2, 2));
        let mut life = Grid::with_alive(5, cells).unwrap();
        life.step();
        assert_eq!(life.is_alive(2, 2), Ok(k == 2 || k == 3), "{k} neighbors");
    }
}

#[test]
fn test_corner_has_three_neighbors_at_most() {
    let n = 6;
    let life = Grid::from_cells(n, vec![true; n * n]).unwrap();
    for (row, col) in [(0, 0), (0, n - 1), (n - 1, 0), (n - 1, n - 1)] {
        assert_eq!(life.neighbor_count(row as i64, col as i64), Ok(3));
    }
}

#[test]
fn test_corner_survives_with_two_neighbors() {
    let mut life = Grid::with_alive(6, [(0, 0), (0, 1), (1, 0)]).unwrap();
    life.step();
    assert_eq!(life.is_alive(0, 0), Ok(true));
    // (1, 1) is born from the three, making a block
    assert_eq!(alive_cells(&life), [(0, 0), (0, 1), (1, 0), (1, 1)]);
}

#[test]
fn test_edges_do_not_wrap() {
    // a torus would give (0, 0) three neighbors here
    let n = 5;
    let mut life = Grid::with_alive(n, [(0, n - 1), (n - 1, 0), (n - 1, n - 1)]).unwrap();
    assert_eq!(life.neighbor_count(0, 0), Ok(0));
    life.step();
    assert_eq!(life.population(), 0);
}

#[test]
fn test_glider_translates_diagonally() {
    let glider = b"x = 3, y = 3\nbo$2bo$3o!";
    let mut life = Grid::from_rle(12, glider).unwrap();
    let start = alive_cells(&life);
    for shift in 1..=4 {
        life.advance(4);
        let moved: Vec<_> = start.iter().map(|&(r, c)| (r + shift, c + shift)).collect();
        assert_eq!(alive_cells(&life), moved, "after {} generations", 4 * shift);
    }
}

#[test]
fn test_determinism() {
    let mut a = Grid::random(64, Some(SEED)).unwrap();
    let mut b = Grid::random(64, Some(SEED)).unwrap();
    assert_eq!(a, b);
    a.advance(50);
    b.advance(50);
    assert_eq!(a, b);
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_advance_matches_repeated_step() {
    let mut a = Grid::random(32, Some(SEED)).unwrap();
    let mut b = a.clone();
    a.advance(17);
    for _ in 0..17 {
        b.step();
    }
    assert_eq!(a, b);
    assert_eq!(a.generation(), b.generation());
}

#[test]
fn test_is_alive_bounds() {
    let n = 7;
    let life = Grid::random(n, Some(SEED)).unwrap();
    let n = n as i64;
    for (row, col) in [(-1, 0), (0, -1), (n, 0), (0, n), (-1, n)] {
        assert_eq!(
            life.is_alive(row, col),
            Err(GridError::IndexOutOfBounds {
                row,
                col,
                dimension: 7
            })
        );
    }
    assert!(life.is_alive(n - 1, n - 1).is_ok());
}

#[test]
fn test_new_draws_from_given_source() {
    use rand::SeedableRng;

    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(SEED);
    let a = Grid::new(16, &mut rng).unwrap();
    let b = Grid::random(16, Some(SEED)).unwrap();
    assert_eq!(a, b);
    let c = Grid::new(16, &mut rng).unwrap();
    assert_ne!(a, c);
}
