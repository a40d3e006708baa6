//! End-to-end folding scenarios through the public query API

use foldpunch_core::{
    answer, Circle, Fold, FoldError, Line, Point, Query, QueryEngine, Rectangle, ResolverOptions,
    ShapeRegistry, Traversal,
};

fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
    Line::through(Point::new(x1, y1), Point::new(x2, y2)).unwrap()
}

fn square() -> Rectangle {
    Rectangle::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0))
}

#[test]
fn test_single_rectangle() {
    let registry = ShapeRegistry::new(vec![square().into()]).unwrap();
    assert_eq!(answer(0, Point::new(5.0, 5.0), &registry).unwrap(), 1);
    assert_eq!(answer(0, Point::new(20.0, 20.0), &registry).unwrap(), 0);
}

#[test]
fn test_vertical_crease() {
    let mut builder = ShapeRegistry::builder();
    builder.push(square()).unwrap();
    builder.push(Fold::new(line(5.0, 0.0, 5.0, 10.0), 0)).unwrap();
    let registry = builder.build();

    // the crease keeps x <= 5 for this direction
    assert_eq!(answer(1, Point::new(3.0, 5.0), &registry).unwrap(), 2);
    assert_eq!(answer(1, Point::new(7.0, 5.0), &registry).unwrap(), 0);
    assert_eq!(answer(1, Point::new(5.0, 5.0), &registry).unwrap(), 1);
}

#[test]
fn test_fixed_point_counted_once() {
    let registry = ShapeRegistry::new(vec![
        square().into(),
        Fold::new(line(0.0, 0.0, 10.0, 10.0), 0).into(),
    ])
    .unwrap();
    // (4, 4) sits on the diagonal crease
    assert_eq!(answer(1, Point::new(4.0, 4.0), &registry).unwrap(), 1);
    // (2, 6) is on the kept side and mirrors to (6, 2)
    assert_eq!(answer(1, Point::new(2.0, 6.0), &registry).unwrap(), 2);
}

#[test]
fn test_accordion_fold() {
    // strip 0..8 folded onto its right half at x = 4, then again at x = 6
    let registry = ShapeRegistry::new(vec![
        Rectangle::new(Point::new(0.0, 0.0), Point::new(8.0, 1.0)).into(),
        Fold::new(line(4.0, 1.0, 4.0, 0.0), 0).into(),
        Fold::new(line(6.0, 1.0, 6.0, 0.0), 1).into(),
    ])
    .unwrap();
    assert_eq!(registry.fold_depth(2).unwrap(), 2);
    // x = 7 maps to {7, 5} on shape 1, then {7, 1, 5, 3} on shape 0
    assert_eq!(answer(2, Point::new(7.0, 0.5), &registry).unwrap(), 4);
    // x = 5 is on the discarded half of the second crease
    assert_eq!(answer(2, Point::new(5.0, 0.5), &registry).unwrap(), 0);
    // the second crease itself only unfolds once: {6} then {6, 2}
    assert_eq!(answer(2, Point::new(6.0, 0.5), &registry).unwrap(), 2);
    // beyond the strip every preimage misses the paper
    assert_eq!(answer(2, Point::new(8.5, 0.5), &registry).unwrap(), 0);
}

#[test]
fn test_punch_on_shared_fold_history() {
    // two independent creases over the same disc
    let registry = ShapeRegistry::new(vec![
        Circle::new(Point::new(0.0, 0.0), 3.0).into(),
        Fold::new(line(0.0, 5.0, 0.0, -5.0), 0).into(),
        Fold::new(line(-5.0, 0.0, 5.0, 0.0), 0).into(),
    ])
    .unwrap();
    assert_eq!(answer(1, Point::new(1.0, 1.0), &registry).unwrap(), 2);
    assert_eq!(answer(1, Point::new(-1.0, 1.0), &registry).unwrap(), 0);
    assert_eq!(answer(2, Point::new(1.0, 1.0), &registry).unwrap(), 2);
    assert_eq!(answer(2, Point::new(1.0, -1.0), &registry).unwrap(), 0);
    // outside the disc on both sides
    assert_eq!(answer(1, Point::new(2.5, 2.5), &registry).unwrap(), 0);
}

#[test]
fn test_traversals_agree() {
    let registry = ShapeRegistry::new(vec![
        Rectangle::new(Point::new(-6.0, -6.0), Point::new(6.0, 6.0)).into(),
        Fold::new(line(0.0, -1.0, 0.0, 1.0), 0).into(),
        Fold::new(line(1.0, 0.0, -1.0, 0.0), 1).into(),
        Fold::new(line(-1.0, -1.0, -2.0, -2.0), 2).into(),
        Circle::new(Point::new(2.0, 2.0), 1.5).into(),
        Fold::new(line(2.0, 0.0, 2.0, 4.0), 4).into(),
    ])
    .unwrap();
    let worklist = QueryEngine::new(&registry);
    let recursive = QueryEngine::with_options(
        &registry,
        ResolverOptions {
            traversal: Traversal::Recursive,
            max_preimages: None,
        },
    );

    let mut queries = Vec::new();
    for shape in 0..registry.len() {
        for ix in -8..=8 {
            for iy in -8..=8 {
                queries.push(Query::new(
                    shape,
                    Point::new(ix as f64 * 0.75, iy as f64 * 0.75),
                ));
            }
        }
    }
    let a = worklist.answer_all(&queries).unwrap();
    let b = recursive.answer_all(&queries).unwrap();
    assert_eq!(a, b);
    assert!(a.iter().any(|&n| n >= 4), "expected a multi-layer punch");
}

#[test]
fn test_concurrent_queries_share_registry() {
    let registry = ShapeRegistry::new(vec![
        square().into(),
        Fold::new(line(5.0, 10.0, 5.0, 0.0), 0).into(),
    ])
    .unwrap();

    let results: Vec<u32> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let registry = &registry;
                scope.spawn(move || {
                    let engine = QueryEngine::new(registry);
                    engine
                        .answer(&Query::new(1, Point::new(6.0 + i as f64, 5.0)))
                        .unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    // x = 6..9 all mirror back onto the square
    assert_eq!(results, vec![2, 2, 2, 2]);
}

#[test]
fn test_invalid_registry_is_rejected() {
    let err = ShapeRegistry::new(vec![
        Fold::new(line(0.0, 0.0, 1.0, 0.0), 0).into(),
        square().into(),
    ])
    .unwrap_err();
    assert_eq!(
        err,
        FoldError::CyclicFoldReference {
            index: 0,
            source_index: 0
        }
    );
}

#[test]
fn test_recursive_traversal_survives_long_fold_chain() {
    let mut builder = ShapeRegistry::builder();
    let mut last = builder.push(square()).unwrap();
    for _ in 0..200_000 {
        last = builder
            .push(Fold::new(line(5.0, 0.0, 5.0, 10.0), last))
            .unwrap();
    }
    let registry = builder.build();

    let recursive = QueryEngine::with_options(
        &registry,
        ResolverOptions {
            traversal: Traversal::Recursive,
            max_preimages: None,
        },
    );
    let query = Query::new(last, Point::new(5.0, 5.0));
    assert_eq!(recursive.answer(&query).unwrap(), 1);
    assert_eq!(QueryEngine::new(&registry).answer(&query).unwrap(), 1);
}
