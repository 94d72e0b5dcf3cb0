//! Tests for the `#[derive(Lenses)]` macro.
//!
//! This module exercises the generated per-field lenses, the per-`Vec`
//! field `Elements` traversals, and the `{Type}Lenses` carrier, against
//! plain, nested, generic, sequence-holding, and zero-field structs.

use focal::optics::{Lens, Traversal};
use focal::Lenses;
use rstest::rstest;

// =============================================================================
// Test Structures
// =============================================================================

/// Simple struct with basic field types
#[derive(Clone, PartialEq, Debug, Lenses)]
struct Point {
    x: i32,
    y: i32,
}

/// Nested struct for composition testing
#[derive(Clone, PartialEq, Debug, Lenses)]
struct Segment {
    start: Point,
    end: Point,
}

/// Struct with a sequence field
#[derive(Clone, PartialEq, Debug, Lenses)]
struct Words {
    words: Vec<String>,
}

/// Struct mixing a sequence field with plain siblings
#[derive(Clone, PartialEq, Debug, Lenses)]
struct Inventory {
    name: String,
    quantities: Vec<u32>,
    audited: bool,
}

/// Struct with a nested sequence; only the outer level is traversed
#[derive(Clone, PartialEq, Debug, Lenses)]
struct Grid {
    rows: Vec<Vec<i32>>,
}

/// Struct with generic type parameters
#[derive(Clone, PartialEq, Debug, Lenses)]
struct Container<T> {
    value: T,
    label: String,
}

/// Zero-field struct: the expansion is just the empty carrier
#[derive(Clone, PartialEq, Debug, Lenses)]
struct Empty {}

/// Unit struct: treated like a zero-field struct
#[derive(Clone, PartialEq, Debug, Lenses)]
struct Unit;

// =============================================================================
// Field Lenses
// =============================================================================

#[rstest]
#[case(1, 2)]
#[case(-5, 0)]
fn test_generated_lens_view(#[case] x: i32, #[case] y: i32) {
    assert_eq!(PointLenses::x().view(Point { x, y }), x);
    assert_eq!(PointLenses::y().view(Point { x, y }), y);
}

#[test]
fn test_generated_lens_set_preserves_siblings() {
    let point = Point { x: 1, y: 2 };

    assert_eq!(PointLenses::x().set(9, point.clone()), Point { x: 9, y: 2 });
    assert_eq!(PointLenses::y().set(9, point), Point { x: 1, y: 9 });
}

#[test]
fn test_generated_lens_over() {
    let point = Point { x: 2, y: 3 };

    assert_eq!(
        PointLenses::x().over(|x| x * 10, point),
        Point { x: 20, y: 3 }
    );
}

#[test]
fn test_generated_lenses_compose() {
    let start_x = SegmentLenses::start().focus(PointLenses::x());
    let segment = Segment {
        start: Point { x: 1, y: 2 },
        end: Point { x: 3, y: 4 },
    };

    assert_eq!(start_x.view(segment.clone()), 1);

    let moved = start_x.set(9, segment);
    assert_eq!(moved.start, Point { x: 9, y: 2 });
    assert_eq!(moved.end, Point { x: 3, y: 4 });
}

#[test]
fn test_generated_lens_laws() {
    let lens = PointLenses::x();
    let point = Point { x: 7, y: 8 };

    // GetPut
    assert_eq!(lens.set(lens.view(point.clone()), point.clone()), point);
    // PutGet
    assert_eq!(lens.view(lens.set(42, point.clone())), 42);
    // PutPut
    assert_eq!(
        lens.set(2, lens.set(1, point.clone())),
        lens.set(2, point)
    );
}

// =============================================================================
// Sequence fields
// =============================================================================

#[test]
fn test_vec_field_still_gets_a_plain_lens() {
    let record = Words {
        words: vec!["hi".to_string()],
    };

    assert_eq!(
        WordsLenses::words().view(record.clone()),
        vec!["hi".to_string()]
    );
    assert_eq!(
        WordsLenses::words().set(Vec::new(), record),
        Words { words: Vec::new() }
    );
}

#[test]
fn test_elements_over_receives_per_index_lenses() {
    let record = Words {
        words: vec!["o.O".to_string(), "^.^".to_string()],
    };

    let wrapped = WordsLenses::words_elements().over(
        |lens| format!("({})", lens.view(record.clone())),
        record.clone(),
    );

    assert_eq!(
        wrapped,
        Words {
            words: vec!["(o.O)".to_string(), "(^.^)".to_string()],
        }
    );
}

#[test]
fn test_elements_fold_map_visits_ascending() {
    let record = Words {
        words: vec!["a".to_string(), "b".to_string(), "c".to_string()],
    };

    let joined = WordsLenses::words_elements().fold_map(
        String::new(),
        |left, right| left + &right,
        |lens| lens.view(record.clone()),
        record.clone(),
    );

    assert_eq!(joined, "abc");
}

#[test]
fn test_elements_over_preserves_plain_siblings() {
    let inventory = Inventory {
        name: "screws".to_string(),
        quantities: vec![1, 2, 3],
        audited: true,
    };

    let doubled = InventoryLenses::quantities_elements().over(
        |lens| lens.view(inventory.clone()) * 2,
        inventory.clone(),
    );

    assert_eq!(doubled.name, "screws");
    assert!(doubled.audited);
    assert_eq!(doubled.quantities, vec![2, 4, 6]);
}

#[test]
fn test_elements_on_empty_sequence() {
    let record = Words { words: Vec::new() };

    let untouched = WordsLenses::words_elements().over(
        |lens| lens.view(record.clone()),
        record.clone(),
    );

    assert_eq!(untouched, record);
}

#[test]
fn test_nested_sequence_traverses_outer_level_only() {
    let grid = Grid {
        rows: vec![vec![1, 2], vec![3]],
    };

    // The foci are whole rows, not individual cells.
    let extended = GridLenses::rows_elements().over(
        |lens| {
            let mut row = lens.view(grid.clone());
            row.push(0);
            row
        },
        grid.clone(),
    );

    assert_eq!(extended.rows, vec![vec![1, 2, 0], vec![3, 0]]);
}

// =============================================================================
// Generics
// =============================================================================

#[test]
fn test_generic_struct_lenses() {
    let container = Container {
        value: 42,
        label: "answer".to_string(),
    };

    assert_eq!(ContainerLenses::<i32>::value().view(container.clone()), 42);

    let relabeled = ContainerLenses::<i32>::label().set("other".to_string(), container);
    assert_eq!(relabeled.value, 42);
    assert_eq!(relabeled.label, "other");
}

#[test]
fn test_generic_struct_lenses_with_owned_type() {
    let container = Container {
        value: vec![1, 2],
        label: "list".to_string(),
    };

    assert_eq!(
        ContainerLenses::<Vec<i32>>::value().over(|mut list| {
            list.push(3);
            list
        }, container).value,
        vec![1, 2, 3]
    );
}

// =============================================================================
// Zero-field structs and carrier properties
// =============================================================================

#[test]
fn test_zero_field_structs_emit_empty_carriers() {
    // The carriers exist; there is simply nothing to focus.
    let _: EmptyLenses;
    let _: UnitLenses;
}

#[test]
fn test_generated_optics_are_copy_and_debug() {
    let lens = PointLenses::x();
    let copy = lens;

    assert_eq!(lens.view(Point { x: 1, y: 2 }), copy.view(Point { x: 1, y: 2 }));
    assert_eq!(format!("{lens:?}"), "PointXLens");
    assert_eq!(format!("{:?}", WordsLenses::words_elements()), "WordsWordsElements");
}
