use super::*;

#[test]
fn display_single_line() {
    let interner = StringInterner::new();
    let file = interner.intern("graph.lp");
    let loc = Location::span(file, 3, 1, 3, 9);
    assert_eq!(loc.display(&interner).to_string(), "graph.lp:3:1-9");
}

#[test]
fn display_multi_line_and_point() {
    let interner = StringInterner::new();
    let file = interner.intern("graph.lp");
    assert_eq!(
        Location::span(file, 3, 1, 5, 2).display(&interner).to_string(),
        "graph.lp:3:1-5:2"
    );
    assert_eq!(
        Location::span(file, 7, 4, 7, 4).display(&interner).to_string(),
        "graph.lp:7:4"
    );
}

#[test]
fn display_across_files() {
    let interner = StringInterner::new();
    let a = interner.intern("a.lp");
    let b = interner.intern("b.lp");
    let loc = Location::new(Position::new(a, 1, 1), Position::new(b, 2, 3));
    assert_eq!(loc.display(&interner).to_string(), "a.lp:1:1-b.lp:2:3");
}

#[test]
fn merge_covers_both() {
    let file = Name::from_raw(1);
    let left = Location::span(file, 1, 5, 1, 8);
    let right = Location::span(file, 1, 2, 2, 1);
    assert_eq!(left.merge(right), Location::span(file, 1, 2, 2, 1));
}
