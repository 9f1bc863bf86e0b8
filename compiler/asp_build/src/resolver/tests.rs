use pretty_assertions::assert_eq;
use smallvec::SmallVec;

use super::*;
use asp_ir::{Location, Position, Render, Symbol, TupleKind};

fn op_def(
    interner: &StringInterner,
    name: &str,
    priority: u32,
    kind: TheoryOperatorType,
) -> TheoryOperatorDef {
    TheoryOperatorDef {
        name: interner.intern(name),
        priority,
        kind,
        loc: Location::DUMMY,
    }
}

/// `-` unary (5), `+`/`-` left (1), `*` left (2), `^` right (3).
fn arith(interner: &StringInterner) -> TheoryTermDef {
    TheoryTermDef {
        name: interner.intern("term"),
        ops: vec![
            op_def(interner, "-", 5, TheoryOperatorType::Unary),
            op_def(interner, "+", 1, TheoryOperatorType::BinaryLeft),
            op_def(interner, "-", 1, TheoryOperatorType::BinaryLeft),
            op_def(interner, "*", 2, TheoryOperatorType::BinaryLeft),
            op_def(interner, "^", 3, TheoryOperatorType::BinaryRight),
        ],
        loc: Location::DUMMY,
    }
}

fn num(n: i32, column: u32) -> TheoryTerm {
    let at = Position::new(asp_ir::Name::EMPTY, 1, column);
    TheoryTerm::new(TheoryTermKind::Symbol(Symbol::Number(n)), Location::new(at, at))
}

/// Parse a whitespace separated `op* n (op+ n)*` string into a raw term.
fn raw(interner: &StringInterner, text: &str) -> RawTheoryTerm {
    let mut raw = RawTheoryTerm::default();
    let mut ops: SmallVec<[Name; 2]> = SmallVec::new();
    for (column, token) in (1..).zip(text.split_whitespace()) {
        match token.parse::<i32>() {
            Ok(n) => raw.push(std::mem::take(&mut ops), num(n, column)),
            Err(_) => ops.push(interner.intern(token)),
        }
    }
    raw
}

fn resolved(interner: &StringInterner, text: &str) -> String {
    resolve(&raw(interner, text), &arith(interner), interner)
        .unwrap_or_else(|e| panic!("{e}"))
        .render(interner)
}

#[test]
fn single_operand() {
    let interner = StringInterner::new();
    assert_eq!(resolved(&interner, "7"), "7");
}

#[test]
fn precedence() {
    let interner = StringInterner::new();
    assert_eq!(resolved(&interner, "1 + 2 * 3"), "(1 + (2 * 3))");
    assert_eq!(resolved(&interner, "1 * 2 + 3"), "((1 * 2) + 3)");
}

#[test]
fn left_associativity() {
    let interner = StringInterner::new();
    assert_eq!(resolved(&interner, "1 - 2 - 3"), "((1 - 2) - 3)");
    assert_eq!(resolved(&interner, "1 + 2 - 3 + 4"), "(((1 + 2) - 3) + 4)");
}

#[test]
fn right_associativity() {
    let interner = StringInterner::new();
    assert_eq!(resolved(&interner, "2 ^ 3 ^ 4"), "(2 ^ (3 ^ 4))");
    assert_eq!(resolved(&interner, "2 * 3 ^ 4 ^ 5"), "(2 * (3 ^ (4 ^ 5)))");
}

#[test]
fn unary_binds_tightest() {
    let interner = StringInterner::new();
    assert_eq!(resolved(&interner, "- 1 * 2"), "((- 1) * 2)");
    assert_eq!(resolved(&interner, "1 - - 2"), "(1 - (- 2))");
    assert_eq!(resolved(&interner, "- - 3"), "(- (- 3))");
}

#[test]
fn unknown_binary_operator() {
    let interner = StringInterner::new();
    let err = resolve(&raw(&interner, "1 / 2"), &arith(&interner), &interner);
    assert_eq!(
        err,
        Err(TheoryError::UnknownOperator {
            op: "/".into(),
            unary: false,
            loc: num(2, 3).loc,
        })
    );
}

#[test]
fn binary_only_operator_rejected_as_unary() {
    let interner = StringInterner::new();
    let err = resolve(&raw(&interner, "* 2"), &arith(&interner), &interner);
    assert!(matches!(
        err,
        Err(TheoryError::UnknownOperator { ref op, unary: true, .. }) if op == "*"
    ));
}

#[test]
fn nested_terms_resolve() {
    let interner = StringInterner::new();
    let def = arith(&interner);
    let inner = TheoryTerm::new(
        TheoryTermKind::Unparsed(raw(&interner, "1 + 2 * 3")),
        Location::DUMMY,
    );
    let tuple = TheoryTerm::new(
        TheoryTermKind::Tuple {
            kind: TupleKind::Bracket,
            elems: vec![inner, num(4, 9)],
        },
        Location::DUMMY,
    );
    let fun = TheoryTerm::new(
        TheoryTermKind::Function {
            name: interner.intern("f"),
            args: vec![tuple],
        },
        Location::DUMMY,
    );

    let result = resolve_term(&fun, &def, &interner).unwrap_or_else(|e| panic!("{e}"));
    assert!(!result.is_unparsed());
    assert_eq!(result.render(&interner), "f([(1 + (2 * 3)),4])");
}

#[test]
fn deep_nesting_does_not_overflow() {
    let interner = StringInterner::new();
    let def = arith(&interner);
    let mut term = num(0, 1);
    for _ in 0..50_000 {
        term = TheoryTerm::new(
            TheoryTermKind::Tuple {
                kind: TupleKind::Paren,
                elems: vec![term],
            },
            Location::DUMMY,
        );
    }
    let result = resolve_term(&term, &def, &interner).unwrap_or_else(|e| panic!("{e}"));
    assert!(!result.is_unparsed());
    // Unwrap iteratively so dropping the trees does not recurse.
    for mut tree in [term, result] {
        while let TheoryTermKind::Tuple { mut elems, .. } = tree.kind {
            match elems.pop() {
                Some(inner) => tree = inner,
                None => break,
            }
        }
    }
}

#[test]
fn validate_reports_duplicate_category() {
    let interner = StringInterner::new();
    let mut def = arith(&interner);
    assert_eq!(validate(&def, &interner), Ok(()));

    let mut dup = op_def(&interner, "+", 4, TheoryOperatorType::BinaryRight);
    dup.loc = num(0, 12).loc;
    def.ops.push(dup);
    assert_eq!(
        validate(&def, &interner),
        Err(TheoryError::DuplicateOperator {
            op: "+".into(),
            unary: false,
            term_def: "term".into(),
            loc: num(0, 12).loc,
            previous: Location::DUMMY,
        })
    );
}

mod proptest_resolver {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        /// Same-priority left associative chains lean left.
        #[test]
        fn left_chains_lean_left(values in prop::collection::vec(0..100i32, 1..12)) {
            let interner = StringInterner::new();
            let text = values.iter().map(ToString::to_string).collect::<Vec<_>>().join(" + ");
            let expected = values[1..]
                .iter()
                .fold(values[0].to_string(), |acc, v| format!("({acc} + {v})"));
            prop_assert_eq!(resolved(&interner, &text), expected);
        }

        /// Right associative chains lean right.
        #[test]
        fn right_chains_lean_right(values in prop::collection::vec(0..100i32, 1..12)) {
            let interner = StringInterner::new();
            let text = values.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ^ ");
            let last = values[values.len() - 1].to_string();
            let expected = values[..values.len() - 1]
                .iter()
                .rev()
                .fold(last, |acc, v| format!("({v} ^ {acc})"));
            prop_assert_eq!(resolved(&interner, &text), expected);
        }
    }
}
