//! Theory atoms resolved against `#theory` definitions when the program is
//! finished.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

mod common;

use pretty_assertions::assert_eq;

use asp_build::ids::{HeadId, TheoryAtomId};
use asp_build::{Aggregate, ProgramBuilder};
use asp_diagnostic::ErrorCode;
use asp_ir::{Naf, SharedInterner, Symbol, TheoryAtomType, TheoryOperatorType, TupleKind};
use common::{builder, id, line, opterm, optermvec, pred, rendered};

/// ```text
/// #theory arith {
///     t { + : 1, binary, left; * : 2, binary, left;
///         ^ : 3, binary, right; - : 4, unary };
///     &sum/0 : t, {<=, =}, t, body;
///     &show/0 : t, directive;
///     &dom/0 : t, head;
///     &diff/0 : t, any
/// }.
/// ```
fn arith(b: &mut ProgramBuilder, n: u32) {
    let mut ops = b.theory_op_defs();
    for (op, priority, kind) in [
        ("+", 1, TheoryOperatorType::BinaryLeft),
        ("*", 2, TheoryOperatorType::BinaryLeft),
        ("^", 3, TheoryOperatorType::BinaryRight),
        ("-", 4, TheoryOperatorType::Unary),
    ] {
        let def = b.theory_op_def(line(n), op, priority, kind);
        ops = b.theory_op_defs_push(ops, def);
    }
    let term_def = b.theory_term_def(line(n), "t", ops);
    let defs = b.theory_defs();
    let mut defs = b.theory_defs_push_term(defs, term_def);

    let guard_ops = b.theory_ops();
    let guard_ops = b.theory_ops_push(guard_ops, "<=");
    let guard_ops = b.theory_ops_push(guard_ops, "=");
    let sum = b.theory_atom_def_guarded(
        line(n),
        "sum",
        0,
        "t",
        TheoryAtomType::Body,
        guard_ops,
        "t",
    );
    defs = b.theory_defs_push_atom(defs, sum);
    for (name, kind) in [
        ("show", TheoryAtomType::Directive),
        ("dom", TheoryAtomType::Head),
        ("diff", TheoryAtomType::Any),
    ] {
        let def = b.theory_atom_def(line(n), name, 0, "t", kind);
        defs = b.theory_defs_push_atom(defs, def);
    }
    b.theory_definition(line(n), "arith", defs);
}

/// `&name { e1; e2; ... } guard`, one single-term tuple per element.
fn atom(
    b: &mut ProgramBuilder,
    name: &str,
    elems: &[&str],
    guard: Option<(&str, &str)>,
) -> TheoryAtomId {
    let mut vec = b.theory_elems();
    for &elem in elems {
        let tuple = optermvec(b, &[elem]);
        let cond = b.litvec();
        vec = b.theory_elems_push(vec, tuple, cond);
    }
    let name = id(b, name);
    match guard {
        None => b.theory_atom(line(1), name, vec),
        Some((op, term)) => {
            let term = opterm(b, term);
            b.theory_atom_guarded(line(1), name, vec, op, term)
        }
    }
}

fn head_atom(b: &mut ProgramBuilder, atom: TheoryAtomId) -> HeadId {
    let bounds = b.boundvec();
    b.head_aggr(line(1), Aggregate::theory(atom), bounds)
}

/// `head :- &atom.` with a plain `a` head.
fn body_rule(b: &mut ProgramBuilder, n: u32, atom: TheoryAtomId) {
    let a = id(b, "a");
    let a = pred(b, Naf::Pos, a);
    let head = b.head_lit(a);
    let bounds = b.boundvec();
    let body = b.body();
    let body = b.body_aggr(body, line(n), Naf::Pos, Aggregate::theory(atom), bounds);
    b.rule(line(n), head, body);
}

/// `&atom :- b.` (`with_body`) or `&atom.`
fn head_rule(b: &mut ProgramBuilder, n: u32, atom: TheoryAtomId, with_body: bool) {
    let head = head_atom(b, atom);
    let mut body = b.body();
    if with_body {
        let cond = id(b, "b");
        let cond = pred(b, Naf::Pos, cond);
        body = b.body_lit(body, cond);
    }
    b.rule(line(n), head, body);
}

fn codes(output: &asp_build::BuildOutput) -> Vec<ErrorCode> {
    output.diagnostics.iter().map(|d| d.code).collect()
}

#[test]
fn operators_resolve_by_priority_and_associativity() {
    let mut b = builder();
    let interner = b.interner().clone();
    arith(&mut b, 1);

    let sum = atom(
        &mut b,
        "sum",
        &["1 + 2 * 3", "2 ^ 3 ^ 4", "1 + 2 + 3", "- 1 * 2", "- - X"],
        Some(("<=", "10")),
    );
    body_rule(&mut b, 2, sum);

    let output = b.finish();
    assert!(codes(&output).is_empty());
    assert_eq!(
        rendered(&output, &interner),
        vec![
            "a:-&sum{(1 + (2 * 3));(2 ^ (3 ^ 4));((1 + 2) + 3);((- 1) * 2);(- (- X))}<=10."
        ]
    );
}

#[test]
fn guard_terms_resolve_too() {
    let mut b = builder();
    let interner = b.interner().clone();
    arith(&mut b, 1);

    let sum = atom(&mut b, "sum", &["x"], Some(("=", "y * 2 + 1")));
    body_rule(&mut b, 2, sum);

    let output = b.finish();
    assert_eq!(rendered(&output, &interner), vec!["a:-&sum{x}=((y * 2) + 1)."]);
}

#[test]
fn nested_tuples_resolve() {
    let mut b = builder();
    let interner = b.interner().clone();
    arith(&mut b, 1);

    let inner = optermvec(&mut b, &["1 + 2", "3"]);
    let tuple = b.theory_term_tuple(line(2), inner, TupleKind::Paren);
    let ops = b.theory_ops();
    let lone = b.theory_opterm(ops, tuple);
    let elem = b.theory_optermvec();
    let elem = b.theory_optermvec_push(elem, lone);
    let cond = b.litvec();
    let elems = b.theory_elems();
    let elems = b.theory_elems_push(elems, elem, cond);
    let name = id(&mut b, "diff");
    let diff = b.theory_atom(line(2), name, elems);
    body_rule(&mut b, 2, diff);

    let output = b.finish();
    assert_eq!(rendered(&output, &interner), vec!["a:-&diff{((1 + 2),3)}."]);
}

#[test]
fn unknown_operator_discards_the_statement() {
    let mut b = builder();
    let interner = b.interner().clone();
    arith(&mut b, 1);

    let bad = atom(&mut b, "sum", &["1 / 2"], None);
    body_rule(&mut b, 2, bad);
    let good = atom(&mut b, "sum", &["1 + 2"], None);
    body_rule(&mut b, 3, good);

    let output = b.finish();
    assert_eq!(codes(&output), vec![ErrorCode::E1001]);
    assert_eq!(rendered(&output, &interner), vec!["a:-&sum{(1 + 2)}."]);
}

#[test]
fn every_discarded_statement_is_reported_by_default() {
    let mut b = ProgramBuilder::new(SharedInterner::new());
    let interner = b.interner().clone();
    arith(&mut b, 1);

    // Both atoms sit on the same line and their messages share a long prefix.
    let slash = atom(&mut b, "sum", &["1 / 2"], None);
    body_rule(&mut b, 5, slash);
    let percent = atom(&mut b, "sum", &["1 % 2"], None);
    body_rule(&mut b, 5, percent);
    let dom = atom(&mut b, "dom", &["1"], None);
    body_rule(&mut b, 5, dom);
    let good = atom(&mut b, "sum", &["1 + 2"], None);
    body_rule(&mut b, 6, good);

    let output = b.finish();
    assert_eq!(
        codes(&output),
        vec![ErrorCode::E1001, ErrorCode::E1001, ErrorCode::E1005]
    );
    let messages: Vec<_> = output.diagnostics.iter().map(|d| d.message.as_str()).collect();
    assert!(messages[0].contains("`/`"));
    assert!(messages[1].contains("`%`"));
    assert_eq!(rendered(&output, &interner), vec!["a:-&sum{(1 + 2)}."]);
}

#[test]
fn guard_operator_must_be_declared() {
    let mut b = builder();
    arith(&mut b, 1);

    let sum = atom(&mut b, "sum", &["1"], Some((">=", "2")));
    body_rule(&mut b, 2, sum);

    let output = b.finish();
    assert_eq!(codes(&output), vec![ErrorCode::E1004]);
    assert!(output.program.statements.is_empty());
}

#[test]
fn placement_follows_atom_type() {
    let mut b = builder();
    let interner = b.interner().clone();
    arith(&mut b, 1);

    // &sum is body only.
    let sum = atom(&mut b, "sum", &["1"], None);
    head_rule(&mut b, 2, sum, true);
    // &show only as a directive.
    let show = atom(&mut b, "show", &["1"], None);
    head_rule(&mut b, 3, show, false);
    let show = atom(&mut b, "show", &["1"], None);
    head_rule(&mut b, 4, show, true);
    // &dom in heads, including directives, never in bodies.
    let dom = atom(&mut b, "dom", &["1"], None);
    head_rule(&mut b, 5, dom, true);
    let dom = atom(&mut b, "dom", &["1"], None);
    head_rule(&mut b, 6, dom, false);
    let dom = atom(&mut b, "dom", &["1"], None);
    body_rule(&mut b, 7, dom);
    // &diff anywhere.
    let diff = atom(&mut b, "diff", &["1"], None);
    body_rule(&mut b, 8, diff);
    let diff = atom(&mut b, "diff", &["1"], None);
    head_rule(&mut b, 9, diff, true);

    let output = b.finish();
    assert_eq!(
        codes(&output),
        vec![ErrorCode::E1005, ErrorCode::E1005, ErrorCode::E1005]
    );
    assert_eq!(
        rendered(&output, &interner),
        vec![
            "&show{1}.",
            "&dom{1}:-b.",
            "&dom{1}.",
            "a:-&diff{1}.",
            "&diff{1}:-b.",
        ]
    );
}

#[test]
fn atoms_without_definition_stay_unparsed() {
    let mut b = builder();
    let interner = b.interner().clone();
    arith(&mut b, 1);

    let foo = atom(&mut b, "foo", &["1 + 2"], None);
    body_rule(&mut b, 2, foo);

    let output = b.finish();
    assert!(!output.has_errors());
    assert_eq!(rendered(&output, &interner), vec!["a:-&foo{<1 + 2>}."]);
    assert!(matches!(
        &output.program.statements[0].body().map(|body| body[0].kind.clone()),
        Some(asp_ir::BodyElemKind::Theory { atom, .. }) if atom.is_unparsed()
    ));
}

#[test]
fn definition_conflicts_are_reported() {
    let mut b = builder();
    arith(&mut b, 1);
    // Same theory name again.
    arith(&mut b, 2);

    let t = b.theory_op_defs();
    let t = b.theory_term_def(line(3), "t", t);
    let t_again = b.theory_op_defs();
    let t_again = b.theory_term_def(line(4), "t", t_again);
    let missing = b.theory_atom_def(line(5), "m", 1, "u", TheoryAtomType::Any);
    let sum = b.theory_atom_def(line(6), "sum", 0, "t", TheoryAtomType::Any);
    let ok = b.theory_atom_def(line(7), "ok", 2, "t", TheoryAtomType::Head);
    let defs = b.theory_defs();
    let defs = b.theory_defs_push_term(defs, t);
    let defs = b.theory_defs_push_term(defs, t_again);
    let defs = b.theory_defs_push_atom(defs, missing);
    let defs = b.theory_defs_push_atom(defs, sum);
    let defs = b.theory_defs_push_atom(defs, ok);
    b.theory_definition(line(3), "other", defs);

    let output = b.finish();
    assert_eq!(
        codes(&output),
        vec![
            ErrorCode::E2002,
            ErrorCode::E2003,
            ErrorCode::E1003,
            ErrorCode::E2004,
        ]
    );

    let theories = &output.program.theories;
    assert_eq!(theories.len(), 2);
    let other = theories
        .iter()
        .find(|theory| theory.term_defs.len() == 1 && theory.atom_defs.len() == 1)
        .expect("second theory keeps its valid parts");
    assert_eq!(other.atom_defs[0].arity, 2);
}

#[test]
fn theory_terms_carry_values_and_functions() {
    let mut b = builder();
    let interner = b.interner().clone();
    arith(&mut b, 1);

    let args = optermvec(&mut b, &["1 + 2", "x"]);
    let f = b.theory_term_fun(line(2), "f", args);
    let s = b.theory_term_value(line(2), Symbol::String(interner.intern("s")));
    let ops = b.theory_ops();
    let first = b.theory_opterm(ops, f);
    let ops = b.theory_ops();
    let ops = b.theory_ops_push(ops, "*");
    let opterm = b.theory_opterm_push(first, ops, s);
    let paren = b.theory_term_opterm(line(2), opterm);
    let ops = b.theory_ops();
    let lone = b.theory_opterm(ops, paren);
    let tuple = b.theory_optermvec();
    let tuple = b.theory_optermvec_push(tuple, lone);
    let cond = b.litvec();
    let elems = b.theory_elems();
    let elems = b.theory_elems_push(elems, tuple, cond);
    let name = id(&mut b, "diff");
    let diff = b.theory_atom(line(2), name, elems);
    body_rule(&mut b, 2, diff);

    let output = b.finish();
    assert_eq!(
        rendered(&output, &interner),
        vec![r#"a:-&diff{(f((1 + 2),x) * "s")}."#]
    );
}
