use pretty_assertions::assert_eq;

use super::*;
use crate::Aggregate;
use asp_diagnostic::ErrorCode;
use asp_ir::{
    AggregateFunction, Naf, Relation, Render, Symbol, TermKind, TheoryOperatorType, TheoryTermKind,
};

fn builder() -> ProgramBuilder {
    ProgramBuilder::with_config(SharedInterner::new(), BuilderConfig::unlimited())
}

fn loc() -> Location {
    Location::DUMMY
}

fn cell_of(term: &Term) -> (Name, VarCell) {
    match &term.kind {
        TermKind::Variable { name, cell } => (*name, cell.clone()),
        other => panic!("expected a variable, got {other:?}"),
    }
}

#[test]
fn variables_share_cells_by_name() {
    let mut b = builder();
    let x1 = b.term_var(loc(), "X");
    let x2 = b.term_var(loc(), "X");
    let y = b.term_var(loc(), "Y");

    let (_, x1) = cell_of(&b.terms.take(x1));
    let (_, x2) = cell_of(&b.terms.take(x2));
    let (_, y) = cell_of(&b.terms.take(y));
    assert!(x1.same_cell(&x2));
    assert!(!x1.same_cell(&y));

    x1.bind(Symbol::Number(3));
    assert_eq!(x2.value(), Some(Symbol::Number(3)));
}

#[test]
fn anonymous_variables_are_fresh() {
    let mut b = builder();
    let a = b.term_var(loc(), "_");
    let c = b.term_var(loc(), "_");

    let (a_name, a_cell) = cell_of(&b.terms.take(a));
    let (c_name, c_cell) = cell_of(&b.terms.take(c));
    assert!(a_name != c_name);
    assert!(!a_cell.same_cell(&c_cell));
    assert!(b.interner.lookup(a_name).starts_with("_#"));
}

#[test]
fn theory_variables_share_term_cells() {
    let mut b = builder();
    let x = b.term_var(loc(), "X");
    let tx = b.theory_term_var(loc(), "X");

    let (_, cell) = cell_of(&b.terms.take(x));
    match b.theory_terms.take(tx).kind {
        TheoryTermKind::Variable { cell: theory_cell, .. } => assert!(cell.same_cell(&theory_cell)),
        other => panic!("expected a variable, got {other:?}"),
    }
}

#[test]
fn single_alternative_is_not_a_pool() {
    let mut b = builder();
    let one = b.term_value(loc(), Symbol::Number(1));
    let alternatives = b.termvec();
    let alternatives = b.termvec_push(alternatives, one);
    let pool = b.term_pool(loc(), alternatives);

    assert_eq!(b.terms.take(pool), Term::value(Symbol::Number(1), loc()));
}

#[test]
fn call_without_argument_lists_is_a_constant() {
    let mut b = builder();
    let lists = b.termvecvec();
    let f = b.term_call(loc(), "f", lists, false);
    assert_eq!(b.terms.take(f).render(&b.interner), "f");
}

#[test]
#[should_panic(expected = "TermId")]
fn consumed_handle_is_rejected() {
    let mut b = builder();
    let one = b.term_value(loc(), Symbol::Number(1));
    let vec = b.termvec();
    let vec = b.termvec_push(vec, one);
    b.termvec_push(vec, one);
}

#[test]
fn lower_bound_is_mirrored() {
    let mut b = builder();
    let one = b.term_value(loc(), Symbol::Number(1));
    let two = b.term_value(loc(), Symbol::Number(2));
    let bounds = b.boundvec();
    let bounds = b.bound_lower(bounds, Relation::Lt, one);
    let bounds = b.bound_upper(bounds, Relation::Leq, two);

    let bounds = b.boundvecs.take(bounds);
    assert_eq!(
        bounds,
        vec![
            Bound {
                rel: Relation::Gt,
                term: Term::value(Symbol::Number(1), loc()),
            },
            Bound {
                rel: Relation::Leq,
                term: Term::value(Symbol::Number(2), loc()),
            },
        ]
    );
}

#[test]
#[should_panic(expected = "head aggregate elements used in a body")]
fn head_elements_in_body_panic() {
    let mut b = builder();
    let elems = b.head_aggr_elemvec();
    let bounds = b.boundvec();
    let body = b.body();
    b.body_aggr(
        body,
        loc(),
        Naf::Pos,
        Aggregate::head_tuples(AggregateFunction::Sum, elems),
        bounds,
    );
}

#[test]
#[should_panic(expected = "aggregate bounds")]
fn bounded_theory_atom_panics() {
    let mut b = builder();
    let name = b.term_value(loc(), Symbol::id(b.interner.intern("diff")));
    let elems = b.theory_elems();
    let atom = b.theory_atom(loc(), name, elems);
    let zero = b.term_value(loc(), Symbol::Number(0));
    let bounds = b.boundvec();
    let bounds = b.bound_upper(bounds, Relation::Leq, zero);
    b.head_aggr(loc(), Aggregate::theory(atom), bounds);
}

#[test]
fn lone_operand_needs_no_resolution() {
    let mut b = builder();
    let ops = b.theory_ops();
    let one = b.theory_term_value(loc(), Symbol::Number(1));
    let opterm = b.theory_opterm(ops, one);
    let vec = b.theory_optermvec();
    let vec = b.theory_optermvec_push(vec, opterm);

    let terms = b.theory_optermvecs.take(vec);
    assert_eq!(terms.len(), 1);
    assert!(matches!(terms[0].kind, TheoryTermKind::Symbol(Symbol::Number(1))));
}

#[test]
fn operator_sequences_stay_unparsed() {
    let mut b = builder();
    let ops = b.theory_ops();
    let ops = b.theory_ops_push(ops, "-");
    let x = b.theory_term_var(loc(), "x");
    let opterm = b.theory_opterm(ops, x);
    let vec = b.theory_optermvec();
    let vec = b.theory_optermvec_push(vec, opterm);

    let terms = b.theory_optermvecs.take(vec);
    assert_eq!(terms[0].render(&b.interner), "<- x>");
}

#[test]
#[should_panic(expected = "without a preceding operator")]
fn continuation_without_operator_panics() {
    let mut b = builder();
    let ops = b.theory_ops();
    let one = b.theory_term_value(loc(), Symbol::Number(1));
    let opterm = b.theory_opterm(ops, one);
    let ops = b.theory_ops();
    let two = b.theory_term_value(loc(), Symbol::Number(2));
    b.theory_opterm_push(opterm, ops, two);
}

#[test]
fn duplicate_operator_is_dropped_from_theory() {
    let mut b = builder();
    let plus = b.theory_op_def(loc(), "+", 1, TheoryOperatorType::BinaryLeft);
    let plus_again = b.theory_op_def(loc(), "+", 2, TheoryOperatorType::BinaryRight);
    let minus = b.theory_op_def(loc(), "-", 3, TheoryOperatorType::Unary);
    let ops = b.theory_op_defs();
    let ops = b.theory_op_defs_push(ops, plus);
    let ops = b.theory_op_defs_push(ops, plus_again);
    let ops = b.theory_op_defs_push(ops, minus);
    let term_def = b.theory_term_def(loc(), "t", ops);
    let defs = b.theory_defs();
    let defs = b.theory_defs_push_term(defs, term_def);
    b.theory_definition(loc(), "arith", defs);

    let output = b.finish();
    let codes: Vec<_> = output.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::E1002]);

    let theory = output
        .program
        .theories
        .iter()
        .next()
        .unwrap_or_else(|| panic!("theory not registered"));
    let ops: Vec<_> = theory.term_defs[0].ops.iter().map(|op| op.priority).collect();
    assert_eq!(ops, vec![1, 3]);
}

#[test]
fn config_constants_are_overrides() {
    let config = BuilderConfig::unlimited().with_constant("n", Symbol::Number(10));
    let mut b = ProgramBuilder::with_config(SharedInterner::new(), config);
    let three = b.term_value(loc(), Symbol::Number(3));
    b.define(loc(), "n", three, true);

    let n = b.interner.intern("n");
    let value = b.defines.get(n).map(|define| define.value.clone());
    assert_eq!(value, Some(Term::value(Symbol::Number(10), Location::DUMMY)));
    assert!(b.diagnostics.peek().next().is_none());
}

#[test]
#[should_panic(expected = "edge with 3 endpoints")]
fn edge_needs_pairs() {
    let mut b = builder();
    let mut triple = b.termvec();
    for n in 0..3 {
        let t = b.term_value(loc(), Symbol::Number(n));
        triple = b.termvec_push(triple, t);
    }
    let pairs = b.termvecvec();
    let pairs = b.termvecvec_push(pairs, triple);
    let body = b.body();
    b.edge(loc(), pairs, body);
}

#[test]
fn theory_lexing_round_trips() {
    let mut b = builder();
    assert_eq!(b.theory_lexing(), TheoryLexing::Disabled);
    b.set_theory_lexing(TheoryLexing::Definition);
    assert!(b.theory_lexing().is_enabled());
}
