//! Shortcuts for driving the builder the way grammar reductions do.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use asp_build::ids::{BodyId, LitId, LitVecId, TermId, TermVecId, TheoryOptermId, TheoryOptermVecId};
use asp_build::{BuildOutput, BuilderConfig, ProgramBuilder};
use asp_ir::{Location, Name, Naf, Render, SharedInterner, Symbol};

pub fn builder() -> ProgramBuilder {
    ProgramBuilder::with_config(SharedInterner::new(), BuilderConfig::unlimited())
}

/// A location on its own line, so diagnostics sort in statement order.
pub fn line(n: u32) -> Location {
    Location::span(Name::EMPTY, n, 1, n, 20)
}

pub fn num(b: &mut ProgramBuilder, n: i32) -> TermId {
    b.term_value(line(1), Symbol::Number(n))
}

pub fn id(b: &mut ProgramBuilder, name: &str) -> TermId {
    let symbol = Symbol::id(b.interner().intern(name));
    b.term_value(line(1), symbol)
}

pub fn var(b: &mut ProgramBuilder, name: &str) -> TermId {
    b.term_var(line(1), name)
}

pub fn terms(b: &mut ProgramBuilder, items: &[TermId]) -> TermVecId {
    let mut vec = b.termvec();
    for &item in items {
        vec = b.termvec_push(vec, item);
    }
    vec
}

/// `name(args)` with a single argument list.
pub fn call(b: &mut ProgramBuilder, name: &str, args: &[TermId]) -> TermId {
    let args = terms(b, args);
    let lists = b.termvecvec();
    let lists = b.termvecvec_push(lists, args);
    b.term_call(line(1), name, lists, false)
}

pub fn pred(b: &mut ProgramBuilder, naf: Naf, atom: TermId) -> LitId {
    b.lit_pred(line(1), naf, atom)
}

pub fn lits(b: &mut ProgramBuilder, items: &[LitId]) -> LitVecId {
    let mut vec = b.litvec();
    for &item in items {
        vec = b.litvec_push(vec, item);
    }
    vec
}

pub fn body(b: &mut ProgramBuilder, items: &[LitId]) -> BodyId {
    let mut body = b.body();
    for &item in items {
        body = b.body_lit(body, item);
    }
    body
}

/// `head.` or `head :- body.` for a predicate head.
pub fn rule(b: &mut ProgramBuilder, n: u32, head: TermId, elems: &[LitId]) {
    let lit = pred(b, Naf::Pos, head);
    let head = b.head_lit(lit);
    let body = body(b, elems);
    b.rule(line(n), head, body);
}

/// Build a theory operator sequence from space separated tokens.
///
/// Numbers, lowercase words and capitalised variables are operands;
/// everything else is an operator.
pub fn opterm(b: &mut ProgramBuilder, text: &str) -> TheoryOptermId {
    let mut opterm = None;
    let mut ops = b.theory_ops();
    for token in text.split_whitespace() {
        let operand = if let Ok(n) = token.parse() {
            Some(b.theory_term_value(line(1), Symbol::Number(n)))
        } else if token.chars().all(|c| c.is_ascii_lowercase()) {
            let symbol = Symbol::id(b.interner().intern(token));
            Some(b.theory_term_value(line(1), symbol))
        } else if token.starts_with(|c: char| c.is_ascii_uppercase()) {
            Some(b.theory_term_var(line(1), token))
        } else {
            None
        };
        match operand {
            None => ops = b.theory_ops_push(ops, token),
            Some(term) => {
                opterm = Some(match opterm {
                    None => b.theory_opterm(ops, term),
                    Some(prev) => b.theory_opterm_push(prev, ops, term),
                });
                ops = b.theory_ops();
            }
        }
    }
    opterm.expect("operator sequence without operands")
}

pub fn optermvec(b: &mut ProgramBuilder, texts: &[&str]) -> TheoryOptermVecId {
    let mut vec = b.theory_optermvec();
    for text in texts {
        let opterm = opterm(b, text);
        vec = b.theory_optermvec_push(vec, opterm);
    }
    vec
}

pub fn rendered(output: &BuildOutput, interner: &SharedInterner) -> Vec<String> {
    output
        .program
        .statements
        .iter()
        .map(|stmt| stmt.render(interner))
        .collect()
}
