//! Source-like rendering of AST nodes.
//!
//! Output follows the input syntax closely enough to read in logs and test
//! expectations. Binary term operators are fully parenthesised; resolved
//! theory operators render as `(lhs op rhs)` and `(op arg)` so the tree shape
//! is visible.

use crate::{Name, StringInterner, Symbol};

use super::{
    Bound, BodyAggrElem, BodyElem, BodyElemKind, CondLit, Head, HeadAggrElem, HeadKind, Literal,
    LiteralKind, Signature, Statement, StatementKind, Term, TermKind, TheoryAtom, TheoryElem,
    TheoryTerm, TheoryTermKind, UnaryOp,
};

/// Render a node the way it would be written in a program.
pub trait Render {
    fn render_into(&self, interner: &StringInterner, out: &mut String);

    fn render(&self, interner: &StringInterner) -> String {
        let mut out = String::new();
        self.render_into(interner, &mut out);
        out
    }
}

fn name(interner: &StringInterner, name: Name, out: &mut String) {
    out.push_str(interner.lookup(name));
}

fn sep<T: Render>(items: &[T], separator: &str, interner: &StringInterner, out: &mut String) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        item.render_into(interner, out);
    }
}

fn condition(cond: &[Literal], interner: &StringInterner, out: &mut String) {
    if !cond.is_empty() {
        out.push(':');
        sep(cond, ",", interner, out);
    }
}

fn body(body: &[BodyElem], interner: &StringInterner, out: &mut String) {
    if !body.is_empty() {
        out.push_str(":-");
        sep(body, ",", interner, out);
    }
}

impl Render for Symbol {
    fn render_into(&self, interner: &StringInterner, out: &mut String) {
        match self {
            Symbol::Number(n) => out.push_str(&n.to_string()),
            Symbol::String(s) => {
                out.push('"');
                for c in interner.lookup(*s).chars() {
                    match c {
                        '"' => out.push_str("\\\""),
                        '\\' => out.push_str("\\\\"),
                        '\n' => out.push_str("\\n"),
                        c => out.push(c),
                    }
                }
                out.push('"');
            }
            Symbol::Function {
                name: fun,
                args,
                positive,
            } => {
                if !positive {
                    out.push('-');
                }
                name(interner, *fun, out);
                if !args.is_empty() || *fun == Name::EMPTY {
                    out.push('(');
                    sep(args, ",", interner, out);
                    if *fun == Name::EMPTY && args.len() == 1 {
                        out.push(',');
                    }
                    out.push(')');
                }
            }
            Symbol::Infimum => out.push_str("#inf"),
            Symbol::Supremum => out.push_str("#sup"),
        }
    }
}

impl Render for Term {
    fn render_into(&self, interner: &StringInterner, out: &mut String) {
        match &self.kind {
            TermKind::Value(symbol) => symbol.render_into(interner, out),
            TermKind::Variable { name: var, .. } => name(interner, *var, out),
            TermKind::Unary { op, arg } => {
                out.push_str(op.as_symbol());
                arg.render_into(interner, out);
                if *op == UnaryOp::Abs {
                    out.push('|');
                }
            }
            TermKind::Binary { op, lhs, rhs } => {
                out.push('(');
                lhs.render_into(interner, out);
                out.push_str(op.as_symbol());
                rhs.render_into(interner, out);
                out.push(')');
            }
            TermKind::Range { lo, hi } => {
                out.push('(');
                lo.render_into(interner, out);
                out.push_str("..");
                hi.render_into(interner, out);
                out.push(')');
            }
            TermKind::Function {
                name: fun,
                args,
                external,
            } => {
                if *external {
                    out.push('@');
                }
                name(interner, *fun, out);
                if !args.is_empty() || *external {
                    out.push('(');
                    sep(args, ",", interner, out);
                    out.push(')');
                }
            }
            TermKind::Tuple { elems } => {
                out.push('(');
                sep(elems, ",", interner, out);
                if elems.len() == 1 {
                    out.push(',');
                }
                out.push(')');
            }
            TermKind::Pool(alternatives) => {
                out.push('(');
                sep(alternatives, ";", interner, out);
                out.push(')');
            }
        }
    }
}

impl Render for Literal {
    fn render_into(&self, interner: &StringInterner, out: &mut String) {
        match &self.kind {
            LiteralKind::Boolean(true) => out.push_str("#true"),
            LiteralKind::Boolean(false) => out.push_str("#false"),
            LiteralKind::Predicate { naf, atom } => {
                out.push_str(naf.prefix());
                atom.render_into(interner, out);
            }
            LiteralKind::Comparison { naf, rel, lhs, rhs } => {
                out.push_str(naf.prefix());
                lhs.render_into(interner, out);
                out.push_str(rel.as_symbol());
                rhs.render_into(interner, out);
            }
        }
    }
}

impl Render for CondLit {
    fn render_into(&self, interner: &StringInterner, out: &mut String) {
        self.lit.render_into(interner, out);
        condition(&self.cond, interner, out);
    }
}

impl Render for BodyAggrElem {
    fn render_into(&self, interner: &StringInterner, out: &mut String) {
        sep(&self.tuple, ",", interner, out);
        condition(&self.cond, interner, out);
    }
}

impl Render for HeadAggrElem {
    fn render_into(&self, interner: &StringInterner, out: &mut String) {
        sep(&self.tuple, ",", interner, out);
        out.push(':');
        self.lit.render_into(interner, out);
        condition(&self.cond, interner, out);
    }
}

impl Render for Bound {
    fn render_into(&self, interner: &StringInterner, out: &mut String) {
        out.push_str(self.rel.as_symbol());
        self.term.render_into(interner, out);
    }
}

fn aggregate<T: Render>(
    prefix: &str,
    elems: &[T],
    bounds: &[Bound],
    interner: &StringInterner,
    out: &mut String,
) {
    out.push_str(prefix);
    out.push('{');
    sep(elems, ";", interner, out);
    out.push('}');
    for bound in bounds {
        bound.render_into(interner, out);
    }
}

impl Render for TheoryTerm {
    fn render_into(&self, interner: &StringInterner, out: &mut String) {
        match &self.kind {
            TheoryTermKind::Symbol(symbol) => symbol.render_into(interner, out),
            TheoryTermKind::Variable { name: var, .. } => name(interner, *var, out),
            TheoryTermKind::Tuple { kind, elems } => {
                let (open, close) = kind.delimiters();
                out.push(open);
                sep(elems, ",", interner, out);
                if open == '(' && elems.len() == 1 {
                    out.push(',');
                }
                out.push(close);
            }
            TheoryTermKind::Function { name: fun, args } => {
                name(interner, *fun, out);
                out.push('(');
                sep(args, ",", interner, out);
                out.push(')');
            }
            TheoryTermKind::Unary { op, arg } => {
                out.push('(');
                name(interner, *op, out);
                out.push(' ');
                arg.render_into(interner, out);
                out.push(')');
            }
            TheoryTermKind::Binary { op, lhs, rhs } => {
                out.push('(');
                lhs.render_into(interner, out);
                out.push(' ');
                name(interner, *op, out);
                out.push(' ');
                rhs.render_into(interner, out);
                out.push(')');
            }
            TheoryTermKind::Unparsed(raw) => {
                out.push('<');
                for (i, segment) in raw.segments.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    for op in &segment.ops {
                        name(interner, *op, out);
                        out.push(' ');
                    }
                    segment.term.render_into(interner, out);
                }
                out.push('>');
            }
        }
    }
}

impl Render for TheoryElem {
    fn render_into(&self, interner: &StringInterner, out: &mut String) {
        sep(&self.tuple, ",", interner, out);
        condition(&self.cond, interner, out);
    }
}

impl Render for TheoryAtom {
    fn render_into(&self, interner: &StringInterner, out: &mut String) {
        out.push('&');
        self.name.render_into(interner, out);
        out.push('{');
        sep(&self.elems, ";", interner, out);
        out.push('}');
        if let Some(guard) = &self.guard {
            name(interner, guard.op, out);
            guard.term.render_into(interner, out);
        }
    }
}

impl Render for Head {
    fn render_into(&self, interner: &StringInterner, out: &mut String) {
        match &self.kind {
            HeadKind::Literal(lit) => lit.render_into(interner, out),
            HeadKind::Disjunction(elems) => sep(elems, ";", interner, out),
            HeadKind::TupleAggregate { fun, bounds, elems } => {
                aggregate(fun.as_str(), elems, bounds, interner, out);
            }
            HeadKind::LitAggregate { fun, bounds, elems } => {
                aggregate(lit_aggregate_prefix(*fun), elems, bounds, interner, out);
            }
            HeadKind::Theory(atom) => atom.render_into(interner, out),
        }
    }
}

fn lit_aggregate_prefix(fun: super::AggregateFunction) -> &'static str {
    match fun {
        super::AggregateFunction::Count => "",
        other => other.as_str(),
    }
}

impl Render for BodyElem {
    fn render_into(&self, interner: &StringInterner, out: &mut String) {
        match &self.kind {
            BodyElemKind::Literal(lit) => lit.render_into(interner, out),
            BodyElemKind::Conjunction(condlit) => condlit.render_into(interner, out),
            BodyElemKind::TupleAggregate {
                naf,
                fun,
                bounds,
                elems,
            } => {
                out.push_str(naf.prefix());
                aggregate(fun.as_str(), elems, bounds, interner, out);
            }
            BodyElemKind::LitAggregate {
                naf,
                fun,
                bounds,
                elems,
            } => {
                out.push_str(naf.prefix());
                aggregate(lit_aggregate_prefix(*fun), elems, bounds, interner, out);
            }
            BodyElemKind::Theory { naf, atom } => {
                out.push_str(naf.prefix());
                atom.render_into(interner, out);
            }
        }
    }
}

impl Render for Signature {
    fn render_into(&self, interner: &StringInterner, out: &mut String) {
        if !self.positive {
            out.push('-');
        }
        name(interner, self.name, out);
        out.push('/');
        out.push_str(&self.arity.to_string());
    }
}

fn body_statement(
    keyword: &str,
    subject: &Term,
    elems: &[BodyElem],
    interner: &StringInterner,
    out: &mut String,
) {
    out.push_str(keyword);
    subject.render_into(interner, out);
    if !elems.is_empty() {
        out.push(':');
        sep(elems, ",", interner, out);
    }
    out.push('.');
}

impl Render for Statement {
    fn render_into(&self, interner: &StringInterner, out: &mut String) {
        match &self.kind {
            StatementKind::Rule { head, body: elems } => {
                head.render_into(interner, out);
                body(elems, interner, out);
                out.push('.');
            }
            StatementKind::ShowSignature(sig) => {
                out.push_str("#show");
                if sig.name != Name::EMPTY || sig.arity != 0 {
                    out.push(' ');
                    sig.render_into(interner, out);
                }
                out.push('.');
            }
            StatementKind::Show { term, body: elems } => {
                body_statement("#show ", term, elems, interner, out);
            }
            StatementKind::Project { atom, body: elems } => {
                body_statement("#project ", atom, elems, interner, out);
            }
            StatementKind::ProjectSignature(sig) => {
                out.push_str("#project ");
                sig.render_into(interner, out);
                out.push('.');
            }
            StatementKind::External {
                atom,
                body: elems,
                value,
            } => {
                body_statement("#external ", atom, elems, interner, out);
                out.push_str(" [");
                value.render_into(interner, out);
                out.push(']');
            }
            StatementKind::Edge { u, v, body: elems } => {
                out.push_str("#edge(");
                u.render_into(interner, out);
                out.push(',');
                v.render_into(interner, out);
                out.push(')');
                if !elems.is_empty() {
                    out.push(':');
                    sep(elems, ",", interner, out);
                }
                out.push('.');
            }
            StatementKind::Heuristic {
                atom,
                body: elems,
                bias,
                priority,
                modifier,
            } => {
                body_statement("#heuristic ", atom, elems, interner, out);
                out.push_str(" [");
                bias.render_into(interner, out);
                out.push('@');
                priority.render_into(interner, out);
                out.push(',');
                modifier.render_into(interner, out);
                out.push(']');
            }
            StatementKind::Optimize {
                weight,
                priority,
                tuple,
                body: elems,
            } => {
                out.push_str(":~");
                sep(elems, ",", interner, out);
                out.push_str(". [");
                weight.render_into(interner, out);
                out.push('@');
                priority.render_into(interner, out);
                for term in tuple {
                    out.push(',');
                    term.render_into(interner, out);
                }
                out.push(']');
            }
            StatementKind::Block { name: block, params } => {
                out.push_str("#program ");
                name(interner, *block, out);
                if !params.is_empty() {
                    out.push('(');
                    for (i, param) in params.iter().enumerate() {
                        if i > 0 {
                            out.push(',');
                        }
                        name(interner, *param, out);
                    }
                    out.push(')');
                }
                out.push('.');
            }
        }
    }
}
