//! Theory operator resolution.
//!
//! Theory terms arrive as flat `op* term (op+ term)*` sequences because the
//! operators, their priorities and associativity are only known from the
//! `#theory` definition that applies to the atom. Resolution turns a
//! sequence into a tree by precedence climbing over two explicit stacks:
//!
//! - An operator with no operand pending (at the start or right after
//!   another operator) is unary; the first operator after an operand is
//!   binary.
//! - Unary operators bind tighter than any binary operator and apply to the
//!   next operand, innermost first.
//! - Before a binary operator is pushed, stacked operators of higher
//!   priority are reduced, and so are those of equal priority when the
//!   incoming operator is left associative.
//!
//! ```text
//! 1 + 2 * 3      =>  (1 + (2 * 3))
//! - 1 * 2        =>  ((- 1) * 2)
//! 2 ^ 3 ^ 4      =>  (2 ^ (3 ^ 4))     with ^ right associative
//! ```

use tracing::trace;

use asp_ir::{
    Name, RawTheoryTerm, StringInterner, TheoryOperatorDef, TheoryOperatorType, TheoryTerm,
    TheoryTermDef, TheoryTermKind,
};
use asp_stack::ensure_sufficient_stack;

use crate::TheoryError;

/// Whether the stacked binary operator `top` must be reduced before
/// `incoming` is pushed.
fn binds_before(top: &TheoryOperatorDef, incoming: &TheoryOperatorDef) -> bool {
    top.priority > incoming.priority
        || (top.priority == incoming.priority && incoming.kind == TheoryOperatorType::BinaryLeft)
}

fn lookup<'d>(
    def: &'d TheoryTermDef,
    op: Name,
    unary: bool,
    term: &TheoryTerm,
    interner: &StringInterner,
) -> Result<&'d TheoryOperatorDef, TheoryError> {
    def.lookup(op, unary)
        .ok_or_else(|| TheoryError::UnknownOperator {
            op: interner.lookup(op).to_string(),
            unary,
            loc: term.loc,
        })
}

/// Pop the top operator and combine the two topmost operands.
fn reduce(operands: &mut Vec<TheoryTerm>, op: &TheoryOperatorDef) {
    let (Some(rhs), Some(lhs)) = (operands.pop(), operands.pop()) else {
        panic!("binary theory operator without two operands");
    };
    let loc = lhs.loc.merge(rhs.loc);
    operands.push(TheoryTerm::new(
        TheoryTermKind::Binary {
            op: op.name,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        },
        loc,
    ));
}

/// Resolve one flat operator sequence against a term definition.
///
/// Operands are resolved recursively, so unparsed terms nested in tuples
/// or function arguments come back resolved too.
///
/// Each segment walks the parse states in order: the first segment starts
/// in `Start`, a leading binary operator moves to `ExpectOperand`, unary
/// prefixes keep it there, and pushing the operand reaches `HaveOperand`.
/// Draining the operator stack after the last segment is `Done`; any
/// lookup failure returns early as the `Error` state.
pub fn resolve(
    raw: &RawTheoryTerm,
    def: &TheoryTermDef,
    interner: &StringInterner,
) -> Result<TheoryTerm, TheoryError> {
    let mut operands: Vec<TheoryTerm> = Vec::with_capacity(raw.segments.len());
    let mut operators: Vec<&TheoryOperatorDef> = Vec::new();

    for (i, segment) in raw.segments.iter().enumerate() {
        let (binary, unary) = if i == 0 {
            (None, &segment.ops[..])
        } else {
            let Some((first, rest)) = segment.ops.split_first() else {
                panic!("theory operand {i} is not preceded by an operator");
            };
            (Some(*first), rest)
        };

        if let Some(op) = binary {
            let incoming = lookup(def, op, false, &segment.term, interner)?;
            while let Some(&top) = operators.last() {
                if !binds_before(top, incoming) {
                    break;
                }
                operators.pop();
                reduce(&mut operands, top);
            }
            trace!(op = interner.lookup(op), priority = incoming.priority, "push binary");
            operators.push(incoming);
        }

        let prefix = unary
            .iter()
            .map(|&op| lookup(def, op, true, &segment.term, interner))
            .collect::<Result<Vec<_>, _>>()?;

        let mut operand = resolve_term(&segment.term, def, interner)?;
        for op in prefix.into_iter().rev() {
            trace!(op = interner.lookup(op.name), "apply unary");
            let loc = operand.loc;
            operand = TheoryTerm::new(
                TheoryTermKind::Unary {
                    op: op.name,
                    arg: Box::new(operand),
                },
                loc,
            );
        }
        operands.push(operand);
    }

    while let Some(top) = operators.pop() {
        reduce(&mut operands, top);
    }

    match (operands.pop(), operands.is_empty()) {
        (Some(term), true) => Ok(term),
        _ => panic!(
            "theory term with {} segments did not reduce to one operand",
            raw.segments.len()
        ),
    }
}

/// Resolve every unparsed sequence in `term`.
pub fn resolve_term(
    term: &TheoryTerm,
    def: &TheoryTermDef,
    interner: &StringInterner,
) -> Result<TheoryTerm, TheoryError> {
    ensure_sufficient_stack(|| {
        let kind = match &term.kind {
            TheoryTermKind::Symbol(_) | TheoryTermKind::Variable { .. } => term.kind.clone(),
            TheoryTermKind::Unparsed(raw) => return resolve(raw, def, interner),
            TheoryTermKind::Tuple { kind, elems } => TheoryTermKind::Tuple {
                kind: *kind,
                elems: resolve_all(elems, def, interner)?,
            },
            TheoryTermKind::Function { name, args } => TheoryTermKind::Function {
                name: *name,
                args: resolve_all(args, def, interner)?,
            },
            TheoryTermKind::Unary { op, arg } => TheoryTermKind::Unary {
                op: *op,
                arg: Box::new(resolve_term(arg, def, interner)?),
            },
            TheoryTermKind::Binary { op, lhs, rhs } => TheoryTermKind::Binary {
                op: *op,
                lhs: Box::new(resolve_term(lhs, def, interner)?),
                rhs: Box::new(resolve_term(rhs, def, interner)?),
            },
        };
        Ok(TheoryTerm::new(kind, term.loc))
    })
}

fn resolve_all(
    terms: &[TheoryTerm],
    def: &TheoryTermDef,
    interner: &StringInterner,
) -> Result<Vec<TheoryTerm>, TheoryError> {
    terms
        .iter()
        .map(|term| resolve_term(term, def, interner))
        .collect()
}

/// Check that no two operators of a term definition share a name and arity
/// category.
pub fn validate(def: &TheoryTermDef, interner: &StringInterner) -> Result<(), TheoryError> {
    match def.find_duplicate() {
        None => Ok(()),
        Some((earlier, later)) => Err(TheoryError::DuplicateOperator {
            op: interner.lookup(later.name).to_string(),
            unary: later.kind.is_unary(),
            term_def: interner.lookup(def.name).to_string(),
            loc: later.loc,
            previous: earlier.loc,
        }),
    }
}

#[cfg(test)]
mod tests;
