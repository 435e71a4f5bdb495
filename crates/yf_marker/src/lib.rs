//! Marker taxonomy for yieldify routines.
//!
//! Re-exports the standard SWC AST and adds the structural predicates that
//! recognize the two pseudo-yield surface forms:
//! - Suspension marker: `this.yield(a, b)` or `yield(a, b)` (call form)
//! - Delegation marker: `this.yield * expr` or `yield * expr` (binary `*`
//!   whose left operand is a yield reference, not a call)

pub use swc_ecma_ast::*;

use serde::{Deserialize, Serialize};

/// Feature flags controlling which marker spellings are recognized.
///
/// The dotted form (`this.yield`) and the bare form (`yield`) denote the
/// same semantic marker; routines written without an explicit receiver use
/// the bare spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerSyntax {
    pub dotted: bool,
    pub bare: bool,
}

impl Default for MarkerSyntax {
    fn default() -> Self {
        Self {
            dotted: true,
            bare: true,
        }
    }
}

/// Is this expression a reference to the pseudo-yield marker?
///
/// One predicate covers both spellings so the two forms cannot drift apart.
/// `other.yield` (a receiver that is not `this`) is not a marker.
pub fn is_suspend_ref(expr: &Expr, syntax: &MarkerSyntax) -> bool {
    match expr {
        Expr::Ident(ident) => syntax.bare && ident.sym.as_ref() == "yield",
        Expr::Member(member) => {
            syntax.dotted
                && matches!(&*member.obj, Expr::This(_))
                && matches!(&member.prop, MemberProp::Ident(prop) if prop.sym.as_ref() == "yield")
        }
        _ => false,
    }
}

/// Match the call form of a suspension marker: `this.yield(...)` / `yield(...)`.
///
/// Calls carrying a spread argument are not markers; they stay ordinary
/// expressions.
pub fn suspend_call<'a>(expr: &'a Expr, syntax: &MarkerSyntax) -> Option<&'a CallExpr> {
    let Expr::Call(call) = expr else { return None };
    let Callee::Expr(callee) = &call.callee else {
        return None;
    };
    if !is_suspend_ref(callee, syntax) {
        return None;
    }
    if call.args.iter().any(|arg| arg.spread.is_some()) {
        return None;
    }
    Some(call)
}

/// Match a delegation marker: a `*` binary expression whose left operand is
/// a yield reference. The right operand is the delegated-to iterable.
pub fn delegate_bin<'a>(expr: &'a Expr, syntax: &MarkerSyntax) -> Option<&'a BinExpr> {
    let Expr::Bin(bin) = expr else { return None };
    if bin.op == BinaryOp::Mul && is_suspend_ref(&bin.left, syntax) {
        Some(bin)
    } else {
        None
    }
}
