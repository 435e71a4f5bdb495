//! Operation A: generator flagging.

use yf_marker::{Expr, Script, Stmt};

use crate::RewriteError;

/// Mark the routine's top-level function literal as a generator.
///
/// The function node is reachable through a statically known spine
/// (program → first statement → expression, peeling parentheses), so no
/// general traversal is needed. The tree is exclusively owned by the one
/// pipeline invocation building it; mutating through `&mut` preserves node
/// identity along the spine.
pub fn flag_generator(script: &mut Script) -> Result<(), RewriteError> {
    let Some(Stmt::Expr(stmt)) = script.body.first_mut() else {
        return Err(RewriteError::MalformedSpine);
    };
    match peel_parens_mut(&mut stmt.expr) {
        Expr::Fn(fn_expr) => {
            fn_expr.function.is_generator = true;
            Ok(())
        }
        _ => Err(RewriteError::MalformedSpine),
    }
}

fn peel_parens_mut(expr: &mut Expr) -> &mut Expr {
    match expr {
        Expr::Paren(paren) => peel_parens_mut(&mut paren.expr),
        other => other,
    }
}
