//! Operation B: marker substitution.

use swc_ecma_visit::{VisitMut, VisitMutWith};
use yf_marker::{
    delegate_bin, suspend_call, Expr, MarkerSyntax, ParenExpr, SeqExpr, YieldExpr,
};

/// Visitor that replaces suspension and delegation markers with genuine
/// yield nodes.
///
/// Replacement happens through the `&mut Expr` slot the traversal hands us,
/// so the node's position in the tree survives the rewrite. Delegation is
/// tested first: a delegation marker contains a yield reference on its left
/// and must not be mistaken for the call form.
///
/// Every replacement is wrapped in parentheses. The printer emits the tree
/// verbatim without re-deriving precedence, and a marker can sit anywhere a
/// call can — `this.yield(1) + 1` must come out as `(yield 1) + 1`, not
/// `yield 1 + 1`.
pub struct MarkerRewriter {
    syntax: MarkerSyntax,
    rewritten: usize,
}

impl MarkerRewriter {
    pub fn new(syntax: MarkerSyntax) -> Self {
        Self {
            syntax,
            rewritten: 0,
        }
    }

    /// How many markers have been substituted so far.
    pub fn rewritten(&self) -> usize {
        self.rewritten
    }

    fn replacement_for(&self, expr: &Expr) -> Option<Expr> {
        if let Some(bin) = delegate_bin(expr, &self.syntax) {
            return Some(Expr::Paren(ParenExpr {
                span: bin.span,
                expr: Box::new(Expr::Yield(YieldExpr {
                    span: bin.span,
                    arg: Some(bin.right.clone()),
                    delegate: true,
                })),
            }));
        }

        let call = suspend_call(expr, &self.syntax)?;
        // All arguments evaluate left to right; the suspension yields the
        // last one. Zero arguments yield `undefined`. The sequence is kept
        // parenthesized too: an unwrapped sequence after `yield` would bind
        // as `(yield a), b`.
        let arg = match call.args.len() {
            0 => None,
            1 => Some(call.args[0].expr.clone()),
            _ => Some(Box::new(Expr::Paren(ParenExpr {
                span: call.span,
                expr: Box::new(Expr::Seq(SeqExpr {
                    span: call.span,
                    exprs: call.args.iter().map(|arg| arg.expr.clone()).collect(),
                })),
            }))),
        };
        Some(Expr::Paren(ParenExpr {
            span: call.span,
            expr: Box::new(Expr::Yield(YieldExpr {
                span: call.span,
                arg,
                delegate: false,
            })),
        }))
    }
}

impl VisitMut for MarkerRewriter {
    fn visit_mut_expr(&mut self, expr: &mut Expr) {
        if let Some(replacement) = self.replacement_for(expr) {
            *expr = replacement;
            self.rewritten += 1;
        }
        // Children are visited after the substitution: a replacement operand
        // may itself contain markers (nested suspension inside a delegated
        // expression), and those must be re-examined, not skipped.
        expr.visit_mut_children_with(self);
    }
}
