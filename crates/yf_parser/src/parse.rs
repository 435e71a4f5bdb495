use swc_common::{errors::Handler, sync::Lrc, FileName, SourceMap};
use swc_ecma_ast::{EsVersion, Expr, Script, Stmt};
use swc_ecma_parser::{EsSyntax, Syntax};

use crate::ParseError;

/// Result of parsing a routine's wrapped source.
pub struct ParsedRoutine {
    pub script: Script,
    pub source_map: Lrc<SourceMap>,
}

impl std::fmt::Debug for ParsedRoutine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedRoutine")
            .field("script", &self.script)
            .finish_non_exhaustive()
    }
}

/// Parse the wrapped routine source as a sloppy-mode script.
///
/// Script mode matters: in module (strict) code `yield` is a reserved word,
/// while the bare marker spelling relies on it being an ordinary identifier
/// inside a non-generator function.
pub fn parse_routine(wrapped: &str) -> Result<ParsedRoutine, ParseError> {
    let source_map: Lrc<SourceMap> = Default::default();
    let source_file = source_map.new_source_file(
        Lrc::new(FileName::Custom("<routine>".to_string())),
        wrapped.to_string(),
    );

    let handler =
        Handler::with_emitter_writer(Box::new(std::io::stderr()), Some(source_map.clone()));

    let script = swc_ecma_parser::parse_file_as_script(
        &source_file,
        Syntax::Es(EsSyntax::default()),
        EsVersion::latest(),
        None,
        &mut vec![],
    )
    .map_err(|e| {
        e.into_diagnostic(&handler).emit();
        ParseError::Syntax("routine source is not valid ECMAScript".to_string())
    })?;

    validate_routine(&script)?;

    Ok(ParsedRoutine { script, source_map })
}

/// Check the parse produced exactly one expression statement whose
/// paren-peeled expression is a function literal.
fn validate_routine(script: &Script) -> Result<(), ParseError> {
    if script.body.len() != 1 {
        return Err(ParseError::NotFunctionLiteral("a multi-statement program"));
    }
    let Stmt::Expr(stmt) = &script.body[0] else {
        return Err(ParseError::NotFunctionLiteral("a non-expression statement"));
    };
    match peel_parens(&stmt.expr) {
        Expr::Fn(_) => Ok(()),
        Expr::Arrow(_) => Err(ParseError::NotFunctionLiteral("an arrow function")),
        _ => Err(ParseError::NotFunctionLiteral("a non-function expression")),
    }
}

fn peel_parens(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => peel_parens(&paren.expr),
        other => other,
    }
}
