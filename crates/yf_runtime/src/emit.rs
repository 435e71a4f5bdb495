//! Printer boundary: rewritten AST back to source text.

use swc_common::{sync::Lrc, SourceMap};
use swc_ecma_ast::{EsVersion, Script};
use swc_ecma_codegen::{text_writer::JsWriter, Emitter, Node};

use crate::RuntimeError;

/// Serialize the rewritten routine script.
///
/// The output must round-trip through the engine's parser; any emit failure
/// here is a pipeline defect, not a user error.
pub fn print_script(script: &Script, source_map: Lrc<SourceMap>) -> Result<String, RuntimeError> {
    let mut buf = Vec::new();
    {
        let writer = JsWriter::new(source_map.clone(), "\n", &mut buf, None);
        let mut emitter = Emitter {
            cfg: swc_ecma_codegen::Config::default().with_target(EsVersion::latest()),
            cm: source_map,
            comments: None,
            wr: writer,
        };
        script
            .emit_with(&mut emitter)
            .map_err(|e| RuntimeError::Print(e.to_string()))?;
    }
    String::from_utf8(buf).map_err(|e| RuntimeError::Print(e.to_string()))
}
