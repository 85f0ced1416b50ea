use std::collections::HashMap;
use std::sync::Arc;

use swc_common::{
    BytePos, FileName, Globals, SourceFile, SourceMap, Span,
    comments::{Comment, SingleThreadedComments},
};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

/// Leading comments by the position of the node they precede. Owned, so a
/// parsed file does not borrow swc's single-threaded comment storage.
#[derive(Debug, Clone, Default)]
pub struct ExtractedComments {
    leading: HashMap<BytePos, Vec<Comment>>,
}

impl ExtractedComments {
    pub fn from_swc(comments: &SingleThreadedComments) -> Self {
        let (leading, _) = comments.borrow_all();
        Self {
            leading: leading.iter().map(|(k, v)| (*k, v.clone())).collect(),
        }
    }

    pub fn leading_at(&self, pos: BytePos) -> &[Comment] {
        self.leading.get(&pos).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Line/column of a node, with the full source line for reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// 1-indexed.
    pub line: usize,
    /// 1-indexed.
    pub col: usize,
    pub source_line: String,
}

pub struct ParsedJSX {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
    pub source_file: Arc<SourceFile>,
    pub comments: ExtractedComments,
}

impl ParsedJSX {
    pub fn position(&self, pos: BytePos) -> Position {
        let loc = self.source_map.lookup_char_pos(pos);
        let source_line = loc
            .file
            .get_line(loc.line - 1)
            .map(|cow| cow.to_string())
            .unwrap_or_default();
        Position {
            line: loc.line,
            col: loc.col_display + 1,
            source_line,
        }
    }

    /// Original source text covered by `span`.
    pub fn snippet(&self, span: Span) -> &str {
        let start = self.source_file.start_pos.0;
        let lo = span.lo.0.saturating_sub(start) as usize;
        let hi = span.hi.0.saturating_sub(start) as usize;
        self.source_file.src.get(lo..hi).unwrap_or_default()
    }

    /// Byte offset of `pos` within the source text.
    pub fn offset(&self, pos: BytePos) -> usize {
        pos.0.saturating_sub(self.source_file.start_pos.0) as usize
    }

    pub fn text(&self) -> &str {
        &self.source_file.src
    }
}

/// Parse TSX/JSX/TS/JS source code into an AST.
///
/// Each call uses its own `SourceMap` and swc `GLOBALS`, so files can be
/// parsed from several threads at once.
pub fn parse_jsx_source(code: String, file_path: &str) -> Result<ParsedJSX, String> {
    use swc_common::{GLOBALS, Spanned};

    let source_map = Arc::new(SourceMap::default());
    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        });

        let comments = SingleThreadedComments::default();
        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), Some(&comments));

        let describe = |e: swc_ecma_parser::error::Error| {
            let loc = source_map.lookup_char_pos(e.span().lo);
            format!(
                "{} (line {}, column {})",
                e.kind().msg(),
                loc.line,
                loc.col_display + 1
            )
        };
        let module = parser.parse_module().map_err(describe)?;
        // Errors the parser recovered from still make the file unusable.
        if let Some(recovered) = parser.take_errors().into_iter().next() {
            return Err(describe(recovered));
        }

        let extracted_comments = ExtractedComments::from_swc(&comments);

        Ok(ParsedJSX {
            module,
            source_map: source_map.clone(),
            source_file,
            comments: extracted_comments,
        })
    })
}
