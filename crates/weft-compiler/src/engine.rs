//! The compilation pipeline, front to back.

use weft_program::CompiledTemplate;

use crate::emit::generate;
use crate::parse::parse;
use crate::pass::{flatten, inject_escaping, merge, rewrite_blocks, trim};
use crate::{Error, Result};

/// Compile a template source with the default engine configuration.
pub fn compile(source: &str) -> Result<CompiledTemplate> {
    Engine::default().compile(source)
}

/// A configured compiler. Cheap to construct, stateless across compilations.
#[derive(Debug, Clone)]
pub struct Engine {
    trim: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Engine { trim: true }
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable whitespace trimming around line-owning statement
    /// tags. On by default.
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Run the full pipeline: parse, trim, rewrite blocks into captures,
    /// inject escaping, simplify, and lower to an operation list.
    pub fn compile(&self, source: &str) -> Result<CompiledTemplate> {
        let mut ir = parse(source)?;
        if self.trim {
            ir = trim(ir);
        }
        let ir = inject_escaping(rewrite_blocks(ir));
        let ir = merge(flatten(ir));
        let template = CompiledTemplate::new(generate(&ir));
        template.verify().map_err(Error::Verify)?;
        Ok(template)
    }
}
