//! File-backed template compilation.

use weft_compiler::Engine;
use weft_program::CompiledTemplate;

use crate::locator::Locator;
use crate::{Error, Result};

/// Compiles templates resolved through a [`Locator`].
#[derive(Debug, Clone)]
pub struct Templates {
    locator: Locator,
    engine: Engine,
}

impl Templates {
    pub fn new(locator: Locator) -> Self {
        Templates {
            locator,
            engine: Engine::default(),
        }
    }

    /// Replace the default compiler configuration.
    pub fn engine(mut self, engine: Engine) -> Self {
        self.engine = engine;
        self
    }

    /// Locate, read, and compile the named template.
    pub fn compile_file(&self, name: &str) -> Result<CompiledTemplate> {
        let path = self.locator.locate(name)?;
        let source = std::fs::read_to_string(&path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;
        Ok(self.engine.compile(&source)?)
    }
}
