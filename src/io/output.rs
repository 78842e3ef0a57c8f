//! Rendering generated items and writing them as numbered documents

use crate::io::error::{Result, file_system};
use crate::render::Template;
use crate::render::fragments::FragmentSource;
use crate::sampling::{GeneratedItem, ItemSink};
use std::path::{Path, PathBuf};

/// Writes each item to `<output_dir>/<index>.<extension>`
pub struct DocumentWriter<T, F> {
    template: T,
    fragments: F,
    output_dir: PathBuf,
    written: usize,
}

impl<T: Template, F: FragmentSource> DocumentWriter<T, F> {
    /// Create a writer, creating the output directory if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory cannot be created
    pub fn new(template: T, fragments: F, output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        std::fs::create_dir_all(&output_dir)
            .map_err(file_system(output_dir.clone(), "create directory"))?;

        Ok(Self {
            template,
            fragments,
            output_dir,
            written: 0,
        })
    }

    /// Path the document for `index` is written to
    pub fn document_path(&self, index: usize) -> PathBuf {
        self.output_dir
            .join(format!("{index}.{}", self.template.extension()))
    }

    /// Directory documents are written into
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Number of documents written so far
    pub const fn written(&self) -> usize {
        self.written
    }
}

impl<T: Template, F: FragmentSource> ItemSink for DocumentWriter<T, F> {
    fn accept(&mut self, item: &GeneratedItem) -> Result<()> {
        let document = self.template.render(item, &mut self.fragments)?;
        let path = self.document_path(item.index);
        std::fs::write(&path, document).map_err(file_system(path.clone(), "write"))?;
        self.written += 1;
        Ok(())
    }
}
