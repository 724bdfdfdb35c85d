//! Tree materialization.
//! Walks the folder/file tree of a template, renders names and contents,
//! and turns the result into filesystem operations.

use log::debug;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    config::{FileSpec, FolderSpec},
    content::load_content,
    error::{Error, Result},
    renderer::{TemplateRenderer, Variables},
};

/// A single filesystem change of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOperation {
    /// Create a directory along with its missing parents
    CreateDir { target: PathBuf },
    /// Write a file, replacing whatever is there
    Write { target: PathBuf, content: String },
}

/// What applying an operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreatedFolder,
    ExistingFolder,
    CreatedFile,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::CreatedFolder => write!(f, "Created folder"),
            Action::ExistingFolder => write!(f, "Existing folder"),
            Action::CreatedFile => write!(f, "Created file"),
        }
    }
}

/// Outcome of applying one `FileOperation`.
#[derive(Debug)]
pub struct ProcessResult {
    pub action: Action,
    pub target: PathBuf,
}

impl ProcessResult {
    /// Whether the result is worth announcing on the console trace.
    pub fn is_announced(&self) -> bool {
        self.action != Action::ExistingFolder
    }
}

impl fmt::Display for ProcessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.action, self.target.display())
    }
}

/// Renders a template tree into filesystem operations and applies them.
pub struct Processor<'a> {
    engine: &'a dyn TemplateRenderer,
    templates_dir: Option<&'a Path>,
    variables: &'a Variables,
}

impl<'a> Processor<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        templates_dir: Option<&'a Path>,
        variables: &'a Variables,
    ) -> Self {
        Self { engine, templates_dir, variables }
    }

    /// Computes the operations for a sequence of folders, all rooted at `base`.
    ///
    /// The walk is depth-first: within each folder its files come first, in
    /// declaration order, then its nested folders. A directory always precedes
    /// the files placed in it.
    ///
    /// # Errors
    /// * `Error::ContentFileError` if a file's external content cannot be read
    pub fn plan<P: AsRef<Path>>(
        &self,
        folders: &[FolderSpec],
        base: P,
    ) -> Result<Vec<FileOperation>> {
        let mut operations = Vec::new();
        for folder in folders {
            self.plan_folder(folder, base.as_ref(), &mut operations)?;
        }
        Ok(operations)
    }

    fn plan_folder(
        &self,
        folder: &FolderSpec,
        base: &Path,
        operations: &mut Vec<FileOperation>,
    ) -> Result<()> {
        // A nameless folder places its content directly in `base`.
        let folder_path = match &folder.name {
            Some(name) => {
                let rendered = self.engine.render(name, self.variables);
                let target = base.join(rendered);
                debug!("Planning folder {}", target.display());
                operations.push(FileOperation::CreateDir { target: target.clone() });
                target
            }
            None => {
                // Loose files are written into `base`, which must exist first.
                let planned = operations.iter().any(|op| {
                    matches!(op, FileOperation::CreateDir { target } if target == base)
                });
                if !folder.files.is_empty() && !planned {
                    operations.push(FileOperation::CreateDir { target: base.to_path_buf() });
                }
                base.to_path_buf()
            }
        };

        for file in &folder.files {
            operations.push(self.plan_file(file, &folder_path)?);
        }

        for sub_folder in &folder.folders {
            self.plan_folder(sub_folder, &folder_path, operations)?;
        }

        Ok(())
    }

    fn plan_file(&self, file: &FileSpec, folder_path: &Path) -> Result<FileOperation> {
        let name = self.engine.render(&file.name, self.variables);
        let content = load_content(file, self.templates_dir)?;
        let content = self.engine.render(&content, self.variables);
        let target = folder_path.join(name);
        debug!("Planning file {}", target.display());

        Ok(FileOperation::Write { target, content })
    }

    /// Applies a single operation to the filesystem.
    ///
    /// # Errors
    /// * `Error::CreateDirError` if a directory cannot be created
    /// * `Error::WriteError` if a file cannot be written
    pub fn apply(&self, operation: FileOperation) -> Result<ProcessResult> {
        match operation {
            FileOperation::CreateDir { target } => {
                if target.is_dir() {
                    debug!("Folder {} already exists", target.display());
                    return Ok(ProcessResult { action: Action::ExistingFolder, target });
                }
                match fs::create_dir_all(&target) {
                    Ok(()) => Ok(ProcessResult { action: Action::CreatedFolder, target }),
                    Err(source) => Err(Error::CreateDirError { path: target, source }),
                }
            }
            FileOperation::Write { target, content } => match fs::write(&target, content) {
                Ok(()) => Ok(ProcessResult { action: Action::CreatedFile, target }),
                Err(source) => Err(Error::WriteError { path: target, source }),
            },
        }
    }

    /// Plans and applies a whole tree, printing every created path.
    ///
    /// Stops at the first failure; whatever was written before stays on disk.
    pub fn materialize<P: AsRef<Path>>(
        &self,
        folders: &[FolderSpec],
        base: P,
    ) -> Result<Vec<ProcessResult>> {
        let operations = self.plan(folders, base)?;
        let mut results = Vec::with_capacity(operations.len());
        for operation in operations {
            let result = self.apply(operation)?;
            if result.is_announced() {
                println!("{}", result);
            }
            results.push(result);
        }
        Ok(results)
    }
}
