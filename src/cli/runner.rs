use std::path::PathBuf;

use crate::{
    cli::Args,
    dialoguer::prompt_project_name,
    error::Result,
    generator::{GenerationEngine, Mode},
    renderer::MiniJinjaRenderer,
    report,
    template,
    validation::{sanitize, NameRules, SanitizedName},
};

/// Main CLI runner that orchestrates the scaffold generation workflow.
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the pipeline: name → sanitize → expand → generate → report.
    /// Returns the process exit code.
    pub fn run(self) -> Result<i32> {
        let raw_name = match &self.args.name {
            Some(name) => name.clone(),
            None => prompt_project_name()?,
        };

        let name = sanitize(&raw_name, &NameRules::default())?;
        if name.as_str() != raw_name {
            log::info!("project name sanitized: '{raw_name}' -> '{name}'");
        }

        let renderer = MiniJinjaRenderer::new();
        let tree = template::expand(&name, &renderer)?;
        log::debug!("catalogue expanded to {} entries", tree.len());

        let root = self.output_root(&name);
        let mode = if self.args.dry_run { Mode::DryRun } else { Mode::Apply };

        let result = GenerationEngine::new(&root, &tree).generate(mode, self.args.force);
        let report = report::report(&result);
        print!("{}", report.text);
        Ok(report.exit_code)
    }

    fn output_root(&self, name: &SanitizedName) -> PathBuf {
        self.args
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(name.as_str()))
    }
}
