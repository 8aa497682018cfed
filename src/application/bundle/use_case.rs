//! Bundle Use Case
//!
//! Orchestrates one bundle run:
//! 1. Resolve the component inventory
//! 2. Build redirects and exclusions
//! 3. Flatten the entry document
//! 4. Prepend the license header and write the artifact
//!
//! All rules live in domain services; this file only sequences them.

use crate::domain::ports::{ComponentSource, FileSystem, FlattenOptions, Flattener};
use crate::domain::services::{
    build_exclusions, build_redirects, normalize_components_root, prepend_header,
    ComponentInventory,
};
use crate::domain::value_objects::OutputSpec;
use crate::error::{VulcanizeError, VulcanizeResult};

use super::options::BundleOptions;
use super::result::{BundlePlan, BundleReport};

/// Bundle use case, parameterized by its ports
pub struct BundleUseCase<CS, FL, FS>
where
    CS: ComponentSource,
    FL: Flattener,
    FS: FileSystem,
{
    components: CS,
    flattener: FL,
    file_system: FS,
    options: BundleOptions,
}

impl<CS, FL, FS> BundleUseCase<CS, FL, FS>
where
    CS: ComponentSource,
    FL: Flattener,
    FS: FileSystem,
{
    pub fn new(components: CS, flattener: FL, file_system: FS, options: BundleOptions) -> Self {
        Self {
            components,
            flattener,
            file_system,
            options,
        }
    }

    pub fn options(&self) -> &BundleOptions {
        &self.options
    }

    pub fn engine_name(&self) -> &'static str {
        self.flattener.name()
    }

    /// Deferred unit of work. Nothing happens until `BundleTask::execute`.
    pub fn run(&self, overwrite: bool) -> BundleTask<'_, CS, FL, FS> {
        BundleTask {
            use_case: self,
            overwrite,
        }
    }

    /// Resolve inventory, redirects, exclusions and the output path.
    ///
    /// Fails with a configuration error before anything is flattened or written.
    pub fn plan(&self, overwrite: bool) -> VulcanizeResult<BundlePlan> {
        let entry = self.options.entry_path();
        if !self.file_system.exists(&entry) {
            return Err(VulcanizeError::EntryNotFound { path: entry });
        }

        let components_root = normalize_components_root(&self.options.components_root)?;

        let inventory =
            ComponentInventory::resolve(&self.components, &self.options.first_party_prefixes)?;
        let redirects = build_redirects(&components_root, &inventory.first_party);
        let excludes = build_exclusions(&inventory.third_party, &self.options.manual_excludes);

        let spec = OutputSpec::new(&self.options.entry, &self.options.variant_suffix, overwrite);
        let output_path = spec.output_path(&self.options.output_dir_path());

        Ok(BundlePlan {
            entry,
            output_path,
            redirects,
            excludes,
            first_party: inventory
                .first_party
                .iter()
                .map(|n| n.to_string())
                .collect(),
        })
    }

    fn execute(&self, overwrite: bool) -> VulcanizeResult<BundleReport> {
        let plan = self.plan(overwrite)?;
        let redirect_count = plan.redirects.len();
        let exclude_count = plan.excludes.len();

        tracing::info!(
            entry = %plan.entry.display(),
            engine = self.flattener.name(),
            redirects = redirect_count,
            excludes = exclude_count,
            "flattening"
        );

        let options = FlattenOptions::bundle(plan.excludes, plan.redirects);
        let flattened =
            self.flattener
                .flatten(&self.options.project_root, &plan.entry, &options)?;

        let content = prepend_header(&flattened);
        self.file_system.write(&plan.output_path, &content)?;

        tracing::info!(output = %plan.output_path.display(), bytes = content.len(), "wrote bundle");

        Ok(BundleReport {
            output_path: plan.output_path,
            bytes: content.len(),
            engine: self.flattener.name(),
            redirects: redirect_count,
            excludes: exclude_count,
        })
    }
}

/// Zero-argument unit of work returned by `BundleUseCase::run`
#[must_use = "a bundle task does nothing until executed"]
pub struct BundleTask<'a, CS, FL, FS>
where
    CS: ComponentSource,
    FL: Flattener,
    FS: FileSystem,
{
    use_case: &'a BundleUseCase<CS, FL, FS>,
    overwrite: bool,
}

impl<CS, FL, FS> BundleTask<'_, CS, FL, FS>
where
    CS: ComponentSource,
    FL: Flattener,
    FS: FileSystem,
{
    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    /// Run the pipeline. Writes exactly one file on success and none on failure.
    pub fn execute(self) -> VulcanizeResult<BundleReport> {
        self.use_case.execute(self.overwrite)
    }
}
