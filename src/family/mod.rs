//! Per-distribution rule sets layered on the matrix expander
//!
//! Each family declares its axes, which combinations to drop, how to name the
//! survivors and which properties they carry. [`Family::build`] runs the
//! shared pipeline: expand, filter, name, map properties, then sort.

use anyhow::{Context, Result};
use tracing::debug;

use crate::matrix::{expand, AxisSpec, Combination};
use crate::model::{sort_by_name_length, Category, CategoryInfo, ImageProperties, ImageRecord};

pub mod bazzite;
pub mod fedora;
pub mod secureblue;
pub mod ublue;
pub mod wayblue;


pub use bazzite::Bazzite;
pub use fedora::FedoraOstreeDesktops;
pub use secureblue::Secureblue;
pub use ublue::{UblueMain, Workstation};
pub use wayblue::Wayblue;

/// Post-processing applied to a family's image list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Keep expansion order
    Declared,
    /// Stable ascending sort by name length
    NameLength,
}

pub trait Family {
    fn info(&self) -> CategoryInfo;

    /// Registry prefix each image name is appended to
    fn registry(&self) -> &'static str;

    fn axes(&self) -> AxisSpec;

    /// Whether a combination describes an image that is actually published
    fn keep(&self, _combination: &Combination) -> Result<bool> {
        Ok(true)
    }

    fn name(&self, combination: &Combination) -> Result<String>;

    fn properties(&self, combination: &Combination, name: &str) -> Result<ImageProperties>;

    fn sort_order(&self) -> SortOrder {
        SortOrder::Declared
    }

    fn build(&self) -> Result<Category> {
        let info = self.info();
        let combinations = expand(&self.axes())
            .with_context(|| format!("Failed to expand axes for {}", info.name))?;
        let total = combinations.len();

        let mut images = Vec::with_capacity(total);
        for combination in &combinations {
            if !self.keep(combination)? {
                continue;
            }
            let name = self
                .name(combination)
                .with_context(|| format!("Failed to name {} image {}", info.name, combination))?;
            let properties = self.properties(combination, &name).with_context(|| {
                format!("Failed to map properties for {} image {}", info.name, name)
            })?;
            images.push(ImageRecord::new(self.registry(), name, properties));
        }

        if self.sort_order() == SortOrder::NameLength {
            sort_by_name_length(&mut images);
        }

        debug!(
            "{}: kept {} of {} combinations",
            info.name,
            images.len(),
            total
        );
        Ok(info.with_images(images))
    }
}

/// All matrix-backed families, in catalog order
pub fn matrix_families() -> Vec<Box<dyn Family>> {
    vec![
        Box::new(Bazzite),
        Box::new(Workstation::bluefin()),
        Box::new(Workstation::aurora()),
        Box::new(UblueMain),
        Box::new(Wayblue),
        Box::new(Secureblue),
        Box::new(FedoraOstreeDesktops),
    ]
}
