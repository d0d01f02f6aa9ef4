use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::{info, warn};

use crate::family::{fedora, matrix_families};
use crate::model::{token_enum, Category, Desktop, ImageRecord, NvidiaDriver, Stability};


token_enum! {
    pub enum ExportFormat {
        Json => "json",
        Toml => "toml",
    }
}

/// Criteria an image must satisfy to be listed
#[derive(Debug, Clone, Default)]
pub struct ImageFilter {
    pub category: Option<String>,
    pub desktop: Option<Desktop>,
    pub nvidia: Option<NvidiaDriver>,
    /// Exact effective stability
    pub stability: Option<Stability>,
    pub exclude_experimental: bool,
    pub hidden_categories: Vec<String>,
}

impl ImageFilter {
    /// An explicitly requested category is listed even when hidden
    pub fn includes_category(&self, category: &Category) -> bool {
        if let Some(wanted) = &self.category {
            return wanted.eq_ignore_ascii_case(&category.category);
        }
        !self
            .hidden_categories
            .iter()
            .any(|hidden| hidden.eq_ignore_ascii_case(&category.category))
    }

    pub fn matches(&self, category: &Category, image: &ImageRecord) -> bool {
        if !self.includes_category(category) {
            return false;
        }
        let stability = image.effective_stability(category);
        if self.exclude_experimental && stability == Stability::Experimental {
            return false;
        }
        self.stability.map_or(true, |s| s == stability)
            && self.desktop.map_or(true, |d| d == image.properties.desktop)
            && self.nvidia.map_or(true, |n| n == image.properties.nvidia)
    }
}

/// A data-definition defect found by [`Catalog::validate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    DuplicateName { category: String, name: String },
    EmptyCategory { category: String },
    DuplicateCategory { category: String },
    UrlMismatch { category: String, name: String, url: String },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::DuplicateName { category, name } => {
                write!(f, "{}: image name `{}` is generated more than once", category, name)
            }
            Issue::EmptyCategory { category } => write!(f, "{}: category has no images", category),
            Issue::DuplicateCategory { category } => {
                write!(f, "{}: category is defined more than once", category)
            }
            Issue::UrlMismatch {
                category,
                name,
                url,
            } => write!(f, "{}: url `{}` does not end with `/{}`", category, url, name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

#[derive(Serialize)]
struct CatalogExport<'a> {
    generated_at: String,
    version: &'static str,
    categories: &'a [Category],
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Build every known category
    pub fn builtin() -> Result<Self> {
        let mut categories = Vec::new();
        for family in matrix_families() {
            categories.push(family.build()?);
        }
        categories.extend(fedora::fixed_categories());

        let catalog = Self::new(categories);
        info!(
            "Built catalog with {} categories and {} images",
            catalog.categories.len(),
            catalog.image_count()
        );
        Ok(catalog)
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.category.eq_ignore_ascii_case(name))
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.category.as_str())
    }

    pub fn image_count(&self) -> usize {
        self.categories.iter().map(|c| c.images.len()).sum()
    }

    pub fn query<'a>(&'a self, filter: &ImageFilter) -> Vec<(&'a Category, &'a ImageRecord)> {
        self.categories
            .iter()
            .flat_map(|category| category.images.iter().map(move |image| (category, image)))
            .filter(|(category, image)| filter.matches(category, image))
            .collect()
    }

    pub fn validate(&self) -> Vec<Issue> {
        let mut issues = Vec::new();
        // Lookups ignore case, so names differing only in case collide
        let mut categories = HashSet::new();

        for category in &self.categories {
            if !categories.insert(category.category.to_ascii_lowercase()) {
                issues.push(Issue::DuplicateCategory {
                    category: category.category.clone(),
                });
            }
            if category.images.is_empty() {
                issues.push(Issue::EmptyCategory {
                    category: category.category.clone(),
                });
            }

            let mut names = HashSet::new();
            for image in &category.images {
                if !names.insert(image.name.as_str()) {
                    issues.push(Issue::DuplicateName {
                        category: category.category.clone(),
                        name: image.name.clone(),
                    });
                }
                if !image.url.ends_with(&format!("/{}", image.name)) {
                    issues.push(Issue::UrlMismatch {
                        category: category.category.clone(),
                        name: image.name.clone(),
                        url: image.url.clone(),
                    });
                }
            }
        }

        for issue in &issues {
            warn!("{}", issue);
        }
        issues
    }

    /// Serialize the catalog with a generation timestamp
    pub fn render(&self, format: ExportFormat) -> Result<String> {
        let export = CatalogExport {
            generated_at: chrono::Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION"),
            categories: &self.categories,
        };
        match format {
            ExportFormat::Json => {
                serde_json::to_string_pretty(&export).context("Failed to serialize catalog as JSON")
            }
            ExportFormat::Toml => {
                toml::to_string_pretty(&export).context("Failed to serialize catalog as TOML")
            }
        }
    }

    /// Keep only the images `filter` matches; categories left empty are dropped
    pub fn filtered(&self, filter: &ImageFilter) -> Catalog {
        let categories = self
            .categories
            .iter()
            .filter_map(|category| {
                let images: Vec<ImageRecord> = category
                    .images
                    .iter()
                    .filter(|image| filter.matches(category, image))
                    .cloned()
                    .collect();
                (!images.is_empty()).then(|| Category {
                    images,
                    ..category.clone()
                })
            })
            .collect();
        Catalog::new(categories)
    }
}
