use anyhow::{bail, Result};

use super::Family;
use crate::constants::registry;
use crate::matrix::{AxisSpec, Combination};
use crate::model::{
    fedora_codeword_to_known_desktop, CategoryInfo, Desktop, ImageProperties, NvidiaDriver,
    Stability,
};

const WAYBLUE_PREFIX: &str = "wayblue-";

pub const BASES: &[&str] = &[
    "silverblue",
    "kinoite",
    "sericea",
    "wayblue-wayfire",
    "wayblue-sway",
    "wayblue-river",
    "wayblue-hyprland",
    "cosmic",
    "securecore",
    "securecore-zfs",
];

pub struct Secureblue;

/// Desktop shipped by a hardened base image
fn base_desktop(base: &str) -> Result<Desktop> {
    let desktop = fedora_codeword_to_known_desktop(base);
    if desktop != Desktop::None {
        return Ok(desktop);
    }
    if let Some(compositor) = base.strip_prefix(WAYBLUE_PREFIX) {
        return compositor.parse();
    }
    if base.starts_with("securecore") {
        // Server images
        return Ok(Desktop::None);
    }
    if base == "cosmic" {
        return Ok(Desktop::Cosmic);
    }
    bail!("No known desktop for secureblue base `{}`", base)
}

impl Family for Secureblue {
    fn info(&self) -> CategoryInfo {
        CategoryInfo {
            name: "secureblue",
            description: &["Hardened Fedora Atomic and Fedora CoreOS images."],
            repo: "https://github.com/secureblue/secureblue",
            stability: Stability::Stable,
        }
    }

    fn registry(&self) -> &'static str {
        registry::SECUREBLUE
    }

    fn axes(&self) -> AxisSpec {
        AxisSpec::new()
            .axis("base", BASES.iter().copied())
            .axis("nvidia", NvidiaDriver::ALL.iter().map(NvidiaDriver::as_str))
            .flag("userns")
    }

    fn name(&self, combination: &Combination) -> Result<String> {
        let base = combination.token("base")?;
        let driver = match combination.parse::<NvidiaDriver>("nvidia")? {
            NvidiaDriver::None => "-main",
            nvidia => nvidia.image_suffix(),
        };
        let userns = if combination.flag("userns")? {
            "-userns"
        } else {
            ""
        };
        Ok(format!("{}{}{}-hardened", base, driver, userns))
    }

    fn properties(&self, combination: &Combination, _name: &str) -> Result<ImageProperties> {
        let base = combination.token("base")?;
        let stability = base
            .starts_with(WAYBLUE_PREFIX)
            .then_some(Stability::Beta);
        Ok(
            ImageProperties::new(base_desktop(base)?, combination.parse("nvidia")?)
                .with_stability(stability),
        )
    }
}
