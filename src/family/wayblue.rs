use anyhow::Result;

use super::Family;
use crate::constants::registry;
use crate::matrix::{AxisSpec, Combination};
use crate::model::{CategoryInfo, Desktop, ImageProperties, NvidiaDriver, Stability};

pub const COMPOSITORS: &[Desktop] = &[
    Desktop::Wayfire,
    Desktop::Hyprland,
    Desktop::Sway,
    Desktop::River,
    Desktop::Qtile,
];

pub struct Wayblue;

impl Family for Wayblue {
    fn info(&self) -> CategoryInfo {
        CategoryInfo {
            name: "wayblue",
            description: &["Fedora Atomic images for wayland compositors."],
            repo: "https://github.com/wayblueorg/wayblue",
            stability: Stability::Beta,
        }
    }

    fn registry(&self) -> &'static str {
        registry::WAYBLUE
    }

    fn axes(&self) -> AxisSpec {
        AxisSpec::new()
            .axis("compositor", COMPOSITORS.iter().map(Desktop::as_str))
            .axis("nvidia", NvidiaDriver::ALL.iter().map(NvidiaDriver::as_str))
            .flag("gdm")
    }

    fn name(&self, combination: &Combination) -> Result<String> {
        let compositor: Desktop = combination.parse("compositor")?;
        let nvidia: NvidiaDriver = combination.parse("nvidia")?;
        let gdm = if combination.flag("gdm")? { "-gdm" } else { "" };
        Ok(format!("{}{}{}", compositor, nvidia.image_suffix(), gdm))
    }

    fn properties(&self, combination: &Combination, _name: &str) -> Result<ImageProperties> {
        let compositor: Desktop = combination.parse("compositor")?;
        let stability = (compositor == Desktop::Qtile).then_some(Stability::Experimental);
        Ok(ImageProperties::new(compositor, combination.parse("nvidia")?).with_stability(stability))
    }
}
