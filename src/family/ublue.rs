//! Universal Blue workstation and main images

use anyhow::Result;

use super::{Family, SortOrder};
use crate::constants::registry;
use crate::matrix::{AxisSpec, Combination};
use crate::model::{
    fedora_codeword_to_known_desktop, CategoryInfo, Desktop, Hardware, ImageProperties,
    NvidiaDriver, Stability,
};

/// Fedora Atomic variants rebased by Universal Blue
pub const MAIN_BASES: &[&str] = &[
    "silverblue",
    "kinoite",
    "sericea",
    "onyx",
    "base",
    "lazurite",
    "vauxite",
];

/// Developer workstation images sharing one naming scheme (Bluefin, Aurora)
pub struct Workstation {
    base: &'static str,
    desktop: Desktop,
    info: CategoryInfo,
}

impl Workstation {
    pub fn bluefin() -> Self {
        Self {
            base: "bluefin",
            desktop: Desktop::Gnome,
            info: CategoryInfo {
                name: "Bluefin",
                description: &[
                    "The next generation Linux workstation, designed for reliability, performance, and sustainability.",
                    "A custom image of Fedora Silverblue, offering a familiar(ish) Ubuntu-style desktop.",
                    "For end users it provides a system as reliable as a Chromebook with near-zero maintenance while providing developers with a powerful cloud-native development mode. Built with next generation tech, for people who need their machines to get work done.",
                ],
                repo: "https://github.com/ublue-os/bluefin/",
                stability: Stability::Stable,
            },
        }
    }

    pub fn aurora() -> Self {
        Self {
            base: "aurora",
            desktop: Desktop::Kde,
            info: CategoryInfo {
                name: "Aurora",
                description: &[
                    "Hello stargazer, a new experience awaits.",
                    "Powered by the awesomeness of KDE and Universal Blue, crafted for you.",
                    "Get onboard. Aurora is the ultimate desktop OS for your developer workstation or the perfect maintenance-free OS for everyone.",
                ],
                repo: "https://github.com/ublue-os/bluefin/",
                stability: Stability::Stable,
            },
        }
    }
}

impl Family for Workstation {
    fn info(&self) -> CategoryInfo {
        self.info
    }

    fn registry(&self) -> &'static str {
        registry::UBLUE_OS
    }

    fn axes(&self) -> AxisSpec {
        AxisSpec::new()
            .flag("nvidia")
            .flag("dx")
            .axis("hardware", Hardware::ALL.iter().map(Hardware::as_str))
    }

    fn name(&self, combination: &Combination) -> Result<String> {
        let dx = if combination.flag("dx")? { "-dx" } else { "" };
        let hardware: Hardware = combination.parse("hardware")?;
        let nvidia = if combination.flag("nvidia")? { "-nvidia" } else { "" };
        Ok(format!(
            "{}{}{}{}",
            self.base,
            dx,
            hardware.image_suffix(),
            nvidia
        ))
    }

    fn properties(&self, combination: &Combination, _name: &str) -> Result<ImageProperties> {
        Ok(ImageProperties::new(
            self.desktop,
            NvidiaDriver::from_flag(combination.flag("nvidia")?),
        ))
    }

    fn sort_order(&self) -> SortOrder {
        SortOrder::NameLength
    }
}

/// Common base images every other Universal Blue image builds on
pub struct UblueMain;

impl Family for UblueMain {
    fn info(&self) -> CategoryInfo {
        CategoryInfo {
            name: "Universal Blue Main Images",
            description: &[
                "OCI base images of Fedora with batteries included.",
                "A common main image for all other uBlue images, with minimal (but important) adjustments to Fedora.",
            ],
            repo: "https://github.com/ublue-os/main",
            stability: Stability::Stable,
        }
    }

    fn registry(&self) -> &'static str {
        registry::UBLUE_OS
    }

    fn axes(&self) -> AxisSpec {
        AxisSpec::new()
            .axis("base", MAIN_BASES.iter().copied())
            .flag("nvidia")
    }

    fn name(&self, combination: &Combination) -> Result<String> {
        let suffix = if combination.flag("nvidia")? {
            "-nvidia"
        } else {
            "-main"
        };
        Ok(format!("{}{}", combination.token("base")?, suffix))
    }

    fn properties(&self, combination: &Combination, _name: &str) -> Result<ImageProperties> {
        Ok(ImageProperties::new(
            fedora_codeword_to_known_desktop(combination.token("base")?),
            NvidiaDriver::from_flag(combination.flag("nvidia")?),
        ))
    }
}
