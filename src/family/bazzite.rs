use anyhow::Result;

use super::{Family, SortOrder};
use crate::constants::registry;
use crate::matrix::{AxisSpec, Combination};
use crate::model::{token_enum, CategoryInfo, Desktop, ImageProperties, NvidiaDriver, Stability};

token_enum! {
    /// Hardware line an image targets
    pub enum BaseName {
        Desktop => "bazzite",
        Deck => "bazzite-deck",
    }
}

token_enum! {
    pub enum Flavor {
        Main => "main",
        Asus => "asus",
    }
}

pub struct Bazzite;

impl Bazzite {
    fn base(base_name: BaseName, flavor: Flavor) -> String {
        match (base_name, flavor) {
            (BaseName::Deck, Flavor::Asus) => "bazzite-ally".to_string(),
            (BaseName::Deck, Flavor::Main) => "bazzite-deck".to_string(),
            (BaseName::Desktop, Flavor::Main) => "bazzite".to_string(),
            (BaseName::Desktop, flavor) => format!("bazzite-{}", flavor),
        }
    }
}

impl Family for Bazzite {
    fn info(&self) -> CategoryInfo {
        CategoryInfo {
            name: "Bazzite",
            description: &[
                "The next generation of Linux gaming",
                "Bazzite is a cloud native image built upon Fedora Atomic Desktops that brings the best of Linux gaming to all of your devices - including your favorite handheld.",
            ],
            repo: "https://github.com/ublue-os/bazzite/",
            stability: Stability::Stable,
        }
    }

    fn registry(&self) -> &'static str {
        registry::UBLUE_OS
    }

    fn axes(&self) -> AxisSpec {
        AxisSpec::new()
            .axis("baseName", BaseName::ALL.iter().map(BaseName::as_str))
            .axis("desktop", [Desktop::Kde.as_str(), Desktop::Gnome.as_str()])
            .axis("flavor", Flavor::ALL.iter().map(Flavor::as_str))
            .axis("nvidia", NvidiaDriver::ALL.iter().map(NvidiaDriver::as_str))
    }

    /// Handheld images never ship an NVIDIA driver
    fn keep(&self, combination: &Combination) -> Result<bool> {
        let base_name: BaseName = combination.parse("baseName")?;
        let nvidia: NvidiaDriver = combination.parse("nvidia")?;
        Ok(!(base_name == BaseName::Deck && nvidia != NvidiaDriver::None))
    }

    fn name(&self, combination: &Combination) -> Result<String> {
        let base_name: BaseName = combination.parse("baseName")?;
        let desktop: Desktop = combination.parse("desktop")?;
        let flavor: Flavor = combination.parse("flavor")?;
        let nvidia: NvidiaDriver = combination.parse("nvidia")?;

        let desktop_suffix = if desktop == Desktop::Gnome { "-gnome" } else { "" };
        Ok(format!(
            "{}{}{}",
            Self::base(base_name, flavor),
            desktop_suffix,
            nvidia.image_suffix()
        ))
    }

    fn properties(&self, combination: &Combination, _name: &str) -> Result<ImageProperties> {
        Ok(ImageProperties::new(
            combination.parse("desktop")?,
            combination.parse("nvidia")?,
        ))
    }

    fn sort_order(&self) -> SortOrder {
        SortOrder::NameLength
    }
}
