//! Fedora and CentOS upstream images

use anyhow::Result;

use super::Family;
use crate::constants::registry;
use crate::matrix::{AxisSpec, Combination};
use crate::model::{
    fedora_codeword_to_known_desktop, Category, CategoryInfo, Desktop, ImageProperties,
    ImageRecord, NvidiaDriver, Stability,
};

pub const OSTREE_DESKTOP_BASES: &[&str] = &[
    "silverblue",
    "kinoite",
    "sericea",
    "onyx",
    "base",
    "lazurite",
    "vauxite",
    "cosmic-atomic",
];

/// Unofficial ostree native container builds of the Fedora Atomic variants
pub struct FedoraOstreeDesktops;

impl Family for FedoraOstreeDesktops {
    fn info(&self) -> CategoryInfo {
        CategoryInfo {
            name: "fedora-ostree-desktops",
            description: &[
                "Experimental Ostree Native Container images for rpm-ostree based Fedora desktop variants",
                "Unofficial atomic Fedora OCI images built on Fedora infrastructure based on the official variants.",
            ],
            repo: "https://gitlab.com/fedora/ostree/ci-test",
            stability: Stability::Experimental,
        }
    }

    fn registry(&self) -> &'static str {
        registry::FEDORA_OSTREE_DESKTOPS
    }

    fn axes(&self) -> AxisSpec {
        AxisSpec::new().axis("base", OSTREE_DESKTOP_BASES.iter().copied())
    }

    fn name(&self, combination: &Combination) -> Result<String> {
        Ok(combination.token("base")?.to_string())
    }

    fn properties(&self, _combination: &Combination, name: &str) -> Result<ImageProperties> {
        let desktop = match name {
            "cosmic-atomic" => Desktop::Cosmic,
            codeword => fedora_codeword_to_known_desktop(codeword),
        };
        Ok(ImageProperties::new(desktop, NvidiaDriver::None))
    }
}

fn bare(desktop: Desktop) -> ImageProperties {
    ImageProperties::new(desktop, NvidiaDriver::None)
}

pub fn fedora_bootc() -> Category {
    CategoryInfo {
        name: "fedora-bootc",
        description: &["Official atomic bootable container base image for Fedora."],
        repo: "https://gitlab.com/fedora/bootc/base-images",
        stability: Stability::Stable,
    }
    .with_images(vec![ImageRecord::new(
        registry::FEDORA,
        "fedora-bootc",
        bare(Desktop::None),
    )])
}

pub fn centos_bootc() -> Category {
    CategoryInfo {
        name: "centos-bootc",
        description: &[
            "Official atomic bootable container base image for CentOS.",
            "Check available tags from the repo.",
        ],
        repo: "https://gitlab.com/redhat/centos-stream/containers/bootc",
        stability: Stability::Stable,
    }
    .with_images(vec![ImageRecord::new(
        registry::CENTOS_BOOTC,
        "centos-bootc",
        bare(Desktop::None),
    )])
}

pub fn centos_workstation() -> Category {
    CategoryInfo {
        name: "centos-workstation",
        description: &[
            "Unoffical desktop images based on centos-bootc.",
            "Experimental Universal Blue -style images with a CentOS base, a lot of maintainer and addition overlap with Universal Blue.",
        ],
        repo: "https://github.com/centos-workstation/",
        stability: Stability::Experimental,
    }
    .with_images(
        ["main", "achillobator"]
            .into_iter()
            .map(|name| ImageRecord::new(registry::CENTOS_WORKSTATION, name, bare(Desktop::Gnome)))
            .collect(),
    )
}

/// Categories listing images directly rather than through a matrix
pub fn fixed_categories() -> Vec<Category> {
    vec![fedora_bootc(), centos_bootc(), centos_workstation()]
}
