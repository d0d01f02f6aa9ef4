use serde::{Deserialize, Serialize};


/// Declares a closed token enum with lowercase `as_str`, `Display` and `FromStr`
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident => $token:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::anyhow::Error;

            fn from_str(s: &str) -> ::anyhow::Result<Self> {
                match s {
                    $($token => Ok($name::$variant),)+
                    other => ::anyhow::bail!(
                        "Unknown {} `{}` (expected one of: {})",
                        stringify!($name),
                        other,
                        [$($token),+].join(", ")
                    ),
                }
            }
        }
    };
}

pub(crate) use token_enum;

token_enum! {
    /// Desktop environment or compositor shipped by an image
    pub enum Desktop {
        None => "none",
        Gnome => "gnome",
        Kde => "kde",
        Sway => "sway",
        Budgie => "budgie",
        Lxqt => "lxqt",
        Xfce => "xfce",
        Wayfire => "wayfire",
        Hyprland => "hyprland",
        River => "river",
        Qtile => "qtile",
        Cosmic => "cosmic",
    }
}

token_enum! {
    /// NVIDIA kernel driver baked into an image
    pub enum NvidiaDriver {
        None => "none",
        Open => "open",
        Proprietary => "proprietary",
    }
}

token_enum! {
    /// Maturity tier, ordered from most to least mature
    pub enum Stability {
        Stable => "stable",
        Beta => "beta",
        Experimental => "experimental",
    }
}

token_enum! {
    /// Hardware-specific image variant
    pub enum Hardware {
        None => "none",
        Asus => "asus",
        Surface => "surface",
    }
}

impl NvidiaDriver {
    /// Image name suffix; empty for the driverless variant
    pub fn image_suffix(&self) -> &'static str {
        match self {
            NvidiaDriver::None => "",
            NvidiaDriver::Open => "-nvidia-open",
            NvidiaDriver::Proprietary => "-nvidia",
        }
    }

    pub fn from_flag(nvidia: bool) -> Self {
        if nvidia {
            NvidiaDriver::Proprietary
        } else {
            NvidiaDriver::None
        }
    }
}

impl Hardware {
    pub fn image_suffix(&self) -> &'static str {
        match self {
            Hardware::None => "",
            Hardware::Asus => "-asus",
            Hardware::Surface => "-surface",
        }
    }
}

/// Map a Fedora Atomic variant codename to the desktop it ships
pub fn fedora_codeword_to_known_desktop(codeword: &str) -> Desktop {
    match codeword {
        "silverblue" => Desktop::Gnome,
        "kinoite" => Desktop::Kde,
        "sericea" => Desktop::Sway,
        "onyx" => Desktop::Budgie,
        "lazurite" => Desktop::Lxqt,
        "vauxite" => Desktop::Xfce,
        _ => Desktop::None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageProperties {
    pub desktop: Desktop,
    pub nvidia: NvidiaDriver,
    /// Overrides the category tier for this image only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stability: Option<Stability>,
}

impl ImageProperties {
    pub fn new(desktop: Desktop, nvidia: NvidiaDriver) -> Self {
        Self {
            desktop,
            nvidia,
            stability: None,
        }
    }

    pub fn with_stability(mut self, stability: Option<Stability>) -> Self {
        self.stability = stability;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub name: String,
    pub url: String,
    pub properties: ImageProperties,
}

impl ImageRecord {
    /// Create a record published as `<registry_prefix>/<name>`
    pub fn new(registry_prefix: &str, name: impl Into<String>, properties: ImageProperties) -> Self {
        let name = name.into();
        Self {
            url: format!("{}/{}", registry_prefix.trim_end_matches('/'), name),
            name,
            properties,
        }
    }

    pub fn effective_stability(&self, category: &Category) -> Stability {
        self.properties.stability.unwrap_or(category.stability)
    }

    /// Registry host, e.g. `ghcr.io`
    pub fn registry(&self) -> &str {
        self.url.split_once('/').map_or(self.url.as_str(), |(host, _)| host)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub category: String,
    pub description: Vec<String>,
    pub repo: String,
    pub stability: Stability,
    pub images: Vec<ImageRecord>,
}

/// Static metadata describing a category, independent of its images
#[derive(Debug, Clone, Copy)]
pub struct CategoryInfo {
    pub name: &'static str,
    pub description: &'static [&'static str],
    pub repo: &'static str,
    pub stability: Stability,
}

impl Category {
    /// Distinct registry hosts of the images, in first-seen order
    pub fn registries(&self) -> Vec<&str> {
        let mut registries: Vec<&str> = Vec::new();
        for image in &self.images {
            let registry = image.registry();
            if !registries.contains(&registry) {
                registries.push(registry);
            }
        }
        registries
    }
}

impl CategoryInfo {
    pub fn with_images(&self, images: Vec<ImageRecord>) -> Category {
        Category {
            category: self.name.to_string(),
            description: self.description.iter().map(|line| line.to_string()).collect(),
            repo: self.repo.to_string(),
            stability: self.stability,
            images,
        }
    }
}

/// Stable ascending sort by name length; equal lengths keep their order
pub fn sort_by_name_length(images: &mut [ImageRecord]) {
    images.sort_by_key(|image| image.name.len());
}
