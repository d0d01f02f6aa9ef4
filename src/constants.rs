/// Registry prefixes images are published under
pub mod registry {
    /// Universal Blue (Bazzite, Bluefin, Aurora, main images)
    pub const UBLUE_OS: &str = "ghcr.io/ublue-os";

    pub const WAYBLUE: &str = "ghcr.io/wayblueorg";

    pub const SECUREBLUE: &str = "ghcr.io/secureblue";

    /// Unofficial Fedora ostree native container builds
    pub const FEDORA_OSTREE_DESKTOPS: &str = "quay.io/fedora-ostree-desktops";

    /// Official Fedora bootc base images
    pub const FEDORA: &str = "quay.io/fedora";

    pub const CENTOS_BOOTC: &str = "quay.io/centos-bootc";

    pub const CENTOS_WORKSTATION: &str = "ghcr.io/centos-workstation";
}

/// Configuration file location
pub mod config {
    /// Directory below the platform config dir
    pub const APP_DIR: &str = "atomic-catalog";

    pub const FILE_NAME: &str = "config.toml";
}
