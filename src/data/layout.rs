//! Repository layout of a calnix checkout.
//!
//! Every check works from these tables; nothing here touches the filesystem.

/// Files that must exist relative to the repository root.
pub const REQUIRED_FILES: &[&str] = &[
    "flake.nix",
    "flake.lock",
    REBUILD_SCRIPT,
    "hosts/thinker/configuration.nix",
    "hosts/1337book/configuration.nix",
    WORK_HOST_CONFIG,
    "modules/base.nix",
    "modules/gaming.nix",
    "homely-man.nix",
    "python-dev.nix",
];

/// Per-host configuration files, one per machine.
pub const HOST_CONFIGS: &[&str] = &[
    "hosts/thinker/configuration.nix",
    "hosts/1337book/configuration.nix",
    WORK_HOST_CONFIG,
];

/// `nixosConfigurations` the flake must export.
pub const NIXOS_CONFIGURATIONS: &[&str] = &["thinker", "1337book", "work-wsl"];

/// Top-level key of `nix flake show --json` holding the host outputs.
pub const NIXOS_CONFIGURATIONS_KEY: &str = "nixosConfigurations";

/// The work profile, which must stay free of the gaming bundle.
pub const WORK_HOST_CONFIG: &str = "hosts/work-wsl/configuration.nix";

/// Packages that belong to the gaming bundle.
pub const GAMING_PACKAGES: &[&str] = &[
    "steam",
    "blender",
    "krita",
    "aseprite",
    "dwarf-fortress",
    "flatpak",
];

/// Module the work profile must never import.
pub const GAMING_MODULE: &str = "gaming.nix";

/// Import path every host uses to pull in the shared base module.
pub const BASE_MODULE_IMPORT: &str = "../../modules/base.nix";

pub const REBUILD_SCRIPT: &str = "rebuild.sh";

/// Function the rebuild script uses to pick the flake output for this machine.
pub const DETECT_HOST_SIGNATURE: &str = "detect_host()";

/// Extension of files handed to the syntax checker.
pub const NIX_EXTENSION: &str = "nix";
