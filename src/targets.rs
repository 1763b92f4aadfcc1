//! Static registry of supported download targets
//!
//! Each target hardcodes a vendor page URL and the CSS selectors that drive
//! it. These are brittle external contracts: when a vendor reworks their
//! markup the selector stops matching and the run surfaces an
//! element-not-found failure.

use clap::ValueEnum;

/// Name of a supported download target
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum TargetName {
    Amd,
    Roblox,
    Vivaldi,
}

impl std::fmt::Display for TargetName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetName::Amd => write!(f, "amd"),
            TargetName::Roblox => write!(f, "roblox"),
            TargetName::Vivaldi => write!(f, "vivaldi"),
        }
    }
}

/// A vendor download page and the elements that drive it
#[derive(Debug, Clone, Copy)]
pub struct DownloadTarget {
    /// Short name used in output and logs
    pub name: &'static str,
    /// Page that hosts the download trigger
    pub page_url: &'static str,
    /// CSS selector of the element whose activation starts the transfer
    pub trigger_selector: &'static str,
    /// CSS selector of the cookie-consent button, when the page shows one
    pub cookie_consent_selector: Option<&'static str>,
}

const AMD: DownloadTarget = DownloadTarget {
    name: "amd",
    page_url: "https://www.amd.com/en/support/download/drivers.html",
    trigger_selector: "#button-8dbca2589a > span",
    cookie_consent_selector: Some("#onetrust-accept-btn-handler"),
};

const ROBLOX: DownloadTarget = DownloadTarget {
    name: "roblox",
    page_url: "https://www.roblox.com/download",
    trigger_selector: ".download-button",
    cookie_consent_selector: None,
};

const VIVALDI: DownloadTarget = DownloadTarget {
    name: "vivaldi",
    page_url: "https://vivaldi.com/download/",
    trigger_selector: ".download-button",
    cookie_consent_selector: None,
};

impl TargetName {
    /// Look up the static target record for this name
    pub fn target(self) -> &'static DownloadTarget {
        match self {
            TargetName::Amd => &AMD,
            TargetName::Roblox => &ROBLOX,
            TargetName::Vivaldi => &VIVALDI,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lookup() {
        assert_eq!(TargetName::Amd.target().name, "amd");
        assert_eq!(TargetName::Roblox.target().name, "roblox");
        assert_eq!(TargetName::Vivaldi.target().name, "vivaldi");
    }

    #[test]
    fn test_only_amd_has_consent_selector() {
        assert!(TargetName::Amd.target().cookie_consent_selector.is_some());
        assert!(TargetName::Roblox.target().cookie_consent_selector.is_none());
        assert!(TargetName::Vivaldi.target().cookie_consent_selector.is_none());
    }

    #[test]
    fn test_urls_are_https() {
        for name in [TargetName::Amd, TargetName::Roblox, TargetName::Vivaldi] {
            assert!(name.target().page_url.starts_with("https://"));
        }
    }

    #[test]
    fn test_case_insensitive_parse() {
        let parsed = TargetName::from_str("ROBLOX", true).unwrap();
        assert_eq!(parsed, TargetName::Roblox);
    }
}
