//! Marketing copy for the landing page.

use crate::components::Icon;
use crate::utils::Anchor;

pub struct NavItem {
    pub label: &'static str,
    pub anchor: Anchor,
}

pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static NAV_ITEMS: [NavItem; 2] = [
    NavItem { label: "Features", anchor: Anchor::Features },
    NavItem { label: "How It Works", anchor: Anchor::HowItWorks },
];

pub const HERO_TITLE: &str = "Product Authentication with";
pub const HERO_HIGHLIGHT: &str = "NFC & Blockchain";
pub const HERO_COPY: &str =
    "Revolutionize your product authentication using cutting-edge NFC and blockchain technology. Protect against counterfeits with unbreakable digital verification.";

pub const FEATURES_TITLE: &str = "Why Radica?";
pub const FEATURES_COPY: &str =
    "Our innovative solution combines Near Field Communication (NFC) and blockchain to create an unprecedented level of product authentication.";

pub static FEATURES: [Feature; 4] = [
    Feature {
        icon: Icon::Shield,
        title: "Unbreakable Security",
        description: "Blockchain's immutable ledger ensures absolute authenticity.",
    },
    Feature {
        icon: Icon::Smartphone,
        title: "Easy Verification",
        description: "One-tap NFC authentication for instant product validation.",
    },
    Feature {
        icon: Icon::Database,
        title: "Transparent Tracking",
        description: "Complete product lifecycle tracking on decentralized networks.",
    },
    Feature {
        icon: Icon::Lock,
        title: "Counterfeit Prevention",
        description: "Advanced cryptographic techniques stop forgery attempts.",
    },
];

pub const PROCESS_TITLE: &str = "Authentication Process";
pub const PROCESS_COPY: &str =
    "Simple, secure, and seamless product verification in just a few steps.";

pub static STEPS: [Step; 3] = [
    Step {
        number: "01",
        title: "NFC Tap",
        description: "User taps their NFC-enabled device on the product's secure tag.",
    },
    Step {
        number: "02",
        title: "Product Authentication",
        description: "NFC Tag authenticates the product using digital signatures.",
    },
    Step {
        number: "03",
        title: "Authentication Certificate",
        description: "Verified product details are stored on the blockchain ledger.",
    },
];

pub const CTA_TITLE: &str = "Ready to Secure Your Products?";
pub const CTA_COPY: &str =
    "Contact our team to implement cutting-edge NFC and blockchain authentication for your brand.";

pub fn copyright_line(brand: &str, year: i32) -> String {
    format!("© {} {}. All Rights Reserved.", year, brand)
}
