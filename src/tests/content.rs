use crate::components::Icon;
use crate::content::{ copyright_line, FEATURES, NAV_ITEMS, STEPS };
use crate::utils::Anchor;

#[test]
fn test_nav_items_target_sections() {
    let anchors: Vec<Anchor> = NAV_ITEMS.iter().map(|item| item.anchor).collect();
    assert_eq!(anchors, vec![Anchor::Features, Anchor::HowItWorks]);
}

#[test]
fn test_features_and_steps() {
    let titles: Vec<&str> = FEATURES.iter().map(|feature| feature.title).collect();
    assert_eq!(titles, vec![
        "Unbreakable Security",
        "Easy Verification",
        "Transparent Tracking",
        "Counterfeit Prevention",
    ]);

    let numbers: Vec<&str> = STEPS.iter().map(|step| step.number).collect();
    assert_eq!(numbers, vec!["01", "02", "03"]);
}

#[test]
fn test_every_icon_has_paths() {
    let icons = [
        Icon::Shield,
        Icon::Smartphone,
        Icon::Lock,
        Icon::Menu,
        Icon::X,
        Icon::Database,
        Icon::Github,
        Icon::Moon,
        Icon::Sun,
    ];
    for icon in icons {
        assert!(!icon.paths().is_empty(), "{:?} has no paths", icon);
        assert!(icon.paths().iter().all(|d| d.starts_with('M') || d.starts_with('m')));
    }
}

#[test]
fn test_copyright_line() {
    assert_eq!(copyright_line("Radica", 2026), "© 2026 Radica. All Rights Reserved.");
}
