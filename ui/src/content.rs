//! Literal page content feeding the repeated grids.

use crate::components::IconName;
use crate::t;

/// One grid item.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentBlock {
    pub title: String,
    pub description: String,
    pub icon: IconName,
}

impl ContentBlock {
    fn new(title: String, description: String, icon: IconName) -> Self {
        Self {
            title,
            description,
            icon,
        }
    }
}

/// "Für wen diese Community ist".
pub fn audience() -> Vec<ContentBlock> {
    vec![
        ContentBlock::new(
            t!("audience-vision-title"),
            t!("audience-vision-desc"),
            IconName::Users,
        ),
        ContentBlock::new(
            t!("audience-families-title"),
            t!("audience-families-desc"),
            IconName::Users,
        ),
        ContentBlock::new(
            t!("audience-professionals-title"),
            t!("audience-professionals-desc"),
            IconName::Users,
        ),
        ContentBlock::new(
            t!("audience-makers-title"),
            t!("audience-makers-desc"),
            IconName::Users,
        ),
    ]
}

/// "Was dich in der Community erwartet".
pub fn offerings() -> Vec<ContentBlock> {
    vec![
        ContentBlock::new(
            t!("offering-knowledge-title"),
            t!("offering-knowledge-desc"),
            IconName::BookOpen,
        ),
        ContentBlock::new(
            t!("offering-visa-title"),
            t!("offering-visa-desc"),
            IconName::ShieldCheck,
        ),
        ContentBlock::new(
            t!("offering-living-title"),
            t!("offering-living-desc"),
            IconName::Home,
        ),
        ContentBlock::new(
            t!("offering-family-title"),
            t!("offering-family-desc"),
            IconName::Users,
        ),
        ContentBlock::new(
            t!("offering-work-title"),
            t!("offering-work-desc"),
            IconName::Briefcase,
        ),
        ContentBlock::new(
            t!("offering-experience-title"),
            t!("offering-experience-desc"),
            IconName::MapPin,
        ),
    ]
}
