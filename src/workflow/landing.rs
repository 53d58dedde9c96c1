// file: src/workflow/landing.rs
// description: landing page content linking to the three workflows

use crate::routes::Page;

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub page: Page,
}

pub const HEADLINE: &str = "ARC for Legal Documents";

pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Generate Documents",
        description: "Create professional legal documents from pre-built templates including MSA, NDA, and SLA agreements.",
        page: Page::Generate,
    },
    Feature {
        title: "Review Contracts",
        description: "Upload and analyze contracts with AI-powered evaluation and comprehensive question-based assessment.",
        page: Page::Review,
    },
    Feature {
        title: "Compare Documents",
        description: "Compare contract versions with detailed change tracking, AI insights, and approval workflows.",
        page: Page::Compare,
    },
];

pub const BENEFITS: [&str; 6] = [
    "Streamlined document generation process",
    "AI-powered contract analysis and insights",
    "Comprehensive change tracking and comparison",
    "Professional Word document exports",
    "Approval workflows with comment system",
    "Legal precedence and opinion analysis",
];

pub fn render() -> String {
    let mut out = format!("{}\n\n", HEADLINE);
    for feature in &FEATURES {
        out.push_str(&format!(
            "{} ({})\n  {}\n",
            feature.title,
            feature.page.path(),
            feature.description
        ));
    }
    out.push('\n');
    for benefit in BENEFITS {
        out.push_str(&format!("- {}\n", benefit));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_feature_links_to_a_workflow() {
        let rendered = render();
        for feature in &FEATURES {
            assert_ne!(feature.page, Page::Landing);
            assert!(rendered.contains(feature.page.path()));
        }
    }
}
