//! Seed keywords and URL boost rules per intent
//!
//! These tables are data only; [`crate::Classifier`] scores against
//! whatever tables it is built with.

use tabintent_core::Intent;

pub struct SeedKeywords {
    pub intent: Intent,
    pub keywords: &'static [&'static str],
}

/// Additive score bonus applied when the lowercased URL contains any pattern
#[derive(Debug, Clone)]
pub struct DomainRule {
    pub intent: Intent,
    pub patterns: Vec<String>,
    pub weight: f64,
}

impl DomainRule {
    pub fn new(intent: Intent, patterns: &[&str], weight: f64) -> Self {
        Self {
            intent,
            patterns: patterns.iter().map(|p| p.to_lowercase()).collect(),
            weight,
        }
    }

    pub fn matches(&self, url_lower: &str) -> bool {
        self.patterns.iter().any(|p| url_lower.contains(p.as_str()))
    }
}

pub const SEED_KEYWORDS: &[SeedKeywords] = &[
    SeedKeywords {
        intent: Intent::Shopping,
        keywords: &[
            "buy", "price", "deal", "discount", "coupon", "order", "cart", "checkout", "shipping",
            "returns", "review", "reviews", "amazon", "ebay", "walmart", "bestbuy", "target",
            "store", "product",
        ],
    },
    SeedKeywords {
        intent: Intent::Research,
        keywords: &[
            "docs",
            "documentation",
            "api",
            "reference",
            "guide",
            "tutorial",
            "paper",
            "research",
            "dataset",
            "benchmark",
            "aws",
            "iam",
            "kubernetes",
            "docker",
            "linux",
            "python",
            "java",
            "golang",
            "system",
            "design",
            "security",
            "ransomware",
            "wikipedia",
            "arxiv",
            "ieee",
        ],
    },
    SeedKeywords {
        intent: Intent::WorkTask,
        keywords: &[
            "jira",
            "ticket",
            "issue",
            "bug",
            "fix",
            "deploy",
            "deployment",
            "build",
            "pipeline",
            "ci",
            "cd",
            "pr",
            "pull",
            "merge",
            "github",
            "gitlab",
            "bitbucket",
            "confluence",
            "notion",
            "canvas",
            "assignment",
            "deadline",
            "submit",
            "rubric",
            "grade",
        ],
    },
    SeedKeywords {
        intent: Intent::ReadLater,
        keywords: &[
            "blog",
            "article",
            "newsletter",
            "post",
            "medium",
            "devto",
            "substack",
            "opinion",
            "story",
            "read",
            "reading",
            "longform",
        ],
    },
    SeedKeywords {
        intent: Intent::JustCurious,
        keywords: &[
            "interesting",
            "fun",
            "random",
            "curious",
            "what",
            "why",
            "explore",
            "discover",
        ],
    },
];

pub fn default_domain_rules() -> Vec<DomainRule> {
    vec![
        DomainRule::new(
            Intent::WorkTask,
            &["github.com", "gitlab.com", "bitbucket"],
            2.5,
        ),
        DomainRule::new(
            Intent::Research,
            &["stackoverflow.com", "serverfault.com"],
            2.2,
        ),
        DomainRule::new(Intent::Research, &["docs.", "/docs", "developer."], 2.0),
        DomainRule::new(
            Intent::Shopping,
            &["amazon.", "ebay.", "walmart.", "bestbuy."],
            2.8,
        ),
        DomainRule::new(
            Intent::ReadLater,
            &["medium.com", "dev.to", "substack.com"],
            2.2,
        ),
        DomainRule::new(
            Intent::JustCurious,
            &["youtube.com", "netflix.com", "twitch.tv"],
            1.8,
        ),
    ]
}
