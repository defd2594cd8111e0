//! Issue category catalog.
//!
//! The canonical table of known issue classes with their trigger
//! keywords, follow-up questions, and remediation steps. Loaded once,
//! immutable for the process lifetime. Slice order is the declaration
//! order and doubles as the resolver's tie-break order.

/// One fixed class of tech problem.
#[derive(Debug, Clone, Copy)]
pub struct IssueCategory {
    /// Stable identifier, e.g. `slow_internet`.
    pub id: &'static str,
    /// Trigger terms, matched case-insensitively as substrings.
    pub keywords: &'static [&'static str],
    /// Follow-up questions, most useful first.
    pub questions: &'static [&'static str],
    /// Remediation steps, cheapest first.
    pub solutions: &'static [&'static str],
}

static CATALOG: &[IssueCategory] = &[
    IssueCategory {
        id: "slow_internet",
        keywords: &["slow", "internet", "wifi", "connection", "loading", "buffering"],
        questions: &[
            "What's your internet speed?",
            "Are you using WiFi or ethernet?",
            "How many devices are connected?",
            "Have you tried restarting your router?",
        ],
        solutions: &[
            "Restart your router and modem",
            "Check for background downloads",
            "Move closer to your WiFi router",
            "Contact your ISP if the issue persists",
        ],
    },
    IssueCategory {
        id: "screen_flickering",
        keywords: &["flicker", "screen", "display", "blinking", "glitch"],
        questions: &[
            "Is this happening on all applications?",
            "Does it happen during startup?",
            "Have you updated your graphics drivers?",
            "Is your monitor properly connected?",
        ],
        solutions: &[
            "Update your graphics drivers",
            "Check monitor cable connections",
            "Try a different monitor or cable",
            "Check for software conflicts",
        ],
    },
    IssueCategory {
        id: "login_problems",
        keywords: &["login", "password", "account", "access", "sign in", "authentication"],
        questions: &[
            "Are you getting any specific error messages?",
            "Have you tried resetting your password?",
            "Is this happening on all devices?",
            "Can you access the account recovery options?",
        ],
        solutions: &[
            "Try resetting your password",
            "Clear browser cache and cookies",
            "Try a different browser",
            "Contact support if the issue persists",
        ],
    },
    IssueCategory {
        id: "general_performance",
        keywords: &["slow", "performance", "lag", "freeze", "crash", "unresponsive"],
        questions: &[
            "When did this start happening?",
            "Have you installed any new software recently?",
            "How much free disk space do you have?",
            "Are you running many programs at once?",
        ],
        solutions: &[
            "Restart your computer",
            "Close unnecessary programs",
            "Check for malware",
            "Free up disk space",
            "Update your operating system",
        ],
    },
];

/// All categories in declaration order.
pub fn all() -> &'static [IssueCategory] {
    CATALOG
}

/// Look up a category by id.
pub fn find(id: &str) -> Option<&'static IssueCategory> {
    CATALOG.iter().find(|c| c.id == id)
}

/// Category ids in declaration order, for the classifier prompt.
pub fn ids() -> Vec<&'static str> {
    CATALOG.iter().map(|c| c.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id() {
        assert_eq!(find("slow_internet").map(|c| c.id), Some("slow_internet"));
        assert!(find("missing_category").is_none());
    }

    #[test]
    fn declaration_order_is_stable() {
        let ids = ids();
        assert_eq!(
            ids,
            vec![
                "slow_internet",
                "screen_flickering",
                "login_problems",
                "general_performance"
            ]
        );
    }

    #[test]
    fn every_category_is_fully_populated() {
        for category in all() {
            assert!(!category.keywords.is_empty(), "{} has no keywords", category.id);
            assert!(!category.questions.is_empty(), "{} has no questions", category.id);
            assert!(!category.solutions.is_empty(), "{} has no solutions", category.id);
        }
    }
}
