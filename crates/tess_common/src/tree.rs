//! Troubleshooting decision tree.
//!
//! A fixed directed graph of question/option steps guiding a user to a
//! solution without free text. The walker is stateless: callers keep
//! track of which step a session is on and thread it through each call.
//! Cycles are intentional - `resolved` loops back to `start`, so the
//! graph has no true sink.

use crate::error::TreeError;

/// One node of the troubleshooting graph.
#[derive(Debug, Clone, Copy)]
pub struct TroubleshootStep {
    pub id: &'static str,
    pub question: &'static str,
    /// Selectable option labels, in display order.
    pub options: &'static [&'static str],
    /// Instructions shown when the step carries a concrete fix.
    pub solution: Option<&'static str>,
    /// Option label -> next step id.
    pub next: &'static [(&'static str, &'static str)],
}

impl TroubleshootStep {
    /// The step id reached by choosing `option`, if valid here.
    pub fn next_for(&self, option: &str) -> Option<&'static str> {
        self.next
            .iter()
            .find(|(label, _)| *label == option)
            .map(|(_, target)| *target)
    }
}

/// Entry point of every session. Idempotent.
pub fn start() -> &'static TroubleshootStep {
    &STEPS[0]
}

/// Look up a step by id.
pub fn find(id: &str) -> Option<&'static TroubleshootStep> {
    STEPS.iter().find(|step| step.id == id)
}

/// All steps, for closure checks and catalog-style iteration.
pub fn all() -> &'static [TroubleshootStep] {
    STEPS
}

/// Advance from `current` by `choice`.
///
/// Fails with [`TreeError::UnknownStep`] when `current` is not in the
/// graph and [`TreeError::InvalidOption`] when `choice` is not one of
/// the step's transitions. On success returns the full next step.
pub fn advance(current: &str, choice: &str) -> Result<&'static TroubleshootStep, TreeError> {
    let step = find(current).ok_or_else(|| TreeError::UnknownStep(current.to_string()))?;

    let next_id = step.next_for(choice).ok_or_else(|| TreeError::InvalidOption {
        step: current.to_string(),
        option: choice.to_string(),
    })?;

    // Graph closure is enforced by tests; a dangling edge is a table
    // authoring error, not a runtime condition.
    find(next_id).ok_or_else(|| TreeError::UnknownStep(next_id.to_string()))
}

static STEPS: &[TroubleshootStep] = &[
    TroubleshootStep {
        id: "start",
        question: "What type of network issue are you experiencing?",
        options: &[
            "No Internet Connection",
            "Slow Internet",
            "WiFi Not Connecting",
            "Website Not Loading",
        ],
        solution: None,
        next: &[
            ("No Internet Connection", "no_internet"),
            ("Slow Internet", "slow_internet"),
            ("WiFi Not Connecting", "wifi_issues"),
            ("Website Not Loading", "website_issues"),
        ],
    },
    TroubleshootStep {
        id: "no_internet",
        question: "Is your router powered on and showing lights?",
        options: &["Yes", "No", "Some lights are on"],
        solution: None,
        next: &[
            ("Yes", "check_cables"),
            ("No", "power_cycle"),
            ("Some lights are on", "check_cables"),
        ],
    },
    TroubleshootStep {
        id: "power_cycle",
        question: "Let's try power cycling your router.",
        options: &["Done"],
        solution: Some(
            "1. Unplug your router\n2. Wait 30 seconds\n3. Plug it back in\n4. Wait 2-3 minutes\n5. Try connecting again",
        ),
        next: &[("Done", "check_connection")],
    },
    TroubleshootStep {
        id: "check_cables",
        question: "Let's check all the cables connecting your router and modem.",
        options: &["All cables are connected", "Found a loose cable"],
        solution: None,
        next: &[
            ("All cables are connected", "check_connection"),
            ("Found a loose cable", "reconnect_cable"),
        ],
    },
    TroubleshootStep {
        id: "reconnect_cable",
        question: "Please reconnect the loose cable securely.",
        options: &["Done"],
        solution: None,
        next: &[("Done", "check_connection")],
    },
    TroubleshootStep {
        id: "check_connection",
        question: "Now try to connect to the internet again. Is it working?",
        options: &["Yes", "No"],
        solution: None,
        next: &[("Yes", "resolved"), ("No", "further_steps")],
    },
    TroubleshootStep {
        id: "resolved",
        question: "Great! Your problem has been resolved.",
        options: &["Start over"],
        solution: Some(
            "The issue has been successfully resolved. If you encounter any more problems, feel free to start another troubleshooting session.",
        ),
        next: &[("Start over", "start")],
    },
    TroubleshootStep {
        id: "further_steps",
        question: "Would you like to continue with more advanced troubleshooting or contact support?",
        options: &["Continue troubleshooting", "Contact support"],
        solution: None,
        next: &[
            ("Continue troubleshooting", "advanced_troubleshooting"),
            ("Contact support", "contact_support"),
        ],
    },
    TroubleshootStep {
        id: "advanced_troubleshooting",
        question: "Let's try some advanced troubleshooting steps.",
        options: &["Done"],
        solution: Some(
            "1. Reset your router to factory settings\n2. Update your router's firmware\n3. Check for interference from other devices",
        ),
        next: &[("Done", "check_connection")],
    },
    TroubleshootStep {
        id: "contact_support",
        question: "Please contact our technical support team.",
        options: &["OK"],
        solution: Some(
            "Our support team can be reached at:\nPhone: 1-800-123-4567\nEmail: support@example.com\nLive Chat: Available on our website",
        ),
        next: &[("OK", "start")],
    },
    TroubleshootStep {
        id: "slow_internet",
        question: "When did you first notice the slow internet speed?",
        options: &["Today", "This week", "Always been slow"],
        solution: None,
        next: &[
            ("Today", "recent_change"),
            ("This week", "recent_change"),
            ("Always been slow", "bandwidth_check"),
        ],
    },
    TroubleshootStep {
        id: "recent_change",
        question: "Are there any new devices connected to your network?",
        options: &["Yes", "No"],
        solution: None,
        next: &[("Yes", "check_devices"), ("No", "run_speedtest")],
    },
    TroubleshootStep {
        id: "wifi_issues",
        question: "Can you see your WiFi network in the list of available networks?",
        options: &["Yes", "No"],
        solution: None,
        next: &[("Yes", "wifi_visible"), ("No", "wifi_not_visible")],
    },
    TroubleshootStep {
        id: "wifi_visible",
        question: "Are you able to connect to the WiFi network but not getting internet?",
        options: &["Yes", "No - Can't connect at all"],
        solution: None,
        next: &[
            ("Yes", "no_internet"),
            ("No - Can't connect at all", "wifi_password"),
        ],
    },
    TroubleshootStep {
        id: "wifi_not_visible",
        question: "Let's try restarting your WiFi router.",
        options: &["Done"],
        solution: Some(
            "1. Unplug the router\n2. Wait 30 seconds\n3. Plug it back in\n4. Wait 2-3 minutes for it to fully restart",
        ),
        next: &[("Done", "check_wifi_after_restart")],
    },
    TroubleshootStep {
        id: "check_wifi_after_restart",
        question: "Is your WiFi network visible now?",
        options: &["Yes", "No"],
        solution: None,
        next: &[("Yes", "wifi_visible"), ("No", "contact_support")],
    },
    TroubleshootStep {
        id: "website_issues",
        question: "Can you access other websites?",
        options: &["Yes", "No"],
        solution: None,
        next: &[("Yes", "specific_website"), ("No", "no_internet")],
    },
    TroubleshootStep {
        id: "specific_website",
        question: "The issue is likely with the specific website. Let's try some steps.",
        options: &["OK"],
        solution: Some(
            "1. Clear your browser cache and cookies\n2. Try a different browser\n3. Check if the website is down using a service like downdetector.com\n4. Try accessing the website using a different device",
        ),
        next: &[("OK", "check_website_again")],
    },
    TroubleshootStep {
        id: "check_website_again",
        question: "Were you able to access the website after trying those steps?",
        options: &["Yes", "No"],
        solution: None,
        next: &[("Yes", "resolved"), ("No", "contact_support")],
    },
    TroubleshootStep {
        id: "bandwidth_check",
        question: "Let's check if your internet plan provides enough bandwidth.",
        options: &["OK"],
        solution: Some(
            "1. Check your internet service plan to confirm your speed\n2. Run a speed test at speedtest.net\n3. If speeds are consistently below what you're paying for, contact your ISP",
        ),
        next: &[("OK", "run_speedtest")],
    },
    TroubleshootStep {
        id: "run_speedtest",
        question: "Please run a speed test at speedtest.net and tell us the result.",
        options: &["Speed is good", "Speed is slower than expected"],
        solution: None,
        next: &[
            ("Speed is good", "check_devices"),
            ("Speed is slower than expected", "isp_issue"),
        ],
    },
    TroubleshootStep {
        id: "check_devices",
        question: "Are there multiple devices using your internet connection?",
        options: &["Yes", "No"],
        solution: None,
        next: &[("Yes", "limit_devices"), ("No", "router_placement")],
    },
    TroubleshootStep {
        id: "limit_devices",
        question: "Try limiting the number of devices or activities using bandwidth.",
        options: &["Done"],
        solution: Some(
            "1. Disconnect devices you're not actively using\n2. Pause large downloads or streaming\n3. Check for background updates on devices",
        ),
        next: &[("Done", "check_connection")],
    },
    TroubleshootStep {
        id: "router_placement",
        question: "Let's check your router placement.",
        options: &["OK"],
        solution: Some(
            "For optimal WiFi performance:\n1. Place router in a central location\n2. Keep away from metal objects and appliances\n3. Position antennas vertically\n4. Keep elevated off the floor",
        ),
        next: &[("OK", "check_connection")],
    },
    TroubleshootStep {
        id: "isp_issue",
        question: "The issue might be with your Internet Service Provider.",
        options: &["Contact ISP", "Try more troubleshooting"],
        solution: Some(
            "Contact your ISP and report the slow speeds. Ask if there are any outages or issues in your area.",
        ),
        next: &[
            ("Contact ISP", "contact_support"),
            ("Try more troubleshooting", "router_placement"),
        ],
    },
    TroubleshootStep {
        id: "wifi_password",
        question: "Are you entering the correct WiFi password?",
        options: &["Yes, I'm sure", "Not sure"],
        solution: None,
        next: &[
            ("Yes, I'm sure", "reset_network_settings"),
            ("Not sure", "find_password"),
        ],
    },
    TroubleshootStep {
        id: "find_password",
        question: "Let's find your WiFi password.",
        options: &["Found it"],
        solution: Some(
            "Your WiFi password can typically be found:\n1. On a sticker on your router\n2. In your router's admin panel\n3. In the documentation from your ISP",
        ),
        next: &[("Found it", "check_connection")],
    },
    TroubleshootStep {
        id: "reset_network_settings",
        question: "Let's try resetting your device's network settings.",
        options: &["Done"],
        solution: Some(
            "For most devices:\n1. Go to Settings\n2. Find Network or WiFi settings\n3. Look for an option to forget/reset network connections\n4. Restart your device\n5. Try connecting again",
        ),
        next: &[("Done", "check_connection")],
    },
];
