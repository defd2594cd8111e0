//! Quick-solutions library.
//!
//! Static lookup of detailed remediation articles keyed by issue title,
//! for the "I already know what's wrong" path that skips diagnosis
//! entirely.

use crate::api::{SolutionArticle, SolutionLink};

struct Article {
    title: &'static str,
    text: &'static str,
    media: &'static str,
    links: &'static [(&'static str, &'static str)],
}

static ARTICLES: &[Article] = &[
    Article {
        title: "Wi-Fi not working",
        text: "Step 1: Restart your router and modem.\n\
               Step 2: Check if other devices are connected to the Wi-Fi.\n\
               Step 3: Try reconnecting to the network by forgetting and reconnecting.\n\
               Step 4: Ensure your router is within range of your device and not obstructed by walls or objects.\n\
               Step 5: If you still experience issues, check for firmware updates for your router.",
        media: "/images/router-settings.png",
        links: &[
            ("Router Troubleshooting Guide", "https://example.com/router-guide"),
            ("How to Update Router Firmware", "https://example.com/update-firmware"),
        ],
    },
    Article {
        title: "Slow internet",
        text: "Step 1: Run a speed test at fast.com or speedtest.net.\n\
               Step 2: Disconnect unused devices that are consuming bandwidth.\n\
               Step 3: Restart your router to refresh the connection.\n\
               Step 4: Try using a wired connection to reduce latency.\n\
               Step 5: Check for any large downloads or streaming services that might be slowing down the network.",
        media: "/images/speed-test.png",
        links: &[
            ("Speed Test Website", "https://fast.com"),
            ("Optimize Your Wi-Fi Speed", "https://example.com/optimize-wifi-speed"),
        ],
    },
    Article {
        title: "Computer freezing",
        text: "Step 1: Close unnecessary programs using Task Manager (Ctrl+Shift+Esc) or Activity Monitor (Mac).\n\
               Step 2: Restart your computer to resolve any temporary software issues.\n\
               Step 3: Check your computer's storage; delete unnecessary files or move them to external storage.\n\
               Step 4: Run a malware scan to ensure no viruses are affecting performance.\n\
               Step 5: Update your drivers and operating system to ensure compatibility with new applications.",
        media: "/images/task-manager.png",
        links: &[
            ("How to Clean Up Your Computer", "https://example.com/clean-computer"),
            ("How to Update Drivers", "https://example.com/update-drivers"),
        ],
    },
    Article {
        title: "Blue screen of death",
        text: "Step 1: Write down the error code or stop code displayed on the blue screen.\n\
               Step 2: Restart your computer and check if the issue persists.\n\
               Step 3: Run the built-in Windows diagnostic tool (chkdsk) to check for disk errors: open Command Prompt and type 'chkdsk /f'.\n\
               Step 4: Update your graphics drivers and check if the issue is related to hardware drivers.\n\
               Step 5: If the problem continues, consider performing a system restore to a previous state or reinstalling Windows.",
        media: "/images/bsod-error.png",
        links: &[
            ("BSOD Troubleshooting Guide", "https://example.com/bsod-guide"),
            ("How to Run CHKDSK", "https://example.com/run-chkdsk"),
        ],
    },
    Article {
        title: "App crashing",
        text: "Step 1: Restart the app and check if the issue is resolved.\n\
               Step 2: Update the app to the latest version.\n\
               Step 3: Clear the app's cache or data in the settings (for mobile apps).\n\
               Step 4: Reinstall the app if it continues to crash.\n\
               Step 5: Check the app's official website for any known bugs or updates.",
        media: "/images/app-crash.png",
        links: &[
            ("App Crash Troubleshooting", "https://example.com/app-crash-fix"),
            ("How to Clear App Cache", "https://example.com/clear-app-cache"),
        ],
    },
];

/// Look up an article by exact title.
pub fn find(title: &str) -> Option<SolutionArticle> {
    ARTICLES.iter().find(|a| a.title == title).map(|a| SolutionArticle {
        title: a.title.to_string(),
        text: a.text.to_string(),
        media: a.media.to_string(),
        links: a
            .links
            .iter()
            .map(|(label, url)| SolutionLink {
                label: label.to_string(),
                url: url.to_string(),
            })
            .collect(),
    })
}

/// Every known article title, for listings.
pub fn titles() -> Vec<&'static str> {
    ARTICLES.iter().map(|a| a.title).collect()
}
