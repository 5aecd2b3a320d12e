use crate::{
    config::OWNER_EMAIL,
    showcase::{Categorized, SkillCategory},
};

pub const TAGLINE: &str = "Full-stack engineer building fast, reliable things for the web.";
pub const LOCATION: &str = "Portland, OR";
pub const GITHUB_URL: &str = "https://github.com/jordanavery";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/jordanavery";

pub const ABOUT: &[&str] = &[
    "I'm a software engineer with a soft spot for systems that stay fast as they grow. Over the last eight years I've shipped product features, rebuilt data pipelines, and mentored teams through more than one rewrite.",
    "Lately I spend most of my time in Rust and TypeScript, moving hot paths to WebAssembly and making interfaces that feel instant.",
    "Away from the keyboard you'll find me on a bouldering wall, tinkering with film cameras, or over-engineering my morning coffee.",
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat {
        value: "8+",
        label: "years shipping software",
    },
    Stat {
        value: "40+",
        label: "projects delivered",
    },
    Stat {
        value: "12",
        label: "engineers mentored",
    },
];

pub const PHONE: &str = "+1 (503) 555-0142";

pub struct ContactCard {
    pub title: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

pub const CONTACT_INFO: &[ContactCard] = &[
    ContactCard {
        title: "Email",
        value: OWNER_EMAIL,
        href: Some("mailto:hello@jordanavery.dev"),
    },
    ContactCard {
        title: "Phone",
        value: PHONE,
        href: Some("tel:+15035550142"),
    },
    ContactCard {
        title: "Location",
        value: LOCATION,
        href: None,
    },
];

pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        href: GITHUB_URL,
    },
    SocialLink {
        name: "LinkedIn",
        href: LINKEDIN_URL,
    },
    SocialLink {
        name: "Twitter",
        href: "https://twitter.com/jordanavery",
    },
];

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub category: SkillCategory,
}

impl Categorized for Skill {
    fn category(&self) -> SkillCategory {
        self.category
    }
}

const fn skill(name: &'static str, level: u8, category: SkillCategory) -> Skill {
    Skill {
        name,
        level,
        category,
    }
}

pub const SKILLS: &[Skill] = &[
    skill("Leptos", 85, SkillCategory::Frontend),
    skill("React", 80, SkillCategory::Frontend),
    skill("TypeScript", 85, SkillCategory::Frontend),
    skill("Tailwind CSS", 85, SkillCategory::Frontend),
    skill("WebAssembly", 75, SkillCategory::Frontend),
    skill("Rust", 90, SkillCategory::Backend),
    skill("Axum / Tokio", 85, SkillCategory::Backend),
    skill("Go", 70, SkillCategory::Backend),
    skill("Python", 75, SkillCategory::Backend),
    skill("PostgreSQL", 80, SkillCategory::Cloud),
    skill("AWS", 70, SkillCategory::Cloud),
    skill("Kubernetes", 65, SkillCategory::Cloud),
    skill("Redis", 70, SkillCategory::Cloud),
    skill("Git", 90, SkillCategory::Tools),
    skill("Docker", 80, SkillCategory::Tools),
    skill("Nix", 60, SkillCategory::Tools),
    skill("Grafana", 70, SkillCategory::Tools),
];

pub struct Role {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

pub const ROLES: &[Role] = &[
    Role {
        title: "Senior Software Engineer",
        company: "Northwind Labs",
        period: "2022 - Present",
        highlights: &[
            "Led the move of the pricing engine from Node to Rust, cutting p99 latency by 70%.",
            "Designed the event pipeline that now carries 2B messages a day.",
            "Run the internal Rust guild and its onboarding track.",
        ],
    },
    Role {
        title: "Software Engineer",
        company: "Brightline Studio",
        period: "2019 - 2022",
        highlights: &[
            "Built the collaborative editor used by 30k+ weekly users.",
            "Introduced end-to-end testing and halved release regressions.",
        ],
    },
    Role {
        title: "Junior Developer",
        company: "Cascade Digital",
        period: "2017 - 2019",
        highlights: &[
            "Shipped client sites and e-commerce integrations.",
            "Automated deploys for a dozen legacy PHP projects.",
        ],
    },
];

pub struct Project {
    pub name: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    pub full_description: &'static str,
    pub highlights: &'static [&'static str],
    pub tags: &'static [&'static str],
    pub source: Option<&'static str>,
    pub demo: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "Tidewatch",
        kind: "Full-Stack",
        description: "Real-time tide and swell dashboard streaming buoy data over WebSockets.",
        full_description: "Tidewatch pulls readings from a few hundred NOAA buoys, normalizes them in an Axum service and pushes deltas to a Leptos front end over WebSockets. Charts are rendered client side in WebAssembly so the page stays smooth on cheap phones at the beach.",
        highlights: &[
            "Sub-second updates from 300+ buoys",
            "Delta encoding cut socket traffic by 80%",
            "Works offline with the last known readings",
        ],
        tags: &["Rust", "Axum", "Leptos", "WebSockets"],
        source: Some("https://github.com/jordanavery/tidewatch"),
        demo: Some("https://tidewatch.jordanavery.dev"),
    },
    Project {
        name: "Ledgerly",
        kind: "Tooling",
        description: "Plain-text accounting CLI with a fast incremental parser and budget reports.",
        full_description: "Ledgerly reads ledger-style journals and keeps a parse cache keyed by file span, so editing one entry in a ten-year journal re-parses only that entry. Reports cover budgets, net worth over time and category drift.",
        highlights: &[
            "Incremental re-parse in under 5ms",
            "Budget and net worth reports",
            "Shell completions for every command",
        ],
        tags: &["Rust", "CLI", "Parsing"],
        source: Some("https://github.com/jordanavery/ledgerly"),
        demo: None,
    },
    Project {
        name: "Palette Forge",
        kind: "Frontend",
        description: "Accessible color palette generator that checks contrast as you design.",
        full_description: "Palette Forge generates palettes in OKLCH space and checks every foreground and background pair against WCAG contrast levels as you drag. Palettes export to CSS variables, Tailwind config or design tokens.",
        highlights: &[
            "Live WCAG AA and AAA checks",
            "Exports to CSS, Tailwind and tokens",
            "Used by 5k+ designers a month",
        ],
        tags: &["TypeScript", "React", "WCAG"],
        source: Some("https://github.com/jordanavery/palette-forge"),
        demo: Some("https://palette.jordanavery.dev"),
    },
    Project {
        name: "Trailhead",
        kind: "Mobile",
        description: "Offline-first hiking journal that syncs GPX tracks when you're back in range.",
        full_description: "Trailhead is a PWA that records GPX tracks and notes into SQLite in the browser, then syncs to a small Go service once a connection returns. Conflicts are resolved per entry, so two devices can edit the same trip.",
        highlights: &[
            "Fully usable without a signal",
            "Per-entry conflict resolution",
            "GPX import and export",
        ],
        tags: &["Go", "SQLite", "PWA"],
        source: None,
        demo: Some("https://trailhead.jordanavery.dev"),
    },
];
