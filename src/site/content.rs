// Static portfolio content
// Every section of the home page is driven by these arrays

pub const AUTHOR: &str = "Deborah George";

/// Navigation entries as (label, section id)
pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("Home", "home"),
    ("About", "about"),
    ("Portfolio", "portfolio"),
    ("Services", "services"),
    ("Testimonials", "testimonials"),
    ("Contact", "contact"),
];

/// Footer links as (label, section id)
pub const FOOTER_SECTIONS: &[(&str, &str)] = &[
    ("About", "about"),
    ("Portfolio", "portfolio"),
    ("Services", "services"),
    ("Contact", "contact"),
];

pub struct Hero {
    pub kicker: &'static str,
    pub headline: &'static str,
    pub lede: &'static str,
    pub badges: &'static [&'static str],
    pub highlights: &'static [&'static str],
}

pub const HERO: Hero = Hero {
    kicker: "Writer • Storyteller • Content Strategist",
    headline: "Words that win hearts—and business.",
    lede: "I craft clear, compelling narratives for brands and publications. From long-form features to conversion-focused web copy, my writing blends voice, strategy, and research.",
    badges: &[
        "7+ years professional writing",
        "EN (native), basic ES",
        "Based in India • Remote friendly",
    ],
    highlights: &[
        "Specialties: Tech, Health, Lifestyle, B2B SaaS",
        "Published in: Medium, Substack, client blogs",
        "Formats: Features, Case Studies, Web Copy, Email",
    ],
};

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm Deborah George, a writer who blends meticulous research with a conversational voice. My north star is clarity: making complex ideas simple without dumbing them down. I partner with startups, agencies, and editors to shape words that move readers to feel—and act.",
    "Beyond the screen, I’m fueled by good coffee, marginalia in paperbacks, and long walks that untangle tricky paragraphs.",
];

pub const SKILLS: &[&str] = &[
    "AP Style",
    "SEO",
    "Interviewing",
    "Content Strategy",
    "Brand Voice",
    "Editing",
    "UX Writing",
];

pub const QUICK_FACTS: &[&str] = &[
    "100+ articles and case studies delivered",
    "Worked with 30+ brands across 5 countries",
    "Turnaround: 48–72 hrs for short-form, 7–10 days for long-form",
    "Tools: Notion, Google Docs, Figma, Grammarly",
];

pub struct Project {
    pub title: &'static str,
    pub blurb: &'static str,
    pub tags: &'static [&'static str],
    pub link: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Feature: The Calm Company Playbook",
        blurb: "A 2,400-word editorial exploring sustainable growth and team culture for bootstrapped founders.",
        tags: &["Feature", "Business", "Editorial"],
        link: Some("#"),
    },
    Project {
        title: "Case Study: From Leads to Loyalty",
        blurb: "How a D2C brand lifted LTV by 36% with lifecycle emails. Structured interviews + data-led narrative.",
        tags: &["Case Study", "Email", "D2C"],
        link: Some("#"),
    },
    Project {
        title: "SEO Article: Zero-Trust 101",
        blurb: "Explained a complex security model with simple metaphors and diagrams. Ranked top-5 for primary keyword.",
        tags: &["SEO", "Tech", "Explainer"],
        link: Some("#"),
    },
    Project {
        title: "Web Copy: Health Clinic Rebrand",
        blurb: "Voice-of-customer research to reframe services around outcomes. Result: +28% form submissions.",
        tags: &["Copywriting", "Health", "CRO"],
        link: Some("#"),
    },
    Project {
        title: "Newsletter: The Sunday Edit",
        blurb: "A weekly curation on creativity and craft. 38% avg open rate across 10k+ subscribers.",
        tags: &["Newsletter", "Curation", "Editorial"],
        link: Some("#"),
    },
    Project {
        title: "Thought Leadership: AI and Attention",
        blurb: "Balanced, researched POV on AI writing tools and the future of editorial quality.",
        tags: &["Thought Leadership", "AI", "Opinion"],
        link: Some("#"),
    },
];

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub bullets: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Long‑form Articles",
        description: "1,500–3,000+ words. Interviews, research, and narrative structure that earns attention.",
        bullets: &["Topic discovery", "Expert interviews", "SEO metadata"],
    },
    Service {
        title: "Case Studies",
        description: "Customer stories that quantify outcomes and establish authority.",
        bullets: &["Customer outreach", "Story arc", "Design handoff"],
    },
    Service {
        title: "Web & Email Copy",
        description: "Clear, on‑brand copy for sites and lifecycle campaigns that convert.",
        bullets: &["Voice of customer", "Wireframe-ready", "A/B ideas"],
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Deborah captured our voice perfectly and turned complex research into engaging copy.",
        name: "Priya S.",
        role: "Head of Marketing, SaaS",
    },
    Testimonial {
        quote: "Fast, thoughtful, and on‑brief. Our case studies finally tell the real story.",
        name: "Alex M.",
        role: "Founder, D2C",
    },
    Testimonial {
        quote: "Editorial rigor with a friendly process. A joy to collaborate with.",
        name: "Rahul K.",
        role: "Managing Editor",
    },
];

/// Contact form fields as (name, placeholder, input type, required)
pub const CONTACT_FIELDS: &[(&str, &str, &str, bool)] = &[
    ("name", "Your name", "text", true),
    ("email", "Email", "email", true),
    ("project", "What do you need written?", "text", false),
    ("budget", "Budget (USD)", "text", false),
    ("timeline", "Timeline", "text", false),
    ("website", "Your website (optional)", "url", false),
];

pub const MESSAGE_PLACEHOLDER: &str =
    "Tell me about your goals, audience, and any examples you like.";

/// Availability notes as (label, text)
pub const AVAILABILITY: &[(&str, &str)] = &[
    ("Availability", "Booking new projects for September–October 2025."),
    (
        "Rates",
        "Flat project fees with clear milestones. Hourly available for editing/consulting.",
    ),
    (
        "Process",
        "Discovery → Outline → Draft → Revisions → Final delivery. Always on time.",
    ),
];

/// Contact details as (label, text, optional link)
pub const CONTACT_DETAILS: &[(&str, &str, Option<&str>)] = &[
    ("Phone", "+91 • provided upon request", None),
    ("Location", "India • Remote worldwide", None),
    ("LinkedIn", "LinkedIn", Some("#")),
    ("Twitter", "Twitter", Some("#")),
];
