//! Landing page copy
//!
//! Kept as data so the page components stay small and the in-page links can
//! be checked against the sections that actually render.

/// Anchor targets rendered by the landing page
pub mod section {
    pub const FEATURES: &str = "features";
    pub const UPCOMING: &str = "upcoming";
    pub const ABOUT: &str = "about";
    pub const WAITLIST: &str = "waitlist";
    pub const FAQ: &str = "faq";

    pub const ALL: [&str; 5] = [FEATURES, UPCOMING, ABOUT, WAITLIST, FAQ];
}

pub const BRAND: &str = "Rudys.AI";
pub const LOGO_PATH: &str = "/rudys-logo-new.png";
pub const CONTACT_EMAIL: &str = "hello@rudys.ai";
pub const COPYRIGHT: &str = "© 2025 Rudys.AI. All rights reserved.";
pub const CTA_LABEL: &str = "Request Early Access";

/// Where the nav points signed-in users
pub const APP_HOME: &str = "/campaigns";
pub const PRICING_PATH: &str = "/pricing";

/// Paths the frontend router answers
pub const ROUTES: [&str; 3] = ["/", PRICING_PATH, APP_HOME];

/// A route that exists ahead of the product screen it will host
#[derive(Clone, Copy, Debug)]
pub struct Placeholder {
    pub path: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const PRICING_PAGE: Placeholder = Placeholder {
    path: PRICING_PATH,
    title: "Pricing",
    body: "Plans are announced to the waiting list first. Request early access to hear about them.",
};

pub const APP_PAGE: Placeholder = Placeholder {
    path: APP_HOME,
    title: "Campaigns",
    body: "The campaign workspace opens to early-access users first.",
};

/// A link to a section of this page, or to another route
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Link {
    Section(&'static str),
    Route(&'static str),
}

impl Link {
    pub fn href(self) -> String {
        match self {
            Self::Section(id) => format!("#{id}"),
            Self::Route(path) => path.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct NavItem {
    pub label: &'static str,
    pub target: Link,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Features", target: Link::Section(section::FEATURES) },
    NavItem { label: "Pricing", target: Link::Route(PRICING_PATH) },
    NavItem { label: "Roadmap", target: Link::Section(section::UPCOMING) },
    NavItem { label: "About", target: Link::Section(section::ABOUT) },
    NavItem { label: "FAQ", target: Link::Section(section::FAQ) },
];

pub const FOOTER_ITEMS: &[NavItem] = &[
    NavItem { label: "Features", target: Link::Section(section::FEATURES) },
    NavItem { label: "Roadmap", target: Link::Section(section::UPCOMING) },
    NavItem { label: "About", target: Link::Section(section::ABOUT) },
    NavItem { label: CTA_LABEL, target: Link::Section(section::WAITLIST) },
    NavItem { label: "FAQ", target: Link::Section(section::FAQ) },
];

pub struct Hero {
    pub title: &'static str,
    pub pitch: &'static str,
    pub video_caption: &'static str,
}

pub const HERO: Hero = Hero {
    title: "Create and Manage Google Search Campaigns in Languages You Don't Speak",
    pitch: "Rudy scales your Google Search campaigns internationally by doing local keyword \
            research, selecting high-converting terms, and launching campaigns in just a few clicks.",
    video_caption: "Video Demo – Rudy in Action",
};

pub const FEATURES_TITLE: &str = "Meet Rudy – your personal Google Ads expert.";
pub const FEATURES_INTRO: &str = "Rudy is different. He creates and manages Google Search campaigns \
                                  the way we believe a true specialist should.";
pub const RUDY_PORTRAIT: &str = "/lovable-uploads/806ab7be-a628-41f6-b9f1-36cef8838668.png";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Message,
    Search,
    Target,
}

impl Icon {
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Message => "💬",
            Self::Search => "🔍",
            Self::Target => "🎯",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub body: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: Icon::Message,
        title: "Built Like It's His Own Budget",
        body: "Rudy starts with a tightly focused campaign, just like he would if it were his own \
               money. If it proves efficient, only then does he scale.",
    },
    Feature {
        icon: Icon::Search,
        title: "Campaigns in Any Language",
        body: "Rudy does local keyword research in the native language and suggests only relevant \
               terms with search volume. He writes responsive ads in the local style and your tone \
               of voice — and shows you exactly what's being said.",
    },
    Feature {
        icon: Icon::Target,
        title: "Soon: Fully Local Management",
        body: "Rudy will soon manage your local campaigns too. He'll review search terms and \
               exclude anything irrelevant — just like a senior specialist would.",
    },
];

/// A text block paired with a demo video placeholder
#[derive(Clone, Copy, Debug)]
pub struct Example {
    pub title: &'static str,
    pub body: &'static str,
    pub video_caption: &'static str,
    /// Render the video on the left on wide screens
    pub video_first: bool,
}

pub const EXAMPLES_TITLE: &str = "Practical Examples";

pub const EXAMPLES: &[Example] = &[
    Example {
        title: "Running Local Keyword Research with Rudy",
        body: "In this video, Rudy performs keyword research in German and translates the results \
               into English. This allows you to confidently launch a high-performing Google Search \
               campaign — even in markets where you don't speak the language.",
        video_caption: "Live Demo – Keyword Research with Rudys.AI",
        video_first: false,
    },
    Example {
        title: "Review and Improve Ads with Simple Prompts",
        body: "If you've used Google Ads Editor, Rudy will feel familiar. He shows you the \
               generated ads in a clear, editable format — and even lets you translate them to \
               English so you understand what's written in any language. Want to tweak the tone or \
               focus? Just give Rudy a prompt, and he'll adjust the ads instantly.",
        video_caption: "Live Demo – Google Search Campaign Setup with Rudys.AI",
        video_first: true,
    },
];

#[derive(Clone, Copy, Debug)]
pub struct RoadmapItem {
    pub title: &'static str,
    pub body: &'static str,
}

pub const ROADMAP_TITLE: &str = "Upcoming Features";
pub const ROADMAP_INTRO: &str = "Rudy is evolving fast. Here's what's next:";

pub const ROADMAP: &[RoadmapItem] = &[
    RoadmapItem {
        title: "Smart Keyword Expansion",
        body: "Rudy analyzes your top-performing keywords and search terms to find out what \
               works. Based on that, he runs additional research to expand your account with new \
               high-converting keywords.",
    },
    RoadmapItem {
        title: "Search Term Analysis",
        body: "Rudy reviews your search terms to exclude irrelevant traffic and add valuable new \
               ones to your account.",
    },
    RoadmapItem {
        title: "Full Campaign Optimization & Management",
        body: "Rudy will proactively suggest ways to improve your campaigns for better results — \
               and will soon be able to apply those changes directly. Imagine managing your entire \
               account through a conversation.",
    },
];

pub struct About {
    pub title: &'static str,
    pub body: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
}

pub const ABOUT: About = About {
    title: "Built for marketers. Powered by intelligence.",
    body: "Rudys.AI was founded by a senior digital marketer and an AI engineer who shared one \
           goal: make Google Ads radically easier and more effective. We believe in smart \
           automation that puts humans in control — so you can spend less time managing ads and \
           more time growing your business.",
    image: "/team-google-ads.jpg",
    image_alt: "Our team working on Google Ads",
};

pub const WAITLIST_TITLE: &str = "Request Early Access";
pub const WAITLIST_INTRO: &str = "Rudy is currently in beta. Request early access to be among the \
                                  first to experience intelligent Google Ads management.";
pub const WAITLIST_FOOTNOTE: &str = "To test Rudy across different scenarios, we're selecting a mix \
     of company types and account sizes. Your estimated ad spend helps us build this balanced beta \
     group. Access may vary based on this selection.";

#[derive(Clone, Copy, Debug)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_TITLE: &str = "Frequently Asked Questions";

pub const FAQS: &[Faq] = &[
    Faq {
        question: "How is Rudy different from other keyword research tools?",
        answer: "Rudy won't overwhelm you with a massive list of keywords like many traditional, \
                 SEO-focused tools do. Instead, he focuses on keywords with real search volume and \
                 strong potential to drive conversions for your business.",
    },
    Faq {
        question: "Can I build campaigns directly after keyword research?",
        answer: "Yes. Once your keyword list is ready, Rudy guides you through building a complete \
                 Search campaign — no separate tools required.",
    },
    Faq {
        question: "Do I need to know how to write ads?",
        answer: "Not at all. Rudy writes ads based on your website, brand voice, and USPs. You can \
                 review and edit anything by chatting with him.",
    },
    Faq {
        question: "How long does it take to set up a campaign?",
        answer: "This can be done in just 5 minutes, even in languages where you have no idea \
                 what you're actually doing.",
    },
    Faq {
        question: "Is my data secure?",
        answer: "Absolutely. We use secure Google Ads APIs and adhere to strict privacy standards.",
    },
];

/// Single-open, collapsible accordion
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub const fn is_open(self, index: usize) -> bool {
        matches!(self.open, Some(i) if i == index)
    }

    /// Open `index`, closing any other item; toggling the open item collapses it
    pub const fn toggle(&mut self, index: usize) {
        self.open = if self.is_open(index) { None } else { Some(index) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_point_at_rendered_sections() {
        for item in NAV_ITEMS.iter().chain(FOOTER_ITEMS) {
            if let Link::Section(id) = item.target {
                assert!(section::ALL.contains(&id), "{} links to missing #{id}", item.label);
            }
        }
    }

    #[test]
    fn test_route_links_have_routes() {
        for item in NAV_ITEMS.iter().chain(FOOTER_ITEMS) {
            if let Link::Route(path) = item.target {
                assert!(ROUTES.contains(&path), "{} links to unrouted {path}", item.label);
            }
        }
        assert!(ROUTES.contains(&APP_HOME));
        for page in [PRICING_PAGE, APP_PAGE] {
            assert!(ROUTES.contains(&page.path), "{} has no route", page.title);
        }
    }

    #[test]
    fn test_href() {
        assert_eq!(Link::Section(section::FAQ).href(), "#faq");
        assert_eq!(Link::Route(PRICING_PATH).href(), "/pricing");
    }

    #[test]
    fn test_page_inventory() {
        assert_eq!(FEATURES.len(), 3);
        assert_eq!(EXAMPLES.len(), 2);
        assert_eq!(ROADMAP.len(), 3);
        assert_eq!(FAQS.len(), 5);
    }

    #[test]
    fn test_accordion_single_collapsible() {
        let mut accordion = Accordion::default();
        assert!(!accordion.is_open(0));

        accordion.toggle(1);
        assert!(accordion.is_open(1));

        accordion.toggle(3);
        assert!(accordion.is_open(3));
        assert!(!accordion.is_open(1));

        accordion.toggle(3);
        assert_eq!(accordion, Accordion::default());
    }
}
