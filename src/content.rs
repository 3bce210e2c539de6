//! Fixed copy for the informational pages.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Assistant,
    LostAndFound,
    Services,
    About,
    ComingSoon,
}

impl Page {
    pub const NAVIGATION: [Page; 4] = [Page::Assistant, Page::LostAndFound, Page::Services, Page::About];

    pub fn label(self) -> &'static str {
        match self {
            Page::Assistant => "Assistant",
            Page::LostAndFound => "Lost & Found",
            Page::Services => "Services",
            Page::About => "About",
            Page::ComingSoon => "Coming Soon",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Availability {
    Open,
    ComingSoon,
}

impl Availability {
    pub fn label(self) -> &'static str {
        match self {
            Availability::Open => "Access",
            Availability::ComingSoon => "Coming Soon",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceCard {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub target: Page,
    pub accent: &'static str,
    pub availability: Availability,
}

pub const SERVICES: &[ServiceCard] = &[
    ServiceCard {
        title: "Campus Assistant",
        description: "Get instant answers to your questions about campus facilities, events, and locations.",
        icon: "bot",
        target: Page::Assistant,
        accent: "blue",
        availability: Availability::Open,
    },
    ServiceCard {
        title: "Lost & Found",
        description: "Report lost items or items you've found to help reunite people with their belongings.",
        icon: "search",
        target: Page::LostAndFound,
        accent: "indigo",
        availability: Availability::Open,
    },
    ServiceCard {
        title: "Campus Map",
        description: "Interactive map with real-time navigation to help you find your way around campus.",
        icon: "map-pin",
        target: Page::ComingSoon,
        accent: "teal",
        availability: Availability::ComingSoon,
    },
    ServiceCard {
        title: "Event Calendar",
        description: "Stay updated with all campus events, activities, and important dates.",
        icon: "calendar",
        target: Page::ComingSoon,
        accent: "purple",
        availability: Availability::ComingSoon,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

pub const TEAM_MEMBERS: &[TeamMember] = &[TeamMember {
    name: "BahaEddine Ellouze",
    role: "Project Lead",
    bio: "Software Engineering Student",
}];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub name: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        name: "AI-Powered Assistance",
        description: "Natural language processing to answer campus questions",
    },
    Feature {
        name: "Interactive Maps",
        description: "Real-time navigation and location services",
    },
    Feature {
        name: "Lost & Found System",
        description: "Digital platform to report and recover lost items",
    },
    Feature {
        name: "Event Management",
        description: "Comprehensive calendar of campus activities",
    },
    Feature {
        name: "Mobile Friendly",
        description: "Access services from any device, anywhere",
    },
    Feature {
        name: "Privacy Focused",
        description: "Secure handling of all user information",
    },
];
