//! Static page copy for the terminal renderer.

pub const HOME_TITLE: &str = "Research-driven, data-backed decision making";
pub const HOME_SUBTITLE: &str =
    "We help organizations turn evidence into strategy for social impact.";

pub const ABOUT_TITLE: &str = "About Us";
pub const ABOUT_SUBTITLE: &str =
    "An independent research and consultancy practice working across sectors.";

pub const SERVICES_TITLE: &str = "Services";
pub const SERVICES_SUBTITLE: &str =
    "Research design, impact assessment, and strategic consulting.";

pub const PROJECTS_TITLE: &str = "Our Projects";
pub const PROJECTS_SUBTITLE: &str =
    "Explore our portfolio of impactful research and consulting engagements";

pub const PARTNERS_TITLE: &str = "Partners";
pub const PARTNERS_SUBTITLE: &str = "Organizations we have worked with.";

pub const TEAM_TITLE: &str = "Team";
pub const TEAM_SUBTITLE: &str = "The people behind the research.";

pub const CAREERS_TITLE: &str = "Careers";
pub const CAREERS_SUBTITLE: &str =
    "Join our team and contribute to research-driven, data-backed decision making.";

pub const BLOGS_TITLE: &str = "Blogs & Articles";
pub const BLOGS_SUBTITLE: &str = "Insights, updates, and research findings from the team.";

pub const CONTACT_TITLE: &str = "Contact Us";
pub const CONTACT_SUBTITLE: &str =
    "Let's discuss how we can help drive your organization forward";

pub const CONTACT_SUCCESS: &str = "Message sent successfully!";
pub const CAREERS_SUCCESS: &str =
    "Application submitted successfully! We will get back to you soon.";
pub const CAREERS_FAILURE: &str = "Submission failed. Please try again.";
