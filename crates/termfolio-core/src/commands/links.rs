//! External link commands: github, linkedin, blog, resume.
//!
//! Each returns a status line and asks the display to open the URL.

use crate::config::profile;
use crate::error::RegistryError;
use crate::registry::{Command, CommandRegistry};
use crate::result::{ExecutionResult, SpecialAction};

/// Opens a fixed URL in a new tab.
struct LinkCmd {
    name: &'static str,
    description: &'static str,
    /// Human-readable target, e.g. "GitHub profile"
    resource: &'static str,
    url: &'static str,
}

impl Command for LinkCmd {
    fn name(&self) -> &str {
        self.name
    }
    fn description(&self) -> &str {
        self.description
    }
    fn execute(&self, _args: &[String]) -> ExecutionResult {
        ExecutionResult::text(format!("Opening {} in a new tab...", self.resource))
            .with_action(SpecialAction::OpenUrl(self.url.to_string()))
    }
}

const LINKS: [LinkCmd; 4] = [
    LinkCmd {
        name: "github",
        description: "Opens my GitHub profile in a new tab.",
        resource: "GitHub profile",
        url: profile::GITHUB_URL,
    },
    LinkCmd {
        name: "linkedin",
        description: "Opens my LinkedIn profile in a new tab.",
        resource: "LinkedIn profile",
        url: profile::LINKEDIN_URL,
    },
    LinkCmd {
        name: "blog",
        description: "Opens my development blog in a new tab.",
        resource: "blog",
        url: profile::BLOG_URL,
    },
    LinkCmd {
        name: "resume",
        description: "Opens my professional Resume in a new browser tab.",
        resource: "Resume",
        url: profile::RESUME_URL,
    },
];

pub(super) fn register_link_commands(reg: &mut CommandRegistry) -> Result<(), RegistryError> {
    reg.register_bulk(LINKS.map(|link| Box::new(link) as Box<dyn Command>))
}
