//! Portfolio commands: welcome, summary, contact, skills, whoami, neofetch, awards.

use crate::config::profile;
use crate::error::RegistryError;
use crate::output::Line;
use crate::registry::{Command, CommandRegistry};
use crate::result::ExecutionResult;

const NEOFETCH_LOGO: &str = r"
   ██████╗ ██████╗ ██████╗ ██╗   ██╗███████╗ █████╗ ██████╗ ██████╗
  ██╔════╝██╔═══██╗██╔══██╗╚██╗ ██╔╝╚══███╔╝██╔══██╗██╔══██╗██╔══██╗
  ██║     ██║   ██║██║  ██║ ╚████╔╝   ███╔╝ ███████║██████╔╝██║  ██║
  ██║     ██║   ██║██║  ██║  ╚██╔╝   ███╔╝  ██╔══██║██╔══██╗██║  ██║
  ╚██████╗╚██████╔╝██████╔╝   ██║   ███████╗██║  ██║██║  ██║██████╔╝
   ╚═════╝ ╚═════╝ ╚═════╝    ╚═╝   ╚══════╝╚═╝  ╚═╝╚═╝  ╚═╝╚═════╝";

fn skill_rows() -> impl Iterator<Item = Line> {
    profile::SKILLS
        .iter()
        .map(|(category, techs)| Line::field(*category, *techs))
}

// ---------------------------------------------------------------------------
// welcome
// ---------------------------------------------------------------------------

struct WelcomeCmd;
impl Command for WelcomeCmd {
    fn name(&self) -> &str {
        "welcome"
    }
    fn description(&self) -> &str {
        "Display the welcome message."
    }
    fn execute(&self, _args: &[String]) -> ExecutionResult {
        ExecutionResult::output(vec![
            Line::heading("[ 💻 Initializing Terminal Portfolio ]"),
            Line::success(format!(
                "$ system_info: Hostname: {} | User: Guest",
                profile::HOSTNAME
            )),
            Line::Empty,
            Line::text(format!(
                "Authentication success. Welcome to the {} CLI.",
                profile::HOSTNAME
            )),
            Line::text(format!(
                "I'm {}, a developer specializing in modern web stack.",
                profile::NAME
            )),
            Line::info("* Status: Awaiting command input..."),
            Line::Empty,
            Line::text("Type 'help' for command directory, or 'summary' to begin."),
        ])
    }
}

// ---------------------------------------------------------------------------
// summary
// ---------------------------------------------------------------------------

struct SummaryCmd;
impl Command for SummaryCmd {
    fn name(&self) -> &str {
        "summary"
    }
    fn description(&self) -> &str {
        "A brief overview of my professional background."
    }
    fn execute(&self, _args: &[String]) -> ExecutionResult {
        ExecutionResult::output(vec![
            Line::heading(profile::TITLE),
            Line::text(format!(
                "Hi, I'm {}, a passionate developer specializing in modern web technologies \
                 like Next.js, React, and TypeScript. Now based in {}.",
                profile::NAME,
                profile::LOCATION
            )),
            Line::Empty,
            Line::text("Use 'skills' to see my tech stack or 'contact' for my details."),
        ])
    }
}

// ---------------------------------------------------------------------------
// contact
// ---------------------------------------------------------------------------

struct ContactCmd;
impl Command for ContactCmd {
    fn name(&self) -> &str {
        "contact"
    }
    fn description(&self) -> &str {
        "Displays my contact information."
    }
    fn execute(&self, _args: &[String]) -> ExecutionResult {
        ExecutionResult::output(vec![
            Line::field("📧 Email", profile::EMAIL),
            Line::link("🐙 GitHub", profile::GITHUB_URL),
            Line::link("🔗 LinkedIn", profile::LINKEDIN_URL),
        ])
    }
}

// ---------------------------------------------------------------------------
// skills
// ---------------------------------------------------------------------------

struct SkillsCmd;
impl Command for SkillsCmd {
    fn name(&self) -> &str {
        "skills"
    }
    fn description(&self) -> &str {
        "Displays my technical expertise (tech stack)."
    }
    fn execute(&self, _args: &[String]) -> ExecutionResult {
        let mut lines = vec![Line::heading("My Tech Stack 💻:")];
        lines.extend(skill_rows());
        ExecutionResult::output(lines)
    }
}

// ---------------------------------------------------------------------------
// whoami
// ---------------------------------------------------------------------------

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Display current user information."
    }
    fn execute(&self, _args: &[String]) -> ExecutionResult {
        let handle = format!("@{}", profile::HANDLE);
        let mut lines = vec![
            Line::heading(format!("👨‍💻 {}", profile::NAME)),
            Line::link(handle.as_str(), profile::GITHUB_URL),
            Line::Empty,
            Line::field("👤 User", profile::NAME),
            Line::field("💼 Role", profile::TITLE),
            Line::field("📍 Location", profile::LOCATION),
            Line::field("✉️ Email", profile::EMAIL),
            Line::field("🐙 GitHub", handle.as_str()),
            Line::Empty,
            Line::success("● Currently online and building cool stuff 🚀"),
            Line::Empty,
            Line::heading("💻 Tech Stack"),
        ];
        lines.extend(skill_rows());
        lines.push(Line::Empty);
        lines.push(Line::info("💻 Open to opportunities  🌏 Remote friendly"));
        ExecutionResult::output(lines)
    }
}

// ---------------------------------------------------------------------------
// neofetch
// ---------------------------------------------------------------------------

struct NeofetchCmd;
impl Command for NeofetchCmd {
    fn name(&self) -> &str {
        "neofetch"
    }
    fn description(&self) -> &str {
        "Display system information in neofetch style."
    }
    fn execute(&self, _args: &[String]) -> ExecutionResult {
        ExecutionResult::output(vec![
            Line::ascii(NEOFETCH_LOGO),
            Line::Empty,
            Line::field("Name", profile::NAME),
            Line::field("Title", profile::TITLE),
            Line::field("Location", profile::LOCATION),
            Line::field("Email", profile::EMAIL),
            Line::field("GitHub", profile::HANDLE),
            Line::field("Frontend", "React, Next.js, Tailwind CSS, etc..."),
            Line::field("Backend", "PHP, Go, Hono, Node.js, Express"),
            Line::field("Database", "PostgreSQL, MySQL, DynamoDB"),
            Line::field("Tools", "Git, Docker, VS Code, aerospace"),
            Line::field("Terminal", "Codyzard Terminal v1.0, Warp, WezTerm"),
        ])
    }
}

// ---------------------------------------------------------------------------
// awards
// ---------------------------------------------------------------------------

struct AwardsCmd;
impl Command for AwardsCmd {
    fn name(&self) -> &str {
        "awards"
    }
    fn description(&self) -> &str {
        "View my awards and achievements."
    }
    fn execute(&self, _args: &[String]) -> ExecutionResult {
        ExecutionResult::output(vec![
            Line::heading("🏆 Awards & Achievements"),
            Line::Empty,
            Line::success("🎖️ PR TIMES Culture Award"),
            Line::text("PR TIMES, Inc."),
            Line::text(
                "This award celebrates individuals who contribute positively to PR TIMES \
                 culture and values.",
            ),
            Line::link("🔗 View Award Page", profile::AWARD_URL),
            Line::Empty,
            Line::info("💡 More achievements coming soon..."),
        ])
    }
}

pub(super) fn register_profile_commands(reg: &mut CommandRegistry) -> Result<(), RegistryError> {
    reg.register_bulk([
        Box::new(WelcomeCmd) as Box<dyn Command>,
        Box::new(SummaryCmd),
        Box::new(ContactCmd),
        Box::new(SkillsCmd),
        Box::new(WhoamiCmd),
        Box::new(NeofetchCmd),
        Box::new(AwardsCmd),
    ])
}
