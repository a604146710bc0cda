//! Content bundled into the binary: hero titles, skills, services, the
//! terminal script and the project catalogue.

use folio_shared::{
    typewriter::{CommandScript, TerminalCommand},
    Project,
};

use self::SkillLevel::{Beginner, Intermediate, Master};

/// Words rotated under the hero heading.
pub const HERO_TITLES: &[&str] = &["Developer.", "Designer."];

const PROJECTS_JSON: &str = include_str!("../data/projects.json");
const COMMANDS_JSON: &str = include_str!("../data/commands.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Master,
}

impl SkillLevel {
    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Master => "Master",
        }
    }

    /// Badge colours.
    pub fn badge_class(self) -> &'static str {
        match self {
            SkillLevel::Master => "bg-red-500/20 text-red-400 border-red-500/30",
            SkillLevel::Intermediate => "bg-yellow-500/20 text-yellow-400 border-yellow-500/30",
            SkillLevel::Beginner => "bg-green-500/20 text-green-400 border-green-500/30",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub icon: &'static str,
    pub name: &'static str,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

const fn skill(icon: &'static str, name: &'static str, level: SkillLevel) -> Skill {
    Skill {
        icon,
        name,
        level,
    }
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Languages",
        skills: &[
            skill("/Service/javascript.svg", "JavaScript", Master),
            skill("/Service/Typescript.svg", "TypeScript", Master),
        ],
    },
    SkillGroup {
        title: "Frontend",
        skills: &[
            skill("/Service/react.svg", "React", Master),
            skill("/Service/NextJs.svg", "Next.js", Master),
            skill("/Service/tailwind.svg", "TailwindCSS", Master),
            skill("/Service/bootstrap.svg", "Bootstrap", Master),
            skill("/Service/framer-motion.svg", "Framer Motion", Master),
        ],
    },
    SkillGroup {
        title: "Backend",
        skills: &[
            skill("/Service/node.svg", "Node.js", Master),
            skill("/Service/express.svg", "Express", Master),
            skill("/Service/mongoDB.svg", "MongoDB", Intermediate),
            skill("/Service/jwt.svg", "JWT", Master),
            skill("/Service/firebase.svg", "Firebase", Intermediate),
        ],
    },
    SkillGroup {
        title: "Tools",
        skills: &[
            skill("/Service/git.svg", "Git", Master),
            skill("/Service/github.svg", "GitHub", Master),
            skill("/Service/vscode.svg", "VS Code", Master),
            skill("/Service/zed.png", "Zed", Intermediate),
            skill("/Service/NPM.svg", "NPM", Master),
            skill("/Service/yarn.svg", "Yarn", Master),
            skill("/Service/Bun.svg", "Bun", Intermediate),
            skill("/Service/archlinux.svg", "Arch Linux", Intermediate),
        ],
    },
    SkillGroup {
        title: "Design",
        skills: &[
            skill("/Service/figma.svg", "Figma", Master),
            skill("/Service/Adobe_Photoshop.svg", "Photoshop", Intermediate),
            skill("/Service/gimp.svg", "GIMP", Beginner),
        ],
    },
    SkillGroup {
        title: "Deployment",
        skills: &[
            skill("/Service/vercel.svg", "Vercel", Master),
            skill("/Service/firebase.svg", "Firebase", Intermediate),
            skill("/Service/netlify.svg", "Netlify", Master),
            skill("/Service/surge.svg", "Surge", Master),
        ],
    },
];

/// Testimonial shown in the services marquee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Review {
    pub img: &'static str,
    pub name: &'static str,
    pub username: &'static str,
    pub body: &'static str,
}

pub const REVIEWS: &[Review] = &[
    Review {
        img: "/reviews/web.svg",
        name: "Web Development",
        username: "@web",
        body: "Responsive sites and single-page apps built with modern frameworks.",
    },
    Review {
        img: "/reviews/api.svg",
        name: "API Design",
        username: "@api",
        body: "REST endpoints with validation, authentication and clear error responses.",
    },
    Review {
        img: "/reviews/ui.svg",
        name: "UI Design",
        username: "@ui",
        body: "Interfaces designed in Figma and handed off as reusable components.",
    },
    Review {
        img: "/reviews/perf.svg",
        name: "Performance",
        username: "@perf",
        body: "Audits and fixes for load time, bundle size and runtime jank.",
    },
    Review {
        img: "/reviews/deploy.svg",
        name: "Deployment",
        username: "@deploy",
        body: "Continuous deployment to Vercel, Netlify or Firebase hosting.",
    },
    Review {
        img: "/reviews/care.svg",
        name: "Maintenance",
        username: "@care",
        body: "Dependency upgrades, bug fixes and small features on existing sites.",
    },
];

/// Split reviews into the two marquee rows; the first row gets the extra one.
pub fn review_rows() -> (&'static [Review], &'static [Review]) {
    REVIEWS.split_at(REVIEWS.len().div_ceil(2))
}

/// Bundled project catalogue for the projects page.
pub fn bundled_projects() -> Vec<Project> {
    serde_json::from_str(PROJECTS_JSON).unwrap_or_else(|err| {
        web_sys::console::error_1(&format!("Bundled projects are invalid: {err}").into());
        Vec::new()
    })
}

/// Script played by the hero terminal.
pub fn terminal_commands() -> Vec<TerminalCommand> {
    serde_json::from_str::<CommandScript>(COMMANDS_JSON)
        .map(|script| script.commands)
        .unwrap_or_else(|err| {
            web_sys::console::error_1(&format!("Bundled terminal script is invalid: {err}").into());
            Vec::new()
        })
}

#[cfg(test)]
mod tests {
    use folio_shared::{typewriter::CommandScript, Project};

    use super::{review_rows, COMMANDS_JSON, PROJECTS_JSON, REVIEWS};

    #[test]
    fn bundled_json_decodes() {
        let projects: Vec<Project> = serde_json::from_str(PROJECTS_JSON).expect("projects");
        assert!(!projects.is_empty());
        assert!(projects.iter().all(|project| !project.technologies.is_empty()));

        let script: CommandScript = serde_json::from_str(COMMANDS_JSON).expect("commands");
        assert!(script.commands.iter().any(|command| command.result.is_none()));
    }

    #[test]
    fn review_rows_cover_every_review() {
        let (first, second) = review_rows();
        assert_eq!(first.len() + second.len(), REVIEWS.len());
        assert!(first.len() >= second.len());
    }
}
