use serde::{Deserialize, Serialize};

/// The whole portfolio document served by the read endpoints. One instance
/// lives in `AppState` behind a mutex; it is seeded at startup and mutated
/// in place by the protected write endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub profile: Profile,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub social_links: SocialLinks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub about: String,
    pub interests: String,
    pub quick_facts: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLinks {
    pub linkedin: String,
    pub github: String,
    pub twitter: String,
}

impl Portfolio {
    /// Placeholder content shown until an authenticated user edits it.
    pub fn seed() -> Self {
        Self {
            profile: Profile {
                name: "John Doe".into(),
                title: "Full Stack Developer & UI/UX Designer".into(),
                bio: "I create beautiful, functional, and user-centered digital experiences that bring ideas to life.".into(),
                about: "I'm a passionate developer with over 5 years of experience creating digital solutions. I love turning complex problems into simple, beautiful designs.".into(),
                interests: "When I'm not coding, you'll find me exploring new technologies, contributing to open-source projects, or enjoying outdoor activities.".into(),
                quick_facts: vec![
                    "🎓 Computer Science Graduate".into(),
                    "💼 5+ Years Experience".into(),
                    "🌍 Remote Work Enthusiast".into(),
                    "🚀 Always Learning".into(),
                ],
            },
            skills: vec![
                "React".into(), "JavaScript".into(), "Node.js".into(), "Python".into(),
                "Tailwind CSS".into(), "TypeScript".into(), "MongoDB".into(), "AWS".into(),
                "Git".into(), "Docker".into(), "Figma".into(), "Adobe XD".into(),
            ],
            projects: vec![
                Project {
                    id: 1,
                    title: "E-Commerce Platform".into(),
                    description: "Full-stack e-commerce solution with React, Node.js, and Stripe integration.".into(),
                    tech: vec!["React".into(), "Node.js".into(), "MongoDB".into()],
                },
                Project {
                    id: 2,
                    title: "Task Management App".into(),
                    description: "Collaborative task management tool with real-time updates and team features.".into(),
                    tech: vec!["React".into(), "Firebase".into(), "Tailwind".into()],
                },
                Project {
                    id: 3,
                    title: "Weather Dashboard".into(),
                    description: "Beautiful weather app with location-based forecasts and interactive maps.".into(),
                    tech: vec!["JavaScript".into(), "OpenWeather API".into(), "Chart.js".into()],
                },
            ],
            social_links: SocialLinks {
                linkedin: "#".into(),
                github: "#".into(),
                twitter: "#".into(),
            },
        }
    }

    pub fn project(&self, id: u64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn project_mut(&mut self, id: u64) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id == id)
    }

    pub fn remove_project(&mut self, id: u64) -> Option<Project> {
        let idx = self.projects.iter().position(|p| p.id == id)?;
        Some(self.projects.remove(idx))
    }
}
