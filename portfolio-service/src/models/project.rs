use serde::Serialize;

/// A portfolio entry. The catalog is compiled in and never changes at runtime.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
    pub github: &'static str,
    pub image: &'static str,
}

static PROJECTS: [ProjectRecord; 3] = [
    ProjectRecord {
        id: "p1",
        title: "Interactive Data Dashboard",
        description: "A responsive dashboard with real-time charts and dark mode.",
        tags: &["React", "Tailwind", "Charts"],
        link: "https://example.com/dashboard",
        github: "https://github.com/example/dashboard",
        image: "https://images.unsplash.com/photo-1556157382-97eda2d62296?q=80&w=1200&auto=format&fit=crop",
    },
    ProjectRecord {
        id: "p2",
        title: "Creative Portfolio Site",
        description: "Smooth scroll sections, parallax hero, and animated cards.",
        tags: &["React", "UX", "Animation"],
        link: "https://example.com/portfolio",
        github: "https://github.com/example/portfolio",
        image: "https://images.unsplash.com/photo-1518779578993-ec3579fee39f?q=80&w=1200&auto=format&fit=crop",
    },
    ProjectRecord {
        id: "p3",
        title: "API Microservice Boilerplate",
        description: "Production-ready FastAPI service with auth and testing.",
        tags: &["FastAPI", "Python", "DevOps"],
        link: "https://example.com/api",
        github: "https://github.com/example/fastapi",
        image: "https://images.unsplash.com/photo-1518779578993-ec3579fee39f?q=80&w=1200&auto=format&fit=crop",
    },
];

pub fn catalog() -> &'static [ProjectRecord] {
    &PROJECTS
}
