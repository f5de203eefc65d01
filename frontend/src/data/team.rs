#[derive(Clone, Debug, PartialEq)]
pub struct Social {
    pub github: &'static str,
    pub linkedin: &'static str,
    pub instagram: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stats {
    pub experience: &'static str,
    pub projects: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Person {
    pub name: &'static str,
    pub nickname: &'static str,
    pub description: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub full_image: &'static str,
    pub skills: &'static [&'static str],
    pub social: Social,
    pub bio: &'static str,
    pub stats: Option<Stats>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoleConfig {
    pub icon: &'static str,
    pub level: &'static str,
    pub color: &'static str,
}

const FRONTEND: RoleConfig = RoleConfig {
    icon: "</>",
    level: "Mid",
    color: "var(--secondary-color)",
};

const FULLSTACK: RoleConfig = RoleConfig {
    icon: "{ }",
    level: "Senior",
    color: "var(--primary-cyan)",
};

const DESIGN: RoleConfig = RoleConfig {
    icon: "◐",
    level: "Expert",
    color: "var(--accent-color)",
};

/// Unknown roles fall back to the frontend configuration.
pub fn role_config(role: &str) -> RoleConfig {
    match role.to_lowercase().as_str() {
        "fullstack" => FULLSTACK,
        "ux/ui" | "designer" => DESIGN,
        _ => FRONTEND,
    }
}

pub const DEFAULT_BIO: &str =
    "Profesional apasionado por crear experiencias digitales excepcionales.";
pub const DEFAULT_STATS: Stats = Stats {
    experience: "1+",
    projects: "1+",
};

impl Person {
    pub fn bio_or_default(&self) -> &'static str {
        if self.bio.trim().is_empty() {
            DEFAULT_BIO
        } else {
            self.bio
        }
    }

    pub fn stats_or_default(&self) -> Stats {
        self.stats.clone().unwrap_or(DEFAULT_STATS)
    }

    pub fn role_config(&self) -> RoleConfig {
        role_config(self.role)
    }
}

pub static PEOPLE: &[Person] = &[
    Person {
        name: "Tomás Cejas",
        nickname: "Toto",
        description: "Fullstack Developer",
        role: "Fullstack",
        image: "/team/ROMA.png",
        full_image: "/team/ROMA.png",
        skills: &["Node.js", "Docker", "MySQL", "React"],
        social: Social {
            github: "https://github.com/tomascejas",
            linkedin: "https://linkedin.com/in/tomascejas",
            instagram: "https://instagram.com/tomascejas",
        },
        bio: "Desarrollador enfocado en backend e infraestructura. Le gusta que las cosas escalen sin sorpresas.",
        stats: Some(Stats {
            experience: "2+",
            projects: "5+",
        }),
    },
    Person {
        name: "Teo Chiappero",
        nickname: "Teo",
        description: "Fullstack Developer",
        role: "Frontend",
        image: "/team/Teo.png",
        full_image: "/team/TeoFull.jpg",
        skills: &["React", "JavaScript", "CSS", "Wordpress"],
        social: Social {
            github: "https://github.com/teochiappero",
            linkedin: "https://linkedin.com/in/teochiappero",
            instagram: "https://instagram.com/teochiappero",
        },
        bio: "Desarrollador frontend que cuida cada detalle de la interfaz y del rendimiento.",
        stats: Some(Stats {
            experience: "3+",
            projects: "10+",
        }),
    },
    Person {
        name: "Jacky Vazquez",
        nickname: "Jacky",
        description: "UX/UI Designer",
        role: "UX/UI",
        image: "/team/Jacky.png",
        full_image: "/team/Jacky.png",
        skills: &["Figma", "Illustrator", "Photoshop", "Prototyping"],
        social: Social {
            github: "https://github.com/jacky",
            linkedin: "https://linkedin.com/in/jacky",
            instagram: "https://instagram.com/jacky",
        },
        bio: "Diseñadora centrada en el usuario, de la investigación al prototipo final.",
        stats: Some(Stats {
            experience: "4+",
            projects: "60+",
        }),
    },
    Person {
        name: "Faustina",
        nickname: "Lud",
        description: "UX/UI Designer",
        role: "UX/UI",
        image: "/team/lu.png",
        full_image: "/team/lu.png",
        skills: &["Figma", "Adobe XD", "Sketch", "User Research"],
        social: Social {
            github: "https://github.com/faustina",
            linkedin: "https://linkedin.com/in/faustina",
            instagram: "https://instagram.com/faustina",
        },
        bio: "Diseñadora de interfaces con foco en sistemas de diseño y accesibilidad.",
        stats: Some(Stats {
            experience: "3+",
            projects: "45+",
        }),
    },
];
