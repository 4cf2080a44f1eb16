//! Static biography dataset rendered by the content sections.

pub struct PersonalInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub summary: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
    pub avatar: &'static str,
}

impl PersonalInfo {
    /// First word of the name, shown on its own line in the hero.
    pub fn first_name(&self) -> &'static str {
        self.name.split_whitespace().next().unwrap_or(self.name)
    }

    pub fn rest_of_name(&self) -> String {
        self.name
            .split_whitespace()
            .skip(1)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub struct Experience {
    pub id: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub achievements: &'static [&'static str],
}

pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub year: &'static str,
}

pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub tools: &'static [&'static str],
}

pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Telescope,
    Rocket,
    Globe,
    Wind,
    PenTool,
    Music,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Telescope => "🔭",
            Self::Rocket => "🚀",
            Self::Globe => "🌐",
            Self::Wind => "🌬",
            Self::PenTool => "✎",
            Self::Music => "♪",
        }
    }
}

pub struct Affiliation {
    pub id: &'static str,
    pub role: &'static str,
    pub organization: &'static str,
    pub icon: Icon,
}

pub struct Interest {
    pub name: &'static str,
    pub icon: Icon,
}

pub const PERSONAL_INFO: PersonalInfo = PersonalInfo {
    name: "Shreyas Satish Dhumal",
    tagline: "Aerospace Engineer · UAV & Space Tech Enthusiast",
    summary: "Aerospace engineer with hands-on experience in UAV design, heavy-payload drones, and aerospace prototyping through projects at BDL, VTOL Aviation India, and TiHAN–IIT Hyderabad. Skilled in navigation systems, control projects, and drone development. Certified DGCA drone pilot and active citizen scientist contributing to astronomy and planetary science research.",
    email: "shreyasdhumal504@gmail.com",
    phone: "+91 7798024236",
    location: "Pune, Maharashtra, India",
    linkedin: "https://www.linkedin.com/in/shreyas-dhumal504",
    github: "https://github.com/Shreyasdhumal504",
    avatar: "https://github.com/Shreyasdhumal504.png",
};

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        id: "tihan-fellow",
        role: "Research Assistant Fellow",
        company: "TIHAN–IIT Hyderabad",
        period: "Dec 2021 – Oct 2022",
        achievements: &[
            "Developed a 50 kg heavy-payload cargo drone with a carbon-fiber body.",
            "Performed assemblies, flight testing, maintenance, and component optimization.",
            "Worked on GPS-denied navigation and an autonomous e-bike module.",
            "Hands-on experience with hexacopters and quadcopters.",
        ],
    },
    Experience {
        id: "tihan-intern",
        role: "Research Intern",
        company: "TIHAN–IIT Hyderabad",
        period: "Sept 2021 – Dec 2021",
        achievements: &[
            "Designed a UAV prototype for a two-seater air taxi.",
            "Created CAD models and balloon diagrams to streamline production.",
            "Performed structural optimization via CFD and performance analysis.",
            "Installed Pixhawk, telemetry, and camera gimbal systems.",
        ],
    },
    Experience {
        id: "bdl-intern",
        role: "Project Intern",
        company: "Bharat Dynamics Limited",
        period: "Apr 2021 – Oct 2021",
        achievements: &[
            "Worked on enhancing PID-based gimbal control using ESO.",
            "Improved azimuth and elevation accuracy; contributed to defense systems.",
        ],
    },
];

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "Advanced Certification in Space Technologies",
        institution: "IISc Bangalore",
        year: "Oct 2024 – Jul 2025",
    },
    Education {
        degree: "B.Tech in Aerospace Engineering",
        institution: "MIT School of Engineering, MITADT University",
        year: "2017 – 2021",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: "heavy-drone",
        title: "Heavy Payload Cargo Drone",
        category: "UAV Development",
        description: "Development of a 50kg payload drone utilizing carbon fiber materials for structural integrity and weight optimization.",
        tools: &["UAV Design", "Flight Testing", "Composites"],
    },
    Project {
        id: "air-taxi",
        title: "Air Taxi UAV Prototype",
        category: "Design & Simulation",
        description: "Designed a prototype for a two-seater air taxi, including extensive CAD modeling and structural optimization.",
        tools: &["CATIA V5", "CFD", "Prototyping"],
    },
    Project {
        id: "rlv-control",
        title: "RLV Trajectory Control",
        category: "GNC & Control Systems",
        description: "Developed a control system for Reusable Launch Vehicle (RLV) trajectory simulation using a quadcopter testbed.",
        tools: &["MATLAB", "Simulink", "SolidWorks"],
    },
    Project {
        id: "pslv-model",
        title: "PSLV-C48 Static Model",
        category: "Aerospace Design",
        description: "Created a 1/20th static scale model of the PSLV-C48 aligned strictly with ISRO specifications.",
        tools: &["CATIA V5", "Fabrication"],
    },
];

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        title: "UAV & Aerospace",
        skills: &[
            "UAV Design & Assembly",
            "Heavy Payload Drones",
            "Payload Integration",
            "Avionics Setup",
            "Pixhawk",
            "Mission Planner",
            "QGroundControl",
            "CFD Basics",
        ],
    },
    SkillCategory {
        title: "Tools & Programming",
        skills: &[
            "CATIA V5",
            "SolidWorks",
            "Fusion 360",
            "MATLAB & Simulink",
            "Python",
            "Power BI",
            "AI Tools for Aerospace",
        ],
    },
    SkillCategory {
        title: "Professional",
        skills: &[
            "Leadership",
            "Team Collaboration",
            "Problem-Solving",
            "Cross-Cultural Communication",
            "Adaptability",
        ],
    },
];

pub const AFFILIATIONS: &[Affiliation] = &[
    Affiliation {
        id: "zooniverse",
        role: "Citizen Scientist",
        organization: "Zooniverse",
        icon: Icon::Telescope,
    },
    Affiliation {
        id: "sera",
        role: "Member",
        organization: "Space Exploration & Research Agency (SERA)",
        icon: Icon::Rocket,
    },
    Affiliation {
        id: "sgac",
        role: "Member",
        organization: "Space Generation Advisory Council (SGAC)",
        icon: Icon::Globe,
    },
];

pub const INTERESTS: &[Interest] = &[
    Interest {
        name: "Astronomy",
        icon: Icon::Telescope,
    },
    Interest {
        name: "Trekking",
        icon: Icon::Wind,
    },
    Interest {
        name: "Sketching",
        icon: Icon::PenTool,
    },
    Interest {
        name: "Bansuri (Flute)",
        icon: Icon::Music,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn hero_name_splits_on_first_word() {
        assert_eq!(PERSONAL_INFO.first_name(), "Shreyas");
        assert_eq!(PERSONAL_INFO.rest_of_name(), "Satish Dhumal");
    }

    #[test]
    fn record_ids_are_unique_within_each_sequence() {
        let experience: HashSet<_> = EXPERIENCE.iter().map(|entry| entry.id).collect();
        let projects: HashSet<_> = PROJECTS.iter().map(|entry| entry.id).collect();
        let affiliations: HashSet<_> = AFFILIATIONS.iter().map(|entry| entry.id).collect();

        assert_eq!(experience.len(), EXPERIENCE.len());
        assert_eq!(projects.len(), PROJECTS.len());
        assert_eq!(affiliations.len(), AFFILIATIONS.len());
    }

    #[test]
    fn every_record_has_its_list_populated() {
        assert!(EXPERIENCE.iter().all(|entry| !entry.achievements.is_empty()));
        assert!(PROJECTS.iter().all(|entry| !entry.tools.is_empty()));
        assert!(SKILLS.iter().all(|entry| !entry.skills.is_empty()));
    }
}
