#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillStyle {
    pub label: &'static str,
    pub color: &'static str,
}

/// Skills shown in the marquee, in display order.
pub static MARQUEE: &[&str] = &[
    "React", "Node.js", "Docker", "MySQL", "Wordpress", "Figma", "Illustrator", "Photoshop",
];

static STYLES: &[(&str, SkillStyle)] = &[
    ("react", SkillStyle { label: "React", color: "#61DAFB" }),
    ("node.js", SkillStyle { label: "Node.js", color: "#339933" }),
    ("docker", SkillStyle { label: "Docker", color: "#2496ED" }),
    ("mysql", SkillStyle { label: "MySQL", color: "#4479A1" }),
    ("wordpress", SkillStyle { label: "WordPress", color: "#21759B" }),
    ("figma", SkillStyle { label: "Figma", color: "#F24E1E" }),
    ("illustrator", SkillStyle { label: "Illustrator", color: "#FF9A00" }),
    ("photoshop", SkillStyle { label: "Photoshop", color: "#31A8FF" }),
];

pub fn skill_style(skill: &str) -> Option<SkillStyle> {
    let key = skill.trim().to_lowercase();
    STYLES.iter().find(|(k, _)| *k == key).map(|(_, style)| *style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(skill_style("WordPress").map(|s| s.color), Some("#21759B"));
        assert_eq!(skill_style("NODE.JS").map(|s| s.label), Some("Node.js"));
        assert!(skill_style("Cobol").is_none());
    }

    #[test]
    fn marquee_skills_are_all_styled() {
        assert!(MARQUEE.iter().all(|s| skill_style(s).is_some()));
    }
}
