//! Pure card renderers: one content record plus its 1-based position in,
//! one view fragment out.

use crate::domain::model::{Experience, Project, SkillCategory, SkillVariant, UxProject};
use crate::view::{Element, Node};

pub const PROJECT_LINK_LABEL: &str = "GitHub";
pub const CASE_STUDY_LINK_LABEL: &str = "View Case Study";

pub fn skill(name: &str, variant: SkillVariant) -> Node {
    Element::new("div")
        .class(variant.skill_class())
        .text(name)
        .into()
}

pub fn skill_section(category: &SkillCategory, _index: usize) -> Node {
    let modifier = category.variant.section_modifier();
    let class = if modifier.is_empty() {
        "skill-section".to_string()
    } else {
        format!("skill-section {}", modifier)
    };

    Element::new("div")
        .class(class)
        .child(
            Element::new("div")
                .class("skill-heading")
                .child(Element::new("h3").text(category.title.as_str()))
                .child(
                    Element::new("div").class("skills-container").children(
                        category
                            .skills
                            .iter()
                            .map(|name| skill(name, category.variant)),
                    ),
                ),
        )
        .into()
}

/// 外部連結一律開新分頁，且不讓被開啟的頁面取得 opener
pub fn external_link(href: &str, label: impl Into<Node>) -> Element {
    Element::new("a")
        .attr("href", href)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .child(label)
}

pub fn project_card(project: &Project, index: usize) -> Node {
    let card = Element::new("div")
        .class(format!("proj p{}", index))
        .child(
            Element::new("p")
                .class("job-title")
                .text(project.title.as_str()),
        )
        .child(Element::new("p").text(project.description.as_str()));

    match project.link.as_deref() {
        Some(link) => card.child(external_link(link, PROJECT_LINK_LABEL)).into(),
        None => card.into(),
    }
}

pub fn experience_card(experience: &Experience, index: usize) -> Node {
    let heading = Element::new("p")
        .class("job-title")
        .text(experience.title.as_str())
        .child(Element::new("br"))
        .child(Element::new("br"))
        .text(experience.company.as_str())
        .child(Element::new("br"))
        .child(Element::new("br"))
        .text(experience.period.as_str());

    let points = Element::new("ul").children(
        experience
            .points
            .iter()
            .map(|point| Element::new("li").text(point.as_str())),
    );

    Element::new("div")
        .class(format!("rectangle card{}", index))
        .child(heading)
        .child(points)
        .into()
}

/// 站內連結：由路由處理，不開新分頁也不重新載入文件
pub fn internal_link(path: &str, label: impl Into<Node>) -> Element {
    Element::new("a")
        .attr("href", path)
        .attr("data-route", path)
        .child(label)
}

pub fn ux_project_card(project: &UxProject, index: usize) -> Node {
    Element::new("div")
        .class(format!("ux-card ux{}", index))
        .child(
            Element::new("p")
                .class("job-title")
                .text(project.title.as_str()),
        )
        .child(Element::new("p").class("ux-date").text(project.date.as_str()))
        .child(
            Element::new("div").class("ux-tools").children(
                project
                    .tools
                    .iter()
                    .map(|tool| Element::new("span").class("tool").text(tool.as_str())),
            ),
        )
        .child(Element::new("p").text(project.description.as_str()))
        .child(internal_link(&project.link, CASE_STUDY_LINK_LABEL))
        .into()
}
