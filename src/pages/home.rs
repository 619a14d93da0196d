use crate::components::cards::{
    experience_card, external_link, project_card, skill_section, ux_project_card,
};
use crate::components::{ContactForm, LocalAcknowledgement, MemoList};
use crate::domain::model::{Education, Experience, Profile, Project, SiteContent, SkillCategory, UxProject};
use crate::domain::ports::SubmissionSink;
use crate::view::{Element, Node};
use std::sync::Arc;

/// Section anchors reachable from the navigation bar, in display order.
pub const NAV_SECTIONS: [(&str, &str); 5] = [
    ("education", "Education"),
    ("exp", "Experience"),
    ("projects", "Projects"),
    ("skills", "Skills"),
    ("contact", "Contact"),
];

pub const UX_SECTION_ID: &str = "uiux";

/// 首頁：依序組合 About → [UI/UX] → Education → Experience → Projects → Skills → Contact
pub struct HomePage<S: SubmissionSink = LocalAcknowledgement> {
    content: SiteContent,
    experiences: MemoList<Experience>,
    projects: MemoList<Project>,
    skills: MemoList<SkillCategory>,
    ux_projects: MemoList<UxProject>,
    form: ContactForm<S>,
}

impl HomePage<LocalAcknowledgement> {
    pub fn new(content: SiteContent) -> Self {
        Self::with_form(content, ContactForm::new())
    }
}

impl<S: SubmissionSink> HomePage<S> {
    pub fn with_form(content: SiteContent, form: ContactForm<S>) -> Self {
        Self {
            content,
            experiences: MemoList::new(experience_card),
            projects: MemoList::new(project_card),
            skills: MemoList::new(skill_section),
            ux_projects: MemoList::new(ux_project_card),
            form,
        }
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub fn form(&self) -> &ContactForm<S> {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm<S> {
        &mut self.form
    }

    /// Total number of card renders across all lists; cached cards do not count.
    pub fn card_render_count(&self) -> usize {
        self.experiences.render_count()
            + self.projects.render_count()
            + self.skills.render_count()
            + self.ux_projects.render_count()
    }

    pub fn render(&mut self) -> Node {
        let mut app = Element::new("div")
            .class("App")
            .child(
                Element::new("h1")
                    .class("header")
                    .text(self.content.profile.name.as_str()),
            )
            .child(nav(&self.content.profile))
            .child(about(&self.content.profile));

        if !self.content.ux_projects.is_empty() {
            let cards = self.ux_projects.render_all(&self.content.ux_projects);
            app = app.child(section(UX_SECTION_ID, "UI/UX Projects", "ux-cards", cards));
        }

        if let Some(education) = &self.content.education {
            app = app.child(education_section(education));
        }

        let experiences = self.experiences.render_all(&self.content.experiences);
        let projects = self.projects.render_all(&self.content.projects);
        let skills = self.skills.render_all(&self.content.skill_categories);

        app.child(section("exp", "Experience", "exp-cards", experiences))
            .child(section("projects", "Projects", "proj-cards", projects))
            .child(
                Element::new("section")
                    .id("skills")
                    .child(mini_heading("Skills"))
                    .children(skills),
            )
            .child(
                Element::new("section")
                    .id("contact")
                    .child(mini_heading("Contact Me"))
                    .child(Element::new("div").class("contact").child(self.form.render())),
            )
            .child(
                Element::new("footer")
                    .child(Element::new("p").text(self.content.profile.footer.as_str())),
            )
            .into()
    }
}

fn mini_heading(text: &str) -> Element {
    Element::new("h2").class("mini-heading").text(text)
}

fn section(id: &str, heading: &str, list_class: &str, cards: Vec<Arc<Node>>) -> Element {
    Element::new("section")
        .id(id)
        .child(mini_heading(heading))
        .child(Element::new("div").class(list_class).children(cards))
}

fn nav_button(label: &str) -> Element {
    Element::new("button")
        .class("nav-button")
        .attr("type", "button")
        .text(label)
}

fn nav(profile: &Profile) -> Element {
    let resume = Element::new("li").child(external_link(&profile.resume_url, nav_button("My Resume")));

    let anchors = NAV_SECTIONS.iter().map(|(id, label)| {
        Element::new("li").child(nav_button(label).attr("data-scroll-target", *id))
    });

    Element::new("nav").child(
        Element::new("ul")
            .class("navi")
            .child(resume)
            .children(anchors),
    )
}

fn about(profile: &Profile) -> Element {
    let heading = mini_heading("About Me").child(Element::new("span").class("blinker").text("|"));
    let paragraphs = profile
        .about
        .iter()
        .map(|text| Element::new("p").class("intro").text(text.as_str()));

    Element::new("section")
        .class("container")
        .child(
            Element::new("div")
                .class("about")
                .child(heading)
                .children(paragraphs),
        )
        .child(
            Element::new("img")
                .attr("src", profile.image.src.as_str())
                .class("side-img")
                .attr("alt", profile.image.alt.as_str())
                .attr("loading", "lazy"),
        )
}

fn education_section(education: &Education) -> Element {
    let header = Element::new("div")
        .class("edu-header")
        .child(Element::new("div").class("edu-icon").text(education.icon.as_str()))
        .child(
            Element::new("div")
                .class("edu-title")
                .child(Element::new("h3").text(education.institution.as_str()))
                .child(
                    Element::new("p")
                        .class("edu-degree")
                        .text(education.degree.as_str()),
                ),
        )
        .child(Element::new("div").class("edu-date").text(education.dates.as_str()));

    let stats = Element::new("div").class("edu-details").children(
        education.stats.iter().map(|stat| {
            Element::new("div")
                .class("edu-stat")
                .child(Element::new("span").class("stat-label").text(stat.label.as_str()))
                .child(Element::new("span").class("stat-value").text(stat.value.as_str()))
        }),
    );

    let mut card = Element::new("div")
        .class("education-card")
        .child(header)
        .child(stats);

    if !education.coursework.is_empty() {
        card = card.child(
            Element::new("div")
                .class("edu-section")
                .child(Element::new("h4").text("Relevant Coursework"))
                .child(
                    Element::new("div").class("coursework-grid").children(
                        education
                            .coursework
                            .iter()
                            .map(|course| Element::new("span").class("course").text(course.as_str())),
                    ),
                ),
        );
    }

    if !education.activities.is_empty() {
        card = card.child(
            Element::new("div")
                .class("edu-section")
                .child(Element::new("h4").text("Activities & Roles"))
                .child(
                    Element::new("ul").class("activities-list").children(
                        education
                            .activities
                            .iter()
                            .map(|activity| Element::new("li").text(activity.as_str())),
                    ),
                ),
        );
    }

    Element::new("section")
        .id("education")
        .child(mini_heading("Education"))
        .child(Element::new("div").class("education-container").child(card))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::builtin;
    use crate::domain::model::FormField;

    fn section_ids(node: &Node) -> Vec<String> {
        node.find_all(|e| e.tag == "section")
            .into_iter()
            .map(|e| e.get_attr("id").unwrap_or("about").to_string())
            .collect()
    }

    #[test]
    fn test_sections_in_order() {
        let mut page = HomePage::new(builtin());
        let node = page.render();
        assert_eq!(
            section_ids(&node),
            ["about", "uiux", "education", "exp", "projects", "skills", "contact"]
        );
    }

    #[test]
    fn test_optional_sections_are_omitted() {
        let mut content = builtin();
        content.ux_projects.clear();
        content.case_study = None;
        content.education = None;
        let node = HomePage::new(content).render();
        assert_eq!(
            section_ids(&node),
            ["about", "exp", "projects", "skills", "contact"]
        );
    }

    #[test]
    fn test_nav_buttons_target_sections() {
        let node = HomePage::new(builtin()).render();
        let targets: Vec<&str> = node
            .find_all(|e| e.get_attr("data-scroll-target").is_some())
            .into_iter()
            .filter_map(|e| e.get_attr("data-scroll-target"))
            .collect();
        assert_eq!(targets, ["education", "exp", "projects", "skills", "contact"]);
        for id in targets {
            assert!(node.find_by_id(id).is_some());
        }
    }

    #[test]
    fn test_typing_in_form_does_not_rerender_cards() {
        let mut page = HomePage::new(builtin());
        page.render();
        let initial = page.card_render_count();
        assert_eq!(initial, 3 + 4 + 5 + 1);

        page.form_mut().on_field_change(FormField::Name, "Jane");
        let node = page.render();

        assert_eq!(page.card_render_count(), initial);
        let input = node
            .find_first(|e| e.tag == "input" && e.get_attr("name") == Some("name"))
            .unwrap();
        assert_eq!(input.get_attr("value"), Some("Jane"));
    }
}
