use crate::domain::model::{CaseStudy, CaseStudyBlock};
use crate::view::{Element, Node};

pub const BACK_ACTION: &str = "back";

pub fn render(case_study: &CaseStudy) -> Node {
    let back = Element::new("button")
        .class("back-button")
        .attr("type", "button")
        .attr("data-action", BACK_ACTION)
        .text("← Back to Home");

    let blocks = case_study.blocks.iter().map(|block| match block {
        CaseStudyBlock::Heading { text } => Element::new("h2").class("case-heading").text(text.as_str()),
        CaseStudyBlock::Paragraph { text } => Element::new("p").class("case-text").text(text.as_str()),
        CaseStudyBlock::Image { src, alt } => Element::new("img")
            .class("case-image")
            .attr("src", src.as_str())
            .attr("alt", alt.as_str())
            .attr("loading", "lazy"),
    });

    Element::new("div")
        .class("case-study")
        .child(back)
        .child(Element::new("h1").class("header").text(case_study.title.as_str()))
        .child(
            Element::new("p")
                .class("case-subtitle")
                .text(case_study.subtitle.as_str()),
        )
        .child(Element::new("article").class("case-body").children(blocks))
        .into()
}
