use crate::view::{Element, Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollPosition {
    pub target_id: String,
    pub behavior: ScrollBehavior,
}

/// The rendered document as seen by navigation code.
pub trait DocumentHost {
    fn get_element_by_id(&self, id: &str) -> Option<&Element>;
    fn scroll_into_view(&mut self, id: &str, behavior: ScrollBehavior);
}

/// 不依賴瀏覽器的文件宿主：保存目前的畫面樹、捲動目標與完整載入次數
#[derive(Debug)]
pub struct HeadlessDocument {
    root: Node,
    scroll: Option<ScrollPosition>,
    loads: usize,
}

impl HeadlessDocument {
    /// A fresh document load.
    pub fn load(root: Node) -> Self {
        Self {
            root,
            scroll: None,
            loads: 1,
        }
    }

    /// 客戶端重繪：替換畫面樹，不算一次文件載入
    pub fn replace_root(&mut self, root: Node) {
        self.root = root;
    }

    /// 換頁時捲動位置回到頂端
    pub fn reset_scroll(&mut self) {
        self.scroll = None;
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn scroll_position(&self) -> Option<&ScrollPosition> {
        self.scroll.as_ref()
    }

    pub fn load_count(&self) -> usize {
        self.loads
    }
}

impl DocumentHost for HeadlessDocument {
    fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        self.root.find_by_id(id)
    }

    fn scroll_into_view(&mut self, id: &str, behavior: ScrollBehavior) {
        self.scroll = Some(ScrollPosition {
            target_id: id.to_string(),
            behavior,
        });
    }
}

/// Smoothly scrolls the section with `id` into view. Missing ids are a no-op.
pub fn scroll_to_section<H: DocumentHost + ?Sized>(host: &mut H, id: &str) -> bool {
    if host.get_element_by_id(id).is_none() {
        tracing::debug!("No section with id '{}', ignoring scroll request", id);
        return false;
    }

    host.scroll_into_view(id, ScrollBehavior::Smooth);
    tracing::debug!("Scrolled to section '{}'", id);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> HeadlessDocument {
        HeadlessDocument::load(
            Element::new("div")
                .child(Element::new("section").id("education"))
                .child(Element::new("section").id("contact"))
                .into(),
        )
    }

    #[test]
    fn test_scroll_to_existing_section() {
        let mut doc = document();
        assert!(scroll_to_section(&mut doc, "contact"));
        assert_eq!(
            doc.scroll_position(),
            Some(&ScrollPosition {
                target_id: "contact".to_string(),
                behavior: ScrollBehavior::Smooth,
            })
        );
    }

    #[test]
    fn test_scroll_to_missing_section_is_noop() {
        let mut doc = document();
        scroll_to_section(&mut doc, "education");
        assert!(!scroll_to_section(&mut doc, "does-not-exist"));
        assert_eq!(doc.scroll_position().unwrap().target_id, "education");
    }
}
