use crate::view::Node;
use std::sync::Arc;

pub type CardRenderer<T> = fn(&T, usize) -> Node;

struct Slot<T> {
    record: Arc<T>,
    index: usize,
    output: Arc<Node>,
}

/// 清單卡片的快取：同一位置的紀錄 `Arc` 與索引都沒變時，直接重用上次的片段
pub struct MemoList<T> {
    render: CardRenderer<T>,
    slots: Vec<Option<Slot<T>>>,
    render_count: usize,
}

impl<T> MemoList<T> {
    pub fn new(render: CardRenderer<T>) -> Self {
        Self {
            render,
            slots: Vec::new(),
            render_count: 0,
        }
    }

    /// Renders every record with its 1-based index.
    pub fn render_all(&mut self, records: &[Arc<T>]) -> Vec<Arc<Node>> {
        self.slots.truncate(records.len());
        self.slots.resize_with(records.len(), || None);

        let mut out = Vec::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            let index = position + 1;
            let slot = &mut self.slots[position];

            match slot {
                Some(cached) if Arc::ptr_eq(&cached.record, record) && cached.index == index => {
                    out.push(Arc::clone(&cached.output));
                }
                _ => {
                    tracing::debug!("Rendering card #{}", index);
                    let output = Arc::new((self.render)(record, index));
                    self.render_count += 1;
                    *slot = Some(Slot {
                        record: Arc::clone(record),
                        index,
                        output: Arc::clone(&output),
                    });
                    out.push(output);
                }
            }
        }
        out
    }

    /// How many times the underlying renderer actually ran.
    pub fn render_count(&self) -> usize {
        self.render_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::cards::project_card;
    use crate::domain::model::Project;

    fn projects(n: usize) -> Vec<Arc<Project>> {
        (1..=n)
            .map(|i| {
                Arc::new(Project {
                    title: format!("Project {}", i),
                    description: "desc".to_string(),
                    link: None,
                })
            })
            .collect()
    }

    #[test]
    fn test_unchanged_records_are_not_rerendered() {
        let records = projects(3);
        let mut memo = MemoList::new(project_card);

        let first = memo.render_all(&records);
        let second = memo.render_all(&records);

        assert_eq!(memo.render_count(), 3);
        for (a, b) in first.iter().zip(&second) {
            assert!(Arc::ptr_eq(a, b));
        }
    }

    #[test]
    fn test_replaced_record_rerenders_only_its_slot() {
        let mut records = projects(3);
        let mut memo = MemoList::new(project_card);
        memo.render_all(&records);

        records[1] = Arc::new(Project {
            title: "Replacement".to_string(),
            description: "desc".to_string(),
            link: Some("https://example.com".to_string()),
        });
        let out = memo.render_all(&records);

        assert_eq!(memo.render_count(), 4);
        assert!(out[1].to_html().contains("Replacement"));
    }

    #[test]
    fn test_equal_but_distinct_record_rerenders() {
        let records = projects(1);
        let mut memo = MemoList::new(project_card);
        memo.render_all(&records);

        let copy = vec![Arc::new((*records[0]).clone())];
        memo.render_all(&copy);
        assert_eq!(memo.render_count(), 2);
    }

    #[test]
    fn test_shifted_index_rerenders() {
        let records = projects(2);
        let mut memo = MemoList::new(project_card);
        memo.render_all(&records);

        let shifted = vec![Arc::clone(&records[1])];
        let out = memo.render_all(&shifted);
        assert_eq!(memo.render_count(), 3);
        assert!(out[0].to_html().contains("proj p1"));
    }
}
