use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::raw_reader::PbfReader;
use super::traits::BufferSource;
use crate::error::Result;
use crate::memory::Buffer;
use crate::models::Element;
use crate::osm::EntityBits;

/// Walks the entities of a [`BufferSource`] one at a time as owned
/// [`Element`]s.
pub struct IterableReader<S: BufferSource> {
    source: S,
    read_types: EntityBits,
    current: Option<Buffer>,
    position: usize,
    done: bool,
}

impl<S: BufferSource> IterableReader<S> {
    pub fn new(source: S) -> Self {
        Self::with_read_types(source, EntityBits::ALL)
    }

    /// Only yield entities of `read_types`.
    pub fn with_read_types(source: S, read_types: EntityBits) -> Self {
        Self {
            source,
            read_types,
            current: None,
            position: 0,
            done: false,
        }
    }

    pub fn into_inner(self) -> S {
        self.source
    }

    /// Next entity of the current buffer, moving the position past it.
    fn next_in_buffer(&mut self) -> Option<Element> {
        let buffer = self.current.as_ref()?;
        for item in buffer.items_from(self.position) {
            self.position = item.next_offset();
            if item.is_removed() || !self.read_types.intersects(EntityBits::from_item_type(item.item_type())) {
                continue;
            }
            if let Some(entity) = item.entity() {
                return Some(Element::from(entity));
            }
        }
        None
    }

    pub fn next_element(&mut self) -> Result<Option<Element>> {
        loop {
            if let Some(element) = self.next_in_buffer() {
                return Ok(Some(element));
            }
            if self.done {
                return Ok(None);
            }
            self.position = 0;
            self.current = self.source.read()?;
            if self.current.is_none() {
                self.done = true;
            }
        }
    }
}

impl<S: BufferSource> Iterator for IterableReader<S> {
    type Item = Result<Element>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_element() {
            Ok(element) => element.map(Ok),
            Err(e) => {
                self.done = true;
                self.current = None;
                Some(Err(e))
            }
        }
    }
}

impl IterableReader<PbfReader<BufReader<File>>> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let pbf_reader = PbfReader::from_path(path)?;
        Ok(Self::new(pbf_reader))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::models::{ElementType, Node, Tag, Way, WayNode};
    use crate::pbf::writers::PbfWriter;

    fn sample() -> Vec<Element> {
        vec![
            Element::Node(Node {
                id: 1,
                tags: vec![Tag::new("shop", "bakery")],
                ..Default::default()
            }),
            Element::Node(Node {
                id: 2,
                ..Default::default()
            }),
            Element::Way(Way {
                id: 3,
                way_nodes: vec![WayNode::new_without_coords(1), WayNode::new_without_coords(2)],
                ..Default::default()
            }),
        ]
    }

    fn encode(elements: &[Element]) -> Vec<u8> {
        let mut writer = PbfWriter::new(Vec::new(), false);
        for element in elements {
            writer.write_element(element).unwrap();
        }
        writer.finish().unwrap()
    }

    #[test]
    fn test_iterate_elements() {
        let reader = PbfReader::new(Cursor::new(encode(&sample())));
        let elements: Vec<Element> = IterableReader::new(reader).map(|e| e.unwrap()).collect();
        let meta: Vec<(ElementType, i64)> = elements.iter().map(Element::get_meta).collect();
        assert_eq!(
            meta,
            vec![(ElementType::Node, 1), (ElementType::Node, 2), (ElementType::Way, 3)]
        );
        match &elements[0] {
            Element::Node(node) => assert_eq!(node.tags, vec![Tag::new("shop", "bakery")]),
            other => panic!("unexpected element {:?}", other),
        }
    }

    #[test]
    fn test_read_types() {
        let reader = PbfReader::new(Cursor::new(encode(&sample())));
        let mut iter = IterableReader::with_read_types(reader, EntityBits::WAY);
        let way = iter.next().unwrap().unwrap();
        assert_eq!(way.get_meta(), (ElementType::Way, 3));
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_error_ends_iteration() {
        let reader = PbfReader::new(Cursor::new(vec![0, 0, 0, 9, 1]));
        let mut iter = IterableReader::new(reader);
        assert!(iter.next().unwrap().is_err());
        assert!(iter.next().is_none());
    }
}
