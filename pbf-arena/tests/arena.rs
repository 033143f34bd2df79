mod common;

use std::io::Cursor;

use pbf_arena::builder::{NodeBuilder, WayBuilder};
use pbf_arena::osm::{Location, OsmObject};
use pbf_arena::pbf::readers::PbfReader;
use pbf_arena::storage::{ItemStash, StashHandle};
use pbf_arena::{AutoGrow, Buffer, ItemType};

fn add_nodes(buffer: &mut Buffer, count: i64) {
    for id in 1..=count {
        let mut node = NodeBuilder::new(buffer).unwrap();
        node.set_id(id).set_location(Location::from_degrees(id as f64 * 0.01, 1.0));
        node.set_user("someone").unwrap();
        node.add_tags([("ref", "x")]).unwrap();
        node.commit();
    }
}

#[test]
fn test_internal_growth_keeps_all_items() {
    let mut buffer = Buffer::new(512, AutoGrow::Internal);
    add_nodes(&mut buffer, 50);
    assert!(buffer.has_nested_buffers());
    assert_eq!(buffer.capacity(), 512);

    let mut ids = Vec::new();
    while let Some(nested) = buffer.detach_nested() {
        assert!(!nested.has_nested_buffers());
        ids.extend(nested.nodes().map(|n| n.id()));
    }
    assert!(!buffer.has_nested_buffers());
    ids.extend(buffer.nodes().map(|n| n.id()));
    assert_eq!(ids, (1..=50).collect::<Vec<i64>>());
}

#[test]
fn test_uncommitted_item_survives_nesting() {
    let mut buffer = Buffer::new(512, AutoGrow::Internal);
    add_nodes(&mut buffer, 3);

    let mut way = WayBuilder::new(&mut buffer).unwrap();
    way.set_id(99);
    way.add_node_ids(1..=100).unwrap();
    way.commit();

    let chain = buffer.into_chain();
    assert!(chain.len() > 1);
    let way = chain.last().unwrap().ways().next().unwrap();
    assert_eq!(way.id(), 99);
    assert_eq!(way.nodes().len(), 100);
}

#[test]
fn test_stash_decoded_items() {
    let mut reader = PbfReader::new(Cursor::new(common::node_file(2, 20)));
    let mut stash = ItemStash::new();
    let mut handles: Vec<StashHandle> = Vec::new();
    while let Some(buffer) = reader.read().unwrap() {
        for item in buffer.items() {
            handles.push(stash.add_item(&item).unwrap());
        }
    }
    // The decoded buffers are gone, the stash still has every node.
    assert_eq!(stash.len(), 40);

    for handle in handles.iter().skip(1).step_by(2) {
        stash.remove_item(*handle);
    }
    stash.garbage_collect();
    assert_eq!(stash.len(), 20);
    assert_eq!(stash.count_removed(), 0);

    let item = stash.get_item(handles[4]);
    assert_eq!(item.item_type(), ItemType::Node);
    assert_eq!(item.as_node().unwrap().id(), 5);
}
