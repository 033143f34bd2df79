//! Owned copies of entities, for when data has to outlive its buffer.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::builder::{ChangesetBuilder, NodeBuilder, RelationBuilder, WayBuilder};
use crate::error::{Error, Result};
use crate::memory::{Buffer, ItemType};
use crate::osm::{self, BoundingBox, Entity, Location, NodeRef, OsmObject, Timestamp};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OsmUser {
    pub id: u32,
    pub name: String,
}

impl OsmUser {
    fn from_parts(id: u32, name: &str) -> Option<OsmUser> {
        if id == 0 && name.is_empty() {
            None
        } else {
            Some(OsmUser {
                id,
                name: name.to_owned(),
            })
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum Element {
    Node(Node),
    Way(Way),
    Relation(Relation),
    Changeset(Changeset),
}

impl Element {
    pub fn get_meta(&self) -> (ElementType, i64) {
        match self {
            Element::Node(e) => (ElementType::Node, e.id),
            Element::Way(e) => (ElementType::Way, e.id),
            Element::Relation(e) => (ElementType::Relation, e.id),
            Element::Changeset(e) => (ElementType::Changeset, e.id as i64),
        }
    }

    /// Build this element into `buffer` and commit it. Returns the offset of
    /// the new item.
    pub fn write_to(&self, buffer: &mut Buffer) -> Result<usize> {
        match self {
            Element::Node(e) => e.write_to(buffer),
            Element::Way(e) => e.write_to(buffer),
            Element::Relation(e) => e.write_to(buffer),
            Element::Changeset(e) => e.write_to(buffer),
        }
    }
}

impl From<Entity<'_>> for Element {
    fn from(entity: Entity<'_>) -> Self {
        match entity {
            Entity::Node(n) => Element::Node(n.into()),
            Entity::Way(w) => Element::Way(w.into()),
            Entity::Relation(r) => Element::Relation(r.into()),
            Entity::Changeset(c) => Element::Changeset(c.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    Node,
    Way,
    Relation,
    Changeset,
}

impl ElementType {
    pub fn from_item_type(item_type: ItemType) -> Option<ElementType> {
        match item_type {
            ItemType::Node => Some(ElementType::Node),
            ItemType::Way => Some(ElementType::Way),
            ItemType::Relation => Some(ElementType::Relation),
            ItemType::Changeset => Some(ElementType::Changeset),
            _ => None,
        }
    }

    pub fn item_type(self) -> ItemType {
        match self {
            ElementType::Node => ItemType::Node,
            ElementType::Way => ItemType::Way,
            ElementType::Relation => ItemType::Relation,
            ElementType::Changeset => ItemType::Changeset,
        }
    }
}

impl FromStr for ElementType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "node" => Ok(ElementType::Node),
            "way" => Ok(ElementType::Way),
            "relation" => Ok(ElementType::Relation),
            "changeset" => Ok(ElementType::Changeset),
            _ => Err(Error::InvalidElementType(s.to_owned())),
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.item_type().as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_owned(),
            value: value.to_owned(),
        }
    }
}

fn owned_tags(tags: osm::TagList<'_>) -> Vec<Tag> {
    tags.iter().map(|(k, v)| Tag::new(k, v)).collect()
}

fn to_timestamp(datetime: Option<DateTime<Utc>>) -> Result<Timestamp> {
    datetime.map_or(Ok(Timestamp::default()), Timestamp::try_from)
}

fn user_parts(user: &Option<OsmUser>) -> (u32, &str) {
    user.as_ref().map_or((0, ""), |u| (u.id, u.name.as_str()))
}

macro_rules! build_common {
    ($builder:expr, $element:expr) => {{
        let element = $element;
        let (uid, name) = user_parts(&element.user);
        $builder
            .set_id(element.id)
            .set_version(element.version)
            .set_changeset(element.changeset_id)
            .set_timestamp(to_timestamp(element.timestamp)?)
            .set_uid(uid)
            .set_visible(element.visible);
        $builder.set_user(name)?;
        if !element.tags.is_empty() {
            $builder.add_tags(element.tags.iter().map(|t| (t.key.as_str(), t.value.as_str())))?;
        }
    }};
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Node {
    pub id: i64,
    pub version: u32,
    pub timestamp: Option<DateTime<Utc>>,
    pub user: Option<OsmUser>,
    pub changeset_id: u32,
    pub location: Location,
    pub visible: bool,
    pub tags: Vec<Tag>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            id: 0,
            version: 0,
            timestamp: None,
            user: None,
            changeset_id: 0,
            location: Location::undefined(),
            visible: true,
            tags: Vec::new(),
        }
    }
}

impl Node {
    pub fn write_to(&self, buffer: &mut Buffer) -> Result<usize> {
        let mut builder = NodeBuilder::new(buffer)?;
        builder.set_location(self.location);
        build_common!(builder, self);
        Ok(builder.commit())
    }
}

impl From<osm::Node<'_>> for Node {
    fn from(node: osm::Node<'_>) -> Self {
        Self {
            id: node.id(),
            version: node.version(),
            timestamp: node.timestamp().to_datetime(),
            user: OsmUser::from_parts(node.uid(), node.user()),
            changeset_id: node.changeset(),
            location: node.location(),
            visible: node.visible(),
            tags: owned_tags(node.tags()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WayNode {
    pub id: i64,
    pub location: Option<Location>,
}

impl WayNode {
    pub fn new_without_coords(id: i64) -> Self {
        Self { id, location: None }
    }

    pub fn new(id: i64, location: Location) -> Self {
        Self {
            id,
            location: Some(location),
        }
    }
}

impl From<NodeRef> for WayNode {
    fn from(node_ref: NodeRef) -> Self {
        Self {
            id: node_ref.id,
            location: Some(node_ref.location).filter(Location::is_defined),
        }
    }
}

impl From<&WayNode> for NodeRef {
    fn from(way_node: &WayNode) -> Self {
        match way_node.location {
            Some(location) => NodeRef::with_location(way_node.id, location),
            None => NodeRef::new(way_node.id),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Way {
    pub id: i64,
    pub version: u32,
    pub timestamp: Option<DateTime<Utc>>,
    pub user: Option<OsmUser>,
    pub changeset_id: u32,
    pub visible: bool,
    pub tags: Vec<Tag>,
    pub way_nodes: Vec<WayNode>,
}

impl Default for Way {
    fn default() -> Self {
        Self {
            id: 0,
            version: 0,
            timestamp: None,
            user: None,
            changeset_id: 0,
            visible: true,
            tags: Vec::new(),
            way_nodes: Vec::new(),
        }
    }
}

impl Way {
    pub fn write_to(&self, buffer: &mut Buffer) -> Result<usize> {
        let mut builder = WayBuilder::new(buffer)?;
        build_common!(builder, self);
        if !self.way_nodes.is_empty() {
            builder.add_node_refs(self.way_nodes.iter().map(NodeRef::from))?;
        }
        Ok(builder.commit())
    }
}

impl From<osm::Way<'_>> for Way {
    fn from(way: osm::Way<'_>) -> Self {
        Self {
            id: way.id(),
            version: way.version(),
            timestamp: way.timestamp().to_datetime(),
            user: OsmUser::from_parts(way.uid(), way.user()),
            changeset_id: way.changeset(),
            visible: way.visible(),
            tags: owned_tags(way.tags()),
            way_nodes: way.nodes().iter().map(WayNode::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelationMember {
    pub member_id: i64,
    pub member_type: ElementType,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Relation {
    pub id: i64,
    pub version: u32,
    pub timestamp: Option<DateTime<Utc>>,
    pub user: Option<OsmUser>,
    pub changeset_id: u32,
    pub visible: bool,
    pub tags: Vec<Tag>,
    pub members: Vec<RelationMember>,
}

impl Default for Relation {
    fn default() -> Self {
        Self {
            id: 0,
            version: 0,
            timestamp: None,
            user: None,
            changeset_id: 0,
            visible: true,
            tags: Vec::new(),
            members: Vec::new(),
        }
    }
}

impl Relation {
    /// Members of type changeset have no place in a relation and are
    /// dropped.
    pub fn write_to(&self, buffer: &mut Buffer) -> Result<usize> {
        let mut builder = RelationBuilder::new(buffer)?;
        build_common!(builder, self);
        if !self.members.is_empty() {
            let mut members = builder.members()?;
            for member in &self.members {
                if member.member_type != ElementType::Changeset {
                    members.add_member(member.member_type.item_type(), member.member_id, &member.role)?;
                }
            }
        }
        Ok(builder.commit())
    }
}

impl From<osm::Relation<'_>> for Relation {
    fn from(relation: osm::Relation<'_>) -> Self {
        Self {
            id: relation.id(),
            version: relation.version(),
            timestamp: relation.timestamp().to_datetime(),
            user: OsmUser::from_parts(relation.uid(), relation.user()),
            changeset_id: relation.changeset(),
            visible: relation.visible(),
            tags: owned_tags(relation.tags()),
            members: relation
                .members()
                .iter()
                .filter_map(|member| {
                    Some(RelationMember {
                        member_id: member.id,
                        member_type: ElementType::from_item_type(member.member_type)?,
                        role: member.role.to_owned(),
                    })
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangesetComment {
    pub date: Option<DateTime<Utc>>,
    pub user: Option<OsmUser>,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Changeset {
    pub id: u32,
    pub user: Option<OsmUser>,
    pub created_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
    pub num_changes: u32,
    pub bounds: Option<BoundingBox>,
    pub tags: Vec<Tag>,
    pub comments: Vec<ChangesetComment>,
}

impl Changeset {
    pub fn write_to(&self, buffer: &mut Buffer) -> Result<usize> {
        let (uid, name) = user_parts(&self.user);
        let mut builder = ChangesetBuilder::new(buffer)?;
        builder
            .set_id(self.id)
            .set_uid(uid)
            .set_created_at(to_timestamp(self.created_at)?)
            .set_closed_at(to_timestamp(self.closed_at)?)
            .set_num_changes(self.num_changes)
            .set_num_comments(self.comments.len() as u32);
        if let Some(bounds) = self.bounds {
            builder.set_bounds(bounds);
        }
        builder.set_user(name)?;
        if !self.tags.is_empty() {
            builder.add_tags(self.tags.iter().map(|t| (t.key.as_str(), t.value.as_str())))?;
        }
        if !self.comments.is_empty() {
            let mut discussion = builder.discussion()?;
            for comment in &self.comments {
                let (uid, name) = user_parts(&comment.user);
                discussion.add_comment(to_timestamp(comment.date)?, uid, name, &comment.text)?;
            }
        }
        Ok(builder.commit())
    }
}

impl From<osm::Changeset<'_>> for Changeset {
    fn from(changeset: osm::Changeset<'_>) -> Self {
        Self {
            id: changeset.id(),
            user: OsmUser::from_parts(changeset.uid(), changeset.user()),
            created_at: changeset.created_at().to_datetime(),
            closed_at: changeset.closed_at().to_datetime(),
            num_changes: changeset.num_changes(),
            bounds: Some(changeset.bounds()).filter(BoundingBox::is_defined),
            tags: owned_tags(changeset.tags()),
            comments: changeset
                .discussion()
                .iter()
                .map(|comment| ChangesetComment {
                    date: comment.date().to_datetime(),
                    user: OsmUser::from_parts(comment.uid(), comment.user()),
                    text: comment.text().to_owned(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::memory::AutoGrow;

    fn alice() -> Option<OsmUser> {
        Some(OsmUser {
            id: 7,
            name: "alice".to_owned(),
        })
    }

    #[test]
    fn test_element_type() {
        assert_eq!("way".parse::<ElementType>().unwrap(), ElementType::Way);
        let err = "area".parse::<ElementType>().unwrap_err();
        assert!(err.is_format());
        assert_eq!(ElementType::Relation.to_string(), "relation");
    }

    #[test]
    fn test_node_through_buffer() {
        let node = Node {
            id: -5,
            version: 3,
            timestamp: Some(Utc.with_ymd_and_hms(2020, 5, 17, 8, 30, 0).unwrap()),
            user: alice(),
            changeset_id: 1234,
            location: Location::from_degrees(13.4, 52.5),
            visible: true,
            tags: vec![Tag::new("amenity", "cafe")],
        };
        let mut buffer = Buffer::new(1024, AutoGrow::Yes);
        let offset = Element::Node(node.clone()).write_to(&mut buffer).unwrap();
        let entity = buffer.get(offset).entity().unwrap();
        assert_eq!(Element::from(entity), Element::Node(node));
    }

    #[test]
    fn test_way_and_relation_through_buffer() {
        let way = Way {
            id: 10,
            user: alice(),
            way_nodes: vec![
                WayNode::new(1, Location::new(10, 20)),
                WayNode::new_without_coords(2),
            ],
            tags: vec![Tag::new("highway", "track")],
            ..Default::default()
        };
        let relation = Relation {
            id: 11,
            visible: false,
            members: vec![RelationMember {
                member_id: 10,
                member_type: ElementType::Way,
                role: "outer".to_owned(),
            }],
            ..Default::default()
        };
        let mut buffer = Buffer::new(1024, AutoGrow::Yes);
        Element::Way(way.clone()).write_to(&mut buffer).unwrap();
        Element::Relation(relation.clone()).write_to(&mut buffer).unwrap();

        let elements: Vec<Element> = buffer.entities().map(Element::from).collect();
        assert_eq!(elements, vec![Element::Way(way), Element::Relation(relation)]);
    }

    #[test]
    fn test_changeset_through_buffer() {
        let changeset = Changeset {
            id: 99,
            user: alice(),
            created_at: Some(Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap()),
            closed_at: None,
            num_changes: 12,
            bounds: Some(BoundingBox::new(Location::new(-10, -20), Location::new(30, 40))),
            tags: vec![Tag::new("comment", "fix typo")],
            comments: vec![ChangesetComment {
                date: Some(Utc.with_ymd_and_hms(2021, 1, 2, 0, 0, 0).unwrap()),
                user: Some(OsmUser {
                    id: 8,
                    name: "bob".to_owned(),
                }),
                text: "thanks!".to_owned(),
            }],
        };
        let mut buffer = Buffer::new(1024, AutoGrow::Yes);
        let offset = changeset.write_to(&mut buffer).unwrap();
        let view = buffer.get(offset).as_changeset().unwrap();
        assert_eq!(view.num_comments(), 1);
        assert!(view.is_open());
        assert_eq!(Changeset::from(view), changeset);
    }

    #[test]
    fn test_serde() {
        let element = Element::Node(Node {
            id: 1,
            tags: vec![Tag::new("a", "b")],
            ..Default::default()
        });
        let json = serde_json::to_string(&element).unwrap();
        assert!(json.contains("\"type\":\"Node\""));
        let back: Element = serde_json::from_str(&json).unwrap();
        assert_eq!(back, element);
    }
}
