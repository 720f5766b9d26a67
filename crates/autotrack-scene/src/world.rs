//! SceneWorld - scene objects with stable IDs and typed per-object data

use crate::object::{ObjectData, ObjectInfo, ObjectKind};
use autotrack_core::{AutoTrackError, ObjectId, Result};
use bimap::BiMap;
use std::collections::{HashMap, HashSet};

/// The scene the tracker operates on
///
/// Wraps hecs::World with:
/// - Stable ObjectId mapping
/// - Named object lookup (names are the document-level identity)
/// - Typed per-object data: kind, transform, flags, constraint stack
pub struct SceneWorld {
    /// The underlying hecs world
    world: hecs::World,
    /// Bidirectional mapping: ObjectId <-> hecs::Entity
    id_map: BiMap<ObjectId, hecs::Entity>,
    /// Object name -> ObjectId mapping
    name_map: HashMap<String, ObjectId>,
    /// Per-object data
    objects: HashMap<ObjectId, ObjectData>,
    /// Parent relationships: child -> parent
    parents: HashMap<ObjectId, ObjectId>,
}

impl Default for SceneWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneWorld {
    /// Create a new empty world
    pub fn new() -> Self {
        Self {
            world: hecs::World::new(),
            id_map: BiMap::new(),
            name_map: HashMap::new(),
            objects: HashMap::new(),
            parents: HashMap::new(),
        }
    }

    /// Spawn a new object with a name. Fails if the name is taken.
    pub fn spawn(&mut self, name: impl Into<String>, kind: ObjectKind) -> Result<ObjectId> {
        let name = name.into();

        if self.name_map.contains_key(&name) {
            return Err(AutoTrackError::DuplicateObjectName(name));
        }

        let object_id = ObjectId::new();
        let hecs_entity = self.world.spawn(());

        self.id_map.insert(object_id, hecs_entity);
        self.name_map.insert(name, object_id);
        self.objects.insert(object_id, ObjectData::new(kind));

        Ok(object_id)
    }

    /// Spawn an object, suffixing the name (`Track.001`, `Track.002`, ...)
    /// when it collides with an existing one. Never fails.
    pub fn spawn_unique(&mut self, name: &str, kind: ObjectKind) -> ObjectId {
        let mut candidate = name.to_string();
        let mut counter = 0u32;

        while self.name_map.contains_key(&candidate) {
            counter += 1;
            candidate = format!("{}.{:03}", name, counter);
        }

        let object_id = ObjectId::new();
        let hecs_entity = self.world.spawn(());

        self.id_map.insert(object_id, hecs_entity);
        self.name_map.insert(candidate, object_id);
        self.objects.insert(object_id, ObjectData::new(kind));

        object_id
    }

    /// Despawn an object
    pub fn despawn(&mut self, id: ObjectId) -> Result<()> {
        let hecs_entity = self
            .id_map
            .get_by_left(&id)
            .ok_or_else(|| AutoTrackError::ObjectNotFound(id.to_string()))?;

        self.name_map.retain(|_, v| *v != id);

        self.world
            .despawn(*hecs_entity)
            .map_err(|_| AutoTrackError::ObjectNotFound(id.to_string()))?;

        self.id_map.remove_by_left(&id);
        self.objects.remove(&id);
        self.parents.remove(&id);

        // Remove as parent from any children
        self.parents.retain(|_, parent| *parent != id);

        Ok(())
    }

    /// Despawn an object by name
    pub fn despawn_by_name(&mut self, name: &str) -> Result<()> {
        let id = self
            .name_map
            .get(name)
            .copied()
            .ok_or_else(|| AutoTrackError::ObjectNotFound(name.to_string()))?;

        self.despawn(id)
    }

    /// Rename an object. Fails if the new name is taken.
    pub fn rename(&mut self, id: ObjectId, new_name: impl Into<String>) -> Result<()> {
        let new_name = new_name.into();

        if !self.id_map.contains_left(&id) {
            return Err(AutoTrackError::ObjectNotFound(id.to_string()));
        }
        if self.name_map.contains_key(&new_name) {
            return Err(AutoTrackError::DuplicateObjectName(new_name));
        }

        self.name_map.retain(|_, v| *v != id);
        self.name_map.insert(new_name, id);
        Ok(())
    }

    /// Get object ID by name
    pub fn get_id(&self, name: &str) -> Option<ObjectId> {
        self.name_map.get(name).copied()
    }

    /// Get object name by ID
    pub fn get_name(&self, id: ObjectId) -> Option<&str> {
        self.name_map
            .iter()
            .find(|(_, v)| **v == id)
            .map(|(k, _)| k.as_str())
    }

    /// Get an object's data
    pub fn data(&self, id: ObjectId) -> Option<&ObjectData> {
        self.objects.get(&id)
    }

    /// Get an object's data mutably
    pub fn data_mut(&mut self, id: ObjectId) -> Option<&mut ObjectData> {
        self.objects.get_mut(&id)
    }

    /// Set parent relationship
    pub fn set_parent(&mut self, child: ObjectId, parent: ObjectId) -> Result<()> {
        if !self.id_map.contains_left(&child) {
            return Err(AutoTrackError::ObjectNotFound(child.to_string()));
        }
        if !self.id_map.contains_left(&parent) {
            return Err(AutoTrackError::ObjectNotFound(parent.to_string()));
        }

        self.parents.insert(child, parent);
        Ok(())
    }

    /// Set parent by name
    pub fn set_parent_by_name(&mut self, child: &str, parent: &str) -> Result<()> {
        let child_id = self
            .get_id(child)
            .ok_or_else(|| AutoTrackError::ObjectNotFound(child.to_string()))?;
        let parent_id = self
            .get_id(parent)
            .ok_or_else(|| AutoTrackError::ObjectNotFound(parent.to_string()))?;

        self.set_parent(child_id, parent_id)
    }

    /// Remove an object's parent, if any
    pub fn clear_parent(&mut self, child: ObjectId) {
        self.parents.remove(&child);
    }

    /// Get parent of an object
    pub fn get_parent(&self, child: ObjectId) -> Option<ObjectId> {
        self.parents.get(&child).copied()
    }

    /// Mark an object selected or deselected. Unselectable objects stay
    /// deselected.
    pub fn select(&mut self, id: ObjectId, selected: bool) {
        if let Some(data) = self.objects.get_mut(&id) {
            data.selected = selected && data.selectable;
        }
    }

    /// IDs of all currently selected objects
    pub fn selected_objects(&self) -> Vec<ObjectId> {
        let mut ids: Vec<ObjectId> = self
            .objects
            .iter()
            .filter(|(_, data)| data.selected)
            .map(|(id, _)| *id)
            .collect();
        ids.sort();
        ids
    }

    /// Get info about all objects
    pub fn all_objects(&self) -> Vec<ObjectInfo> {
        let mut infos: Vec<ObjectInfo> = self
            .name_map
            .iter()
            .map(|(name, id)| {
                let data = self.objects.get(id);
                let parent = self
                    .parents
                    .get(id)
                    .and_then(|pid| self.get_name(*pid).map(String::from));

                ObjectInfo {
                    id: *id,
                    name: name.clone(),
                    kind: data.map(|d| d.kind).unwrap_or(ObjectKind::Empty),
                    parent,
                    constraint_count: data.map(|d| d.constraints.len()).unwrap_or(0),
                }
            })
            .collect();
        infos.sort_by(|a, b| a.name.cmp(&b.name));
        infos
    }

    /// Get number of objects
    pub fn object_count(&self) -> usize {
        self.name_map.len()
    }

    /// Check if an object exists
    pub fn contains(&self, id: ObjectId) -> bool {
        self.id_map.contains_left(&id)
    }

    /// Check if an object with name exists
    pub fn contains_name(&self, name: &str) -> bool {
        self.name_map.contains_key(name)
    }

    /// Iterate over object names
    pub fn object_names(&self) -> impl Iterator<Item = &str> {
        self.name_map.keys().map(|s| s.as_str())
    }

    /// Snapshot of all object names
    pub fn name_set(&self) -> HashSet<String> {
        self.name_map.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_and_get() {
        let mut world = SceneWorld::new();
        let id = world.spawn("cube", ObjectKind::Mesh).unwrap();

        assert!(world.contains(id));
        assert!(world.contains_name("cube"));
        assert_eq!(world.get_id("cube"), Some(id));
        assert_eq!(world.get_name(id), Some("cube"));
        assert_eq!(world.data(id).unwrap().kind, ObjectKind::Mesh);
    }

    #[test]
    fn test_despawn() {
        let mut world = SceneWorld::new();
        let id = world.spawn("cube", ObjectKind::Mesh).unwrap();

        world.despawn(id).unwrap();

        assert!(!world.contains(id));
        assert!(!world.contains_name("cube"));
        assert_eq!(world.object_count(), 0);
    }

    #[test]
    fn test_duplicate_name() {
        let mut world = SceneWorld::new();
        world.spawn("cube", ObjectKind::Mesh).unwrap();

        assert!(matches!(
            world.spawn("cube", ObjectKind::Mesh),
            Err(AutoTrackError::DuplicateObjectName(_))
        ));
    }

    #[test]
    fn test_spawn_unique_suffixes() {
        let mut world = SceneWorld::new();
        let a = world.spawn_unique("Track", ObjectKind::Empty);
        let b = world.spawn_unique("Track", ObjectKind::Empty);
        let c = world.spawn_unique("Track", ObjectKind::Empty);

        assert_eq!(world.get_name(a), Some("Track"));
        assert_eq!(world.get_name(b), Some("Track.001"));
        assert_eq!(world.get_name(c), Some("Track.002"));
    }

    #[test]
    fn test_rename() {
        let mut world = SceneWorld::new();
        let id = world.spawn("cube", ObjectKind::Mesh).unwrap();

        world.rename(id, "box").unwrap();

        assert!(!world.contains_name("cube"));
        assert_eq!(world.get_id("box"), Some(id));
    }

    #[test]
    fn test_rename_collision() {
        let mut world = SceneWorld::new();
        world.spawn("cube", ObjectKind::Mesh).unwrap();
        let id = world.spawn("lamp", ObjectKind::Light).unwrap();

        assert!(matches!(
            world.rename(id, "cube"),
            Err(AutoTrackError::DuplicateObjectName(_))
        ));
    }

    #[test]
    fn test_parent_child() {
        let mut world = SceneWorld::new();
        let parent = world.spawn("rig", ObjectKind::Empty).unwrap();
        let child = world.spawn("cam", ObjectKind::Camera).unwrap();

        world.set_parent(child, parent).unwrap();
        assert_eq!(world.get_parent(child), Some(parent));

        world.clear_parent(child);
        assert_eq!(world.get_parent(child), None);
    }

    #[test]
    fn test_despawn_clears_parent_links() {
        let mut world = SceneWorld::new();
        let parent = world.spawn("rig", ObjectKind::Empty).unwrap();
        let child = world.spawn("cam", ObjectKind::Camera).unwrap();
        world.set_parent(child, parent).unwrap();

        world.despawn(parent).unwrap();
        assert_eq!(world.get_parent(child), None);
    }

    #[test]
    fn test_selection() {
        let mut world = SceneWorld::new();
        let a = world.spawn("a", ObjectKind::Mesh).unwrap();
        let b = world.spawn("b", ObjectKind::Mesh).unwrap();

        world.select(a, true);
        world.select(b, true);
        world.select(b, false);

        assert_eq!(world.selected_objects(), vec![a]);
    }

    #[test]
    fn test_unselectable_object_cannot_be_selected() {
        let mut world = SceneWorld::new();
        let id = world.spawn("marker", ObjectKind::Empty).unwrap();
        world.data_mut(id).unwrap().selectable = false;

        world.select(id, true);
        assert!(world.selected_objects().is_empty());
    }

    #[test]
    fn test_name_set_snapshot() {
        let mut world = SceneWorld::new();
        world.spawn("a", ObjectKind::Mesh).unwrap();
        world.spawn("b", ObjectKind::Light).unwrap();

        let names = world.name_set();
        assert_eq!(names.len(), 2);
        assert!(names.contains("a"));
        assert!(names.contains("b"));
    }
}
